//! Connected component analysis
//!
//! This module labels connected components in binary masks of any
//! dimensionality. It uses a Union-Find (disjoint set) data structure over
//! provisional labels, then renumbers the components consecutively in
//! raster order of their first sample.

use crate::error::{RegionError, RegionResult};
use crate::label::get_component_stats;
use ndarray::{ArrayD, Dimension, IxDyn};
use otsu_seg_core::{BinaryMask, BoundingBox, LabelMap};

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// Neighbors differ by one step along a single axis
    /// (4-way in 2D, 6-way in 3D)
    Face,
    /// Neighbors differ by at most one step along every axis
    /// (8-way in 2D, 26-way in 3D)
    #[default]
    Full,
}

impl ConnectivityType {
    /// Offsets of all neighbors of a sample in an `ndim`-dimensional array
    pub fn neighbor_offsets(self, ndim: usize) -> Vec<Vec<isize>> {
        let max_nonzero = match self {
            ConnectivityType::Face => 1,
            ConnectivityType::Full => ndim,
        };

        let mut offsets = Vec::new();
        let mut offset = vec![-1isize; ndim];
        loop {
            let nonzero = offset.iter().filter(|&&d| d != 0).count();
            if nonzero > 0 && nonzero <= max_nonzero {
                offsets.push(offset.clone());
            }

            // Odometer over {-1, 0, 1}^ndim, last axis fastest
            let mut axis = ndim;
            loop {
                if axis == 0 {
                    return offsets;
                }
                axis -= 1;
                if offset[axis] < 1 {
                    offset[axis] += 1;
                    break;
                }
                offset[axis] = -1;
            }
        }
    }

    /// Neighbors that precede a sample in raster order
    fn preceding_offsets(self, ndim: usize) -> Vec<Vec<isize>> {
        self.neighbor_offsets(ndim)
            .into_iter()
            .filter(|offset| offset.iter().find(|&&d| d != 0) == Some(&-1))
            .collect()
    }
}

/// A connected component in a mask
#[derive(Debug, Clone)]
pub struct ConnectedComponent {
    /// Unique label for this component
    pub label: u32,
    /// Number of samples in this component
    pub sample_count: usize,
    /// Bounding box of this component
    pub bounds: BoundingBox,
}

impl ConnectedComponent {
    /// Create a new connected component
    pub fn new(label: u32, sample_count: usize, bounds: BoundingBox) -> Self {
        Self {
            label,
            sample_count,
            bounds,
        }
    }
}

/// Disjoint sets over provisional labels; index 0 is the background
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        Self { parent: vec![0] }
    }

    fn len(&self) -> usize {
        self.parent.len() - 1
    }

    fn make_set(&mut self) -> RegionResult<u32> {
        let label = u32::try_from(self.parent.len())
            .map_err(|_| RegionError::TooManyLabels { max: u32::MAX })?;
        self.parent.push(label);
        Ok(label)
    }

    fn find(&mut self, mut label: u32) -> u32 {
        // Path halving
        while self.parent[label as usize] != label {
            let grandparent = self.parent[self.parent[label as usize] as usize];
            self.parent[label as usize] = grandparent;
            label = grandparent;
        }
        label
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra < rb {
            self.parent[rb as usize] = ra;
        } else if rb < ra {
            self.parent[ra as usize] = rb;
        }
    }
}

/// Label all connected components in a binary mask
///
/// Returns a label map of the same shape where background is 0 and the
/// components are numbered `1..=n` in raster order of their first sample.
///
/// # Errors
///
/// Returns [`RegionError::TooManyLabels`] if the mask has more provisional
/// components than fit in a `u32`.
pub fn label_connected_components(
    mask: &BinaryMask,
    connectivity: ConnectivityType,
) -> RegionResult<LabelMap> {
    let shape = mask.shape().to_vec();

    let mut strides = vec![1isize; shape.len()];
    for k in (0..shape.len().saturating_sub(1)).rev() {
        strides[k] = strides[k + 1] * shape[k + 1] as isize;
    }

    let offsets = connectivity.preceding_offsets(shape.len());
    let deltas: Vec<isize> = offsets
        .iter()
        .map(|offset| offset.iter().zip(&strides).map(|(&d, &s)| d * s).sum())
        .collect();

    // First pass: provisional labels, recording equivalences
    let mut provisional = vec![0u32; mask.len()];
    let mut sets = UnionFind::new();
    for (flat, (index, &foreground)) in mask.as_array().indexed_iter().enumerate() {
        if !foreground {
            continue;
        }
        let coord = index.slice();

        let mut current = 0u32;
        for (offset, &delta) in offsets.iter().zip(&deltas) {
            let inside = coord.iter().zip(offset).zip(&shape).all(|((&c, &d), &n)| {
                let p = c as isize + d;
                p >= 0 && (p as usize) < n
            });
            if !inside {
                continue;
            }

            let neighbor = provisional[(flat as isize + delta) as usize];
            if neighbor == 0 {
                continue;
            }
            if current == 0 {
                current = neighbor;
            } else {
                sets.union(current, neighbor);
            }
        }

        if current == 0 {
            current = sets.make_set()?;
        }
        provisional[flat] = current;
    }

    // Second pass: resolve equivalences, number roots by first appearance
    let mut renumber = vec![0u32; sets.len() + 1];
    let mut num_labels = 0u32;
    for label in provisional.iter_mut().filter(|l| **l != 0) {
        let root = sets.find(*label) as usize;
        if renumber[root] == 0 {
            num_labels += 1;
            renumber[root] = num_labels;
        }
        *label = renumber[root];
    }

    log::debug!(
        "labeled {} components ({} provisional, {:?} connectivity) in {:?} mask",
        num_labels,
        sets.len(),
        connectivity,
        shape
    );

    let data = ArrayD::from_shape_vec(IxDyn(&shape), provisional)
        .map_err(otsu_seg_core::Error::from)?;
    Ok(LabelMap::new_unchecked(data, num_labels))
}

/// Find all connected components in a binary mask
///
/// Returns one entry per component, ordered by label, each with its sample
/// count and bounding box.
pub fn find_connected_components(
    mask: &BinaryMask,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    let labels = label_connected_components(mask, connectivity)?;
    Ok(get_component_stats(&labels)
        .into_iter()
        .map(|s| ConnectedComponent::new(s.label, s.sample_count, s.bounds))
        .collect())
}

/// Extract a single component from a label map as a mask
///
/// # Errors
///
/// Returns [`RegionError::InvalidLabel`] if `label` is 0 or larger than
/// the map's largest label.
pub fn extract_component(labels: &LabelMap, label: u32) -> RegionResult<BinaryMask> {
    if label == 0 || label > labels.num_labels() {
        return Err(RegionError::InvalidLabel {
            label,
            num_labels: labels.num_labels(),
        });
    }
    Ok(BinaryMask::from_array(
        labels.as_array().mapv(|l| l == label),
    )?)
}

/// Keep components whose sample count lies in `min_size..=max_size`
///
/// Surviving components are renumbered consecutively, preserving their
/// relative order; removed components become background.
pub fn filter_components_by_size(
    labels: &LabelMap,
    min_size: usize,
    max_size: usize,
) -> RegionResult<LabelMap> {
    if min_size > max_size {
        return Err(RegionError::InvalidParameters(format!(
            "min_size {} exceeds max_size {}",
            min_size, max_size
        )));
    }

    let mut sizes = vec![0usize; labels.num_labels() as usize + 1];
    for label in labels.iter() {
        sizes[label as usize] += 1;
    }

    let mut renumber = vec![0u32; sizes.len()];
    let mut num_labels = 0u32;
    for (label, &size) in sizes.iter().enumerate().skip(1) {
        if size >= min_size && size <= max_size && size > 0 {
            num_labels += 1;
            renumber[label] = num_labels;
        }
    }

    let data = labels.as_array().mapv(|l| renumber[l as usize]);
    Ok(LabelMap::new_unchecked(data, num_labels))
}
