//! Component measurement functions
//!
//! This module provides high-level functions for counting and measuring
//! the components of a label map.

use crate::conncomp::{ConnectivityType, label_connected_components};
use crate::error::RegionResult;
use ndarray::Dimension;
use otsu_seg_core::{BinaryMask, BoundingBox, LabelMap};
use std::collections::BTreeMap;

/// Count the number of connected components
///
/// # Arguments
///
/// * `mask` - Input binary mask
/// * `connectivity` - Connectivity type
///
/// # Returns
///
/// The number of foreground connected components.
pub fn count_components(mask: &BinaryMask, connectivity: ConnectivityType) -> RegionResult<u32> {
    let labels = label_connected_components(mask, connectivity)?;
    Ok(labels.num_labels())
}

/// Component statistics
#[derive(Debug, Clone)]
pub struct ComponentStats {
    /// Component label
    pub label: u32,
    /// Bounding box
    pub bounds: BoundingBox,
    /// Number of samples
    pub sample_count: usize,
    /// Mean coordinate along each axis
    pub centroid: Vec<f64>,
}

/// Get detailed statistics for all components
///
/// Only labels present in the map are reported, sorted by label.
pub fn get_component_stats(labels: &LabelMap) -> Vec<ComponentStats> {
    struct Accum {
        count: usize,
        sums: Vec<u64>,
        bounds: BoundingBox,
    }

    let mut stats: BTreeMap<u32, Accum> = BTreeMap::new();

    for (index, &label) in labels.as_array().indexed_iter() {
        if label == 0 {
            continue;
        }
        let coord = index.slice();
        let acc = stats.entry(label).or_insert_with(|| Accum {
            count: 0,
            sums: vec![0; coord.len()],
            bounds: BoundingBox::from_point(coord),
        });

        acc.count += 1;
        for (sum, &c) in acc.sums.iter_mut().zip(coord) {
            *sum += c as u64;
        }
        acc.bounds.include(coord);
    }

    stats
        .into_iter()
        .map(|(label, acc)| ComponentStats {
            label,
            centroid: acc
                .sums
                .iter()
                .map(|&s| s as f64 / acc.count as f64)
                .collect(),
            bounds: acc.bounds,
            sample_count: acc.count,
        })
        .collect()
}

/// Get bounding boxes from a label map
///
/// # Returns
///
/// A vector of bounding boxes, one for each label present, sorted by
/// label. For maps produced by [`label_connected_components`] the index
/// corresponds to (label - 1).
pub fn get_component_bounds(labels: &LabelMap) -> Vec<BoundingBox> {
    get_component_stats(labels)
        .into_iter()
        .map(|s| s.bounds)
        .collect()
}

/// Get sample count for each component
///
/// # Returns
///
/// A vector of sample counts, one for each label present, sorted by label.
pub fn get_component_sizes(labels: &LabelMap) -> Vec<usize> {
    let mut counts = vec![0usize; labels.num_labels() as usize + 1];
    for label in labels.iter() {
        counts[label as usize] += 1;
    }
    counts.into_iter().skip(1).filter(|&c| c > 0).collect()
}
