//! Connected component regression test
//!
//! Labels synthetic 2D and 3D masks with both connectivities and checks
//! component counts, sizes and ordering.
//!
//! Run with:
//! ```
//! cargo test -p otsu-seg-region --test conncomp_reg
//! ```

use otsu_seg_region::{
    ConnectivityType, count_components, find_connected_components, get_component_sizes,
    label_connected_components,
};
use otsu_seg_test::{RegParams, mask_from_points};

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    // -----------------------------------------------------------
    // Checkerboard: every foreground sample touches others only
    // diagonally
    // -----------------------------------------------------------
    let mut points: Vec<Vec<usize>> = Vec::new();
    for r in 0..8 {
        for c in 0..8 {
            if (r + c) % 2 == 0 {
                points.push(vec![r, c]);
            }
        }
    }
    let refs: Vec<&[usize]> = points.iter().map(|p| p.as_slice()).collect();
    let checker = mask_from_points(&[8, 8], &refs).expect("checkerboard mask");

    let n4 = count_components(&checker, ConnectivityType::Face).expect("face count");
    let n8 = count_components(&checker, ConnectivityType::Full).expect("full count");
    eprintln!("Checkerboard: face = {}, full = {}", n4, n8);
    rp.compare_values(32.0, n4 as f64, 0.0); // 1
    rp.compare_values(1.0, n8 as f64, 0.0); // 2

    // Full connectivity never yields more components than face
    assert!(n8 <= n4);

    // -----------------------------------------------------------
    // Three rods in a 4x4x4 volume
    // -----------------------------------------------------------
    let mut rods: Vec<Vec<usize>> = Vec::new();
    for z in 0..4 {
        rods.push(vec![z, 0, 0]); // rod along z
    }
    for x in 0..4 {
        rods.push(vec![3, 3, x]); // rod along x in the last plane
    }
    rods.push(vec![1, 2, 2]); // isolated voxel
    rods.push(vec![2, 1, 1]); // corner-adjacent to the voxel above and the z-rod
    let refs: Vec<&[usize]> = rods.iter().map(|p| p.as_slice()).collect();
    let volume = mask_from_points(&[4, 4, 4], &refs).expect("rod volume");

    let comps = find_connected_components(&volume, ConnectivityType::Face).expect("face 3d");
    eprintln!("Rods (face): {} components", comps.len());
    rp.compare_values(4.0, comps.len() as f64, 0.0); // 3

    for (i, comp) in comps.iter().enumerate() {
        eprintln!(
            "  comp[{}]: label={}, size={}, bounds={:?}..{:?}",
            i,
            comp.label,
            comp.sample_count,
            comp.bounds.start(),
            comp.bounds.end()
        );
        assert_eq!(comp.label as usize, i + 1);
        assert!(comp.sample_count > 0);
        assert_eq!(comp.bounds.ndim(), 3);
    }

    let labels = label_connected_components(&volume, ConnectivityType::Face).expect("label");
    // Raster order: z-rod first, then the voxel at z=1, z=2, then the x-rod
    rp.compare_values(1.0, labels.get(&[0, 0, 0]).unwrap_or(0) as f64, 0.0); // 4
    rp.compare_values(2.0, labels.get(&[1, 2, 2]).unwrap_or(0) as f64, 0.0); // 5
    rp.compare_values(3.0, labels.get(&[2, 1, 1]).unwrap_or(0) as f64, 0.0); // 6
    rp.compare_values(4.0, labels.get(&[3, 3, 0]).unwrap_or(0) as f64, 0.0); // 7

    let sizes = get_component_sizes(&labels);
    rp.compare_values(4.0, sizes[0] as f64, 0.0); // 8
    rp.compare_values(4.0, sizes[3] as f64, 0.0); // 9

    let full = count_components(&volume, ConnectivityType::Full).expect("full 3d");
    eprintln!("Rods (full): {} components", full);
    // The two voxels bridge into the z-rod through corners
    rp.compare_values(2.0, full as f64, 0.0); // 10

    assert!(rp.cleanup(), "conncomp regression test failed");
}
