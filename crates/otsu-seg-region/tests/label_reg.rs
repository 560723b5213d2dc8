//! Labeling regression test
//!
//! Relabeling the foreground of an existing label map must reproduce the
//! same partition, and extracting each component must recover its mask.

use otsu_seg_region::{
    ConnectivityType, extract_component, filter_components_by_size, get_component_stats,
    label_connected_components,
};
use otsu_seg_test::{RegParams, mask_from_points};

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    let points: [&[usize]; 9] = [
        &[0, 0],
        &[0, 1],
        &[1, 0],
        &[0, 4],
        &[1, 4],
        &[2, 4],
        &[3, 1],
        &[4, 3],
        &[3, 4],
    ];
    let mask = mask_from_points(&[5, 5], &points).expect("mask");

    for connectivity in [ConnectivityType::Face, ConnectivityType::Full] {
        eprintln!("=== {:?} connectivity ===", connectivity);
        let labels = label_connected_components(&mask, connectivity).expect("label");
        rp.compare_shapes(mask.shape(), labels.shape());

        // --- Relabeling is idempotent up to renumbering ---
        let relabeled =
            label_connected_components(&labels.to_mask(), connectivity).expect("relabel");
        rp.compare_partitions(&labels, &relabeled);
        // Raster-order numbering makes it exact
        rp.compare_labels(&labels, &relabeled);
        rp.compare_masks(&mask, &relabeled.to_mask());

        // --- Components are disjoint and cover the mask ---
        let mut covered = 0;
        for label in 1..=labels.num_labels() {
            let component = extract_component(&labels, label).expect("extract");
            covered += component.count_foreground();
        }
        rp.compare_values(mask.count_foreground() as f64, covered as f64, 0.0);

        let stats = get_component_stats(&labels);
        for s in &stats {
            eprintln!(
                "  label {}: {} samples, centroid {:?}",
                s.label, s.sample_count, s.centroid
            );
        }
    }

    // --- Known counts ---
    let face = label_connected_components(&mask, ConnectivityType::Face).expect("face");
    let full = label_connected_components(&mask, ConnectivityType::Full).expect("full");
    rp.compare_values(4.0, face.num_labels() as f64, 0.0);
    // (3,4) touches (2,4) by face and (4,3) by corner
    rp.compare_values(3.0, full.num_labels() as f64, 0.0);

    // --- Size filtering drops singletons ---
    let filtered = filter_components_by_size(&face, 2, usize::MAX).expect("filter");
    rp.compare_values(2.0, filtered.num_labels() as f64, 0.0);
    rp.compare_values(0.0, filtered.get(&[3, 1]).unwrap_or(99) as f64, 0.0);

    assert!(rp.cleanup(), "label regression test failed");
}
