//! Widget regression test
//!
//! Runs the segmentation widget end to end on small synthetic layers and
//! checks labels, naming, layer kind, and error reporting.

use image::{DynamicImage, GrayImage, Luma};
use ndarray::{Array1, Array2, Array3, Array4};
use otsu_seg::region::ConnectivityType;
use otsu_seg::threshold::{OtsuOptions, ThresholdError, otsu};
use otsu_seg::{
    Error, ImageData, ImageLayer, LabelMap, LayerKind, OTSU_SEG_WIDGET_ID, PluginRegistry,
    SegmentationError, SegmentationOptions, otsu_seg_widget, segment_array, segment_layer,
};
use otsu_seg_test::{RegParams, block_image, image_from_rows};

#[test]
fn widget_reg() {
    let mut rp = RegParams::new("widget");

    // --- A single bright block on a dark background ---
    let data = image_from_rows::<u8>(&[
        &[0, 0, 0, 0],
        &[0, 10, 10, 0],
        &[0, 10, 10, 0],
        &[0, 0, 0, 0],
    ])
    .expect("rows");
    let seg = otsu_seg_widget(&ImageLayer::new("cell", data)).expect("segment block");

    rp.compare_values(1.0, seg.data.num_labels() as f64, 0.0);
    let expected = image_from_rows::<u32>(&[
        &[0, 0, 0, 0],
        &[0, 1, 1, 0],
        &[0, 1, 1, 0],
        &[0, 0, 0, 0],
    ])
    .expect("rows");
    rp.compare_labels(
        &LabelMap::from_array(expected).expect("labels"),
        &seg.data,
    );
    assert_eq!(seg.metadata.name, "cell_seg");
    assert_eq!(seg.kind, LayerKind::Labels);
    assert_eq!(seg.kind.as_str(), "labels");

    let (array, metadata, kind) = seg.into_parts();
    rp.compare_shapes(&[4, 4], array.shape());
    assert_eq!(metadata.name, "cell_seg");
    assert_eq!(kind, LayerKind::Labels);

    // --- Diagonal neighbors join by default ---
    let mut diagonal = Array2::<u8>::zeros((4, 4));
    diagonal[[0, 0]] = 100;
    diagonal[[1, 1]] = 100;
    let layer = ImageLayer::new("diag", diagonal);

    let full = otsu_seg_widget(&layer).expect("segment diagonal");
    rp.compare_values(1.0, full.data.num_labels() as f64, 0.0);
    rp.compare_values(1.0, full.data.get(&[0, 0]).unwrap_or(0) as f64, 0.0);
    rp.compare_values(1.0, full.data.get(&[1, 1]).unwrap_or(0) as f64, 0.0);

    let options = SegmentationOptions::default().with_connectivity(ConnectivityType::Face);
    let face = segment_layer(&layer, &options).expect("segment diagonal, face");
    rp.compare_values(2.0, face.data.num_labels() as f64, 0.0);
    rp.compare_values(2.0, face.data.get(&[1, 1]).unwrap_or(0) as f64, 0.0);
    rp.compare_masks(&face.data.to_mask(), &full.data.to_mask());

    // --- Separate single pixels stay separate ---
    let mut apart = Array2::<u8>::zeros((4, 4));
    apart[[0, 0]] = 100;
    apart[[2, 2]] = 100;
    let seg = otsu_seg_widget(&ImageLayer::new("apart", apart)).expect("segment apart");
    rp.compare_values(2.0, seg.data.num_labels() as f64, 0.0);

    // --- Float samples, including negatives ---
    let data = image_from_rows::<f64>(&[
        &[-1.5, -1.5, -1.4, 2.0],
        &[-1.5, -1.6, -1.5, 2.1],
        &[2.2, -1.5, -1.5, -1.5],
    ])
    .expect("rows");
    let seg = otsu_seg_widget(&ImageLayer::new("f64", data)).expect("segment float");
    rp.compare_values(2.0, seg.data.num_labels() as f64, 0.0);
    rp.compare_values(3.0, seg.data.to_mask().count_foreground() as f64, 0.0);

    // --- 3D volumes keep their shape ---
    let volume = block_image(&[4, 5, 6], &[1, 1, 1], &[2, 3, 2], 900u16, 100u16).expect("block");
    let seg = otsu_seg_widget(&ImageLayer::new("stack", volume)).expect("segment volume");
    rp.compare_shapes(&[4, 5, 6], seg.data.shape());
    rp.compare_values(1.0, seg.data.num_labels() as f64, 0.0);
    rp.compare_values(12.0, seg.data.to_mask().count_foreground() as f64, 0.0);
    assert_eq!(seg.metadata.name, "stack_seg");

    // --- Decoded images go through the same path ---
    let mut gray = GrayImage::from_pixel(6, 4, Luma([20]));
    gray.put_pixel(1, 1, Luma([220]));
    gray.put_pixel(4, 2, Luma([220]));
    let data = ImageData::from_dynamic_image(&DynamicImage::ImageLuma8(gray)).expect("decode");
    let seg = otsu_seg_widget(&ImageLayer::new("gray", data)).expect("segment gray");
    rp.compare_shapes(&[4, 6], seg.data.shape());
    rp.compare_values(2.0, seg.data.num_labels() as f64, 0.0);
    rp.compare_values(1.0, seg.data.get(&[1, 1]).unwrap_or(0) as f64, 0.0);
    rp.compare_values(2.0, seg.data.get(&[2, 4]).unwrap_or(0) as f64, 0.0);

    assert!(rp.cleanup(), "widget regression test failed");
}

#[test]
fn widget_intensity_range_reg() {
    let mut rp = RegParams::new("widget_intensity_range");

    // --- Wide u16 range: a dim pixel near the background stays background ---
    let mut data = Array2::<u16>::zeros((10, 21));
    for r in 0..10 {
        for c in 11..21 {
            data[[r, c]] = 2560;
        }
    }
    data[[0, 0]] = 7;
    let seg = otsu_seg_widget(&ImageLayer::new("u16", data)).expect("segment u16");
    rp.compare_values(1.0, seg.data.num_labels() as f64, 0.0);
    rp.compare_values(0.0, seg.data.get(&[0, 0]).unwrap_or(99) as f64, 0.0);
    rp.compare_values(100.0, seg.data.to_mask().count_foreground() as f64, 0.0);

    // --- Several levels: the mask is exactly the samples above the split ---
    let data = image_from_rows::<u16>(&[
        &[100, 130, 4000, 4100],
        &[120, 110, 4050, 4090],
        &[900, 105, 115, 125],
    ])
    .expect("rows");
    let labels = segment_array(&data.view(), &SegmentationOptions::default()).expect("levels");
    let threshold = otsu::compute_otsu_threshold(&data.view(), &OtsuOptions::default())
        .expect("threshold");
    rp.compare_values(threshold.floor() + 0.5, threshold, 0.0);
    for (&sample, label) in data.iter().zip(labels.iter()) {
        let expected = (sample as f64 > threshold) as u8 as f64;
        rp.compare_values(expected, (label > 0) as u8 as f64, 0.0);
    }

    // --- f64 range wider than f64::MAX ---
    let mut data = Array2::<f64>::from_elem((4, 4), -1e308);
    data[[0, 0]] = 1e308;
    data[[3, 3]] = 1e308;
    let seg = otsu_seg_widget(&ImageLayer::new("extreme", data)).expect("segment extreme");
    rp.compare_values(2.0, seg.data.num_labels() as f64, 0.0);
    rp.compare_values(1.0, seg.data.get(&[0, 0]).unwrap_or(0) as f64, 0.0);
    rp.compare_values(2.0, seg.data.get(&[3, 3]).unwrap_or(0) as f64, 0.0);

    assert!(rp.cleanup(), "widget intensity range regression test failed");
}

#[test]
fn widget_idempotence_reg() {
    let mut rp = RegParams::new("widget_idempotence");

    let data = image_from_rows::<u16>(&[
        &[5, 5, 300, 300, 5, 5],
        &[5, 5, 300, 5, 5, 280],
        &[290, 5, 5, 5, 5, 280],
        &[290, 290, 5, 310, 5, 5],
    ])
    .expect("rows");
    let options = SegmentationOptions::default();
    let labels = segment_array(&data.view(), &options).expect("segment");
    rp.compare_values(4.0, labels.num_labels() as f64, 0.0);

    // Segmenting the binary foreground again reproduces the partition
    let binary = labels.as_array().mapv(|l| if l > 0 { 255u8 } else { 0 });
    let again = segment_array(&binary.view(), &options).expect("resegment");
    rp.compare_partitions(&labels, &again);
    rp.compare_labels(&labels, &again);

    // Labels are positive, consecutive, and absent from the background
    for label in 1..=labels.num_labels() {
        let present = labels.iter().any(|l| l == label);
        rp.compare_values(1.0, present as u8 as f64, 0.0);
    }
    for (&sample, label) in data.iter().zip(labels.iter()) {
        if sample == 5 {
            rp.compare_values(0.0, label as f64, 0.0);
        }
    }

    assert!(rp.cleanup(), "widget idempotence regression test failed");
}

#[test]
fn widget_errors_reg() {
    // Uniform images have no threshold
    let flat = ImageLayer::new("flat", Array2::<f32>::from_elem((5, 5), 3.0));
    assert!(matches!(
        otsu_seg_widget(&flat),
        Err(SegmentationError::Threshold(ThresholdError::UniformImage { .. }))
    ));
    let zeros = ImageLayer::new("zeros", Array3::<u8>::zeros((2, 3, 3)));
    assert!(matches!(
        otsu_seg_widget(&zeros),
        Err(SegmentationError::Threshold(ThresholdError::UniformImage { .. }))
    ));

    // Empty images
    let empty = ImageLayer::new("empty", Array2::<u8>::zeros((0, 0)));
    assert!(matches!(
        otsu_seg_widget(&empty),
        Err(SegmentationError::Core(Error::EmptyImage))
    ));

    // Only 2D and 3D images are segmented
    let line = ImageLayer::new("line", Array1::from(vec![0u8, 9, 0]));
    assert!(matches!(
        otsu_seg_widget(&line),
        Err(SegmentationError::Core(Error::UnsupportedDimensionality { ndim: 1, .. }))
    ));
    let hyper = ImageLayer::new("hyper", Array4::<u8>::zeros((2, 2, 2, 2)));
    assert!(matches!(
        otsu_seg_widget(&hyper),
        Err(SegmentationError::Core(Error::UnsupportedDimensionality { ndim: 4, .. }))
    ));

    // Non-finite samples
    let mut nan = Array2::<f64>::zeros((2, 2));
    nan[[1, 0]] = f64::NAN;
    let nan = ImageLayer::new("nan", nan);
    assert!(matches!(
        otsu_seg_widget(&nan),
        Err(SegmentationError::Threshold(ThresholdError::Core(
            Error::NonFiniteSample { .. }
        )))
    ));
}

#[test]
fn registry_reg() {
    let registry = PluginRegistry::with_default_widgets();

    let data = block_image(&[6, 6], &[2, 1], &[3, 3], 40i16, -40i16).expect("block");
    let layer = ImageLayer::new("blob", data);

    let via_registry = registry
        .invoke(OTSU_SEG_WIDGET_ID, &layer)
        .expect("invoke");
    let direct = otsu_seg_widget(&layer).expect("direct");
    assert_eq!(via_registry, direct);
    assert_eq!(via_registry.data.num_labels(), 1);
    assert_eq!(via_registry.metadata.name, "blob_seg");

    let descriptor = registry.descriptors().next().expect("descriptor");
    assert_eq!(descriptor.display_name, "Otsu Segmentation");

    assert!(registry.invoke("napari-otsu.unknown", &layer).is_err());
}
