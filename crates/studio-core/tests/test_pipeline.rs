mod common;

use studio_core::ops::{builtin_names, Operation, BUILTIN_NAMES};
use studio_core::raster::CropRect;

use common::gradient_raster;

// ---------------------------------------------------------------------------
// composition
// ---------------------------------------------------------------------------

#[test]
fn test_empty_pipeline_is_identity() {
    let src = gradient_raster(10, 8);
    assert_eq!(Operation::pipeline(vec![]).apply(&src), src);
    assert_eq!(Operation::compose([None, None]).apply(&src), src);
    assert_eq!(Operation::none().apply(&src), src);
}

#[test]
fn test_pipeline_equals_sequential_application() {
    let src = gradient_raster(24, 18);
    let a = Operation::sepia();
    let b = Operation::gaussian_blur(2);
    let piped = Operation::pipeline(vec![a.clone(), b.clone()]).apply(&src);
    assert_eq!(piped, b.apply(&a.apply(&src)));
}

#[test]
fn test_compose_skips_absent_entries() {
    let composed = Operation::compose([
        Some(Operation::invert()),
        None,
        Some(Operation::funk()),
        None,
    ]);
    assert_eq!(
        composed,
        Operation::pipeline(vec![Operation::invert(), Operation::funk()])
    );
}

#[test]
fn test_then_appends() {
    let op = Operation::grayscale()
        .then(Operation::flip_h())
        .then(Operation::sharpen());
    assert_eq!(
        op,
        Operation::pipeline(vec![
            Operation::grayscale(),
            Operation::flip_h(),
            Operation::sharpen()
        ])
    );
}

#[test]
fn test_nested_pipelines() {
    let src = gradient_raster(12, 12);
    let inner = Operation::pipeline(vec![Operation::invert(), Operation::flip_v()]);
    let outer = Operation::pipeline(vec![inner, Operation::rotate(90.0)]);
    let expected = Operation::rotate(90.0)
        .apply(&Operation::flip_v().apply(&Operation::invert().apply(&src)));
    assert_eq!(outer.apply(&src), expected);
}

#[test]
fn test_pipeline_changes_dimensions() {
    let src = gradient_raster(10, 6);
    let op = Operation::pipeline(vec![
        Operation::crop(CropRect::new(1, 1, 4, 3)),
        Operation::rotate(90.0),
    ]);
    assert_eq!(op.apply(&src).dimensions(), (3, 4));
}

#[test]
fn test_full_pipeline_deterministic() {
    let src = gradient_raster(64, 48);
    let op = Operation::compose([
        Some(Operation::named("Sepia")),
        Some(Operation::brightness(0.1)),
        Some(Operation::contrast(-0.2)),
        Some(Operation::gaussian_blur(3)),
        Some(Operation::sharpen()),
        Some(Operation::rotate(17.0)),
    ]);
    assert_eq!(op.apply(&src), op.apply(&src));
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[test]
fn test_builtin_names_order() {
    assert_eq!(
        builtin_names(),
        &["None", "Grayscale", "Invert", "Sepia", "Funk"]
    );
}

#[test]
fn test_named_lookup() {
    let expected = [
        Operation::none(),
        Operation::grayscale(),
        Operation::invert(),
        Operation::sepia(),
        Operation::funk(),
    ];
    for (name, op) in BUILTIN_NAMES.iter().zip(expected) {
        assert_eq!(Operation::named(name), op);
    }
}

#[test]
fn test_named_unknown_and_case_sensitive() {
    assert_eq!(Operation::named("Posterize"), Operation::None);
    assert_eq!(Operation::named("grayscale"), Operation::None);
    assert_eq!(Operation::named(""), Operation::None);
    assert!(Operation::parse_name("invert").is_err());
    assert_eq!(Operation::parse_name("Invert").unwrap(), Operation::Invert);
}

// ---------------------------------------------------------------------------
// identity detection and display
// ---------------------------------------------------------------------------

#[test]
fn test_is_identity() {
    assert!(Operation::none().is_identity());
    assert!(Operation::gaussian_blur(0).is_identity());
    assert!(Operation::rotate(-360.0).is_identity());
    assert!(Operation::brightness(0.0).is_identity());
    assert!(Operation::compose([Some(Operation::none()), None]).is_identity());
    assert!(!Operation::invert().is_identity());
    assert!(!Operation::rotate(90.0).is_identity());
    assert!(!Operation::pipeline(vec![Operation::none(), Operation::sharpen()]).is_identity());
}

#[test]
fn test_display() {
    assert_eq!(Operation::grayscale().to_string(), "Grayscale");
    assert_eq!(Operation::gaussian_blur(3).to_string(), "Gaussian Blur (r=3)");
    assert_eq!(
        Operation::crop(CropRect::new(1, 2, 3, 4)).to_string(),
        "Crop (1,2 3x4)"
    );
    assert_eq!(
        Operation::pipeline(vec![Operation::invert(), Operation::flip_h()]).to_string(),
        "Invert \u{2192} Flip Horizontal"
    );
    assert_eq!(Operation::pipeline(vec![]).to_string(), "None");
}

// ---------------------------------------------------------------------------
// serialization
// ---------------------------------------------------------------------------

#[test]
fn test_operation_json_shape() {
    let json = serde_json::to_value(Operation::brightness(0.5)).unwrap();
    assert_eq!(json, serde_json::json!({ "op": "brightness", "delta": 0.5 }));

    let json = serde_json::to_value(Operation::crop(CropRect::new(1, 2, 3, 4))).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "op": "crop", "x": 1, "y": 2, "width": 3, "height": 4 })
    );

    let json = serde_json::to_value(Operation::flip_h()).unwrap();
    assert_eq!(json, serde_json::json!({ "op": "flip_h" }));
}

#[test]
fn test_pipeline_json_roundtrip() {
    let op = Operation::pipeline(vec![
        Operation::named("Funk"),
        Operation::gaussian_blur(4),
        Operation::rotate(-12.5),
        Operation::pipeline(vec![Operation::sharpen()]),
    ]);
    let text = serde_json::to_string(&op).unwrap();
    let back: Operation = serde_json::from_str(&text).unwrap();
    assert_eq!(back, op);
}
