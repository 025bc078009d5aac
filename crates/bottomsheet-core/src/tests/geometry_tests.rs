use super::*;
use bottomsheet_graphics::{EdgeInsets, Size};

#[test]
fn travel_is_distance_between_heights() {
    let geometry = SheetGeometry::new(500.0, 700.0).expect("valid geometry");
    assert_eq!(geometry.travel(), 200.0);
    assert_eq!(geometry.midpoint(), 100.0);
    assert_eq!(geometry.base_offset_for(Detent::Peek), 200.0);
    assert_eq!(geometry.base_offset_for(Detent::Expanded), 0.0);
    assert_eq!(geometry.base_offset_for(Detent::Hidden), 200.0);
}

#[test]
fn inverted_heights_are_rejected() {
    let err = SheetGeometry::new(700.0, 500.0).unwrap_err();
    assert_eq!(
        err,
        SheetError::InvertedHeights {
            min_height: 700.0,
            max_height: 500.0
        }
    );
    assert_eq!(
        err.to_string(),
        "max height 500 is smaller than min height 700"
    );
}

#[test]
fn non_finite_and_negative_heights_are_rejected() {
    assert!(matches!(
        SheetGeometry::new(f32::NAN, 10.0),
        Err(SheetError::NonFiniteHeight {
            name: "min height",
            ..
        })
    ));
    assert!(matches!(
        SheetGeometry::new(0.0, f32::INFINITY),
        Err(SheetError::NonFiniteHeight {
            name: "max height",
            ..
        })
    ));
    assert!(matches!(
        SheetGeometry::new(-1.0, 10.0),
        Err(SheetError::NegativeHeight { .. })
    ));
}

#[test]
fn clamped_collapses_inverted_travel() {
    let geometry = SheetGeometry::clamped(700.0, 500.0);
    assert_eq!(geometry.travel(), 0.0);
    assert_eq!(geometry.min_height(), 700.0);

    let sanitized = SheetGeometry::clamped(f32::NAN, -4.0);
    assert_eq!(sanitized.min_height(), 0.0);
    assert_eq!(sanitized.max_height(), 0.0);
}

#[test]
fn default_max_includes_bottom_safe_area() {
    let environment = HostEnvironment::new(Size::new(390.0, 844.0))
        .with_safe_area(EdgeInsets::from_components(0.0, 47.0, 0.0, 34.0));
    let geometry = SheetGeometry::with_default_max(300.0, &environment).expect("valid");
    assert_eq!(geometry.max_height(), 878.0);
    assert_eq!(geometry.travel(), 578.0);
}

#[test]
fn visible_height_never_negative() {
    let geometry = SheetGeometry::new(100.0, 300.0).expect("valid");
    assert_eq!(geometry.visible_height(0.0), 300.0);
    assert_eq!(geometry.visible_height(200.0), 100.0);
    assert_eq!(geometry.visible_height(400.0), 0.0);
    assert_eq!(geometry.clamp_offset(-5.0), 0.0);
    assert_eq!(geometry.clamp_offset(250.0), 200.0);
}
