//! End-to-end drag scenarios driven through pointer events.

use bottomsheet_testing::SheetRobot;
use bottomsheet_ui::{
    BottomSheet, Detent, EdgeInsets, HostEnvironment, OpenBinding, Resolution, SheetConfig,
    SheetGeometry, Size,
};

fn environment() -> HostEnvironment {
    HostEnvironment::new(Size::new(390.0, 844.0))
        .with_safe_area(EdgeInsets::from_components(0.0, 47.0, 0.0, 34.0))
}

fn robot(config: SheetConfig) -> SheetRobot {
    let geometry = SheetGeometry::new(500.0, 700.0).expect("valid geometry");
    SheetRobot::new(BottomSheet::new(geometry, environment()).config(config))
}

fn robot_with_binding(config: SheetConfig, binding: &OpenBinding) -> SheetRobot {
    let geometry = SheetGeometry::new(500.0, 700.0).expect("valid geometry");
    let sheet = BottomSheet::new(geometry, environment())
        .config(config)
        .open_binding(binding.clone());
    SheetRobot::new(sheet)
}

#[test]
fn sheet_view_expands_and_collapses() {
    let mut robot = robot(SheetConfig::sheet_view());
    assert!(robot.drag_by(0.0, -150.0));
    robot.wait_for_idle();
    assert_eq!(robot.detent(), Detent::Expanded);
    assert_eq!(robot.layout().sheet.y, 144.0);

    robot.drag_by(0.0, 150.0);
    robot.wait_for_idle();
    assert_eq!(robot.detent(), Detent::Peek);
    assert_eq!(robot.layout().sheet.y, 344.0);
}

#[test]
fn sheet_view_short_drag_springs_back() {
    let mut robot = robot(SheetConfig::sheet_view());
    robot.drag_by(0.0, -60.0);
    assert!(robot.sheet().needs_frame());
    robot.wait_for_idle();
    assert_eq!(robot.detent(), Detent::Peek);
    assert_eq!(robot.layout().sheet.y, 344.0);
}

#[test]
fn sheet_view_never_leaves_travel_range_while_dragging() {
    let mut robot = robot(SheetConfig::sheet_view()).with_steps(20);
    let (x, y) = robot.grab_point();
    robot.drag(x, y, x, y - 600.0);
    robot.wait_for_idle();
    assert_eq!(robot.layout().sheet.y, 144.0);

    let (x, y) = robot.grab_point();
    robot.drag(x, y, x, y + 100.0 + 600.0);
    robot.wait_for_idle();
    assert_eq!(robot.layout().sheet.y, 344.0);
}

#[test]
fn modifier_v1_overshoot_closes_and_clears_binding() {
    let binding = OpenBinding::new(true);
    let mut robot = robot_with_binding(SheetConfig::modifier_v1(), &binding);
    robot.drag_by(0.0, 250.0);
    robot.wait_for_idle();

    assert_eq!(robot.detent(), Detent::Hidden);
    assert!(!binding.get());
    assert!(!robot.layout().is_visible());
}

#[test]
fn modifier_v1_small_pull_down_expands() {
    let binding = OpenBinding::new(true);
    let mut robot = robot_with_binding(SheetConfig::modifier_v1(), &binding);
    robot.drag_by(0.0, 90.0);
    robot.wait_for_idle();
    assert_eq!(robot.detent(), Detent::Expanded);
    assert!(binding.get());
}

#[test]
fn modifier_v1_corrected_small_pull_down_stays_at_peek() {
    let binding = OpenBinding::new(true);
    let config = SheetConfig::modifier_v1().resolution(Resolution::Corrected);
    let mut robot = robot_with_binding(config, &binding);
    robot.drag_by(0.0, 90.0);
    robot.wait_for_idle();
    assert_eq!(robot.detent(), Detent::Peek);
}

#[test]
fn modifier_v2_dead_zone_keeps_sheet_still() {
    let binding = OpenBinding::new(true);
    let mut robot = robot_with_binding(SheetConfig::modifier_v2(), &binding);
    let (x, y) = robot.grab_point();
    let sheet = robot.sheet_mut();
    sheet.handle_pointer(&bottomsheet_ui::PointerEvent::down(x, y));
    sheet.handle_pointer(&bottomsheet_ui::PointerEvent::moved(x, y + 30.0));
    assert_eq!(sheet.machine().state().live_drag_delta, 0.0);
    assert!(!sheet.needs_frame());
}

#[test]
fn modifier_v2_long_pull_down_closes() {
    let binding = OpenBinding::new(true);
    let mut robot = robot_with_binding(SheetConfig::modifier_v2(), &binding);
    robot.drag_by(0.0, 120.0);
    robot.wait_for_idle();
    assert_eq!(robot.detent(), Detent::Hidden);
    assert!(!binding.get());
}

#[test]
fn reopening_through_binding_shows_peek() {
    let binding = OpenBinding::new(false);
    let mut robot = robot_with_binding(SheetConfig::modifier_v2(), &binding);
    assert!(!robot.layout().is_visible());

    binding.set(true);
    assert!(robot.sheet_mut().sync_open());
    robot.wait_for_idle();
    assert_eq!(robot.detent(), Detent::Peek);
    assert_eq!(robot.layout().visible_height, 500.0);
}

#[test]
fn cancelled_drag_returns_to_detent() {
    let mut robot = robot(SheetConfig::modifier_v1());
    robot.drag_and_cancel(0.0, -150.0);
    robot.wait_for_idle();
    assert_eq!(robot.detent(), Detent::Peek);
    assert_eq!(robot.layout().sheet.y, 344.0);
    assert_eq!(robot.sheet().machine().state().live_drag_delta, 0.0);
}
