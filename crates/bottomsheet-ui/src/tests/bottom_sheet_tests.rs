use super::*;
use crate::scene::DrawPrimitive;
use bottomsheet_graphics::{Appearance, Color, EdgeInsets, Rect, Size};

const FRAME: u64 = 16_666_667;

fn environment() -> HostEnvironment {
    HostEnvironment::new(Size::new(390.0, 844.0))
        .with_safe_area(EdgeInsets::from_components(0.0, 47.0, 0.0, 34.0))
}

fn sheet(config: SheetConfig) -> BottomSheet {
    let geometry = SheetGeometry::new(500.0, 700.0).expect("valid geometry");
    BottomSheet::new(geometry, environment()).config(config)
}

fn settle(sheet: &mut BottomSheet) {
    let mut time = 0;
    for _ in 0..600 {
        if !sheet.tick(time) {
            return;
        }
        time += FRAME;
    }
    panic!("sheet did not settle");
}

#[test]
fn starts_at_peek_without_animating() {
    let sheet = sheet(SheetConfig::sheet_view());
    assert_eq!(sheet.displayed_top(), 344.0);
    assert!(!sheet.needs_frame());
    assert_eq!(sheet.layout().visible_height, 500.0);
}

#[test]
fn drag_move_retargets_spring() {
    let mut sheet = sheet(SheetConfig::sheet_view());
    sheet.drag_move(Point::new(0.0, -120.0));
    assert!(sheet.needs_frame());
    assert_eq!(sheet.target_top(), 224.0);
    assert_eq!(sheet.displayed_top(), 344.0);

    sheet.tick(0);
    sheet.tick(FRAME);
    let midway = sheet.displayed_top();
    assert!(midway < 344.0 && midway > 224.0);

    sheet.drag_end(Point::new(0.0, -120.0));
    assert_eq!(sheet.machine().settled_detent(), Detent::Expanded);
    assert_eq!(sheet.target_top(), 144.0);
    settle(&mut sheet);
    assert_eq!(sheet.displayed_top(), 144.0);
}

#[test]
fn pointer_drag_expands_sheet() {
    let mut sheet = sheet(SheetConfig::sheet_view());
    assert!(!sheet.handle_pointer(&PointerEvent::down(195.0, 360.0)));
    assert!(sheet.handle_pointer(&PointerEvent::moved(195.0, 300.0)));
    assert!(sheet.handle_pointer(&PointerEvent::moved(195.0, 200.0)));
    assert!(sheet.handle_pointer(&PointerEvent::up(195.0, 200.0)));
    assert_eq!(sheet.machine().settled_detent(), Detent::Expanded);
    assert_eq!(sheet.machine().state().live_drag_delta, 0.0);
}

#[test]
fn presses_outside_the_sheet_are_ignored() {
    let mut sheet = sheet(SheetConfig::sheet_view());
    sheet.handle_pointer(&PointerEvent::down(195.0, 100.0));
    assert!(!sheet.handle_pointer(&PointerEvent::moved(195.0, 20.0)));
    assert_eq!(sheet.machine().state().live_drag_delta, 0.0);
}

#[test]
fn drag_close_writes_binding_back() {
    let binding = OpenBinding::new(true);
    let mut sheet = sheet(SheetConfig::modifier_v1()).open_binding(binding.clone());
    sheet.drag_move(Point::new(0.0, 250.0));
    assert_eq!(sheet.drag_end(Point::new(0.0, 250.0)), Detent::Hidden);
    assert!(!binding.get());
    assert_eq!(sheet.target_top(), 864.0);
    settle(&mut sheet);
    assert!(!sheet.layout().is_visible());
}

#[test]
fn binding_opens_and_closes_sheet() {
    let binding = OpenBinding::new(false);
    let mut sheet = sheet(SheetConfig::modifier_v2()).open_binding(binding.clone());
    assert_eq!(sheet.displayed_top(), 864.0);
    assert!(!sheet.sync_open());

    binding.set(true);
    assert!(sheet.sync_open());
    assert_eq!(sheet.machine().settled_detent(), Detent::Peek);
    settle(&mut sheet);
    assert_eq!(sheet.displayed_top(), 344.0);

    binding.set(false);
    assert!(sheet.sync_open());
    settle(&mut sheet);
    assert_eq!(sheet.displayed_top(), 864.0);
}

#[test]
fn closed_sheet_does_not_start_drags() {
    let binding = OpenBinding::new(false);
    let mut sheet = sheet(SheetConfig::modifier_v1()).open_binding(binding);
    sheet.handle_pointer(&PointerEvent::down(195.0, 840.0));
    assert!(!sheet.handle_pointer(&PointerEvent::moved(195.0, 600.0)));
}

#[test]
fn settle_to_hidden_updates_binding() {
    let binding = OpenBinding::new(true);
    let mut sheet = sheet(SheetConfig::modifier_v1()).open_binding(binding.clone());
    assert!(sheet.settle_to(Detent::Hidden));
    assert!(!binding.get());
    assert!(!sheet.settle_to(Detent::Hidden));
}

#[test]
fn render_emits_chrome_then_content() {
    let mut sheet = sheet(SheetConfig::sheet_view()).content(|scope: &mut ContentScope| {
        let bounds = scope.bounds();
        scope.fill_rect(Rect::new(bounds.x, bounds.y, bounds.width, 44.0), Color::BLACK);
    });
    let scene = sheet.render();

    assert_eq!(scene.primitives.len(), 4);
    assert!(matches!(scene.primitives[0], DrawPrimitive::FillPath { .. }));
    assert!(matches!(scene.primitives[1], DrawPrimitive::FillRect { .. }));
    assert!(matches!(scene.primitives[2], DrawPrimitive::Capsule { .. }));
    assert_eq!(
        scene.primitives[3],
        DrawPrimitive::FillRect {
            rect: Rect::new(0.0, 366.0, 390.0, 44.0),
            color: Color::BLACK
        }
    );
    assert_eq!(scene.clip.arcs().count(), 2);
    let shadow = scene.shadow.expect("default style casts a shadow");
    assert_eq!(shadow.blur_radius, 10.0);
    assert_eq!(shadow.offset, Point::new(0.0, -10.0));
}

#[test]
fn render_resolves_colors_for_appearance() {
    let geometry = SheetGeometry::new(500.0, 700.0).expect("valid geometry");
    let mut sheet = BottomSheet::new(geometry, environment().with_appearance(Appearance::Dark));
    let scene = sheet.render();
    match &scene.primitives[0] {
        DrawPrimitive::FillPath { color, .. } => {
            assert_eq!(*color, Color::from_rgb_u8(13, 14, 19));
        }
        other => panic!("unexpected primitive {other:?}"),
    }
    match &scene.primitives[2] {
        DrawPrimitive::Capsule { color, .. } => assert_eq!(color.a(), 0.24),
        other => panic!("unexpected primitive {other:?}"),
    }
}

#[test]
fn environment_change_animates_to_new_position() {
    let mut sheet = sheet(SheetConfig::sheet_view());
    sheet.set_environment(HostEnvironment::new(Size::new(390.0, 900.0)));
    assert_eq!(sheet.target_top(), 400.0);
    assert!(sheet.needs_frame());
    settle(&mut sheet);
    assert_eq!(sheet.displayed_top(), 400.0);
}

#[test]
fn binding_attached_before_config_keeps_sheet_closed() {
    let geometry = SheetGeometry::new(500.0, 700.0).expect("valid geometry");
    let binding = OpenBinding::new(false);
    let mut sheet = BottomSheet::new(geometry, environment())
        .open_binding(binding.clone())
        .config(SheetConfig::modifier_v1());

    assert!(!sheet.machine().is_open());
    assert_eq!(sheet.displayed_top(), 864.0);
    assert!(!sheet.needs_frame());

    sheet.drag_move(Point::new(0.0, 20.0));
    sheet.drag_end(Point::new(0.0, 20.0));
    assert!(!binding.get());
    assert_eq!(sheet.machine().settled_detent(), Detent::Hidden);
}

#[test]
fn binding_attached_before_config_keeps_sheet_open() {
    let geometry = SheetGeometry::new(500.0, 700.0).expect("valid geometry");
    let binding = OpenBinding::new(true);
    let sheet = BottomSheet::new(geometry, environment())
        .open_binding(binding.clone())
        .config(SheetConfig::modifier_v2());

    assert!(sheet.machine().is_open());
    assert_eq!(sheet.displayed_top(), 344.0);
    assert!(binding.get());
}
