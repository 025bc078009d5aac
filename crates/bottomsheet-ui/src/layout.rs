//! Sheet layout as a pure function of the displayed position.

use crate::style::SheetStyle;
use bottomsheet_core::{HostEnvironment, SheetConfig, SheetGeometry, SheetState};
use bottomsheet_graphics::{EdgeInsets, Rect, Size};

/// Frames of every part of the sheet, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetLayout {
    pub sheet: Rect,
    pub indicator_strip: Rect,
    pub indicator: Rect,
    pub content: Rect,
    pub content_padding: EdgeInsets,
    /// Height of the sheet above the bottom screen edge.
    pub visible_height: f32,
}

impl SheetLayout {
    pub fn is_visible(&self) -> bool {
        self.visible_height > 0.0
    }

    /// On-screen part of the sheet, where a press may start a drag.
    pub fn touch_area(&self, screen: Size) -> Option<Rect> {
        self.sheet.intersect(&Rect::from_size(screen))
    }
}

/// Screen y of the sheet's top edge when resting at offset 0.
pub fn expanded_top(geometry: &SheetGeometry, environment: &HostEnvironment) -> f32 {
    environment.screen_size.height - geometry.max_height()
}

/// Screen y of the top edge that keeps a closed sheet and its shadow fully
/// below the screen.
pub fn hidden_top(environment: &HostEnvironment, style: &SheetStyle) -> f32 {
    environment.screen_size.height + style.shadow.extent_above()
}

/// Screen y the sheet's top edge should move to for `state`. Negative
/// offsets are floored at 0 so the sheet never leaves its expanded position.
pub fn target_top(
    state: &SheetState,
    geometry: &SheetGeometry,
    environment: &HostEnvironment,
    style: &SheetStyle,
) -> f32 {
    if !state.is_open() {
        return hidden_top(environment, style);
    }
    expanded_top(geometry, environment) + state.effective_offset().max(0.0)
}

/// Lays the sheet out with its top edge at screen y `top`.
pub fn layout_sheet(
    top: f32,
    geometry: &SheetGeometry,
    environment: &HostEnvironment,
    style: &SheetStyle,
    config: &SheetConfig,
) -> SheetLayout {
    let screen = environment.screen_size;
    let sheet = Rect::new(0.0, top, screen.width, geometry.max_height());

    let strip_height = style.indicator_strip_height().min(sheet.height);
    let indicator_strip = Rect::new(sheet.x, sheet.y, sheet.width, strip_height);
    let indicator_size = style.indicator_size;
    let indicator = Rect::new(
        indicator_strip.mid_x() - indicator_size.width / 2.0,
        indicator_strip.y + style.indicator_padding,
        indicator_size.width,
        indicator_size.height,
    );

    let offset = geometry.clamp_offset(top - expanded_top(geometry, environment));
    let mut bottom_padding = environment.safe_area.bottom;
    if config.dynamic_content_padding {
        bottom_padding += offset;
    }
    let content_padding = EdgeInsets::from_components(0.0, 0.0, 0.0, bottom_padding);
    let content_area = Rect::new(
        sheet.x,
        indicator_strip.max_y(),
        sheet.width,
        (sheet.height - strip_height).max(0.0),
    );

    SheetLayout {
        sheet,
        indicator_strip,
        indicator,
        content: content_area.inset(content_padding),
        content_padding,
        visible_height: (screen.height - top).clamp(0.0, sheet.height),
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
