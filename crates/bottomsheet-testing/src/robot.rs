//! Robot testing for the bottom sheet
//!
//! Drives a [`BottomSheet`] with scripted pointer sequences and a simulated
//! frame clock, so tests read like user interactions:
//!
//! ```
//! use bottomsheet_testing::SheetRobot;
//! use bottomsheet_ui::{BottomSheet, Detent, HostEnvironment, SheetConfig, SheetGeometry, Size};
//!
//! let geometry = SheetGeometry::new(300.0, 600.0).unwrap();
//! let environment = HostEnvironment::new(Size::new(400.0, 800.0));
//! let sheet = BottomSheet::new(geometry, environment).config(SheetConfig::sheet_view());
//!
//! let mut robot = SheetRobot::new(sheet);
//! robot.drag_by(0.0, -200.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.detent(), Detent::Expanded);
//! ```

use bottomsheet_ui::{BottomSheet, Detent, PointerEvent, SheetLayout};

/// Nanoseconds per simulated frame (~60 FPS).
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames pumped by [`SheetRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 1_000;

pub struct SheetRobot {
    sheet: BottomSheet,
    frame_time: u64,
    /// Pointer moves emitted per scripted drag.
    steps: usize,
}

impl SheetRobot {
    pub fn new(sheet: BottomSheet) -> Self {
        Self {
            sheet,
            frame_time: 0,
            steps: 8,
        }
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps.max(1);
        self
    }

    pub fn sheet(&self) -> &BottomSheet {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut BottomSheet {
        &mut self.sheet
    }

    pub fn detent(&self) -> Detent {
        self.sheet.machine().settled_detent()
    }

    pub fn layout(&self) -> SheetLayout {
        self.sheet.layout()
    }

    /// Point in the middle of the drag indicator strip.
    pub fn grab_point(&self) -> (f32, f32) {
        let strip = self.sheet.layout().indicator_strip;
        (strip.mid_x(), strip.y + strip.height / 2.0)
    }

    /// Advance the simulated clock by one frame.
    pub fn advance_frame(&mut self) -> bool {
        self.frame_time += FRAME_NANOS;
        self.sheet.tick(self.frame_time)
    }

    /// Pump frames until no animation is running. Returns the number of
    /// frames pumped.
    pub fn wait_for_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.sheet.needs_frame() && frames < MAX_IDLE_FRAMES {
            self.advance_frame();
            frames += 1;
        }
        if self.sheet.needs_frame() {
            log::warn!("sheet still animating after {frames} frames");
        }
        frames
    }

    /// Press, move in even steps and release. One frame passes between
    /// moves. Returns whether the sheet consumed the release.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) -> bool {
        self.sheet.handle_pointer(&PointerEvent::down(from_x, from_y));
        for step in 1..=self.steps {
            let fraction = step as f32 / self.steps as f32;
            let x = from_x + (to_x - from_x) * fraction;
            let y = from_y + (to_y - from_y) * fraction;
            self.sheet.handle_pointer(&PointerEvent::moved(x, y));
            self.advance_frame();
        }
        self.sheet.handle_pointer(&PointerEvent::up(to_x, to_y))
    }

    /// Drag from the indicator by `(dx, dy)`.
    pub fn drag_by(&mut self, dx: f32, dy: f32) -> bool {
        let (x, y) = self.grab_point();
        self.drag(x, y, x + dx, y + dy)
    }

    /// Press, move and cancel instead of releasing.
    pub fn drag_and_cancel(&mut self, dx: f32, dy: f32) {
        let (x, y) = self.grab_point();
        self.sheet.handle_pointer(&PointerEvent::down(x, y));
        self.sheet.handle_pointer(&PointerEvent::moved(x + dx, y + dy));
        self.advance_frame();
        self.sheet.handle_pointer(&PointerEvent::cancel());
    }
}
