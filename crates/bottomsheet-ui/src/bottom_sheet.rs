//! The bottom sheet component.

use crate::content::{ContentScope, SheetContent};
use crate::drag::{DragEvent, DragGestureDetector};
use crate::input::PointerEvent;
use crate::layout::{layout_sheet, target_top, SheetLayout};
use crate::scene::SheetScene;
use crate::style::SheetStyle;
use bottomsheet_animation::Animatable;
use bottomsheet_core::{
    Detent, DragUpdate, HostEnvironment, SheetConfig, SheetGeometry, SheetMachine,
};
use bottomsheet_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

/// Open/closed flag shared between the calling screen and the sheet.
///
/// The screen owns it and flips it to show or hide the sheet; the sheet
/// writes `false` back when a drag closes it.
#[derive(Clone, Debug, Default)]
pub struct OpenBinding(Rc<Cell<bool>>);

impl OpenBinding {
    pub fn new(open: bool) -> Self {
        Self(Rc::new(Cell::new(open)))
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, open: bool) {
        self.0.set(open);
    }
}

/// Draggable sheet anchored to the bottom of the screen.
///
/// Interaction state lives in a [`SheetMachine`]; the displayed top edge
/// follows it through a spring so every state change animates and a new
/// drag event retargets the motion in flight.
pub struct BottomSheet {
    machine: SheetMachine,
    environment: HostEnvironment,
    style: SheetStyle,
    binding: Option<OpenBinding>,
    content: Option<Box<dyn SheetContent>>,
    detector: DragGestureDetector,
    top: Animatable<f32>,
}

impl BottomSheet {
    pub fn new(geometry: SheetGeometry, environment: HostEnvironment) -> Self {
        let machine = SheetMachine::new(geometry, SheetConfig::default());
        let style = SheetStyle::default();
        let top = target_top(machine.state(), &geometry, &environment, &style);
        Self {
            machine,
            environment,
            style,
            binding: None,
            content: None,
            detector: DragGestureDetector::new(),
            top: Animatable::new(top),
        }
    }

    /// Replaces the interaction variant. The open flag comes from the
    /// attached binding, or carries over from the previous machine.
    pub fn config(mut self, config: SheetConfig) -> Self {
        let open = match &self.binding {
            Some(binding) => binding.get(),
            None => self.machine.is_open(),
        };
        self.machine = SheetMachine::new(*self.machine.geometry(), config).with_open(open);
        self.snap_to_target();
        self
    }

    pub fn style(mut self, style: SheetStyle) -> Self {
        self.style = style;
        self.snap_to_target();
        self
    }

    /// Ties the open flag to `binding`; the sheet starts in the binding's
    /// state without animating.
    pub fn open_binding(mut self, binding: OpenBinding) -> Self {
        if self.machine.config().has_open_flag() {
            self.machine.set_open(binding.get());
        } else {
            log::debug!("open binding attached to a sheet without an open flag");
        }
        self.binding = Some(binding);
        self.snap_to_target();
        self
    }

    pub fn content(mut self, content: impl SheetContent + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    pub fn machine(&self) -> &SheetMachine {
        &self.machine
    }

    pub fn environment(&self) -> &HostEnvironment {
        &self.environment
    }

    pub fn sheet_style(&self) -> &SheetStyle {
        &self.style
    }

    /// Host environment changed (rotation, appearance, safe area).
    pub fn set_environment(&mut self, environment: HostEnvironment) {
        self.environment = environment;
        self.animate_to_target();
    }

    /// Routes a pointer event through the drag recogniser. Returns whether
    /// the event was consumed by the sheet.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let screen = self.environment.screen_size;
        let touch_area = self.layout().touch_area(screen);
        let open = self.machine.is_open();
        let recognised = self.detector.on_event(event, |position| {
            open && touch_area.is_some_and(|area| area.contains(position.x, position.y))
        });
        match recognised {
            Some(DragEvent::Changed { translation }) => {
                self.drag_move(translation);
            }
            Some(DragEvent::Ended { translation }) => {
                self.drag_end(translation);
            }
            Some(DragEvent::Cancelled) => {
                self.machine.drag_cancel();
                self.animate_to_target();
            }
            None => {}
        }
        event.is_consumed()
    }

    /// Drag-move callback for hosts with their own gesture recogniser.
    pub fn drag_move(&mut self, translation: Point) -> DragUpdate {
        let update = self.machine.drag_move(translation);
        if update.is_moved() {
            self.animate_to_target();
        }
        update
    }

    /// Drag-end callback for hosts with their own gesture recogniser.
    pub fn drag_end(&mut self, translation: Point) -> Detent {
        let detent = self.machine.drag_end(translation);
        self.write_binding();
        self.animate_to_target();
        detent
    }

    /// Picks up a change the calling screen made to the open binding.
    /// Returns whether the sheet started moving.
    pub fn sync_open(&mut self) -> bool {
        let Some(open) = self.binding.as_ref().map(OpenBinding::get) else {
            return false;
        };
        if !self.machine.set_open(open) {
            return false;
        }
        self.detector.reset();
        self.animate_to_target();
        true
    }

    /// Programmatically move to `detent`.
    pub fn settle_to(&mut self, detent: Detent) -> bool {
        if !self.machine.settle_to(detent) {
            return false;
        }
        self.detector.reset();
        self.write_binding();
        self.animate_to_target();
        true
    }

    /// Advance animations to `frame_time_nanos`. Returns `true` while more
    /// frames are needed.
    pub fn tick(&mut self, frame_time_nanos: u64) -> bool {
        self.top.tick(frame_time_nanos)
    }

    pub fn needs_frame(&self) -> bool {
        self.top.is_running()
    }

    /// Screen y of the top edge the sheet is moving towards.
    pub fn target_top(&self) -> f32 {
        target_top(
            self.machine.state(),
            self.machine.geometry(),
            &self.environment,
            &self.style,
        )
    }

    /// Screen y of the top edge as currently displayed.
    pub fn displayed_top(&self) -> f32 {
        self.top.value()
    }

    pub fn layout(&self) -> SheetLayout {
        layout_sheet(
            self.displayed_top(),
            self.machine.geometry(),
            &self.environment,
            &self.style,
            self.machine.config(),
        )
    }

    /// Builds the draw scene for the current frame, including content.
    pub fn render(&mut self) -> SheetScene {
        let appearance = self.environment.appearance;
        let mut scene = SheetScene::chrome(self.layout(), &self.style, appearance);
        if let Some(content) = self.content.as_mut() {
            let mut scope = ContentScope::new(scene.layout.content, appearance);
            content.compose(&mut scope);
            scene.primitives.extend(scope.into_primitives());
        }
        scene
    }

    fn write_binding(&self) {
        if let Some(binding) = &self.binding {
            if self.machine.config().has_open_flag() && binding.get() != self.machine.is_open() {
                binding.set(self.machine.is_open());
            }
        }
    }

    fn animate_to_target(&mut self) {
        let target = self.target_top();
        self.top.animate_to(target, self.style.animation);
    }

    fn snap_to_target(&mut self) {
        let target = self.target_top();
        self.top.snap_to(target);
    }
}

#[cfg(test)]
#[path = "tests/bottom_sheet_tests.rs"]
mod tests;
