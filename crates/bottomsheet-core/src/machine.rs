use crate::config::SheetConfig;
use crate::geometry::SheetGeometry;
use crate::resolver::DetentResolver;
use crate::state::{Detent, SheetState};
use crate::tracker::{DragUpdate, GestureTracker};
use bottomsheet_graphics::Point;

/// One sheet's geometry, configuration and interaction state.
///
/// Starts open and resting at peek.
#[derive(Clone, Debug)]
pub struct SheetMachine {
    geometry: SheetGeometry,
    config: SheetConfig,
    state: SheetState,
    tracker: GestureTracker,
    resolver: DetentResolver,
}

impl SheetMachine {
    pub fn new(geometry: SheetGeometry, config: SheetConfig) -> Self {
        Self {
            geometry,
            config,
            state: SheetState::at_peek(geometry.travel()),
            tracker: GestureTracker::from_config(&config),
            resolver: DetentResolver::from_config(&config),
        }
    }

    /// Initial open flag. Ignored for two-detent sheets, which are always
    /// shown.
    pub fn with_open(mut self, open: bool) -> Self {
        if !open && self.config.has_open_flag() {
            self.state.detent = Detent::Hidden;
        }
        self
    }

    pub fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn state(&self) -> &SheetState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn settled_detent(&self) -> Detent {
        self.state.detent
    }

    /// Settled offset plus the live drag delta.
    pub fn effective_offset(&self) -> f32 {
        self.state.effective_offset()
    }

    pub fn drag_move(&mut self, translation: Point) -> DragUpdate {
        self.tracker
            .drag_move(&mut self.state, &self.geometry, translation)
    }

    /// Commit the drag ending with `translation` and return the new detent.
    /// Always leaves `live_drag_delta` at 0.
    pub fn drag_end(&mut self, translation: Point) -> Detent {
        let current = self.settled_detent();
        if current == Detent::Hidden {
            self.state.live_drag_delta = 0.0;
            return current;
        }
        let delta = self
            .tracker
            .limit(self.state.base_offset, translation.y, &self.geometry);
        let next = self.resolver.resolve(current, delta, self.geometry.travel());
        log::debug!(
            "drag released at {} from {:?}: settling to {:?}",
            delta,
            current,
            next
        );
        self.commit(next);
        next
    }

    /// Abandon the drag in progress without changing detent.
    pub fn drag_cancel(&mut self) {
        self.state.live_drag_delta = 0.0;
    }

    /// Open or close the sheet. Opening always lands on peek. Returns whether
    /// anything changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.state.is_open() == open {
            return false;
        }
        self.settle_to(if open { Detent::Peek } else { Detent::Hidden })
    }

    /// Move straight to `detent`. Hiding a two-detent sheet is refused.
    pub fn settle_to(&mut self, detent: Detent) -> bool {
        if detent == Detent::Hidden && !self.config.has_open_flag() {
            log::warn!("sheet without an open flag cannot be hidden");
            return false;
        }
        let before = self.state;
        self.commit(detent);
        before != self.state
    }

    fn commit(&mut self, detent: Detent) {
        let was_open = self.state.is_open();
        self.state.base_offset = self.geometry.base_offset_for(detent);
        self.state.detent = detent;
        self.state.live_drag_delta = 0.0;
        if was_open != self.state.is_open() {
            log::debug!("sheet open flag changed to {}", self.state.is_open());
        }
    }
}

#[cfg(test)]
#[path = "tests/machine_tests.rs"]
mod tests;
