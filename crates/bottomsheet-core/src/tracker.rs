use crate::config::{DragClamp, SheetConfig};
use crate::geometry::SheetGeometry;
use crate::state::SheetState;
use bottomsheet_graphics::Point;

/// Outcome of a single drag-move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// `live_drag_delta` now holds the given value.
    Moved { live_drag_delta: f32 },
    /// The move fell inside the dead zone; state is unchanged.
    BelowThreshold,
    /// The sheet is closed and does not track drags.
    Closed,
}

impl DragUpdate {
    pub fn is_moved(&self) -> bool {
        matches!(self, DragUpdate::Moved { .. })
    }
}

/// Turns cumulative drag translations into a live drag delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTracker {
    threshold: f32,
    clamp: DragClamp,
}

impl GestureTracker {
    pub fn new(threshold: f32, clamp: DragClamp) -> Self {
        Self {
            threshold: threshold.max(0.0),
            clamp,
        }
    }

    pub fn from_config(config: &SheetConfig) -> Self {
        Self::new(config.drag_threshold, config.drag_clamp)
    }

    /// Apply the vertical part of `translation`, the total movement since the
    /// drag started.
    pub fn drag_move(
        &self,
        state: &mut SheetState,
        geometry: &SheetGeometry,
        translation: Point,
    ) -> DragUpdate {
        if !state.is_open() {
            return DragUpdate::Closed;
        }
        let dy = translation.y;
        if self.threshold > 0.0 && dy.abs() <= self.threshold {
            log::trace!("drag {} inside dead zone {}", dy, self.threshold);
            return DragUpdate::BelowThreshold;
        }
        state.live_drag_delta = self.limit(state.base_offset, dy, geometry);
        log::trace!(
            "drag delta {} -> effective offset {}",
            state.live_drag_delta,
            state.effective_offset()
        );
        DragUpdate::Moved {
            live_drag_delta: state.live_drag_delta,
        }
    }

    /// Delta after applying the configured clamp around `base_offset`.
    pub fn limit(&self, base_offset: f32, dy: f32, geometry: &SheetGeometry) -> f32 {
        match self.clamp {
            DragClamp::TravelRange => geometry.clamp_offset(base_offset + dy) - base_offset,
            DragClamp::Unclamped => dy,
        }
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
