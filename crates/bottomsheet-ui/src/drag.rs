//! Drag gesture recogniser.
//!
//! Reports translations relative to the press position, the way the sheet's
//! gesture callbacks expect them. A press that never leaves the touch slop
//! produces no drag events at all.

use crate::gesture_constants::TOUCH_SLOP;
use crate::input::{PointerEvent, PointerEventKind, PointerId};
use bottomsheet_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// Cumulative translation since the press, sent on every move once the
    /// drag has started.
    Changed { translation: Point },
    /// Final translation when the pointer is released.
    Ended { translation: Point },
    Cancelled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Pressed {
        id: PointerId,
        origin: Point,
    },
    Dragging {
        id: PointerId,
        origin: Point,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGestureDetector {
    phase: Phase,
    touch_slop: f32,
}

impl DragGestureDetector {
    pub fn new() -> Self {
        Self::with_touch_slop(TOUCH_SLOP)
    }

    pub fn with_touch_slop(touch_slop: f32) -> Self {
        Self {
            phase: Phase::Idle,
            touch_slop: touch_slop.max(0.0),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Feed one pointer event. `accepts_press` decides whether a press at the
    /// given position may start a gesture. Events belonging to a recognised
    /// drag are consumed.
    pub fn on_event(
        &mut self,
        event: &PointerEvent,
        accepts_press: impl FnOnce(Point) -> bool,
    ) -> Option<DragEvent> {
        match (event.kind, self.phase) {
            (PointerEventKind::Down, Phase::Idle) => {
                if accepts_press(event.position) {
                    self.phase = Phase::Pressed {
                        id: event.id,
                        origin: event.position,
                    };
                }
                None
            }
            (PointerEventKind::Move, Phase::Pressed { id, origin }) if id == event.id => {
                let translation = event.position - origin;
                if translation.length() <= self.touch_slop {
                    return None;
                }
                self.phase = Phase::Dragging { id, origin };
                event.consume();
                Some(DragEvent::Changed { translation })
            }
            (PointerEventKind::Move, Phase::Dragging { id, origin }) if id == event.id => {
                event.consume();
                Some(DragEvent::Changed {
                    translation: event.position - origin,
                })
            }
            (PointerEventKind::Up, Phase::Dragging { id, origin }) if id == event.id => {
                self.phase = Phase::Idle;
                event.consume();
                Some(DragEvent::Ended {
                    translation: event.position - origin,
                })
            }
            (PointerEventKind::Cancel, Phase::Dragging { .. }) => {
                self.phase = Phase::Idle;
                Some(DragEvent::Cancelled)
            }
            (PointerEventKind::Up | PointerEventKind::Cancel, Phase::Pressed { .. }) => {
                self.phase = Phase::Idle;
                None
            }
            _ => None,
        }
    }
}

impl Default for DragGestureDetector {
    fn default() -> Self {
        Self::new()
    }
}
