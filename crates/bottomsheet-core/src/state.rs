/// Named resting position of the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Detent {
    Hidden,
    Peek,
    Expanded,
}

/// Mutable interaction state of one sheet instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetState {
    /// Settled offset of the sheet's top edge below its expanded position.
    pub base_offset: f32,
    /// Uncommitted translation of the drag in progress.
    pub live_drag_delta: f32,
    /// Detent last committed. Peek and expanded share an offset when travel
    /// is zero.
    pub detent: Detent,
}

impl SheetState {
    pub fn at_peek(travel: f32) -> Self {
        Self {
            base_offset: travel,
            live_drag_delta: 0.0,
            detent: Detent::Peek,
        }
    }

    pub fn effective_offset(&self) -> f32 {
        self.base_offset + self.live_drag_delta
    }

    pub fn is_dragging(&self) -> bool {
        self.live_drag_delta != 0.0
    }

    pub fn is_open(&self) -> bool {
        self.detent != Detent::Hidden
    }
}
