//! Content slot of the sheet.

use crate::scene::DrawPrimitive;
use bottomsheet_graphics::{Appearance, Color, Rect};

/// Collects the primitives the content draws inside its frame.
#[derive(Debug)]
pub struct ContentScope {
    bounds: Rect,
    appearance: Appearance,
    primitives: Vec<DrawPrimitive>,
}

impl ContentScope {
    pub fn new(bounds: Rect, appearance: Appearance) -> Self {
        Self {
            bounds,
            appearance,
            primitives: Vec::new(),
        }
    }

    /// Frame available to the content, already padded.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.primitives.push(DrawPrimitive::FillRect { rect, color });
    }

    pub fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

/// Produces the child UI rendered inside the sheet.
pub trait SheetContent {
    fn compose(&mut self, scope: &mut ContentScope);
}

impl<F> SheetContent for F
where
    F: FnMut(&mut ContentScope),
{
    fn compose(&mut self, scope: &mut ContentScope) {
        self(scope)
    }
}
