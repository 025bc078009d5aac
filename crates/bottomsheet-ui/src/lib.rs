//! Bottom sheet component
//!
//! Wires the `bottomsheet-core` state machine to pointer input, spring
//! animation, layout and a renderer-agnostic draw scene.

mod bottom_sheet;
mod content;
mod drag;
pub mod gesture_constants;
mod input;
mod layout;
mod scene;
mod style;

pub use bottom_sheet::{BottomSheet, OpenBinding};
pub use content::{ContentScope, SheetContent};
pub use drag::{DragEvent, DragGestureDetector};
pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use layout::{expanded_top, hidden_top, layout_sheet, target_top, SheetLayout};
pub use scene::{DrawPrimitive, ShadowPrimitive, SheetScene};
pub use style::{Shadow, SheetStyle};

pub use bottomsheet_animation::{AnimationSpec, AnimationType, Easing, FrameClock, SpringSpec};
pub use bottomsheet_core::{
    CloseRule, Detent, DetentCount, DragClamp, DragUpdate, HostEnvironment, Resolution,
    SheetConfig, SheetError, SheetGeometry, SheetState,
};
pub use bottomsheet_graphics::{
    AdaptiveColor, Appearance, Color, EdgeInsets, Path, Point, Rect, Size,
};

pub mod prelude {
    pub use crate::{
        BottomSheet, ContentScope, Detent, HostEnvironment, OpenBinding, PointerEvent,
        SheetConfig, SheetGeometry, SheetStyle,
    };
}
