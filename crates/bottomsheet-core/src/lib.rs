//! Gesture-to-offset state machine for a draggable bottom sheet
//!
//! The sheet is described by fixed [`SheetGeometry`], a [`SheetConfig`]
//! selecting one of the interaction variants, and a mutable [`SheetState`].
//! State only changes through [`SheetMachine::drag_move`],
//! [`SheetMachine::drag_end`] and the explicit open/detent requests; layout
//! and rendering are pure functions of that state and live in
//! `bottomsheet-ui`.
//!
//! Offsets are measured downwards from the expanded position: `0` is fully
//! expanded and `travel` is resting at the minimum height.

mod config;
mod environment;
mod error;
mod geometry;
mod machine;
mod resolver;
mod state;
mod tracker;

pub use config::*;
pub use environment::HostEnvironment;
pub use error::SheetError;
pub use geometry::SheetGeometry;
pub use machine::SheetMachine;
pub use resolver::DetentResolver;
pub use state::{Detent, SheetState};
pub use tracker::{DragUpdate, GestureTracker};

pub use bottomsheet_graphics::{Appearance, EdgeInsets, Point, Size};
