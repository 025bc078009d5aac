//! Pure math/data for drawing the bottom sheet
//!
//! Geometry primitives, adaptive colors and the path/shape types used to clip
//! the sheet background. Nothing here rasterises; renderers consume the data.

mod color;
mod geometry;
mod path;

pub use color::*;
pub use geometry::*;
pub use path::*;

pub mod prelude {
    pub use crate::color::{AdaptiveColor, Appearance, Color};
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::path::{Path, PathCommand, Shape, TopRoundedShape};
}
