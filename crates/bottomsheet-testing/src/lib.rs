//! Testing utilities for the bottom sheet

pub mod robot;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
}
