//! Animation system for the bottom sheet
//!
//! Values are advanced explicitly by the host's frame loop through
//! [`Animatable::tick`]; there is no hidden scheduler.

mod animation;
mod frame_clock;

pub use animation::*;
pub use frame_clock::FrameClock;
