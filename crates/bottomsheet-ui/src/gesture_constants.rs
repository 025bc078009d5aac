//! Gesture thresholds in logical pixels.

/// Distance the pointer must travel from the press position before a drag
/// is recognised. Matches the platform drag gesture's default minimum
/// distance.
pub const TOUCH_SLOP: f32 = 10.0;
