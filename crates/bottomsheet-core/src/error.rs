use thiserror::Error;

/// Invalid sheet construction parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SheetError {
    #[error("sheet {name} must be finite, got {value}")]
    NonFiniteHeight { name: &'static str, value: f32 },

    #[error("sheet {name} must not be negative, got {value}")]
    NegativeHeight { name: &'static str, value: f32 },

    #[error("max height {max_height} is smaller than min height {min_height}")]
    InvertedHeights { min_height: f32, max_height: f32 },
}
