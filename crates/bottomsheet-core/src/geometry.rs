use crate::environment::HostEnvironment;
use crate::error::SheetError;
use crate::state::Detent;

/// Minimum and maximum visible heights of the sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetGeometry {
    min_height: f32,
    max_height: f32,
}

impl SheetGeometry {
    pub fn new(min_height: f32, max_height: f32) -> Result<Self, SheetError> {
        validate("min height", min_height)?;
        validate("max height", max_height)?;
        if max_height < min_height {
            return Err(SheetError::InvertedHeights {
                min_height,
                max_height,
            });
        }
        Ok(Self {
            min_height,
            max_height,
        })
    }

    /// Geometry whose max height fills the host screen including the bottom
    /// safe area.
    pub fn with_default_max(
        min_height: f32,
        environment: &HostEnvironment,
    ) -> Result<Self, SheetError> {
        Self::new(min_height, environment.default_max_height())
    }

    /// Lenient constructor: non-finite or negative heights become 0 and an
    /// inverted pair collapses to zero travel.
    pub fn clamped(min_height: f32, max_height: f32) -> Self {
        let sanitize = |value: f32| if value.is_finite() { value.max(0.0) } else { 0.0 };
        let min_height = sanitize(min_height);
        let mut max_height = sanitize(max_height);
        if max_height < min_height {
            log::warn!(
                "sheet max height {} is below min height {}; clamping travel to 0",
                max_height,
                min_height
            );
            max_height = min_height;
        }
        Self {
            min_height,
            max_height,
        }
    }

    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Vertical distance between the two resting heights.
    pub fn travel(&self) -> f32 {
        self.max_height - self.min_height
    }

    pub fn midpoint(&self) -> f32 {
        self.travel() / 2.0
    }

    /// Settled offset for `detent`. A hidden sheet keeps the peek offset so
    /// it reopens at the minimum height.
    pub fn base_offset_for(&self, detent: Detent) -> f32 {
        match detent {
            Detent::Expanded => 0.0,
            Detent::Peek | Detent::Hidden => self.travel(),
        }
    }

    /// Portion of the sheet above the bottom screen edge at `offset`.
    pub fn visible_height(&self, offset: f32) -> f32 {
        (self.max_height - offset).max(0.0)
    }

    /// `offset` limited to the travel range.
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.travel())
    }
}

fn validate(name: &'static str, value: f32) -> Result<(), SheetError> {
    if !value.is_finite() {
        return Err(SheetError::NonFiniteHeight { name, value });
    }
    if value < 0.0 {
        return Err(SheetError::NegativeHeight { name, value });
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
