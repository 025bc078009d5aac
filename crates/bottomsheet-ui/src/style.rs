use bottomsheet_animation::{AnimationType, SpringSpec};
use bottomsheet_graphics::{AdaptiveColor, Color, Point, Size};

/// Drop shadow cast by the sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub radius: f32,
    pub offset: Point,
}

impl Shadow {
    /// How far the shadow reaches above the sheet's top edge.
    pub fn extent_above(&self) -> f32 {
        (self.radius - self.offset.y).max(0.0)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::BLACK.with_alpha(0.08),
            radius: 10.0,
            offset: Point::new(0.0, -10.0),
        }
    }
}

/// Visual parameters of the sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetStyle {
    pub background: AdaptiveColor,
    pub indicator_background: AdaptiveColor,
    pub indicator_color: AdaptiveColor,
    pub corner_radius: f32,
    pub indicator_size: Size,
    /// Space above and below the capsule inside the indicator strip.
    pub indicator_padding: f32,
    pub shadow: Shadow,
    pub animation: AnimationType,
}

impl SheetStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.background = color.into();
        self
    }

    pub fn indicator_background(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.indicator_background = color.into();
        self
    }

    pub fn indicator_color(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.indicator_color = color.into();
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn animation(mut self, animation: AnimationType) -> Self {
        self.animation = animation;
        self
    }

    /// Height of the strip that holds the drag indicator.
    pub fn indicator_strip_height(&self) -> f32 {
        self.indicator_size.height + 2.0 * self.indicator_padding
    }
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            background: AdaptiveColor::background_primary(),
            indicator_background: AdaptiveColor::background_primary(),
            indicator_color: AdaptiveColor::grayscale_400(),
            corner_radius: 16.0,
            indicator_size: Size::new(40.0, 6.0),
            indicator_padding: 8.0,
            shadow: Shadow::default(),
            animation: AnimationType::Spring(SpringSpec::sheet()),
        }
    }
}
