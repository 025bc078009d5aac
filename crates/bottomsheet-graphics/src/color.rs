//! Color representation and light/dark adaptive colors

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub const fn white(white: f32, alpha: f32) -> Self {
        Self(white, white, white, alpha)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

/// Interface appearance reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// A color that resolves differently in light and dark appearance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveColor {
    pub light: Color,
    pub dark: Color,
}

impl AdaptiveColor {
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Same color in both appearances.
    pub const fn fixed(color: Color) -> Self {
        Self {
            light: color,
            dark: color,
        }
    }

    pub fn resolve(&self, appearance: Appearance) -> Color {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }

    /// Primary sheet background.
    pub const fn background_primary() -> Self {
        Self::new(Color::WHITE, Color::from_rgb_u8(13, 14, 19))
    }

    /// Drag indicator capsule.
    pub const fn grayscale_400() -> Self {
        Self::new(Color::from_rgb_u8(183, 183, 183), Color::white(1.0, 0.24))
    }
}

impl From<Color> for AdaptiveColor {
    fn from(color: Color) -> Self {
        Self::fixed(color)
    }
}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;
