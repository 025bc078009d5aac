use bottomsheet_graphics::{Appearance, EdgeInsets, Size};

/// Host capabilities the sheet depends on, passed in instead of queried from
/// platform singletons.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostEnvironment {
    pub screen_size: Size,
    pub safe_area: EdgeInsets,
    pub appearance: Appearance,
}

impl HostEnvironment {
    pub fn new(screen_size: Size) -> Self {
        Self {
            screen_size,
            ..Self::default()
        }
    }

    pub fn with_safe_area(mut self, safe_area: EdgeInsets) -> Self {
        self.safe_area = safe_area;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Screen height plus the bottom safe-area inset.
    pub fn default_max_height(&self) -> f32 {
        self.screen_size.height + self.safe_area.bottom
    }
}
