//! Interaction variants of the sheet as one configurable state machine.

/// Drag distance a move must exceed before the gated variant follows the
/// pointer.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 50.0;

/// Absolute downward drag that closes the gated variant from peek.
pub const DEFAULT_CLOSE_DISTANCE: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetentCount {
    /// Expanded and peek only; the sheet is always shown.
    Two,
    /// Expanded, peek and hidden; the sheet has an open flag.
    Three,
}

/// How live drag deltas are limited while the finger is down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragClamp {
    /// Effective offset stays inside `[0, travel]`.
    TravelRange,
    /// Raw delta; layout floors the offset at 0 when drawing.
    Unclamped,
}

/// When a release from peek closes a three-detent sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloseRule {
    /// The release position passes the peek detent by more than the travel.
    OvershootTravel,
    /// The downward drag is longer than the given distance.
    AbsoluteDistance(f32),
}

/// Detent decision policy on release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    /// Thresholds relative to the current detent, exactly as the sheet
    /// historically behaved (no close from expanded, short drags from peek
    /// expand).
    #[default]
    AsObserved,
    /// Thresholds on the absolute release position, close allowed from any
    /// open detent.
    Corrected,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetConfig {
    pub detents: DetentCount,
    /// Moves with `|dy|` at or below this are ignored. 0 disables the gate.
    pub drag_threshold: f32,
    pub drag_clamp: DragClamp,
    pub close_rule: CloseRule,
    /// Grow the content's bottom padding with the offset so content stays
    /// inside the visible part of the sheet.
    pub dynamic_content_padding: bool,
    pub resolution: Resolution,
}

impl SheetConfig {
    /// Self-contained sheet view: two detents, clamped drag, no gate.
    pub fn sheet_view() -> Self {
        Self {
            detents: DetentCount::Two,
            drag_threshold: 0.0,
            drag_clamp: DragClamp::TravelRange,
            close_rule: CloseRule::OvershootTravel,
            dynamic_content_padding: false,
            resolution: Resolution::AsObserved,
        }
    }

    /// Sheet modifier with an open flag; closes on overshooting peek.
    pub fn modifier_v1() -> Self {
        Self {
            detents: DetentCount::Three,
            drag_threshold: 0.0,
            drag_clamp: DragClamp::Unclamped,
            close_rule: CloseRule::OvershootTravel,
            dynamic_content_padding: false,
            resolution: Resolution::AsObserved,
        }
    }

    /// Sheet modifier with a drag dead zone, absolute close distance and
    /// dynamic content padding.
    pub fn modifier_v2() -> Self {
        Self {
            detents: DetentCount::Three,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            drag_clamp: DragClamp::Unclamped,
            close_rule: CloseRule::AbsoluteDistance(DEFAULT_CLOSE_DISTANCE),
            dynamic_content_padding: true,
            resolution: Resolution::AsObserved,
        }
    }

    pub fn drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold.max(0.0);
        self
    }

    pub fn close_rule(mut self, rule: CloseRule) -> Self {
        self.close_rule = rule;
        self
    }

    pub fn dynamic_content_padding(mut self, enabled: bool) -> Self {
        self.dynamic_content_padding = enabled;
        self
    }

    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn has_open_flag(&self) -> bool {
        self.detents == DetentCount::Three
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::sheet_view()
    }
}
