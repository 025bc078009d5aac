use crate::config::{CloseRule, DetentCount, Resolution, SheetConfig};
use crate::state::Detent;

/// Decides where the sheet settles when a drag is released.
///
/// All threshold comparisons are strict, so a release exactly on a midpoint
/// settles towards the expanded detent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetentResolver {
    detents: DetentCount,
    close_rule: CloseRule,
    resolution: Resolution,
}

impl DetentResolver {
    pub fn new(detents: DetentCount, close_rule: CloseRule, resolution: Resolution) -> Self {
        Self {
            detents,
            close_rule,
            resolution,
        }
    }

    pub fn from_config(config: &SheetConfig) -> Self {
        Self::new(config.detents, config.close_rule, config.resolution)
    }

    /// Next detent for a release `delta` away from the settled `current`
    /// detent. `delta` has already been limited by the drag clamp.
    pub fn resolve(&self, current: Detent, delta: f32, travel: f32) -> Detent {
        if current == Detent::Hidden {
            return Detent::Hidden;
        }
        match (self.resolution, self.detents) {
            (Resolution::AsObserved, DetentCount::Two) => observed_two(current, delta, travel),
            (Resolution::AsObserved, DetentCount::Three) => {
                self.observed_three(current, delta, travel)
            }
            (Resolution::Corrected, detents) => self.corrected(current, detents, delta, travel),
        }
    }

    fn observed_three(&self, current: Detent, delta: f32, travel: f32) -> Detent {
        // Release height measured from the detent the drag started on.
        let new_height = delta;
        let mid = travel / 2.0;
        if current == Detent::Peek && self.closes(delta, new_height, travel) {
            Detent::Hidden
        } else if new_height > mid {
            Detent::Peek
        } else {
            Detent::Expanded
        }
    }

    fn corrected(&self, current: Detent, detents: DetentCount, delta: f32, travel: f32) -> Detent {
        let start = match current {
            Detent::Expanded => 0.0,
            Detent::Peek | Detent::Hidden => travel,
        };
        let position = start + delta;
        // Overshoot is measured past the peek detent, as in the observed rule.
        let overshoot = position - travel;
        if detents == DetentCount::Three && self.closes(delta, overshoot, travel) {
            Detent::Hidden
        } else if position > travel / 2.0 {
            Detent::Peek
        } else {
            Detent::Expanded
        }
    }

    fn closes(&self, drag: f32, overshoot: f32, travel: f32) -> bool {
        match self.close_rule {
            CloseRule::OvershootTravel => overshoot > travel,
            CloseRule::AbsoluteDistance(distance) => drag > distance,
        }
    }
}

fn observed_two(current: Detent, delta: f32, travel: f32) -> Detent {
    let mid = travel / 2.0;
    if delta < -mid {
        Detent::Expanded
    } else if current == Detent::Expanded && delta > mid {
        Detent::Peek
    } else {
        current
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
