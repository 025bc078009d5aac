//! Time-based animations with easing curves and spring physics.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Scalar values an [`Animatable`] can drive. Physics runs in `f32`.
pub trait SpringScalar: Lerp + Copy {
    fn to_f32(self) -> f32;
    fn from_f32(value: f32) -> Self;
}

impl SpringScalar for f32 {
    fn to_f32(self) -> f32 {
        self
    }

    fn from_f32(value: f32) -> Self {
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    /// Material standard curve.
    FastOutSlowInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Evaluates the CSS-style cubic bezier `(0,0) (x1,y1) (x2,y2) (1,1)` at `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let axis = |p1: f32, p2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };

    // x(t) is monotonic for control points inside [0, 1].
    let (mut low, mut high) = (0.0f32, 1.0f32);
    let mut t = x;
    for _ in 0..24 {
        let sample = axis(x1, x2, t);
        if (sample - x).abs() < 1e-6 {
            break;
        }
        if sample > x {
            high = t;
        } else {
            low = t;
        }
        t = 0.5 * (low + high);
    }
    axis(y1, y2, t)
}

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
///
/// Thresholds are in the animated value's own units (pixels for offsets).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = bouncy, > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness for a unit mass. Higher values settle faster.
    pub stiffness: f32,
    pub velocity_threshold: f32,
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Spring described the way platform UI kits do: the period of the
    /// undamped oscillation in seconds plus a damping fraction.
    pub fn from_response(response_secs: f32, damping_ratio: f32) -> Self {
        let omega = std::f32::consts::TAU / response_secs.max(f32::EPSILON);
        Self {
            damping_ratio,
            stiffness: omega * omega,
            velocity_threshold: 1.0,
            position_threshold: 0.1,
        }
    }

    /// Settling spring for sheet movement (response 0.55 s, damping 0.825).
    pub fn sheet() -> Self {
        Self::from_response(0.55, 0.825)
    }

    fn damping(&self) -> f32 {
        2.0 * self.damping_ratio * self.stiffness.sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::sheet()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Spring(SpringSpec::default())
    }
}

/// Integration step for spring physics, in seconds.
const SPRING_TIMESTEP: f32 = 1.0 / 120.0;

/// Animated scalar driven by explicit frame times.
///
/// Retargeting mid-flight keeps the current value and, for springs, the
/// current velocity, so a new drag event bends the motion instead of
/// restarting it.
#[derive(Debug, Clone)]
pub struct Animatable<T: SpringScalar> {
    current: f32,
    velocity: f32,
    start: f32,
    target: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    running: bool,
    _value: std::marker::PhantomData<T>,
}

impl<T: SpringScalar> Animatable<T> {
    pub fn new(initial: T) -> Self {
        let initial = initial.to_f32();
        Self {
            current: initial,
            velocity: 0.0,
            start: initial,
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            running: false,
            _value: std::marker::PhantomData,
        }
    }

    pub fn value(&self) -> T {
        T::from_f32(self.current)
    }

    pub fn target(&self) -> T {
        T::from_f32(self.target)
    }

    /// Current velocity in units per second (always 0 for tweens).
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn animation_type(&self) -> AnimationType {
        self.animation_type
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Animate from the current value towards `target`.
    pub fn animate_to(&mut self, target: T, animation: AnimationType) {
        let target = target.to_f32();
        if !self.running && (self.current - target).abs() < f32::EPSILON {
            self.current = target;
            self.target = target;
            return;
        }
        if !self.running {
            self.last_frame_nanos = None;
        }
        if matches!(animation, AnimationType::Tween(_)) {
            self.velocity = 0.0;
        }
        self.start = self.current;
        self.target = target;
        self.animation_type = animation;
        self.start_time_nanos = None;
        self.running = true;
    }

    /// Jump to `target` without animating.
    pub fn snap_to(&mut self, target: T) {
        let target = target.to_f32();
        self.current = target;
        self.start = target;
        self.target = target;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = false;
    }

    /// Advance to `frame_time_nanos`. Returns `true` while another frame is
    /// needed. The first frame after a retarget only records the time base.
    pub fn tick(&mut self, frame_time_nanos: u64) -> bool {
        if !self.running {
            return false;
        }
        match self.animation_type {
            AnimationType::Tween(spec) => self.tick_tween(spec, frame_time_nanos),
            AnimationType::Spring(spec) => self.tick_spring(spec, frame_time_nanos),
        }
        self.running
    }

    fn tick_tween(&mut self, spec: AnimationSpec, frame_time_nanos: u64) {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        self.last_frame_nanos = Some(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        let delay = spec.delay_millis * 1_000_000;
        if elapsed < delay {
            return;
        }
        let duration = (spec.duration_millis * 1_000_000).max(1);
        let linear = ((elapsed - delay) as f32 / duration as f32).clamp(0.0, 1.0);
        self.current = self.start.lerp(&self.target, spec.easing.transform(linear));
        if linear >= 1.0 {
            self.finish();
        }
    }

    fn tick_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) {
        let previous = self.last_frame_nanos.replace(frame_time_nanos);
        self.start_time_nanos.get_or_insert(frame_time_nanos);
        let Some(previous) = previous else {
            return;
        };
        let dt = frame_time_nanos.saturating_sub(previous) as f32 / 1_000_000_000.0;
        if dt <= 0.0 {
            return;
        }

        let damping = spec.damping();
        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = SPRING_TIMESTEP.min(dt - simulated);
            let displacement = self.current - self.target;
            let force = -spec.stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.current += self.velocity * step;
            simulated += step;
        }

        let at_rest = self.velocity.abs() < spec.velocity_threshold;
        let near_target = (self.current - self.target).abs() < spec.position_threshold;
        if at_rest && near_target {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.current = self.target;
        self.start = self.target;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = false;
        log::trace!("animation settled at {}", self.target);
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
