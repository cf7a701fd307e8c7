//! Parameter store shared by the panel, the pointer handlers and the frame loop.
//!
//! Everything here is plain data owned by one `ParameterStore`. The web
//! frontend keeps it behind an `Rc<RefCell<_>>` on the UI thread; the core
//! never reaches for globals.

use crate::constants::*;

/// Rotation angles in radians about the x and y axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
}

impl Pose {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A value easing toward its target by a fixed share of the gap per step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damped {
    pub current: f64,
    pub target: f64,
}

impl Damped {
    pub const fn new(value: f64) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Non-finite targets are ignored so `current` can never turn into NaN.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn snap(&mut self, value: f64) {
        if value.is_finite() {
            self.current = value;
            self.target = value;
        }
    }

    /// One easing step; returns the new `current`.
    #[inline]
    pub fn step(&mut self, factor: f64) -> f64 {
        self.current += (self.target - self.current) * factor;
        self.current
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedPose {
    pub current: Pose,
    pub target: Pose,
}

impl DampedPose {
    pub const fn new(pose: Pose) -> Self {
        Self {
            current: pose,
            target: pose,
        }
    }

    pub fn set_target(&mut self, target: Pose) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn snap(&mut self, pose: Pose) {
        if pose.is_finite() {
            self.current = pose;
            self.target = pose;
        }
    }

    #[inline]
    pub fn step(&mut self, factor: f64) -> Pose {
        self.current.x += (self.target.x - self.current.x) * factor;
        self.current.y += (self.target.y - self.current.y) * factor;
        self.current
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinConfig {
    pub enabled: bool,
    pub reversed: bool,
    pub duration_ms: f64,
}

impl SpinConfig {
    /// +1 for forward play, -1 when reversed.
    #[inline]
    pub fn direction(&self) -> f64 {
        if self.reversed {
            -1.0
        } else {
            1.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub stroke: f64,
}

/// Values a store starts with and returns to on `reset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Defaults {
    pub dimensions: Dimensions,
    pub rotation: Pose,
    pub door: f64,
    pub zoom: f64,
    pub spin: SpinConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            dimensions: Dimensions {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
                depth: DEFAULT_DEPTH,
                stroke: DEFAULT_STROKE,
            },
            rotation: Pose::new(DEFAULT_ROTATION, DEFAULT_ROTATION),
            door: DEFAULT_DOOR_ROTATION,
            zoom: DEFAULT_ZOOM,
            spin: SpinConfig {
                enabled: DEFAULT_IS_SPINNING,
                reversed: DEFAULT_IS_REVERSE,
                duration_ms: DEFAULT_DURATION_MS,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParameterStore {
    pub rotation: DampedPose,
    pub zoom: Damped,
    pub door: Damped,
    pub spin: SpinConfig,
    pub dimensions: Dimensions,
    pub is_dragging: bool,
    /// Epoch the automatic spin angle is measured from, in host milliseconds.
    pub anchor_ms: f64,
    defaults: Defaults,
}

impl ParameterStore {
    pub fn new(defaults: Defaults, now_ms: f64) -> Self {
        let mut spin = defaults.spin;
        spin.duration_ms = spin.duration_ms.max(DURATION_RANGE.0);
        Self {
            rotation: DampedPose::new(defaults.rotation),
            zoom: Damped::new(defaults.zoom),
            door: Damped::new(defaults.door),
            spin,
            dimensions: defaults.dimensions,
            is_dragging: false,
            anchor_ms: now_ms,
            defaults,
        }
    }

    /// Restore every panel-facing value and restart the spin from `now_ms`.
    ///
    /// The pose snaps back immediately; zoom and door only get new targets and
    /// ease there over the following frames. An in-progress drag is left alone.
    pub fn reset(&mut self, now_ms: f64) {
        let d = self.defaults;
        self.anchor_ms = now_ms;
        self.rotation.snap(d.rotation);
        self.zoom.set_target(d.zoom);
        self.door.set_target(d.door);
        self.spin = d.spin;
        self.spin.duration_ms = self.spin.duration_ms.max(DURATION_RANGE.0);
        self.dimensions = d.dimensions;
        log::debug!("[store] reset at {:.0}ms", now_ms);
    }

    pub fn set_spinning(&mut self, enabled: bool, now_ms: f64) {
        self.advance_target(now_ms);
        self.spin.enabled = enabled;
        self.resync_anchor(now_ms);
    }

    pub fn set_reversed(&mut self, reversed: bool, now_ms: f64) {
        self.advance_target(now_ms);
        self.spin.reversed = reversed;
        self.resync_anchor(now_ms);
    }

    /// Change the turn duration while keeping the current angle; the floor of
    /// the duration range keeps the spin maths away from a zero divisor.
    pub fn set_duration_ms(&mut self, duration_ms: f64, now_ms: f64) {
        if !duration_ms.is_finite() {
            return;
        }
        self.advance_target(now_ms);
        self.spin.duration_ms = duration_ms.max(DURATION_RANGE.0);
        self.resync_anchor(now_ms);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom.set_target(zoom.clamp(ZOOM_RANGE.0, ZOOM_RANGE.1));
    }

    pub fn set_door(&mut self, door: f64) {
        self.door.set_target(door.clamp(DOOR_RANGE.0, DOOR_RANGE.1));
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(Defaults::default(), 0.0)
    }
}
