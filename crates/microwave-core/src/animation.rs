use crate::constants::{EASING_FACTOR, MAX_ZOOM, TURN};
use crate::state::{ParameterStore, Pose};
use std::f64::consts::FRAC_PI_2;

/// Transform values for one frame, ready to be written into the scene graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub rotation: Pose,
    /// Rendered zoom (zoom fraction scaled by `MAX_ZOOM`).
    pub zoom: f64,
    /// Door hinge rotation in radians.
    pub door_angle: f64,
}

/// Unsigned spin angle after `elapsed_ms` of a turn lasting `duration_ms`.
#[inline]
pub fn spin_angle(elapsed_ms: f64, duration_ms: f64) -> f64 {
    elapsed_ms / duration_ms * TURN
}

impl ParameterStore {
    /// Pose the automatic spin wants at `now_ms`, or `None` while the spin is
    /// off or a drag owns the target.
    pub fn auto_target(&self, now_ms: f64) -> Option<Pose> {
        if !self.spin.enabled || self.is_dragging {
            return None;
        }
        let angle = spin_angle(now_ms - self.anchor_ms, self.spin.duration_ms);
        let dir = self.spin.direction();
        Some(Pose::new(dir * angle.sin(), dir * angle))
    }

    pub(crate) fn advance_target(&mut self, now_ms: f64) {
        if let Some(target) = self.auto_target(now_ms) {
            self.rotation.set_target(target);
        }
    }

    /// Run one frame of the animation: refresh the automatic target, then
    /// ease pose, zoom and door toward their targets.
    ///
    /// Easing is per frame rather than per second, so the visible speed of the
    /// catch-up follows the display refresh rate.
    pub fn step(&mut self, now_ms: f64) -> FrameOutput {
        self.advance_target(now_ms);
        let rotation = self.rotation.step(EASING_FACTOR);
        let zoom = self.zoom.step(EASING_FACTOR);
        let door = self.door.step(EASING_FACTOR);
        FrameOutput {
            rotation,
            zoom: zoom * MAX_ZOOM,
            door_angle: door * FRAC_PI_2,
        }
    }
}
