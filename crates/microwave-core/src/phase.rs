//! Epoch bookkeeping for the automatic spin.
//!
//! The spin angle is never integrated frame by frame; it is always derived
//! from `now - anchor`. Whenever direction, duration or ownership of the
//! target changes, the anchor is moved so that the derived angle at that
//! instant equals the angle currently targeted.

use crate::constants::TURN;
use crate::state::ParameterStore;

/// Anchor that makes `spin_angle(now - anchor, duration) * direction` equal
/// `angle` at `now_ms`.
#[inline]
pub fn anchor_for_angle(angle: f64, duration_ms: f64, direction: f64, now_ms: f64) -> f64 {
    let offset = angle / TURN * duration_ms;
    now_ms - direction * offset
}

impl ParameterStore {
    /// Move the anchor so the spin resumes from the targeted y angle.
    pub fn resync_anchor(&mut self, now_ms: f64) {
        let angle = self.rotation.target.y;
        self.anchor_ms = anchor_for_angle(
            angle,
            self.spin.duration_ms,
            self.spin.direction(),
            now_ms,
        );
        log::debug!(
            "[phase] anchor={:.1}ms angle={:.4} duration={:.0}ms reversed={}",
            self.anchor_ms,
            angle,
            self.spin.duration_ms,
            self.spin.reversed
        );
    }
}
