use crate::constants::TURN;
use crate::state::{ParameterStore, Pose};
use glam::DVec2;

/// Converts pointer travel into a rotation, one full turn per `display_size`
/// pixels of travel.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragRotator {
    active: bool,
    start_pointer: DVec2,
    start_rotation: Pose,
    display_size: f64,
}

impl DragRotator {
    pub fn begin(&mut self, pointer: DVec2, rotation: Pose, display_size: f64) {
        self.active = true;
        self.start_pointer = pointer;
        self.start_rotation = rotation;
        self.display_size = display_size.max(1.0);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Live rotation for the pointer at `pointer`; `None` when no drag is running.
    pub fn rotation_at(&self, pointer: DVec2) -> Option<Pose> {
        if !self.active {
            return None;
        }
        let moved = (pointer - self.start_pointer) / self.display_size * TURN;
        Some(Pose::new(
            self.start_rotation.x - moved.y,
            self.start_rotation.y - moved.x,
        ))
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

impl ParameterStore {
    pub fn on_drag_start(&mut self) {
        self.is_dragging = true;
        log::trace!("[drag] start");
    }

    /// Mirror the live drag rotation into the target pose.
    pub fn on_drag_move(&mut self, live: Pose) {
        self.is_dragging = true;
        self.rotation.set_target(live);
    }

    /// Hand the target back to the automatic spin, resuming from where the
    /// drag left it.
    pub fn on_drag_end(&mut self, now_ms: f64) {
        self.is_dragging = false;
        self.resync_anchor(now_ms);
        log::trace!("[drag] end");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_display_width_is_one_turn() {
        let mut r = DragRotator::default();
        r.begin(DVec2::new(10.0, 10.0), Pose::new(0.0, 0.0), 400.0);
        let p = r.rotation_at(DVec2::new(410.0, 10.0)).unwrap();
        assert!((p.y + TURN).abs() < 1e-12);
        assert_eq!(p.x, 0.0);
    }

    #[test]
    fn inactive_rotator_reports_nothing() {
        let mut r = DragRotator::default();
        assert!(r.rotation_at(DVec2::ZERO).is_none());
        r.begin(DVec2::ZERO, Pose::default(), 100.0);
        r.end();
        assert!(r.rotation_at(DVec2::ONE).is_none());
    }
}
