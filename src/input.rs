use crate::constants::{KEY_RESET, KEY_TOGGLE_REVERSE, KEY_TOGGLE_SPIN};
use glam::DVec2;
use web_sys as web;

/// Keyboard shortcut resolved from a `KeyboardEvent::key` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleSpin,
    ToggleReverse,
    Reset,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    if key == KEY_TOGGLE_SPIN {
        Some(KeyAction::ToggleSpin)
    } else if KEY_TOGGLE_REVERSE.contains(&key) {
        Some(KeyAction::ToggleReverse)
    } else if key == KEY_RESET {
        Some(KeyAction::Reset)
    } else {
        None
    }
}

/// Focused form controls keep their own keys (space on a checkbox or button).
#[inline]
pub fn is_form_control(tag_name: &str) -> bool {
    ["INPUT", "BUTTON", "SELECT", "TEXTAREA", "LABEL"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag_name))
}

/// Pixels of pointer travel that make one full drag turn: the shorter side
/// of the canvas as laid out on the page.
#[inline]
pub fn drag_display_size(css_width: f64, css_height: f64) -> f64 {
    css_width.min(css_height).max(1.0)
}

/// Backing-store size for a canvas laid out at `css` pixels.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, max_dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 {
        dpr.min(max_dpr)
    } else {
        1.0
    };
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

#[inline]
pub fn canvas_drag_size(canvas: &web::HtmlCanvasElement) -> f64 {
    let rect = canvas.get_bounding_client_rect();
    drag_display_size(rect.width(), rect.height())
}
