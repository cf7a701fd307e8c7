// DOM hooks and presentation constants for the web frontend.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "microwave-canvas";
pub const PANEL_ID: &str = "panel";

pub const PANEL_TITLE: &str = "Pseudo 3D Microwave";
pub const RESET_LABEL: &str = "reset";

// Canvas styling
pub const LINE_JOIN: &str = "round";
pub const LINE_CAP: &str = "round";

// Cap on devicePixelRatio for the canvas backing store
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 3.0;

// Keyboard shortcuts
pub const KEY_TOGGLE_SPIN: &str = " ";
pub const KEY_TOGGLE_REVERSE: [&str; 2] = ["r", "R"];
pub const KEY_RESET: &str = "0";
