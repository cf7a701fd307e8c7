use std::f64::consts::TAU;

// Shared tuning constants used by both the core and the web frontend.

// Startup / reset defaults
pub const DEFAULT_WIDTH: f64 = 200.0;
pub const DEFAULT_HEIGHT: f64 = 100.0;
pub const DEFAULT_DEPTH: f64 = 100.0;
pub const DEFAULT_STROKE: f64 = 10.0;
pub const DEFAULT_ROTATION: f64 = 0.0; // radians, both axes
pub const DEFAULT_DOOR_ROTATION: f64 = 0.25; // fraction of a right angle
pub const DEFAULT_ZOOM: f64 = 0.5; // fraction of MAX_ZOOM
pub const DEFAULT_DURATION_MS: f64 = 10_000.0; // one full turn
pub const DEFAULT_IS_SPINNING: bool = true;
pub const DEFAULT_IS_REVERSE: bool = false;

// Easing
pub const EASING_FACTOR: f64 = 0.1; // share of the remaining distance covered per frame
pub const MAX_ZOOM: f64 = 2.0; // rendered zoom = zoom fraction * MAX_ZOOM
pub const TURN: f64 = TAU;

// Panel ranges: (min, max, step)
pub const DIMENSION_RANGE: (f64, f64, f64) = (100.0, 400.0, 10.0);
pub const STROKE_RANGE: (f64, f64, f64) = (0.0, 20.0, 1.0);
pub const DOOR_RANGE: (f64, f64, f64) = (0.0, 1.0, 0.01);
pub const ZOOM_RANGE: (f64, f64, f64) = (0.1, 1.0, 0.01);
pub const DURATION_RANGE: (f64, f64, f64) = (1_000.0, 30_000.0, 1_000.0);

// Scene layout ratios
pub const CONTROL_WIDTH_RATIO: f64 = 1.0 / 5.0; // of overall width
pub const BUTTON_DIAMETER_RATIO: f64 = 1.0 / 3.0; // of control width
pub const BUTTON_OFFSET_RATIO: f64 = 1.0 / 5.0; // of control height, above and below centre
pub const GLASS_WIDTH_RATIO: f64 = 3.0 / 4.0; // of door width
pub const GLASS_HEIGHT_RATIO: f64 = 2.0 / 3.0; // of overall height
pub const DOOR_REST_ANGLE: f64 = std::f64::consts::PI / 6.0; // before the first frame
pub const ELLIPSE_SEGMENTS: usize = 24;

/// Hex colours fed straight to the canvas as fill/stroke styles.
pub mod palette {
    pub const OUTSIDE_LIGHT: &str = "#ffffff";
    pub const OUTSIDE_DARK: &str = "#dddddf";
    pub const INSIDE_LIGHTEST: &str = "#cccccf";
    pub const INSIDE_LIGHT: &str = "#bbbbbf";
    pub const INSIDE_DARK: &str = "#99999f";
    pub const DARK_DETAILS: &str = "#00000f";
}
