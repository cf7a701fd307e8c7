// Host-side tests for tuning constants and their relationships.

use microwave_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factor_is_a_proper_fraction() {
    assert!(EASING_FACTOR > 0.0 && EASING_FACTOR < 1.0);
    assert!(MAX_ZOOM > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_sit_inside_panel_ranges() {
    let within = |v: f64, (min, max, _): (f64, f64, f64)| v >= min && v <= max;
    assert!(within(DEFAULT_WIDTH, DIMENSION_RANGE));
    assert!(within(DEFAULT_HEIGHT, DIMENSION_RANGE));
    assert!(within(DEFAULT_DEPTH, DIMENSION_RANGE));
    assert!(within(DEFAULT_STROKE, STROKE_RANGE));
    assert!(within(DEFAULT_DOOR_ROTATION, DOOR_RANGE));
    assert!(within(DEFAULT_ZOOM, ZOOM_RANGE));
    assert!(within(DEFAULT_DURATION_MS, DURATION_RANGE));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn duration_floor_keeps_spin_divisor_positive() {
    assert!(DURATION_RANGE.0 >= 1_000.0);
    assert!(DURATION_RANGE.1 > DURATION_RANGE.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_ratios_leave_room_for_the_door() {
    assert!(CONTROL_WIDTH_RATIO > 0.0 && CONTROL_WIDTH_RATIO < 1.0);
    assert!(GLASS_WIDTH_RATIO < 1.0);
    assert!(GLASS_HEIGHT_RATIO < 1.0);
    // buttons sit inside the control panel's half height
    assert!(BUTTON_OFFSET_RATIO < 0.5);
    assert!(BUTTON_DIAMETER_RATIO < 1.0);
}
