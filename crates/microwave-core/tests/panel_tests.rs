// Host-side tests for the panel model and its two edit tiers.

use microwave_core::{
    Defaults, EditTier, Field, FieldError, FieldValue, Illustration, Panel, PanelEvent,
    ParameterStore,
};

const NOW: f64 = 50_000.0;

fn live(field: Field, value: FieldValue) -> PanelEvent {
    PanelEvent {
        field,
        value,
        tier: EditTier::Live,
    }
}

fn commit(field: Field, value: FieldValue) -> PanelEvent {
    PanelEvent {
        field,
        value,
        tier: EditTier::Commit,
    }
}

#[test]
fn staged_duration_waits_for_commit() {
    let mut store = ParameterStore::new(Defaults::default(), 0.0);
    let mut panel = Panel::new();
    let anchor = store.anchor_ms;

    let effect = panel
        .apply(&mut store, live(Field::Duration, FieldValue::Number(4_000.0)), NOW)
        .unwrap();
    assert!(effect.staged);
    assert!(!effect.rephased);
    assert_eq!(store.spin.duration_ms, 10_000.0);
    assert_eq!(store.anchor_ms, anchor);
    assert_eq!(
        panel.display_value(Field::Duration, &store),
        FieldValue::Number(4_000.0)
    );

    let effect = panel
        .apply(&mut store, commit(Field::Duration, FieldValue::Number(4_000.0)), NOW)
        .unwrap();
    assert!(effect.rephased);
    assert!(!panel.has_staged());
    assert_eq!(store.spin.duration_ms, 4_000.0);
}

#[test]
fn dimensions_apply_live_and_report_geometry_change() {
    let mut store = ParameterStore::new(Defaults::default(), 0.0);
    let mut panel = Panel::new();

    let effect = panel
        .apply(&mut store, live(Field::Width, FieldValue::Number(263.0)), NOW)
        .unwrap();
    assert!(effect.geometry_changed);
    assert_eq!(store.dimensions.width, 260.0);

    let again = panel
        .apply(&mut store, commit(Field::Width, FieldValue::Number(260.0)), NOW)
        .unwrap();
    assert!(!again.geometry_changed);
}

#[test]
fn out_of_range_values_are_clamped() {
    let mut store = ParameterStore::new(Defaults::default(), 0.0);
    let mut panel = Panel::new();
    for (field, raw, expected) in [
        (Field::Height, 9_000.0, 400.0),
        (Field::Depth, 3.0, 100.0),
        (Field::Stroke, -4.0, 0.0),
        (Field::Zoom, 0.0, 0.1),
        (Field::DoorRotation, 1.7, 1.0),
    ] {
        panel
            .apply(&mut store, live(field, FieldValue::Number(raw)), NOW)
            .unwrap();
        assert_eq!(field.get(&store), FieldValue::Number(expected), "{field}");
    }

    panel
        .apply(&mut store, commit(Field::Duration, FieldValue::Number(10.0)), NOW)
        .unwrap();
    assert_eq!(store.spin.duration_ms, 1_000.0);
}

#[test]
fn wrong_kinds_are_rejected() {
    let mut store = ParameterStore::new(Defaults::default(), 0.0);
    let mut panel = Panel::new();
    let err = panel
        .apply(&mut store, commit(Field::Spin, FieldValue::Number(1.0)), NOW)
        .unwrap_err();
    assert!(matches!(err, FieldError::WrongKind { field: "spin", .. }));

    let err = panel
        .apply(&mut store, live(Field::Zoom, FieldValue::Number(f64::NAN)), NOW)
        .unwrap_err();
    assert_eq!(err, FieldError::NonFinite("zoom"));
}

#[test]
fn widget_strings_parse_per_field_kind() {
    assert_eq!(Field::Spin.parse("true"), Ok(FieldValue::Bool(true)));
    assert_eq!(Field::Width.parse(" 240 "), Ok(FieldValue::Number(240.0)));
    assert!(matches!(
        Field::Width.parse("wide"),
        Err(FieldError::Parse { field: "width", .. })
    ));
}

#[test]
fn toggles_rephase_the_spin() {
    let mut illo = Illustration::new(Defaults::default(), 0.0);
    illo.frame(2_000.0);
    let effect = illo.toggle(Field::Reverse, 2_000.0).unwrap();
    assert!(effect.rephased);
    assert!(illo.store().spin.reversed);

    assert!(illo.toggle(Field::Zoom, 2_000.0).is_err());
}

#[test]
fn reset_drops_staged_edits() {
    let mut illo = Illustration::new(Defaults::default(), 0.0);
    illo.edit(live(Field::Duration, FieldValue::Number(25_000.0)), NOW)
        .unwrap();
    illo.edit(live(Field::Width, FieldValue::Number(380.0)), NOW)
        .unwrap();
    assert!(illo.panel().has_staged());

    illo.reset(NOW + 1.0);
    assert!(!illo.panel().has_staged());
    assert_eq!(
        illo.panel().display_value(Field::Duration, illo.store()),
        FieldValue::Number(10_000.0)
    );
    assert_eq!(illo.store().dimensions.width, 200.0);
    assert_eq!(illo.store().anchor_ms, NOW + 1.0);
}
