//! Model behind the parameter panel.
//!
//! Each `Field` is a named getter/setter pair over the `ParameterStore` with a
//! declared range. Edits arrive in two tiers: `Live` on every input tick and
//! `Commit` once the interaction ends. Most fields apply on either tier; the
//! spin duration is staged, showing live edits in the panel but only touching
//! the store (and the spin phase) on commit.

use crate::constants::*;
use crate::state::ParameterStore;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Spin,
    Reverse,
    Width,
    Height,
    Depth,
    Stroke,
    DoorRotation,
    Zoom,
    Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Toggle,
    Range { min: f64, max: f64, step: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTier {
    /// Fired on every input tick while the user is editing.
    Live,
    /// Fired once when the edit is finished.
    Commit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelEvent {
    pub field: Field,
    pub value: FieldValue,
    pub tier: EditTier,
}

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("unknown panel field `{0}`")]
    UnknownField(String),
    #[error("field `{field}` expects a {expected} value")]
    WrongKind {
        field: &'static str,
        expected: &'static str,
    },
    #[error("cannot read `{raw}` as a value for `{field}`")]
    Parse { field: &'static str, raw: String },
    #[error("field `{0}` received a non-finite number")]
    NonFinite(&'static str),
}

fn range((min, max, step): (f64, f64, f64)) -> FieldKind {
    FieldKind::Range { min, max, step }
}

impl Field {
    /// Panel order, top to bottom.
    pub const ALL: [Field; 9] = [
        Field::Spin,
        Field::Reverse,
        Field::Width,
        Field::Height,
        Field::Depth,
        Field::Stroke,
        Field::DoorRotation,
        Field::Zoom,
        Field::Duration,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Spin => "spin",
            Field::Reverse => "reverse",
            Field::Width => "width",
            Field::Height => "height",
            Field::Depth => "depth",
            Field::Stroke => "stroke",
            Field::DoorRotation => "door",
            Field::Zoom => "zoom",
            Field::Duration => "duration",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Spin => "spin",
            Field::Reverse => "reverse spin",
            Field::Width => "width",
            Field::Height => "height",
            Field::Depth => "depth",
            Field::Stroke => "stroke",
            Field::DoorRotation => "door rotation",
            Field::Zoom => "zoom",
            Field::Duration => "duration (ms)",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Spin | Field::Reverse => FieldKind::Toggle,
            Field::Width | Field::Height | Field::Depth => range(DIMENSION_RANGE),
            Field::Stroke => range(STROKE_RANGE),
            Field::DoorRotation => range(DOOR_RANGE),
            Field::Zoom => range(ZOOM_RANGE),
            Field::Duration => range(DURATION_RANGE),
        }
    }

    pub fn is_staged(self) -> bool {
        matches!(self, Field::Duration)
    }

    pub fn get(self, store: &ParameterStore) -> FieldValue {
        match self {
            Field::Spin => FieldValue::Bool(store.spin.enabled),
            Field::Reverse => FieldValue::Bool(store.spin.reversed),
            Field::Width => FieldValue::Number(store.dimensions.width),
            Field::Height => FieldValue::Number(store.dimensions.height),
            Field::Depth => FieldValue::Number(store.dimensions.depth),
            Field::Stroke => FieldValue::Number(store.dimensions.stroke),
            Field::DoorRotation => FieldValue::Number(store.door.target),
            Field::Zoom => FieldValue::Number(store.zoom.target),
            Field::Duration => FieldValue::Number(store.spin.duration_ms),
        }
    }

    /// Check the value kind, then clamp and snap numbers onto the field's grid.
    pub fn sanitize(self, value: FieldValue) -> Result<FieldValue, FieldError> {
        match (self.kind(), value) {
            (FieldKind::Toggle, FieldValue::Bool(_)) => Ok(value),
            (FieldKind::Toggle, FieldValue::Number(_)) => Err(FieldError::WrongKind {
                field: self.key(),
                expected: "boolean",
            }),
            (FieldKind::Range { .. }, FieldValue::Bool(_)) => Err(FieldError::WrongKind {
                field: self.key(),
                expected: "numeric",
            }),
            (FieldKind::Range { min, max, step }, FieldValue::Number(v)) => {
                if !v.is_finite() {
                    return Err(FieldError::NonFinite(self.key()));
                }
                Ok(FieldValue::Number(snap_to_step(v, min, max, step)))
            }
        }
    }

    /// Parse the raw string a widget reports (`"true"`, `"120"`, ...).
    pub fn parse(self, raw: &str) -> Result<FieldValue, FieldError> {
        let raw = raw.trim();
        let parsed = match self.kind() {
            FieldKind::Toggle => raw.parse::<bool>().ok().map(FieldValue::Bool),
            FieldKind::Range { .. } => raw.parse::<f64>().ok().map(FieldValue::Number),
        };
        parsed.ok_or_else(|| FieldError::Parse {
            field: self.key(),
            raw: raw.to_string(),
        })
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) if n.fract() == 0.0 => write!(f, "{n:.0}"),
            FieldValue::Number(n) => write!(f, "{n:.2}"),
        }
    }
}

pub fn snap_to_step(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let clamped = value.clamp(min, max);
    if step <= 0.0 {
        return clamped;
    }
    let steps = ((clamped - min) / step).round();
    // re-round to the step's precision so 0.1 + 45 * 0.01 lands on 0.55
    let snapped = min + steps * step;
    let scale = (1.0 / step).max(1.0);
    ((snapped * scale).round() / scale).clamp(min, max)
}

/// What an edit changed, so the caller knows which follow-ups to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditEffect {
    pub geometry_changed: bool,
    pub rephased: bool,
    /// The value is held in the panel and not yet applied to the store.
    pub staged: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Panel {
    staged_duration: Option<f64>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value the widget for `field` should show: the staged edit if one is
    /// pending, the store value otherwise.
    pub fn display_value(&self, field: Field, store: &ParameterStore) -> FieldValue {
        match (field, self.staged_duration) {
            (Field::Duration, Some(ms)) => FieldValue::Number(ms),
            _ => field.get(store),
        }
    }

    pub fn has_staged(&self) -> bool {
        self.staged_duration.is_some()
    }

    pub fn clear_staged(&mut self) {
        self.staged_duration = None;
    }

    pub fn apply(
        &mut self,
        store: &mut ParameterStore,
        event: PanelEvent,
        now_ms: f64,
    ) -> Result<EditEffect, FieldError> {
        let value = event.field.sanitize(event.value)?;
        let mut effect = EditEffect::default();
        match (event.field, value) {
            (Field::Spin, FieldValue::Bool(on)) => {
                store.set_spinning(on, now_ms);
                effect.rephased = true;
            }
            (Field::Reverse, FieldValue::Bool(on)) => {
                store.set_reversed(on, now_ms);
                effect.rephased = true;
            }
            (Field::Width, FieldValue::Number(v)) => {
                effect.geometry_changed = replace(&mut store.dimensions.width, v);
            }
            (Field::Height, FieldValue::Number(v)) => {
                effect.geometry_changed = replace(&mut store.dimensions.height, v);
            }
            (Field::Depth, FieldValue::Number(v)) => {
                effect.geometry_changed = replace(&mut store.dimensions.depth, v);
            }
            (Field::Stroke, FieldValue::Number(v)) => {
                effect.geometry_changed = replace(&mut store.dimensions.stroke, v);
            }
            (Field::DoorRotation, FieldValue::Number(v)) => store.set_door(v),
            (Field::Zoom, FieldValue::Number(v)) => store.set_zoom(v),
            (Field::Duration, FieldValue::Number(ms)) => match event.tier {
                EditTier::Live => {
                    self.staged_duration = Some(ms);
                    effect.staged = true;
                }
                EditTier::Commit => {
                    self.staged_duration = None;
                    store.set_duration_ms(ms, now_ms);
                    effect.rephased = true;
                }
            },
            // sanitize() already rejected mismatched kinds
            _ => {}
        }
        Ok(effect)
    }
}

fn replace(slot: &mut f64, value: f64) -> bool {
    let changed = *slot != value;
    *slot = value;
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_clamps_and_quantizes() {
        assert_eq!(snap_to_step(1234.0, 100.0, 400.0, 10.0), 400.0);
        assert_eq!(snap_to_step(123.0, 100.0, 400.0, 10.0), 120.0);
        assert_eq!(snap_to_step(0.554, 0.1, 1.0, 0.01), 0.55);
        assert_eq!(snap_to_step(-3.0, 0.0, 20.0, 1.0), 0.0);
    }

    #[test]
    fn field_keys_round_trip_through_from_str() {
        for f in Field::ALL {
            assert_eq!(f.key().parse::<Field>(), Ok(f));
        }
        assert!(matches!(
            "volume".parse::<Field>(),
            Err(FieldError::UnknownField(_))
        ));
    }

    #[test]
    fn values_display_like_the_widgets() {
        assert_eq!(FieldValue::Number(200.0).to_string(), "200");
        assert_eq!(FieldValue::Number(0.25).to_string(), "0.25");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
    }
}
