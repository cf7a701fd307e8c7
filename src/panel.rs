//! DOM widgets for the parameter panel.
//!
//! One row per `Field`: a checkbox for toggles, a range slider plus read-out
//! for numbers. Sliders report `input` events as live edits and `change`
//! events as commits; checkboxes only commit.

use crate::clock::Clock;
use crate::constants::{PANEL_TITLE, RESET_LABEL};
use crate::dom;
use microwave_core::{EditTier, Field, FieldKind, FieldValue, Illustration, PanelEvent};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct FieldWidget {
    field: Field,
    input: web::HtmlInputElement,
    readout: Option<web::HtmlElement>,
}

impl FieldWidget {
    fn read(&self) -> Result<FieldValue, microwave_core::FieldError> {
        match self.field.kind() {
            FieldKind::Toggle => Ok(FieldValue::Bool(self.input.checked())),
            FieldKind::Range { .. } => self.field.parse(&self.input.value()),
        }
    }

    fn show(&self, value: FieldValue) {
        match value {
            FieldValue::Bool(on) => self.input.set_checked(on),
            FieldValue::Number(n) => self.input.set_value(&n.to_string()),
        }
        if let Some(out) = &self.readout {
            out.set_text_content(Some(&value.to_string()));
        }
    }
}

pub struct PanelWidgets {
    rows: Vec<FieldWidget>,
    reset: web::HtmlElement,
}

impl PanelWidgets {
    pub fn build(document: &web::Document, container: &web::Element) -> anyhow::Result<Self> {
        let heading: web::HtmlElement = dom::create(document, "h2")?;
        heading.set_text_content(Some(PANEL_TITLE));
        append(container, &heading)?;

        let mut rows = Vec::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            let row: web::HtmlElement = dom::create(document, "label")?;
            row.set_class_name("panel-row");
            let name: web::HtmlElement = dom::create(document, "span")?;
            name.set_text_content(Some(field.label()));
            append(&row, &name)?;

            let input: web::HtmlInputElement = dom::create(document, "input")?;
            input.set_name(field.key());
            let readout = match field.kind() {
                FieldKind::Toggle => {
                    input.set_type("checkbox");
                    append(&row, &input)?;
                    None
                }
                FieldKind::Range { min, max, step } => {
                    input.set_type("range");
                    input.set_min(&min.to_string());
                    input.set_max(&max.to_string());
                    input.set_step(&step.to_string());
                    append(&row, &input)?;
                    let out: web::HtmlElement = dom::create(document, "output")?;
                    append(&row, &out)?;
                    Some(out)
                }
            };
            append(container, &row)?;
            rows.push(FieldWidget {
                field,
                input,
                readout,
            });
        }

        let reset: web::HtmlElement = dom::create(document, "button")?;
        reset.set_text_content(Some(RESET_LABEL));
        append(container, &reset)?;

        Ok(Self { rows, reset })
    }

    /// Mirror the store (and any staged edit) into every widget.
    pub fn sync(&self, illo: &Illustration) {
        for row in &self.rows {
            row.show(illo.panel().display_value(row.field, illo.store()));
        }
    }

    fn sync_one(&self, index: usize, illo: &Illustration) {
        if let Some(row) = self.rows.get(index) {
            row.show(illo.panel().display_value(row.field, illo.store()));
        }
    }
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

/// Hook every widget up to the illustration.
pub fn wire(widgets: &Rc<PanelWidgets>, illo: &Rc<RefCell<Illustration>>, clock: Clock) {
    for (index, row) in widgets.rows.iter().enumerate() {
        let tiers: &[(&str, EditTier)] = match row.field.kind() {
            FieldKind::Toggle => &[("change", EditTier::Commit)],
            FieldKind::Range { .. } => &[("input", EditTier::Live), ("change", EditTier::Commit)],
        };
        for &(event, tier) in tiers {
            let widgets = widgets.clone();
            let illo = illo.clone();
            dom::add_listener(&row.input, event, move |_ev: web::Event| {
                on_edit(&widgets, &illo, clock, index, tier);
            });
        }
    }

    let widgets_reset = widgets.clone();
    let illo_reset = illo.clone();
    dom::add_listener(&widgets.reset, "click", move |_ev: web::Event| {
        illo_reset.borrow_mut().reset(clock.now_ms());
        widgets_reset.sync(&illo_reset.borrow());
        log::info!("[panel] reset to defaults");
    });
}

fn on_edit(
    widgets: &PanelWidgets,
    illo: &Rc<RefCell<Illustration>>,
    clock: Clock,
    index: usize,
    tier: EditTier,
) {
    let Some(row) = widgets.rows.get(index) else {
        return;
    };
    let result = row.read().and_then(|value| {
        illo.borrow_mut().edit(
            PanelEvent {
                field: row.field,
                value,
                tier,
            },
            clock.now_ms(),
        )
    });
    if let Err(e) = result {
        log::warn!("[panel] {}", e);
    }
    widgets.sync_one(index, &illo.borrow());
}
