use crate::clock::Clock;
use crate::constants::PANEL_ID;
use crate::input::{is_form_control, key_action, KeyAction};
use crate::panel::PanelWidgets;
use microwave_core::{Field, Illustration};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    illo: &Rc<RefCell<Illustration>>,
    widgets: &PanelWidgets,
    clock: Clock,
) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let from_panel = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .is_some_and(|el| {
            is_form_control(&el.tag_name())
                || matches!(el.closest(&format!("#{}", PANEL_ID)), Ok(Some(_)))
        });
    if from_panel {
        return;
    }
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    let now = clock.now_ms();
    let result = match action {
        KeyAction::ToggleSpin => illo.borrow_mut().toggle(Field::Spin, now).map(|_| ()),
        KeyAction::ToggleReverse => illo.borrow_mut().toggle(Field::Reverse, now).map(|_| ()),
        KeyAction::Reset => {
            illo.borrow_mut().reset(now);
            log::info!("[keys] reset to defaults");
            Ok(())
        }
    };
    if let Err(e) = result {
        log::warn!("[keys] {}", e);
    }
    widgets.sync(&illo.borrow());
    ev.prevent_default();
}

pub fn wire_global_keydown(
    illo: Rc<RefCell<Illustration>>,
    widgets: Rc<PanelWidgets>,
    clock: Clock,
) {
    if let Some(window) = web::window() {
        crate::dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &illo, &widgets, clock);
        });
    }
}
