use crate::clock::Clock;
use crate::dom;
use microwave_core::Illustration;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the canvas backing store matched to its CSS size * devicePixelRatio.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move |_ev: web::Event| {
            dom::sync_canvas_backing_size(&canvas);
        });
    }
}

/// Frames stop while the page is hidden; resume the spin from where it was
/// left once the page is visible again.
pub fn wire_visibility(document: &web::Document, illo: Rc<RefCell<Illustration>>, clock: Clock) {
    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move |_ev: web::Event| {
        if doc.hidden() {
            return;
        }
        illo.borrow_mut().on_visible(clock.now_ms());
        log::debug!("[page] visible again, spin resynced");
    });
}

/// Run `boot` once the page has loaded, immediately if that already happened.
pub fn on_load(document: &web::Document, boot: impl FnOnce() + 'static) {
    if document.ready_state() == "complete" {
        boot();
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let mut boot = Some(boot);
    dom::add_listener(&window, "load", move |_ev: web::Event| {
        if let Some(f) = boot.take() {
            f();
        }
    });
}
