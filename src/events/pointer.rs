use crate::clock::Clock;
use crate::input;
use microwave_core::Illustration;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub illo: Rc<RefCell<Illustration>>,
    pub clock: Clock,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    crate::dom::add_listener(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        let size = input::canvas_drag_size(&w.canvas);
        w.illo.borrow_mut().pointer_down(input::pointer_client_px(&ev), size);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    if let Some(window) = web::window() {
        crate::dom::add_listener(&window, "pointermove", move |ev: web::PointerEvent| {
            if w.illo.borrow_mut().pointer_move(input::pointer_client_px(&ev)) {
                ev.prevent_default();
            }
        });
    }
}

fn wire_pointerup(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        crate::dom::add_listener(&window, event, move |_ev: web::PointerEvent| {
            w.illo.borrow_mut().pointer_up(w.clock.now_ms());
        });
    }
}
