use crate::clock::Clock;
use crate::render::Painter;
use microwave_core::Illustration;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub illo: Rc<RefCell<Illustration>>,
    pub painter: Painter,
    pub clock: Clock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        let commands = self.illo.borrow_mut().frame(now);
        self.painter.paint(&commands);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Tick) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
