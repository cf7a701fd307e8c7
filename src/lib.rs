#![cfg(target_arch = "wasm32")]
use microwave_core::{Defaults, Illustration};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod clock;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;

use clock::Clock;
use constants::{CANVAS_ID, PANEL_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("microwave-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let panel_root = document
        .get_element_by_id(PANEL_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", PANEL_ID))?;

    let painter = render::Painter::new(&canvas)?;
    let clock = Clock::new();
    let illo = Rc::new(RefCell::new(Illustration::new(
        Defaults::default(),
        clock.now_ms(),
    )));

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::page::wire_canvas_resize(&canvas);

    let widgets = Rc::new(panel::PanelWidgets::build(&document, &panel_root)?);
    widgets.sync(&illo.borrow());
    panel::wire(&widgets, &illo, clock);

    events::pointer::wire_pointer_handlers(events::pointer::PointerWiring {
        canvas: canvas.clone(),
        illo: illo.clone(),
        clock,
    });
    events::keyboard::wire_global_keydown(illo.clone(), widgets.clone(), clock);
    events::page::wire_visibility(&document, illo.clone(), clock);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        illo: illo.clone(),
        painter,
        clock,
    }));
    events::page::on_load(&document, move || {
        illo.borrow_mut().resize();
        dom::sync_canvas_backing_size(&canvas);
        log::info!("[page] loaded, starting frame loop");
        frame::start_loop(frame_ctx);
    });

    Ok(())
}
