use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

pub fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("<{}> has an unexpected element type", tag))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(
            rect.width(),
            rect.height(),
            w.device_pixel_ratio(),
            MAX_DEVICE_PIXEL_RATIO,
        );
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}
