use crate::constants::{LINE_CAP, LINE_JOIN};
use microwave_core::DrawCommand;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Paints projected draw commands onto a 2D canvas, centred, in CSS pixels.
pub struct Painter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("2d context has an unexpected type"))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    pub fn paint(&self, commands: &[DrawCommand]) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        // backing pixels per CSS pixel, as chosen by dom::sync_canvas_backing_size
        let css_width = self.canvas.get_bounding_client_rect().width();
        let dpr = if css_width > 0.0 { w / css_width } else { 1.0 };

        let ctx = &self.ctx;
        _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, w, h);
        _ = ctx.translate(w * 0.5, h * 0.5);
        _ = ctx.scale(dpr, dpr);
        ctx.set_line_join(LINE_JOIN);
        ctx.set_line_cap(LINE_CAP);

        for cmd in commands {
            let Some((first, rest)) = cmd.points.split_first() else {
                continue;
            };
            ctx.begin_path();
            ctx.move_to(first.x as f64, first.y as f64);
            for p in rest {
                ctx.line_to(p.x as f64, p.y as f64);
            }
            ctx.close_path();
            if cmd.fill {
                ctx.set_fill_style_str(cmd.color);
                ctx.fill();
            }
            if cmd.stroke > 0.0 {
                ctx.set_stroke_style_str(cmd.color);
                ctx.set_line_width(cmd.stroke as f64);
                ctx.stroke();
            }
        }
    }
}
