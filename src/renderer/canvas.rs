//! 2D canvas painter

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::RectCommand;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Size the canvas and grab its 2D context
    pub fn new(canvas: HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    /// Clear, then fill every rectangle in order
    pub fn paint(&self, rects: &[RectCommand<'_>]) {
        self.clear();
        for rect in rects {
            self.ctx.set_fill_style_str(rect.color);
            self.ctx.fill_rect(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
        }
    }
}
