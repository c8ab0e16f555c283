use game_core::Surface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#000000";
const FOREGROUND: &str = "#ffffff";

/// [`Surface`] backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn fill_background(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke_width: f64,
    ) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(FOREGROUND);
        self.ctx.set_line_width(stroke_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(FOREGROUND);
        self.ctx.fill_rect(x, y, width, height);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: u32) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(FOREGROUND);
        self.ctx.set_font(&format!("{font_size}px monospace"));
        self.ctx.fill_text(text, x, y)
    }
}
