use core::f64::consts::TAU;

use spider_core::{Color, Surface, Vector2D};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// [`Surface`] backed by a canvas 2D context
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }
}

fn css_color(color: Color) -> String {
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, color.a)
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width as f64, height as f64);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.context.set_fill_style_str(&css_color(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.context.set_stroke_style_str(&css_color(color));
    }

    fn fill_ellipse(
        &mut self,
        center: Vector2D,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.ellipse(
            center.x as f64,
            center.y as f64,
            radius_x as f64,
            radius_y as f64,
            rotation as f64,
            0.0,
            TAU,
        )?;
        self.context.fill();
        Ok(())
    }

    fn fill_circle(&mut self, center: Vector2D, radius: f32) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
        self.context.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Vector2D, to: Vector2D) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.move_to(from.x as f64, from.y as f64);
        self.context.line_to(to.x as f64, to.y as f64);
        self.context.stroke();
        Ok(())
    }
}
