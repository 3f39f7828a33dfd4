//! Canvas 2D surface (wasm32 only)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::DrawCommand;
use super::surface::Surface;

/// Fill color for every shape and text
const FILL_STYLE: &str = "green";

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        context.set_fill_style_str(FILL_STYLE);
        Self { context }
    }
}

impl Surface for CanvasSurface {
    fn draw(&mut self, commands: &[DrawCommand]) {
        let ctx = &self.context;
        for command in commands {
            match command {
                DrawCommand::Clear {
                    x,
                    y,
                    width,
                    height,
                } => ctx.clear_rect(*x as f64, *y as f64, *width as f64, *height as f64),
                DrawCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                } => {
                    ctx.begin_path();
                    ctx.rect(*x as f64, *y as f64, *width as f64, *height as f64);
                    ctx.fill();
                    ctx.close_path();
                }
                DrawCommand::Circle { center, radius } => {
                    ctx.begin_path();
                    if let Err(e) =
                        ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, PI * 2.0)
                    {
                        log::warn!("arc failed: {:?}", e);
                    }
                    ctx.fill();
                    ctx.close_path();
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    align,
                    font,
                } => {
                    ctx.set_text_align(align.as_str());
                    ctx.set_font(font);
                    if let Err(e) = ctx.fill_text(text, *x as f64, *y as f64) {
                        log::warn!("fill_text failed: {:?}", e);
                    }
                }
            }
        }
    }
}
