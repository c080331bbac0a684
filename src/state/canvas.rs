use web_sys::CanvasRenderingContext2d;

use crate::render::{Sprite, Surface};
use crate::state::assets::Sprites;

/// `Surface` over the page's 2D context.
pub struct CanvasSurface<'a> {
    pub ctx: &'a CanvasRenderingContext2d,
    pub sprites: &'a Sprites,
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, w: f64, h: f64) {
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64, w: f64, h: f64) {
        if let Some(img) = self.sprites.get(sprite) {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h)
                .ok();
        }
    }

    fn fill_rect(&mut self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_text(&mut self, color: &str, font: &str, text: &str, x: f64, y: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.fill_text(text, x, y).ok();
    }
}
