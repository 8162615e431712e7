//! Canvas 2D renderer

use game_core::{Crop, HalfKind, ObstacleHalf, RenderSink, TextPlacement};
use glam::Vec2;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

const FONT: &str = "48px Raleway";

/// Sprite images, loaded once at startup
pub struct Sprites {
    background: HtmlImageElement,
    player: HtmlImageElement,
    obstacle_up: HtmlImageElement,
    obstacle_down: HtmlImageElement,
}

impl Sprites {
    pub fn load() -> Result<Self, JsValue> {
        Ok(Self {
            background: load_image("assets/background.jpg", 640, 480)?,
            player: load_image("assets/player.png", 192, 64)?,
            obstacle_up: load_image("assets/enemy_up.png", 64, 316)?,
            obstacle_down: load_image("assets/enemy_down.png", 64, 316)?,
        })
    }
}

fn load_image(src: &str, width: u32, height: u32) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new_with_width_and_height(width, height)?;
    img.set_src(src);
    Ok(img)
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, sprites: Sprites) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            sprites,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Clear the canvas and set the text style for this frame
    pub fn begin_frame(&self) {
        self.ctx.set_font(FONT);
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    /// Black outline under white fill
    fn outlined_text(&self, text: &str, at: TextPlacement, alpha: f32) {
        let (ox, oy) = at.outline();
        self.ctx
            .set_stroke_style_str(&format!("rgba(0,0,0,{})", alpha));
        check(self.ctx.stroke_text(text, ox as f64, oy as f64));
        self.ctx
            .set_fill_style_str(&format!("rgba(255,255,255,{})", alpha));
        check(self.ctx.fill_text(text, at.x as f64, at.y as f64));
    }
}

fn check(result: Result<(), JsValue>) {
    if let Err(e) = result {
        warn!("draw call failed: {:?}", e);
    }
}

impl RenderSink for CanvasRenderer {
    fn background(&mut self, pos: Vec2) {
        check(self.ctx.draw_image_with_html_image_element(
            &self.sprites.background,
            pos.x as f64,
            pos.y as f64,
        ));
    }

    fn obstacle(&mut self, half: &ObstacleHalf) {
        let img = match half.kind {
            HalfKind::FacingUp => &self.sprites.obstacle_up,
            HalfKind::FacingDown => &self.sprites.obstacle_down,
        };
        check(
            self.ctx
                .draw_image_with_html_image_element(img, half.x as f64, half.y as f64),
        );
    }

    fn player(&mut self, pos: Vec2, crop: Crop) {
        check(
            self.ctx
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    &self.sprites.player,
                    crop.x as f64,
                    crop.y as f64,
                    crop.width as f64,
                    crop.height as f64,
                    pos.x as f64,
                    pos.y as f64,
                    crop.width as f64,
                    crop.height as f64,
                ),
        );
    }

    fn score(&mut self, score: u32) {
        let at = TextPlacement::score(self.width as f32);
        self.outlined_text(&score.to_string(), at, 1.0);
    }

    fn splash(&mut self, text: &str, alpha: f32) {
        let at = TextPlacement::splash(self.width as f32);
        self.outlined_text(text, at, alpha);
    }
}
