//! Canvas 2D browser client
//!
//! JavaScript owns the page: it calls `init_client` once, forwards canvas
//! clicks to `primary_action` and calls `render_frame` from
//! `requestAnimationFrame`.
//! Only available when compiling for wasm32 target

#![cfg(target_arch = "wasm32")]

mod audio;
mod canvas;
mod logger;

use audio::AudioSink;
use canvas::{CanvasRenderer, Sprites};
use game_core::{Config, Game};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Main client state
struct Client {
    game: Game,
    renderer: CanvasRenderer,
    audio: AudioSink,
}

impl Client {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let config = Config {
            canvas_width: canvas.width() as f32,
            canvas_height: canvas.height() as f32,
            ..Config::default()
        };
        let now = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        let seed = js_sys::Date::now() as u64;

        let game = Game::new(config, seed, now)
            .map_err(|e| JsValue::from_str(&format!("Failed to set up game: {}", e)))?;
        let renderer = CanvasRenderer::new(&canvas, Sprites::load()?)?;
        let audio = AudioSink::load("assets/point.mp3", "assets/lose.mp3")?;

        Ok(Self {
            game,
            renderer,
            audio,
        })
    }

    fn frame(&mut self, now: f64) {
        for cue in self.game.frame(now).audio_cues() {
            self.audio.play(cue);
        }
        self.renderer.begin_frame();
        self.game.render(&mut self.renderer);
    }
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => Ok(f(client)),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let client = Client::new(canvas)?;
    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
    log::info!("client ready");
    Ok(())
}

/// Pointer click on the canvas
#[wasm_bindgen]
pub fn primary_action() -> Result<(), JsValue> {
    with_client(|client| {
        client.game.primary_action();
    })
}

/// `now` is the requestAnimationFrame timestamp in milliseconds
#[wasm_bindgen]
pub fn render_frame(now: f64) -> Result<(), JsValue> {
    with_client(|client| client.frame(now))
}
