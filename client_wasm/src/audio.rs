//! Fire-and-forget sound effects

use game_core::AudioCue;
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

pub struct AudioSink {
    point: HtmlAudioElement,
    lose: HtmlAudioElement,
}

impl AudioSink {
    pub fn load(point_src: &str, lose_src: &str) -> Result<Self, JsValue> {
        Ok(Self {
            point: HtmlAudioElement::new_with_src(point_src)?,
            lose: HtmlAudioElement::new_with_src(lose_src)?,
        })
    }

    /// Restart the cue's clip; the returned promise is ignored
    pub fn play(&self, cue: AudioCue) {
        let clip = match cue {
            AudioCue::Point => &self.point,
            AudioCue::Lose => &self.lose,
        };
        clip.set_current_time(0.0);
        if let Err(e) = clip.play() {
            warn!("audio playback failed: {:?}", e);
        }
    }
}
