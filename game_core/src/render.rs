//! Renderer interface
//!
//! The simulation never draws; it walks its state into a `RenderSink` once
//! per render callback.

use crate::{ObstacleHalf, Player};
use glam::Vec2;

/// Source rectangle inside a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crop {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Crop {
    /// Frame `player.frame` of a horizontal strip of equally sized frames
    pub fn for_player(player: &Player) -> Self {
        Self {
            x: player.frame as f32 * player.size.x,
            y: 0.0,
            width: player.size.x,
            height: player.size.y,
        }
    }
}

/// Where an outlined text label goes on a canvas `canvas_width` wide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPlacement {
    pub x: f32,
    pub y: f32,
    /// Outline is drawn at `(x - outline_offset, y + outline_offset)`
    pub outline_offset: f32,
}

impl TextPlacement {
    pub fn score(canvas_width: f32) -> Self {
        Self {
            x: canvas_width / 2.0 - 10.0,
            y: 50.0,
            outline_offset: 1.0,
        }
    }

    /// Splash outline sits exactly under the fill
    pub fn splash(canvas_width: f32) -> Self {
        Self {
            x: canvas_width / 2.0 - 230.0,
            y: 80.0,
            outline_offset: 0.0,
        }
    }

    pub fn outline(&self) -> (f32, f32) {
        (self.x - self.outline_offset, self.y + self.outline_offset)
    }
}

/// Consumer of per-frame draw data
pub trait RenderSink {
    fn background(&mut self, pos: Vec2);
    fn obstacle(&mut self, half: &ObstacleHalf);
    fn player(&mut self, pos: Vec2, crop: Crop);
    fn score(&mut self, score: u32);
    fn splash(&mut self, text: &str, alpha: f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_crop_follows_frame() {
        let mut player = Player::new(&Config::new());
        assert_eq!(Crop::for_player(&player).x, 0.0);
        player.frame = 2;
        let crop = Crop::for_player(&player);
        assert_eq!(crop.x, 128.0);
        assert_eq!((crop.width, crop.height), (64.0, 64.0));
    }

    #[test]
    fn test_score_outline_is_offset() {
        let score = TextPlacement::score(640.0);
        assert_eq!((score.x, score.y), (310.0, 50.0));
        assert_eq!(score.outline(), (309.0, 51.0));
    }

    #[test]
    fn test_splash_outline_matches_fill() {
        let splash = TextPlacement::splash(640.0);
        assert_eq!((splash.x, splash.y), (90.0, 80.0));
        assert_eq!(splash.outline(), (splash.x, splash.y));
    }
}
