use crate::error::{GameError, Result};
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub player_x: f32,
    pub player_spawn_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_frames: u8,
    pub initial_velocity: f32,
    pub force: f32,
    pub max_velocity: f32,
    pub jump_velocity: f32,
    pub ring_size: usize,
    pub obstacle_offset: f32,
    pub obstacle_gap: f32,
    pub min_y_offset: i32,
    pub max_y_offset: i32,
    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub obstacle_lip_inset: f32,
    pub target_fps: f64,
    pub background_width: f32,
    pub background_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            player_x: Params::PLAYER_X,
            player_spawn_y: Params::PLAYER_SPAWN_Y,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            player_frames: Params::PLAYER_FRAMES,
            initial_velocity: Params::INITIAL_VELOCITY,
            force: Params::FORCE,
            max_velocity: Params::MAX_VELOCITY,
            jump_velocity: Params::JUMP_VELOCITY,
            ring_size: Params::RING_SIZE,
            obstacle_offset: Params::OBSTACLE_OFFSET,
            obstacle_gap: Params::OBSTACLE_GAP,
            min_y_offset: Params::MIN_Y_OFFSET,
            max_y_offset: Params::MAX_Y_OFFSET,
            obstacle_speed: Params::OBSTACLE_SPEED,
            obstacle_width: Params::OBSTACLE_WIDTH,
            obstacle_height: Params::OBSTACLE_HEIGHT,
            obstacle_lip_inset: Params::OBSTACLE_LIP_INSET,
            target_fps: Params::TARGET_FPS,
            background_width: Params::BACKGROUND_WIDTH,
            background_speed: Params::BACKGROUND_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical center of the canvas; lower obstacle halves hang off it
    pub fn canvas_mid_height(&self) -> f32 {
        self.canvas_height / 2.0
    }

    /// Minimum wall-clock spacing between two logic ticks
    pub fn logic_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }

    /// Player's right edge, constant for the whole run
    pub fn player_right(&self) -> f32 {
        self.player_x + self.player_width
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.ring_size == 0 {
            return Err(GameError::EmptyRing);
        }
        if self.min_y_offset > self.max_y_offset {
            return Err(GameError::InvalidOffsetRange {
                min: self.min_y_offset,
                max: self.max_y_offset,
            });
        }
        if self.target_fps.is_nan() || self.target_fps <= 0.0 {
            return Err(GameError::InvalidFrameRate(self.target_fps));
        }
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(GameError::InvalidSize("canvas"));
        }
        if self.player_width <= 0.0 || self.player_height <= 0.0 || self.player_frames == 0 {
            return Err(GameError::InvalidSize("player sprite"));
        }
        if self.obstacle_width <= 0.0 || self.obstacle_height <= 0.0 {
            return Err(GameError::InvalidSize("obstacle sprite"));
        }
        if self.obstacle_lip_inset >= self.obstacle_width {
            return Err(GameError::InvalidSize("obstacle width past the lip inset"));
        }
        if self.background_width <= 0.0 {
            return Err(GameError::InvalidSize("background"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_derived_geometry() {
        let config = Config::new();
        assert_eq!(config.canvas_mid_height(), 240.0);
        assert_eq!(config.player_right(), 134.0);
        assert!((config.logic_interval_ms() - 1000.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_config_rejects_empty_ring() {
        let config = Config {
            ring_size: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(GameError::EmptyRing));
    }

    #[test]
    fn test_config_rejects_inverted_offsets() {
        let config = Config {
            min_y_offset: 60,
            max_y_offset: 50,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidOffsetRange { min: 60, max: 50 })
        );
    }

    #[test]
    fn test_config_rejects_zero_fps() {
        let config = Config {
            target_fps: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidFrameRate(_))
        ));
    }

    #[test]
    fn test_config_rejects_lip_wider_than_obstacle() {
        let config = Config {
            obstacle_lip_inset: 64.0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidSize(_))));
    }
}
