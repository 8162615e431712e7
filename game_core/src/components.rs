use crate::Config;
use glam::Vec2;

/// Player component - the falling sprite
///
/// Only `pos.y` moves during a run; `pos.x` and `size` stay fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,      // top-left corner
    pub size: Vec2,     // sprite footprint
    pub velocity: f32,  // positive = down
    pub force: f32,     // added to velocity every accepted tick
    pub frame: u8,      // animation frame, cosmetic
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(config.player_x, config.player_spawn_y),
            size: Vec2::new(config.player_width, config.player_height),
            velocity: config.initial_velocity,
            force: config.force,
            frame: 0,
        }
    }

    /// One gravity step: accelerate up to `max_velocity`, then move.
    pub fn fall(&mut self, max_velocity: f32) {
        if self.velocity < max_velocity {
            self.velocity = (self.velocity + self.force).min(max_velocity);
        }
        self.pos.y += self.velocity;
    }

    /// Snap velocity to the jump value (not an added impulse)
    pub fn jump(&mut self, jump_velocity: f32) {
        self.velocity = jump_velocity;
    }

    pub fn reset(&mut self, config: &Config) {
        self.velocity = config.initial_velocity;
        self.pos.y = config.player_spawn_y;
        self.frame = 0;
    }

    pub fn next_frame(&mut self, frame_count: u8) {
        self.frame = (self.frame + 1) % frame_count.max(1);
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// One of the two tiling background images
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundSegment {
    pub pos: Vec2,
    pub width: f32,
    pub speed: f32,
}

impl BackgroundSegment {
    pub fn new(x: f32, config: &Config) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            width: config.background_width,
            speed: config.background_speed,
        }
    }

    /// Scroll left and wrap to the right edge of the canvas once fully off-screen
    pub fn scroll(&mut self, canvas_width: f32) {
        self.pos.x -= self.speed;
        if self.pos.x <= -self.width {
            self.pos.x = canvas_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawn() {
        let config = Config::new();
        let player = Player::new(&config);
        assert_eq!(player.pos, Vec2::new(70.0, 20.0));
        assert_eq!(player.velocity, 2.0);
        assert_eq!(player.right(), 134.0);
        assert_eq!(player.bottom(), 84.0);
    }

    #[test]
    fn test_fall_accelerates_then_moves() {
        let config = Config::new();
        let mut player = Player::new(&config);
        player.fall(config.max_velocity);
        assert!((player.velocity - 2.15).abs() < 1e-5);
        assert!((player.pos.y - 22.15).abs() < 1e-4);
    }

    #[test]
    fn test_fall_keeps_moving_at_ceiling() {
        let config = Config::new();
        let mut player = Player::new(&config);
        player.velocity = config.max_velocity;
        let y = player.pos.y;
        player.fall(config.max_velocity);
        assert_eq!(player.velocity, config.max_velocity);
        assert_eq!(player.pos.y, y + config.max_velocity);
    }

    #[test]
    fn test_fall_does_not_overshoot_ceiling() {
        let config = Config::new();
        let mut player = Player::new(&config);
        player.velocity = 7.95;
        player.fall(config.max_velocity);
        assert_eq!(player.velocity, 8.0);
    }

    #[test]
    fn test_jump_snaps_velocity() {
        let config = Config::new();
        let mut player = Player::new(&config);
        for v in [-20.0, -6.0, 0.0, 3.3, 8.0] {
            player.velocity = v;
            player.jump(config.jump_velocity);
            assert_eq!(player.velocity, -6.0);
        }
    }

    #[test]
    fn test_reset_restores_spawn_state() {
        let config = Config::new();
        let mut player = Player::new(&config);
        player.pos.y = 400.0;
        player.velocity = -6.0;
        player.frame = 2;
        player.reset(&config);
        assert_eq!(player, Player::new(&config));
    }

    #[test]
    fn test_frames_cycle() {
        let config = Config::new();
        let mut player = Player::new(&config);
        let frames: Vec<u8> = (0..4)
            .map(|_| {
                player.next_frame(config.player_frames);
                player.frame
            })
            .collect();
        assert_eq!(frames, vec![1, 2, 0, 1]);
    }

    #[test]
    fn test_background_wraps_to_canvas_width() {
        let config = Config::new();
        let mut bg = BackgroundSegment::new(-639.0, &config);
        bg.scroll(config.canvas_width);
        assert_eq!(bg.pos.x, config.canvas_width);
    }

    #[test]
    fn test_background_scrolls_left() {
        let config = Config::new();
        let mut bg = BackgroundSegment::new(0.0, &config);
        bg.scroll(config.canvas_width);
        assert_eq!(bg.pos.x, -1.0);
    }
}
