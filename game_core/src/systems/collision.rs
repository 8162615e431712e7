use crate::{Config, ObstaclePair, Player};

/// Horizontal window where the pair is solid: the lower half's x shifted
/// right by the pipe lip, spanning the rest of the sprite width.
pub fn gap_window(pair: &ObstaclePair, config: &Config) -> (f32, f32) {
    let left = pair.lower.x + config.obstacle_lip_inset;
    let right = left + (pair.lower.width - config.obstacle_lip_inset);
    (left, right)
}

/// Player box has left the canvas vertically
pub fn is_off_screen(player: &Player, config: &Config) -> bool {
    player.bottom() < 0.0 || player.top() > config.canvas_height
}

/// Collision oracle against the next pair the player has not yet passed.
///
/// Inside the horizontal window the player must sit between the upper
/// half's bottom edge and the lower half's top edge. Leaving the canvas
/// vertically also counts as a collision.
pub fn check_collision(player: &Player, next: &ObstaclePair, config: &Config) -> bool {
    let player_right = player.right();
    let (gap_left, gap_right) = gap_window(next, config);

    let mut collided = false;
    if player_right > gap_left && player_right < gap_right {
        collided = player.top() < next.gap_ceiling() || player.bottom() > next.gap_floor();
    }

    collided || is_off_screen(player, config)
}
