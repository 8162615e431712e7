use crate::{BackgroundSegment, Config, Player};
use hecs::World;

/// Apply one accepted gravity tick to every player
pub fn apply_gravity(world: &mut World, config: &Config) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        player.fall(config.max_velocity);
    }
}

/// Snap every player's velocity to the jump value
pub fn apply_jump(world: &mut World, config: &Config) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        player.jump(config.jump_velocity);
    }
}

/// Advance the sprite animation by one frame
pub fn animate_players(world: &mut World, config: &Config) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        player.next_frame(config.player_frames);
    }
}

/// Scroll the tiling background layer
pub fn scroll_backgrounds(world: &mut World, config: &Config) {
    for (_entity, bg) in world.query_mut::<&mut BackgroundSegment>() {
        bg.scroll(config.canvas_width);
    }
}
