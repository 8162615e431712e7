pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod ring;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::GameError;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use ring::*;

use hecs::World;

/// Helper to create the player entity at its spawn position
pub fn create_player(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Player::new(config),))
}

/// Helper to create one tiling background segment
pub fn create_background(world: &mut World, x: f32, config: &Config) -> hecs::Entity {
    world.spawn((BackgroundSegment::new(x, config),))
}
