/// Game tuning parameters for the side-scroller
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 640.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;

    // Player
    pub const PLAYER_X: f32 = 70.0;
    pub const PLAYER_SPAWN_Y: f32 = 20.0; // top-anchored spawn height
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    pub const PLAYER_FRAMES: u8 = 3; // sprite sheet is 192x64

    // Vertical motion (units per accepted tick)
    pub const INITIAL_VELOCITY: f32 = 2.0; // passive fall speed after reset
    pub const FORCE: f32 = 0.15;
    pub const MAX_VELOCITY: f32 = 8.0;
    pub const JUMP_VELOCITY: f32 = -6.0;

    // Obstacle ring
    pub const RING_SIZE: usize = 5;
    pub const OBSTACLE_OFFSET: f32 = 300.0; // horizontal spacing between pairs
    pub const OBSTACLE_GAP: f32 = 120.0; // vertical distance of each half from the gap center
    pub const MIN_Y_OFFSET: i32 = -150;
    pub const MAX_Y_OFFSET: i32 = 50;
    pub const OBSTACLE_SPEED: f32 = 3.0;
    pub const OBSTACLE_WIDTH: f32 = 64.0;
    pub const OBSTACLE_HEIGHT: f32 = 316.0;
    pub const OBSTACLE_LIP_INSET: f32 = 40.0; // visible pipe lip, not collidable

    // Timing
    pub const TARGET_FPS: f64 = 30.0;

    // Background
    pub const BACKGROUND_WIDTH: f32 = 640.0;
    pub const BACKGROUND_SPEED: f32 = 1.0;

    // Splash
    pub const SPLASH_TEXT: &'static str = "Click to start game";
    pub const SPLASH_ALPHA_STEP: f32 = 0.02;
}
