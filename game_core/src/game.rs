use crate::error::Result;
use crate::systems::*;
use crate::*;
use hecs::{Entity, World};
use log::{info, warn};

/// One game instance: the ECS world plus every resource the frame loop touches.
pub struct Game {
    world: World,
    player: Entity,
    config: Config,
    ring: ObstacleRing,
    fsm: GameFsm,
    score: Score,
    events: Events,
    rng: GameRng,
    motion_gate: FrameGate,
    animation_gate: FrameGate,
    splash: TextAlpha,
}

impl Game {
    /// Allocate the player, backgrounds and obstacle ring. `now` seeds both frame gates.
    pub fn new(config: Config, seed: u64, now: f64) -> Result<Self> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let player = create_player(&mut world, &config);
        create_background(&mut world, 0.0, &config);
        create_background(&mut world, config.canvas_width, &config);
        let ring = ObstacleRing::new(&config, &mut rng)?;

        Ok(Self {
            world,
            player,
            ring,
            fsm: GameFsm::new(),
            score: Score::new(),
            events: Events::new(),
            rng,
            motion_gate: FrameGate::new(config.logic_interval_ms(), now),
            animation_gate: FrameGate::new(config.logic_interval_ms(), now),
            splash: TextAlpha::default(),
            config,
        })
    }

    /// Handle the single input event (pointer click).
    ///
    /// Jumps if the player has control, then starts a fresh run if none is
    /// in progress. The click that starts a run does not also jump.
    pub fn primary_action(&mut self) -> Option<TransitionResult> {
        if self.fsm.controls_on() {
            apply_jump(&mut self.world, &self.config);
        }
        if !self.fsm.can_transition(GameAction::Start) {
            return None;
        }

        self.reset();
        let result = self.fsm.transition(GameAction::Start);
        info!("run started");
        Some(result)
    }

    /// Zero the score and return player and ring to their spawn state
    pub fn reset(&mut self) {
        self.score.reset();
        if let Ok(mut player) = self.world.get::<&mut Player>(self.player) {
            player.reset(&self.config);
        }
        if let Err(err) = self.ring.reset(&self.config, &mut self.rng) {
            warn!("obstacle ring not reset: {}", err);
        }
    }

    /// Run one render callback's worth of simulation
    pub fn frame(&mut self, now: f64) -> &Events {
        self.events.clear();
        scroll_backgrounds(&mut self.world, &self.config);

        if !self.fsm.is_playing() {
            self.splash.fluctuate();
            return &self.events;
        }

        let logic_tick = self.motion_gate.should_tick(now);
        if logic_tick {
            let tick = self
                .ring
                .advance(self.config.player_right(), &self.config, &mut self.rng);
            self.events.pairs_recycled += tick.recycled;
            award_passes(&tick, self.fsm.controls_on(), &mut self.score, &mut self.events);
        }

        if self.animation_gate.should_tick(now) {
            animate_players(&mut self.world, &self.config);
        }

        if logic_tick {
            apply_gravity(&mut self.world, &self.config);
        }

        self.resolve_collision();
        &self.events
    }

    fn resolve_collision(&mut self) {
        let Some(player) = self.player() else {
            return;
        };
        if !check_collision(&player, self.ring.next_pair(), &self.config) {
            return;
        }

        self.events.collided = true;
        if self.fsm.disable_controls() {
            self.events.lost = true;
            info!("player collided with score {}", self.score.value);
        }

        if player.top() > self.config.canvas_height
            && self.fsm.transition(GameAction::FellOffScreen).success
        {
            self.events.game_over = true;
            info!("run ended with score {}", self.score.value);
        }
    }

    /// Walk the current state into a renderer
    pub fn render<R: RenderSink>(&self, sink: &mut R) {
        for (_entity, bg) in self.world.query::<&BackgroundSegment>().iter() {
            sink.background(bg.pos);
        }

        if !self.fsm.is_playing() {
            sink.splash(Params::SPLASH_TEXT, self.splash.get());
            return;
        }

        for pair in self.ring.pairs() {
            for half in pair.halves() {
                sink.obstacle(half);
            }
        }
        for (_entity, player) in self.world.query::<&Player>().iter() {
            sink.player(player.pos, Crop::for_player(player));
        }
        sink.score(self.score.value);
    }

    pub fn player(&self) -> Option<Player> {
        self.world.get::<&Player>(self.player).ok().map(|p| *p)
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn controls_on(&self) -> bool {
        self.fsm.controls_on()
    }

    pub fn score(&self) -> u32 {
        self.score.value
    }

    pub fn ring(&self) -> &ObstacleRing {
        &self.ring
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn splash_alpha(&self) -> f32 {
        self.splash.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: f64 = 40.0; // longer than one 30 fps interval

    fn start() -> Game {
        let mut game = Game::new(Config::new(), 9, 0.0).unwrap();
        game.primary_action();
        game
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config {
            ring_size: 0,
            ..Config::default()
        };
        assert!(Game::new(config, 1, 0.0).is_err());
    }

    #[test]
    fn test_idle_frame_runs_no_physics() {
        let mut game = Game::new(Config::new(), 1, 0.0).unwrap();
        let before = game.player();
        let ring_x = game.ring().next_pair().x();
        for i in 1..10 {
            game.frame(i as f64 * TICK);
        }
        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.player(), before);
        assert_eq!(game.ring().next_pair().x(), ring_x);
        assert!(game.splash_alpha() < 1.0);
    }

    #[test]
    fn test_first_click_starts_without_jumping() {
        let game = start();
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.controls_on());
        assert_eq!(game.player().unwrap().velocity, 2.0);
    }

    #[test]
    fn test_click_while_playing_jumps() {
        let mut game = start();
        game.frame(TICK);
        assert!(game.primary_action().is_none());
        assert_eq!(game.player().unwrap().velocity, -6.0);
    }

    #[test]
    fn test_gated_frames_do_not_move() {
        let mut game = start();
        let y = game.player().unwrap().pos.y;
        game.frame(10.0);
        game.frame(20.0);
        assert_eq!(game.player().unwrap().pos.y, y);
        game.frame(34.0);
        assert!(game.player().unwrap().pos.y > y);
    }

    #[test]
    fn test_gates_follow_configured_frame_rate() {
        let config = Config {
            target_fps: 20.0,
            ..Config::default()
        };
        let mut game = Game::new(config, 9, 0.0).unwrap();
        game.primary_action();
        let y = game.player().unwrap().pos.y;
        game.frame(40.0);
        assert_eq!(game.player().unwrap().pos.y, y, "40 ms is short of a 20 fps tick");
        game.frame(50.0);
        assert!(game.player().unwrap().pos.y > y);
    }

    #[test]
    fn test_render_branches_on_state() {
        #[derive(Default)]
        struct Recorder {
            backgrounds: usize,
            obstacles: usize,
            players: usize,
            scores: Vec<u32>,
            splash: Option<(String, f32)>,
        }
        impl RenderSink for Recorder {
            fn background(&mut self, _pos: glam::Vec2) {
                self.backgrounds += 1;
            }
            fn obstacle(&mut self, _half: &ObstacleHalf) {
                self.obstacles += 1;
            }
            fn player(&mut self, _pos: glam::Vec2, _crop: Crop) {
                self.players += 1;
            }
            fn score(&mut self, score: u32) {
                self.scores.push(score);
            }
            fn splash(&mut self, text: &str, alpha: f32) {
                self.splash = Some((text.to_string(), alpha));
            }
        }

        let mut game = Game::new(Config::new(), 3, 0.0).unwrap();
        let mut idle = Recorder::default();
        game.render(&mut idle);
        assert_eq!(idle.backgrounds, 2);
        assert_eq!(idle.obstacles, 0);
        assert_eq!(idle.splash, Some(("Click to start game".to_string(), 1.0)));

        game.primary_action();
        let mut playing = Recorder::default();
        game.render(&mut playing);
        assert_eq!(playing.backgrounds, 2);
        assert_eq!(playing.obstacles, 10);
        assert_eq!(playing.players, 1);
        assert_eq!(playing.scores, vec![0]);
        assert!(playing.splash.is_none());
    }
}
