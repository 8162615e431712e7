/// Rate limiter admitting at most one logic tick per `interval_ms`.
///
/// Each gate keeps its own timestamp, so the animation gate and the motion
/// gate may drift apart.
#[derive(Debug, Clone, Copy)]
pub struct FrameGate {
    interval_ms: f64,
    last_accepted: f64,
}

impl FrameGate {
    pub fn new(interval_ms: f64, now: f64) -> Self {
        Self {
            interval_ms,
            last_accepted: now,
        }
    }

    /// Returns true (and records `now`) iff a full interval has elapsed
    pub fn should_tick(&mut self, now: f64) -> bool {
        if now - self.last_accepted >= self.interval_ms {
            self.last_accepted = now;
            true
        } else {
            false
        }
    }

    pub fn last_accepted(&self) -> f64 {
        self.last_accepted
    }
}

/// Obstacle pairs cleared during the current run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform draw from the inclusive range `[min, max]`
    pub fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        self.0.gen_range(min..=max)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Fire-and-forget sound triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Point,
    Lose,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub points_scored: u32,
    pub pairs_recycled: u32,
    pub collided: bool,
    pub lost: bool, // collision detected while controls were still on
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.points_scored = 0;
        self.pairs_recycled = 0;
        self.collided = false;
        self.lost = false;
        self.game_over = false;
    }

    /// Sounds the audio sink should play for this frame
    pub fn audio_cues(&self) -> impl Iterator<Item = AudioCue> {
        let points = std::iter::repeat(AudioCue::Point).take(self.points_scored as usize);
        points.chain(self.lost.then_some(AudioCue::Lose))
    }
}

/// Pulsing alpha for the splash text
#[derive(Debug, Clone, Copy)]
pub struct TextAlpha {
    alpha: f32,
    increasing: bool,
    step: f32,
}

impl TextAlpha {
    pub fn new(step: f32) -> Self {
        Self {
            alpha: 1.0,
            increasing: false,
            step,
        }
    }

    /// Advance one render frame, bouncing between 0 and 1
    pub fn fluctuate(&mut self) -> f32 {
        if self.alpha < 0.0 {
            self.increasing = true;
        }
        if self.alpha > 1.0 {
            self.increasing = false;
        }

        if self.increasing {
            self.alpha += self.step;
        } else {
            self.alpha -= self.step;
        }

        self.get()
    }

    /// Current alpha clamped to a drawable value
    pub fn get(&self) -> f32 {
        self.alpha.clamp(0.0, 1.0)
    }
}

impl Default for TextAlpha {
    fn default() -> Self {
        Self::new(crate::Params::SPLASH_ALPHA_STEP)
    }
}
