use crate::Config;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,          // Real time elapsed since the previous step
    pub accumulator: f32, // Time not yet consumed by fixed ticks
}

/// Current run score and best score of the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub current: u32,
    pub best: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one obstacle pass
    pub fn record_pass(&mut self) {
        self.current += 1;
        self.best = self.best.max(self.current);
    }

    /// Start a new run; the best score is kept
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashKind {
    OutOfBounds,
    Obstacle,
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub scored: u32, // obstacle passes this step
    pub crash: Option<CrashKind>,
    pub sped_up: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scored = 0;
        self.crash = None;
        self.sped_up = false;
    }

    pub fn crashed(&self) -> bool {
        self.crash.is_some()
    }
}

/// Obstacle scroll speed and the play-time clock that ramps it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
    pub speed: f32,
    pub clock: f32, // seconds since the last increase
}

impl Pace {
    pub fn new(config: &Config) -> Self {
        Self {
            speed: config.base_speed,
            clock: 0.0,
        }
    }

    pub fn reset(&mut self, config: &Config) {
        *self = Self::new(config);
    }

    /// Advance the clock, returning how many increases were applied
    pub fn advance(&mut self, dt: f32, config: &Config) -> u32 {
        self.clock += dt;
        let mut increases = 0;
        while self.clock >= config.speed_interval {
            self.clock -= config.speed_interval;
            self.speed += config.speed_increment;
            increases += 1;
        }
        increases
    }

    pub fn multiplier(&self, config: &Config) -> f32 {
        config.speed_multiplier(self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_record_pass() {
        let mut score = Score::new();
        assert_eq!(score.current, 0);
        score.record_pass();
        assert_eq!(score.current, 1);
        assert_eq!(score.best, 1);
        score.record_pass();
        assert_eq!(score.current, 2);
        assert_eq!(score.best, 2);
    }

    #[test]
    fn test_score_reset_keeps_best() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.record_pass();
        }
        score.reset();
        assert_eq!(score.current, 0);
        assert_eq!(score.best, 5);

        score.record_pass();
        assert_eq!(score.best, 5, "Best only moves when beaten");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.scored = 2;
        events.crash = Some(CrashKind::Obstacle);
        events.sped_up = true;

        events.clear();

        assert_eq!(events.scored, 0);
        assert!(!events.crashed());
        assert!(!events.sped_up);
    }

    #[test]
    fn test_pace_increases_once_per_interval() {
        let config = Config::new();
        let mut pace = Pace::new(&config);

        assert_eq!(pace.advance(9.5, &config), 0);
        assert_eq!(pace.speed, config.base_speed);

        assert_eq!(pace.advance(0.5, &config), 1);
        assert!((pace.speed - 0.011).abs() < 1e-6);
        assert!(pace.clock.abs() < 1e-4);
    }

    #[test]
    fn test_pace_catches_up_over_long_gaps() {
        let config = Config::new();
        let mut pace = Pace::new(&config);
        assert_eq!(pace.advance(25.0, &config), 2);
        assert!((pace.multiplier(&config) - 1.2).abs() < 1e-4);
        assert!((pace.clock - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_pace_reset() {
        let config = Config::new();
        let mut pace = Pace::new(&config);
        pace.advance(35.0, &config);
        pace.reset(&config);
        assert_eq!(pace, Pace::new(&config));
    }
}
