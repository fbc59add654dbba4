use crate::{Config, GameRng};
use glam::Vec2;
use rand::Rng;

/// Agent component - the player-controlled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Agent {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Agent at its spawn point, at rest
    pub fn spawn(config: &Config) -> Self {
        Self::new(config.agent_spawn, Vec2::ZERO)
    }
}

/// Obstacle component - a top/bottom pillar pair with a gap between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,       // left edge
    pub opening: f32, // centre of the gap
}

impl Obstacle {
    pub fn new(x: f32, opening: f32) -> Self {
        Self { x, opening }
    }

    /// Fresh obstacle at the spawn edge, as placed on start and restart
    pub fn spawn(config: &Config, rng: &mut GameRng) -> Self {
        let (min, max) = config.spawn_opening;
        Self::new(config.obstacle_spawn_x, rng.0.gen_range(min..max))
    }

    /// Wrap back to the spawn edge with a new opening
    pub fn recycle(&mut self, config: &Config, rng: &mut GameRng) {
        let (min, max) = config.recycle_opening;
        self.x = config.obstacle_spawn_x;
        self.opening = rng.0.gen_range(min..max);
    }

    /// Whether `x` lies within the horizontal span (edges included)
    pub fn spans(&self, x: f32, config: &Config) -> bool {
        x >= self.x && x <= config.obstacle_right(self.x)
    }

    /// Whether `y` lies outside the gap, i.e. inside one of the pillars
    pub fn blocks(&self, y: f32, config: &Config) -> bool {
        let (bottom, top) = config.opening_bounds(self.opening);
        y < bottom || y > top
    }

    /// Whether the obstacle has scrolled far enough to be recycled
    pub fn is_past(&self, config: &Config) -> bool {
        self.x < config.obstacle_recycle_x
    }
}
