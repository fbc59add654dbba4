use crate::Params;
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bound: f32,
    pub agent_spawn: Vec2,
    pub agent_radius: f32,
    pub agent_segments: u32,
    pub gravity: f32,
    pub flap_velocity: f32,
    pub dive_impulse: f32,
    pub steer_velocity: f32,
    pub obstacle_width: f32,
    pub opening_height: f32,
    pub obstacle_spawn_x: f32,
    pub obstacle_recycle_x: f32,
    pub spawn_opening: (f32, f32),   // half-open [min, max)
    pub recycle_opening: (f32, f32), // half-open [min, max)
    pub base_speed: f32,
    pub speed_increment: f32,
    pub speed_interval: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bound: Params::BOUND,
            agent_spawn: Vec2::new(Params::AGENT_SPAWN_X, Params::AGENT_SPAWN_Y),
            agent_radius: Params::AGENT_RADIUS,
            agent_segments: Params::AGENT_SEGMENTS,
            gravity: Params::GRAVITY,
            flap_velocity: Params::FLAP_VELOCITY,
            dive_impulse: Params::DIVE_IMPULSE,
            steer_velocity: Params::STEER_VELOCITY,
            obstacle_width: Params::OBSTACLE_WIDTH,
            opening_height: Params::OPENING_HEIGHT,
            obstacle_spawn_x: Params::OBSTACLE_SPAWN_X,
            obstacle_recycle_x: Params::OBSTACLE_RECYCLE_X,
            spawn_opening: (Params::SPAWN_OPENING_MIN, Params::SPAWN_OPENING_MAX),
            recycle_opening: (Params::RECYCLE_OPENING_MIN, Params::RECYCLE_OPENING_MAX),
            base_speed: Params::BASE_SPEED,
            speed_increment: Params::SPEED_INCREMENT,
            speed_interval: Params::SPEED_INTERVAL,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Right edge of an obstacle whose left edge is `x`
    pub fn obstacle_right(&self, x: f32) -> f32 {
        x + self.obstacle_width
    }

    /// Vertical band `(bottom, top)` of the gap centred on `opening`
    pub fn opening_bounds(&self, opening: f32) -> (f32, f32) {
        let half = self.opening_height / 2.0;
        (opening - half, opening + half)
    }

    /// Whether a y position has left the playfield
    pub fn is_out_of_bounds(&self, y: f32) -> bool {
        y >= self.bound || y <= -self.bound
    }

    /// Scroll speed relative to the base speed, as shown to the player
    pub fn speed_multiplier(&self, speed: f32) -> f32 {
        speed / self.base_speed
    }
}
