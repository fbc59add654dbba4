/// Game tuning parameters for Flappy
///
/// All distances are normalized device coordinates, the playfield spans
/// [-1, 1] on both axes. Velocities and accelerations are per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const BOUND: f32 = 1.0; // |y| at or beyond this ends the run

    // Agent
    pub const AGENT_SPAWN_X: f32 = 0.0;
    pub const AGENT_SPAWN_Y: f32 = 0.5;
    pub const AGENT_RADIUS: f32 = 0.05; // visual only, collision is point-based
    pub const AGENT_SEGMENTS: u32 = 50;
    pub const GRAVITY: f32 = 0.0003;
    pub const FLAP_VELOCITY: f32 = 0.01; // vy is set to this, not added
    pub const DIVE_IMPULSE: f32 = 0.01; // subtracted from vy
    pub const STEER_VELOCITY: f32 = 0.01;

    // Obstacle
    pub const OBSTACLE_WIDTH: f32 = 0.2;
    pub const OPENING_HEIGHT: f32 = 0.5;
    pub const OBSTACLE_SPAWN_X: f32 = 1.0;
    pub const OBSTACLE_RECYCLE_X: f32 = -1.0;
    pub const SPAWN_OPENING_MIN: f32 = -0.9;
    pub const SPAWN_OPENING_MAX: f32 = 0.7;
    pub const RECYCLE_OPENING_MIN: f32 = -0.8;
    pub const RECYCLE_OPENING_MAX: f32 = 0.8;

    // Pace
    pub const BASE_SPEED: f32 = 0.01;
    pub const SPEED_INCREMENT: f32 = 0.001;
    pub const SPEED_INTERVAL: f32 = 10.0; // seconds of play time

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0; // one tick per display refresh at 60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
