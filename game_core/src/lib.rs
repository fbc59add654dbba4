pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use systems::{apply_control, hits_obstacle, Control};

use hecs::World;
use systems::*;

/// Run the Flappy game simulation for one frame of real time.
///
/// Real time is consumed in fixed ticks so the per-tick physics constants
/// behave the same at any display refresh rate. The speed ramp sees the
/// unclamped dt. Events are gathered across all ticks of the frame;
/// ticking stops at the first crash.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    pace: &mut Pace,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    // The ramp runs on wall-clock time; only physics is clamped
    advance_pace(pace, time.dt, config, events);

    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT).max(0.0);

    time.accumulator += clamped_dt;
    while time.accumulator >= Params::FIXED_DT {
        time.accumulator -= Params::FIXED_DT;

        tick(world, config, pace, score, events, rng);
        if events.crashed() {
            time.accumulator = 0.0;
            break;
        }
    }
}

/// Feed real elapsed time to the speed ramp, flagging `sped_up` on increase.
///
/// Called by `step` while playing, and directly by callers that keep the
/// ramp's clock running while the simulation is halted.
pub fn advance_pace(pace: &mut Pace, dt: f32, config: &Config, events: &mut Events) {
    if pace.advance(dt.max(0.0), config) > 0 {
        events.sped_up = true;
        log::debug!("pace increased to {:.1}x", pace.multiplier(config));
    }
}

/// One fixed simulation tick
pub fn tick(
    world: &mut World,
    config: &Config,
    pace: &Pace,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Gravity and integration
    move_agent(world, config);

    // 2. Leaving the playfield ends the tick
    check_bounds(world, config, events);
    if events.crashed() {
        return;
    }

    // 3. Scroll, recycle and score
    scroll_obstacles(world, pace);
    recycle_obstacles(world, config, score, events, rng);

    // 4. Agent vs obstacle
    check_collisions(world, config, events);
}

/// Helper to create the agent entity
pub fn create_agent(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Agent::new(pos, vel),))
}

/// Helper to create an obstacle entity
pub fn create_obstacle(world: &mut World, x: f32, opening: f32) -> hecs::Entity {
    world.spawn((Obstacle::new(x, opening),))
}

/// Populate an empty world with the agent and obstacle at their spawn state
pub fn spawn_world(world: &mut World, config: &Config, rng: &mut GameRng) {
    let agent = Agent::spawn(config);
    create_agent(world, agent.pos, agent.vel);
    let obstacle = Obstacle::spawn(config, rng);
    create_obstacle(world, obstacle.x, obstacle.opening);
}

/// Put every agent and obstacle back at its spawn state
pub fn reset_world(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, agent) in world.query_mut::<&mut Agent>() {
        *agent = Agent::spawn(config);
    }
    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        *obstacle = Obstacle::spawn(config, rng);
    }
}

/// Copy of the first agent, if any
pub fn agent(world: &World) -> Option<Agent> {
    world
        .query::<&Agent>()
        .iter()
        .next()
        .map(|(_e, agent)| *agent)
}

/// Copy of the first obstacle, if any
pub fn obstacle(world: &World) -> Option<Obstacle> {
    world
        .query::<&Obstacle>()
        .iter()
        .next()
        .map(|(_e, obstacle)| *obstacle)
}
