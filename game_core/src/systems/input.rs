use hecs::World;

use crate::components::*;
use crate::Config;

/// A discrete player control. Each one overwrites or nudges the agent's
/// velocity immediately; the last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Flap,
    Dive,
    SteerLeft,
    SteerRight,
    ReleaseSteer,
}

/// Apply a control to every agent in the world
pub fn apply_control(world: &mut World, control: Control, config: &Config) {
    for (_entity, agent) in world.query_mut::<&mut Agent>() {
        match control {
            Control::Flap => agent.vel.y = config.flap_velocity,
            Control::Dive => agent.vel.y -= config.dive_impulse,
            Control::SteerLeft => agent.vel.x = -config.steer_velocity,
            Control::SteerRight => agent.vel.x = config.steer_velocity,
            Control::ReleaseSteer => agent.vel.x = 0.0,
        }
    }
}
