use crate::{Agent, Config, CrashKind, Events, Obstacle};
use hecs::World;

/// Point-vs-obstacle test: inside the horizontal span and outside the gap
pub fn hits_obstacle(agent: &Agent, obstacle: &Obstacle, config: &Config) -> bool {
    obstacle.spans(agent.pos.x, config) && obstacle.blocks(agent.pos.y, config)
}

/// Record a crash if the agent has left the playfield vertically
pub fn check_bounds(world: &World, config: &Config, events: &mut Events) {
    let escaped = world
        .query::<&Agent>()
        .iter()
        .any(|(_e, agent)| config.is_out_of_bounds(agent.pos.y));

    if escaped {
        log::debug!("agent left the playfield");
        events.crash = Some(CrashKind::OutOfBounds);
    }
}

/// Record a crash if the agent overlaps any obstacle
pub fn check_collisions(world: &World, config: &Config, events: &mut Events) {
    let agents: Vec<Agent> = world
        .query::<&Agent>()
        .iter()
        .map(|(_e, agent)| *agent)
        .collect();

    for (_e, obstacle) in world.query::<&Obstacle>().iter() {
        if agents
            .iter()
            .any(|agent| hits_obstacle(agent, obstacle, config))
        {
            log::debug!("agent hit obstacle at x={:.3}", obstacle.x);
            events.crash = Some(CrashKind::Obstacle);
            return;
        }
    }
}
