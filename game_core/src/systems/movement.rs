use crate::{Agent, Config, Obstacle, Pace};
use hecs::World;

/// Pull the agent down and integrate its position by one tick
pub fn move_agent(world: &mut World, config: &Config) {
    for (_entity, agent) in world.query_mut::<&mut Agent>() {
        agent.vel.y -= config.gravity;
        agent.pos += agent.vel;
    }
}

/// Scroll obstacles toward the recycle edge at the current pace
pub fn scroll_obstacles(world: &mut World, pace: &Pace) {
    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        obstacle.x -= pace.speed;
    }
}
