use crate::{Config, Events, GameRng, Obstacle, Score};
use hecs::World;

/// Recycle obstacles that scrolled past the far edge, scoring one point each
pub fn recycle_obstacles(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        if obstacle.is_past(config) {
            obstacle.recycle(config, rng);
            score.record_pass();
            events.scored += 1;
            log::trace!(
                "obstacle recycled, opening={:.3} score={}",
                obstacle.opening,
                score.current
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_obstacle;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
    }

    #[test]
    fn test_scores_when_obstacle_passes_edge() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_obstacle(&mut world, -1.001, 0.0);

        recycle_obstacles(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.current, 1);
        assert_eq!(score.best, 1);
        assert_eq!(events.scored, 1);
    }

    #[test]
    fn test_no_score_at_edge() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_obstacle(&mut world, -1.0, 0.0);

        recycle_obstacles(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.current, 0, "Recycle requires strictly past the edge");
        assert_eq!(events.scored, 0);
    }

    #[test]
    fn test_obstacle_resets_after_scoring() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_obstacle(&mut world, -1.2, 0.0);

        recycle_obstacles(&mut world, &config, &mut score, &mut events, &mut rng);

        let (_e, obstacle) = world.query_mut::<&Obstacle>().into_iter().next().unwrap();
        assert_eq!(obstacle.x, config.obstacle_spawn_x);
        assert!(obstacle.opening >= -0.8 && obstacle.opening < 0.8);
    }

    #[test]
    fn test_scores_only_once_per_recycle() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_obstacle(&mut world, -1.05, 0.0);

        recycle_obstacles(&mut world, &config, &mut score, &mut events, &mut rng);
        recycle_obstacles(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.current, 1);
        assert_eq!(events.scored, 1);
    }
}
