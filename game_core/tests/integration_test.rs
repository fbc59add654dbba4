use game_core::*;
use glam::Vec2;
use hecs::World;

struct Sim {
    world: World,
    time: Time,
    config: Config,
    pace: Pace,
    score: Score,
    events: Events,
    rng: GameRng,
}

impl Sim {
    fn new(config: Config) -> Self {
        Self {
            world: World::new(),
            time: Time::default(),
            pace: Pace::new(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(42),
        }
    }

    fn step(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.pace,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    fn agent(&self) -> Agent {
        agent(&self.world).unwrap()
    }

    fn obstacle(&self) -> Obstacle {
        obstacle(&self.world).unwrap()
    }
}

/// Config where the gap covers the whole playfield and nothing falls
fn harmless_config() -> Config {
    Config {
        gravity: 0.0,
        opening_height: 4.0,
        ..Config::default()
    }
}

#[test]
fn test_agent_falls_under_gravity() {
    let mut sim = Sim::new(Config::new());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.5), Vec2::ZERO);
    create_obstacle(&mut sim.world, 1.0, 0.0);

    sim.step(Params::FIXED_DT);

    let agent = sim.agent();
    assert!((agent.vel.y + 0.0003).abs() < 1e-9);
    assert!(agent.pos.y < 0.5);
    assert!(!sim.events.crashed());
}

#[test]
fn test_leaving_bottom_ends_game() {
    let mut sim = Sim::new(Config::new());
    create_agent(&mut sim.world, Vec2::new(0.0, -0.99), Vec2::new(0.0, -0.02));
    create_obstacle(&mut sim.world, 0.5, 0.0);

    sim.step(Params::FIXED_DT);

    assert_eq!(sim.events.crash, Some(CrashKind::OutOfBounds));
    // The crashing tick does not scroll the obstacle
    assert_eq!(sim.obstacle().x, 0.5);
}

#[test]
fn test_leaving_top_ends_game() {
    let mut sim = Sim::new(Config::new());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.995), Vec2::new(0.0, 0.01));
    create_obstacle(&mut sim.world, 0.5, 0.0);

    sim.step(Params::FIXED_DT);

    assert_eq!(sim.events.crash, Some(CrashKind::OutOfBounds));
}

#[test]
fn test_obstacle_collision_ends_game() {
    let mut sim = Sim::new(Config::new());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.0), Vec2::ZERO);
    // Gap is [0.55, 1.05]; the agent is well below it
    create_obstacle(&mut sim.world, 0.005, 0.8);

    sim.step(Params::FIXED_DT);

    assert_eq!(sim.events.crash, Some(CrashKind::Obstacle));
}

#[test]
fn test_passing_through_gap_is_safe() {
    let mut sim = Sim::new(Config::new());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.0), Vec2::ZERO);
    create_obstacle(&mut sim.world, 0.005, 0.0);

    sim.step(Params::FIXED_DT);

    assert!(!sim.events.crashed());
}

#[test]
fn test_recycle_scores_and_reopens_in_range() {
    let mut sim = Sim::new(Config::new());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.0), Vec2::ZERO);
    create_obstacle(&mut sim.world, -0.995, 0.0);

    sim.step(Params::FIXED_DT);

    assert_eq!(sim.events.scored, 1);
    assert_eq!(sim.score.current, 1);
    assert_eq!(sim.score.best, 1);
    let obstacle = sim.obstacle();
    assert_eq!(obstacle.x, 1.0);
    assert!(obstacle.opening >= -0.8 && obstacle.opening < 0.8);
}

#[test]
fn test_score_matches_recycles_over_long_run() {
    let mut sim = Sim::new(harmless_config());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.0), Vec2::ZERO);
    create_obstacle(&mut sim.world, 1.0, 0.0);

    let mut recycles = 0;
    let mut last_x = sim.obstacle().x;
    for _ in 0..1000 {
        sim.step(Params::FIXED_DT);
        assert!(!sim.events.crashed());
        let x = sim.obstacle().x;
        if x > last_x {
            recycles += 1;
        }
        last_x = x;
    }

    assert!(recycles >= 4, "expected several passes, got {recycles}");
    assert_eq!(sim.score.current, recycles);
    assert_eq!(sim.score.best, recycles);
}

#[test]
fn test_large_frame_gap_is_clamped() {
    let mut sim = Sim::new(harmless_config());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.0), Vec2::ZERO);
    create_obstacle(&mut sim.world, 1.0, 0.0);

    sim.step(5.0);

    // At most MAX_DT worth of ticks
    let ticks = ((1.0 - sim.obstacle().x) / Params::BASE_SPEED).round() as u32;
    assert!(ticks <= 6, "ran {ticks} ticks");
    assert!(ticks >= 5, "ran {ticks} ticks");
}

#[test]
fn test_ticks_follow_real_time_not_calls() {
    let mut sim = Sim::new(harmless_config());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.0), Vec2::ZERO);
    create_obstacle(&mut sim.world, 1.0, 0.0);

    // Two half-tick frames make one tick
    sim.step(Params::FIXED_DT * 0.5);
    assert_eq!(sim.obstacle().x, 1.0);
    sim.step(Params::FIXED_DT * 0.6);
    assert!((sim.obstacle().x - 0.99).abs() < 1e-6);
}

#[test]
fn test_pace_ramps_with_play_time() {
    let mut sim = Sim::new(harmless_config());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.0), Vec2::ZERO);
    create_obstacle(&mut sim.world, 1.0, 0.0);

    let mut speedups = 0;
    for _ in 0..101 {
        sim.step(0.1);
        if sim.events.sped_up {
            speedups += 1;
        }
    }

    assert_eq!(speedups, 1);
    assert!((sim.pace.speed - 0.011).abs() < 1e-6);
    assert!((sim.pace.multiplier(&sim.config) - 1.1).abs() < 1e-4);
}

#[test]
fn test_pace_keeps_wall_clock_at_low_frame_rate() {
    let mut sim = Sim::new(harmless_config());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.0), Vec2::ZERO);
    create_obstacle(&mut sim.world, 1.0, 0.0);

    // Just over 20 seconds at 5 fps; every frame is longer than MAX_DT
    let mut speedups = 0;
    for _ in 0..101 {
        sim.step(0.2);
        if sim.events.sped_up {
            speedups += 1;
        }
    }

    assert_eq!(speedups, 2);
    assert!((sim.pace.speed - 0.012).abs() < 1e-6);
}

#[test]
fn test_pace_sees_unclamped_frame_gap() {
    let mut sim = Sim::new(harmless_config());
    create_agent(&mut sim.world, Vec2::new(0.0, 0.0), Vec2::ZERO);
    create_obstacle(&mut sim.world, 1.0, 0.0);

    // A 12 second stall still counts towards the ramp...
    sim.step(12.0);
    assert!(sim.events.sped_up);
    assert!((sim.pace.speed - 0.011).abs() < 1e-6);

    // ...but physics only runs MAX_DT worth of ticks
    let ticks = ((1.0 - sim.obstacle().x) / sim.pace.speed).round() as u32;
    assert!(ticks <= 6, "ran {ticks} ticks");
}

#[test]
fn test_reset_restores_defaults() {
    let config = Config::new();
    let mut sim = Sim::new(config.clone());
    spawn_world(&mut sim.world, &config, &mut sim.rng);

    apply_control(&mut sim.world, Control::SteerRight, &config);
    for _ in 0..30 {
        sim.step(0.1);
    }
    sim.score.record_pass();

    reset_world(&mut sim.world, &config, &mut sim.rng);
    sim.score.reset();
    sim.pace.reset(&config);

    let agent = sim.agent();
    assert_eq!(agent.pos, Vec2::new(0.0, 0.5));
    assert_eq!(agent.vel, Vec2::ZERO);
    let obstacle = sim.obstacle();
    assert_eq!(obstacle.x, 1.0);
    assert!(obstacle.opening >= -0.9 && obstacle.opening < 0.7);
    assert_eq!(sim.score.current, 0);
    assert_eq!(sim.score.best, 1);
    assert_eq!(sim.pace.speed, config.base_speed);
}

#[test]
fn test_seeded_runs_are_deterministic() {
    let run = || {
        let config = Config::new();
        let mut sim = Sim::new(config.clone());
        spawn_world(&mut sim.world, &config, &mut sim.rng);
        for i in 0..200 {
            if i % 20 == 0 {
                apply_control(&mut sim.world, Control::Flap, &config);
            }
            sim.step(Params::FIXED_DT);
            if sim.events.crashed() {
                break;
            }
        }
        (sim.agent(), sim.obstacle(), sim.score)
    };

    assert_eq!(run(), run());
}
