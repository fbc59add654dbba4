use crate::fsm::{FsmState, GameAction, GameFsm};
use crate::hud::HudSnapshot;
use game_core::{
    advance_pace, agent, apply_control, obstacle, reset_world, spawn_world, step, Agent, Config,
    Control, Events, GameRng, Obstacle, Pace, Score, Time,
};
use hecs::World;

/// Short sound effects the session asks the page to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Flap,
    Score,
    Crash,
}

/// A single-player session: simulation resources plus the lifecycle
/// state machine that gates them.
pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub pace: Pace,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    fsm: GameFsm,
}

impl LocalGame {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();
        spawn_world(&mut world, &config, &mut rng);

        Self {
            world,
            time: Time::default(),
            pace: Pace::new(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            fsm: GameFsm::new(),
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    /// Begin or resume play. Returns false when there is nothing to resume.
    pub fn start(&mut self) -> bool {
        self.apply(GameAction::Start)
    }

    pub fn pause(&mut self) -> bool {
        let paused = self.apply(GameAction::Pause);
        if paused {
            log::info!("run paused at score {}", self.score.current);
        }
        paused
    }

    fn apply(&mut self, action: GameAction) -> bool {
        let result = self.fsm.transition(action);
        if result.success() {
            log::info!(
                "{:?}: {:?} -> {:?}",
                result.action(),
                result.from_state(),
                result.to_state()
            );
        } else {
            log::debug!("{:?} ignored in {:?}", result.action(), result.from_state());
        }
        result.success()
    }

    /// Reset the agent, obstacle, score and pace, then play
    pub fn restart(&mut self) {
        reset_world(&mut self.world, &self.config, &mut self.rng);
        self.score.reset();
        self.pace.reset(&self.config);
        self.events.clear();
        self.time = Time::default();
        self.apply(GameAction::Restart);
        log::info!("run restarted, best {}", self.score.best);
    }

    /// Apply a player control. Ignored unless playing.
    pub fn control(&mut self, control: Control) -> Option<Cue> {
        if !self.fsm.is_playing() {
            return None;
        }
        apply_control(&mut self.world, control, &self.config);
        (control == Control::Flap).then_some(Cue::Flap)
    }

    /// Advance by `dt` seconds of real time.
    ///
    /// The world only moves while playing. The speed ramp keeps its
    /// wall-clock schedule in every state.
    pub fn frame(&mut self, dt: f32) -> Vec<Cue> {
        if !self.fsm.is_playing() {
            self.events.clear();
            advance_pace(&mut self.pace, dt, &self.config, &mut self.events);
            return Vec::new();
        }

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

        let mut cues = Vec::new();
        if self.events.scored > 0 {
            cues.push(Cue::Score);
        }
        if let Some(kind) = self.events.crash {
            self.apply(GameAction::Crash);
            log::info!("run over ({:?}) with score {}", kind, self.score.current);
            cues.push(Cue::Crash);
        }
        cues
    }

    pub fn agent(&self) -> Option<Agent> {
        agent(&self.world)
    }

    pub fn obstacle(&self) -> Option<Obstacle> {
        obstacle(&self.world)
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score.current,
            best: self.score.best,
            speed_multiplier: self.pace.multiplier(&self.config),
            game_over: self.fsm.is_game_over(),
        }
    }
}
