//! Session ownership and the frame stepper
//!
//! A [`Session`] is the single owner of all simulation state. Hosts feed it
//! frame timestamps (or raw deltas) plus an intent, and read back a
//! [`Snapshot`]. Audio and best-score storage are collaborators reached only
//! through their traits.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioSink, LogAudio, SoundCue};
use crate::consts::MAX_DT;
use crate::persistence::{BestScoreStore, MemoryStore};
use crate::sim::{
    Bullet, Enemy, FrameClock, GameEvent, Particle, Player, SessionPhase, SimulationState,
    TickInput, TickOutcome, tick,
};

/// Configuration for a new session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// RNG seed. Same seed and inputs give the same run.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Immutable per-frame view for renderers and HUDs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: SessionPhase,
    pub score: u32,
    pub best: u32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
}

impl Snapshot {
    pub fn capture(state: &SimulationState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            best: state.best,
            player: state.player.clone(),
            bullets: state.bullets.clone(),
            enemies: state.enemies.clone(),
            particles: state.particles.clone(),
        }
    }
}

/// One play-through owner: state machine, stepper and collaborator wiring
pub struct Session {
    state: SimulationState,
    rng: Pcg32,
    clock: FrameClock,
    store: Box<dyn BestScoreStore>,
    audio: Box<dyn AudioSink>,
    /// Events from the most recent step
    last_events: Vec<GameEvent>,
}

impl Session {
    /// Idle session with the stored best score loaded
    pub fn new(
        config: SessionConfig,
        store: Box<dyn BestScoreStore>,
        audio: Box<dyn AudioSink>,
    ) -> Self {
        let best = store.load_best();
        log::info!("Session created (seed {}, best {})", config.seed, best);
        Self {
            state: SimulationState::new(best),
            rng: Pcg32::seed_from_u64(config.seed),
            clock: FrameClock::new(),
            store,
            audio,
            last_events: Vec::new(),
        }
    }

    /// Session with an in-memory store and a logging audio sink
    pub fn headless(seed: u64) -> Self {
        Self::new(
            SessionConfig { seed },
            Box::new(MemoryStore::new()),
            Box::new(LogAudio),
        )
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best(&self) -> u32 {
        self.state.best
    }

    /// Begin (or restart) a run from a clean slate
    pub fn start(&mut self) {
        self.state.reset_for_start();
        self.clock.reset();
        self.last_events.clear();
        log::info!("Session started (best {})", self.state.best);
    }

    /// Halt the loop without clearing entities. Idempotent.
    pub fn stop(&mut self) {
        if self.state.halt() {
            log::info!("Session stopped at score {}", self.state.score);
        }
    }

    /// End the run: halt, raise and persist the best if beaten, enter GameOver.
    /// Only meaningful while running.
    pub fn game_over(&mut self) {
        if !self.state.is_running() {
            log::debug!("game_over ignored in {:?}", self.state.phase);
            return;
        }
        if self.state.finish() {
            log::info!("New best score: {}", self.state.best);
            self.store.save_best(self.state.best);
        }
        log::info!("Game over - final score {}", self.state.score);
    }

    /// Step from a frame timestamp (ms). The first frame after `start` only
    /// sets the clock baseline.
    pub fn frame(&mut self, now_ms: f64, input: &TickInput) -> &SimulationState {
        if !self.state.is_running() {
            return &self.state;
        }
        let dt = self.clock.delta(now_ms);
        self.advance(dt, input)
    }

    /// Step by `dt` seconds (clamped to [0, 40 ms]). No-op unless running.
    pub fn advance(&mut self, dt: f32, input: &TickInput) -> &SimulationState {
        if !self.state.is_running() {
            return &self.state;
        }
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_DT) } else { 0.0 };

        let outcome = tick(&mut self.state, input, dt, &mut self.rng);

        self.last_events = self.state.take_events();
        for event in &self.last_events {
            self.audio.play(SoundCue::for_event(event));
        }

        if outcome == TickOutcome::PlayerDestroyed {
            self.game_over();
        }
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Take the events produced by the most recent step
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.last_events)
    }
}
