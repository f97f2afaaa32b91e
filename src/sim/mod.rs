//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Randomness only through an injected `Rng`
//! - Stable iteration order (store order, visited newest first)
//! - No rendering, audio, storage or platform dependencies

pub mod clock;
pub mod collision;
pub mod particles;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{Aabb, rects_collide};
pub use particles::{Burst, spawn_burst, update_particles};
pub use spawner::{SpawnTimer, interval_after, spawn_enemy};
pub use state::{
    Bullet, Enemy, GameEvent, Particle, ParticleColor, Player, SessionPhase, SimulationState,
};
pub use tick::{TickInput, TickOutcome, tick};
