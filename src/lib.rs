//! VIP Shooter - A vertical arcade space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, spawning, collisions, particles)
//! - `session`: Session state machine and frame stepper
//! - `renderer`: Snapshot to vertex batch adapter
//! - `audio`: Sound cue sinks (WebAudio on wasm)
//! - `persistence`: Best score storage
//! - `platform`: Logging bootstrap and web host bindings

pub mod audio;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use audio::{AudioSink, SoundCue};
pub use persistence::{BestScoreStore, MemoryStore};
pub use session::{Session, SessionConfig, Snapshot};
pub use settings::Settings;

/// Game configuration constants
///
/// Times are in milliseconds unless the name says otherwise; distances are
/// world units.
pub mod consts {
    /// Logical world size
    pub const WORLD_WIDTH: f32 = 900.0;
    pub const WORLD_HEIGHT: f32 = 1400.0;

    /// Largest frame delta accepted by the stepper (ms)
    pub const MAX_FRAME_MS: f64 = 40.0;
    pub const MAX_DT: f32 = 0.040;

    /// Player ship (centre anchored)
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    pub const PLAYER_SPEED: f32 = 420.0;
    pub const PLAYER_START_X: f32 = WORLD_WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = WORLD_HEIGHT - 160.0;
    /// Safe rectangle for the ship centre (keeps it above the HUD margin)
    pub const PLAYER_MIN_X: f32 = 40.0;
    pub const PLAYER_MAX_X: f32 = WORLD_WIDTH - 40.0;
    pub const PLAYER_MIN_Y: f32 = 60.0;
    pub const PLAYER_MAX_Y: f32 = WORLD_HEIGHT - 220.0;
    pub const FIRE_COOLDOWN_MS: f32 = 220.0;

    /// Bullets (centre anchored)
    pub const BULLET_WIDTH: f32 = 6.0;
    pub const BULLET_HEIGHT: f32 = 14.0;
    pub const BULLET_SPEED: f32 = 680.0;
    /// Muzzle offset above the ship centre
    pub const BULLET_MUZZLE_OFFSET: f32 = 40.0;
    pub const BULLET_TIMEOUT_MS: f32 = 5000.0;
    pub const BULLET_CULL_Y: f32 = -20.0;

    /// Enemies (top-left anchored, square)
    pub const ENEMY_MIN_SIZE: f32 = 44.0;
    pub const ENEMY_MAX_SIZE: f32 = 88.0;
    pub const ENEMY_MIN_SPEED: f32 = 90.0;
    pub const ENEMY_MAX_SPEED: f32 = 220.0;
    pub const ENEMY_SIDE_MARGIN: f32 = 40.0;
    /// Gap between a fresh enemy's bottom edge and the top of the world
    pub const ENEMY_SPAWN_GAP: f32 = 20.0;
    pub const ENEMY_CULL_MARGIN: f32 = 120.0;
    pub const ENEMY_KILL_SCORE: u32 = 10;

    /// Spawn pacing
    pub const SPAWN_INTERVAL_START_MS: f32 = 900.0;
    pub const SPAWN_INTERVAL_FLOOR_MS: f32 = 420.0;
    pub const SPAWN_INTERVAL_DECAY: f32 = 0.985;

    /// Particles
    pub const PARTICLE_MIN_SPEED: f32 = 60.0;
    pub const PARTICLE_MAX_SPEED: f32 = 340.0;
    pub const PARTICLE_MIN_LIFE_MS: f32 = 500.0;
    pub const PARTICLE_MAX_LIFE_MS: f32 = 1200.0;
    pub const PARTICLE_GRAVITY: f32 = 420.0;
    pub const HIT_BURST: usize = 6;
    pub const DESTROY_BURST: usize = 28;
    pub const PLAYER_DEATH_BURST: usize = 36;
}
