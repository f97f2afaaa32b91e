//! Simulation state and entity types
//!
//! Everything a session mutates per tick lives in [`SimulationState`]; entity
//! stores are plain vectors with no identity beyond membership.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawner::SpawnTimer;
use crate::consts::*;

/// Session lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No loop running
    #[default]
    Idle,
    /// Loop active, score accumulating
    Running,
    /// Player destroyed; final score frozen for display
    GameOver,
}

/// The player's ship (centre anchored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Units per second
    pub speed: f32,
    /// Remaining fire cooldown (ms, never negative)
    pub cooldown_ms: f32,
    pub alive: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            cooldown_ms: 0.0,
            alive: true,
        }
    }
}

impl Player {
    /// Collision box centred on the ship
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::new(self.width, self.height))
    }

    /// Move by directional intent, then clamp into the safe rectangle
    pub fn steer(&mut self, dir: Vec2, dt: f32) {
        self.pos += dir * self.speed * dt;
        self.pos.x = self.pos.x.clamp(PLAYER_MIN_X, PLAYER_MAX_X);
        self.pos.y = self.pos.y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y);
    }

    pub fn can_fire(&self) -> bool {
        self.alive && self.cooldown_ms <= 0.0
    }
}

/// A player projectile (centre anchored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    /// Milliseconds since creation
    pub age_ms: f32,
}

impl Bullet {
    /// A bullet leaving the muzzle of a ship centred at `ship`
    pub fn fired_from(ship: Vec2) -> Self {
        Self {
            pos: ship - Vec2::new(0.0, BULLET_MUZZLE_OFFSET),
            vel: Vec2::new(0.0, -BULLET_SPEED),
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            age_ms: 0.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::new(self.width, self.height))
    }

    pub fn expired(&self) -> bool {
        self.pos.y < BULLET_CULL_Y || self.age_ms > BULLET_TIMEOUT_MS
    }
}

/// A descending adversary. Unlike the player, `pos` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Side length (enemies are square)
    pub size: f32,
    /// Descent speed, units per second
    pub speed: f32,
    pub hp: u8,
}

impl Enemy {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Fully below the world plus the cull margin
    pub fn off_world(&self) -> bool {
        self.pos.y > WORLD_HEIGHT + ENEMY_CULL_MARGIN
    }
}

/// Colour tag for particles; the renderer maps it to RGBA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    Amber,
    Red,
}

/// A short-lived explosion fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Lifetime budget (ms)
    pub life_ms: f32,
    /// Elapsed age (ms)
    pub age_ms: f32,
    pub color: ParticleColor,
}

impl Particle {
    pub fn alive(&self) -> bool {
        self.age_ms <= self.life_ms
    }

    /// Suggested draw opacity
    pub fn alpha(&self) -> f32 {
        if self.life_ms <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age_ms / self.life_ms).clamp(0.0, 1.0)
    }
}

/// Things that happened during a tick, drained by the session each step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player fired a bullet
    Fired { pos: Vec2 },
    /// A bullet struck an enemy that may survive
    EnemyHit { pos: Vec2 },
    /// An enemy's hp reached zero
    EnemyDestroyed { pos: Vec2 },
    /// An enemy rammed the player
    PlayerDestroyed { pos: Vec2 },
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub phase: SessionPhase,
    pub score: u32,
    /// Best score across sessions; only raised at game over
    pub best: u32,
    /// Ticks processed since the last start
    pub ticks: u64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub spawner: SpawnTimer,
    /// Pending events (not part of the persistent state)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SimulationState {
    /// Idle state with empty stores and a previously stored best
    pub fn new(best: u32) -> Self {
        Self {
            phase: SessionPhase::Idle,
            score: 0,
            best,
            ticks: 0,
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            spawner: SpawnTimer::default(),
            events: Vec::new(),
        }
    }

    /// Clear every store and enter Running
    pub fn reset_for_start(&mut self) {
        self.bullets.clear();
        self.enemies.clear();
        self.particles.clear();
        self.events.clear();
        self.score = 0;
        self.ticks = 0;
        self.spawner.reset();
        self.player = Player::default();
        self.phase = SessionPhase::Running;
    }

    /// Leave Running/GameOver for Idle without touching the stores.
    /// Returns false when already idle.
    pub fn halt(&mut self) -> bool {
        if self.phase == SessionPhase::Idle {
            return false;
        }
        self.phase = SessionPhase::Idle;
        true
    }

    /// Halt and enter GameOver, raising `best` if the score beat it.
    /// Returns true when `best` changed.
    pub fn finish(&mut self) -> bool {
        self.halt();
        self.phase = SessionPhase::GameOver;
        if self.score > self.best {
            self.best = self.score;
            return true;
        }
        false
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle_and_empty() {
        let state = SimulationState::new(70);
        assert_eq!(state.phase, SessionPhase::Idle);
        assert_eq!(state.best, 70);
        assert_eq!(state.score, 0);
        assert!(state.bullets.is_empty() && state.enemies.is_empty() && state.particles.is_empty());
    }

    #[test]
    fn player_clamped_to_safe_rect() {
        let mut player = Player::default();
        player.steer(Vec2::new(-1.0, 1.0), 10.0);
        assert_eq!(player.pos, Vec2::new(PLAYER_MIN_X, PLAYER_MAX_Y));
        player.steer(Vec2::new(1.0, -1.0), 10.0);
        assert_eq!(player.pos, Vec2::new(PLAYER_MAX_X, PLAYER_MIN_Y));
    }

    #[test]
    fn enemy_box_is_top_left_anchored() {
        let enemy = Enemy {
            pos: Vec2::new(100.0, 200.0),
            size: 50.0,
            speed: 100.0,
            hp: 1,
        };
        assert_eq!(enemy.bounds(), Aabb::new(100.0, 200.0, 50.0, 50.0));
        assert_eq!(enemy.center(), Vec2::new(125.0, 225.0));
    }

    #[test]
    fn player_box_is_centre_anchored() {
        let player = Player::default();
        let b = player.bounds();
        assert_eq!(b.x, PLAYER_START_X - PLAYER_WIDTH / 2.0);
        assert_eq!(b.y, PLAYER_START_Y - PLAYER_HEIGHT / 2.0);
        assert_eq!(b.w, PLAYER_WIDTH);
    }

    #[test]
    fn finish_only_raises_best() {
        let mut state = SimulationState::new(50);
        state.reset_for_start();
        state.score = 30;
        assert!(!state.finish());
        assert_eq!(state.best, 50);
        assert_eq!(state.phase, SessionPhase::GameOver);

        state.reset_for_start();
        state.score = 80;
        assert!(state.finish());
        assert_eq!(state.best, 80);
    }

    #[test]
    fn halt_is_idempotent() {
        let mut state = SimulationState::new(0);
        assert!(!state.halt());
        state.reset_for_start();
        assert!(state.halt());
        assert!(!state.halt());
        assert_eq!(state.phase, SessionPhase::Idle);
    }

    #[test]
    fn particle_alpha_fades() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life_ms: 1000.0,
            age_ms: 250.0,
            color: ParticleColor::Red,
        };
        assert!((p.alpha() - 0.75).abs() < 1e-6);
        p.age_ms = 1500.0;
        assert_eq!(p.alpha(), 0.0);
        assert!(!p.alive());
    }
}
