//! Per-frame simulation step
//!
//! Order within a tick: steer the ship, cool down and fire, spawn, move
//! bullets, move and resolve enemies, then age particles. A fatal ram ends the
//! tick immediately.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision;
use super::particles::{self, Burst};
use super::state::{Bullet, GameEvent, SimulationState};
use crate::consts::*;

/// Directional and fire intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub fire: bool,
}

impl TickInput {
    pub const LEFT: u8 = 1 << 0;
    pub const RIGHT: u8 = 1 << 1;
    pub const UP: u8 = 1 << 2;
    pub const DOWN: u8 = 1 << 3;
    pub const FIRE: u8 = 1 << 4;

    /// Decode a packed intent byte; bits above FIRE are ignored
    pub fn from_bits(bits: u8) -> Self {
        Self {
            move_left: bits & Self::LEFT != 0,
            move_right: bits & Self::RIGHT != 0,
            move_up: bits & Self::UP != 0,
            move_down: bits & Self::DOWN != 0,
            fire: bits & Self::FIRE != 0,
        }
    }

    pub fn to_bits(self) -> u8 {
        let mut bits = 0;
        if self.move_left {
            bits |= Self::LEFT;
        }
        if self.move_right {
            bits |= Self::RIGHT;
        }
        if self.move_up {
            bits |= Self::UP;
        }
        if self.move_down {
            bits |= Self::DOWN;
        }
        if self.fire {
            bits |= Self::FIRE;
        }
        bits
    }

    /// Unnormalised steering direction (opposing keys cancel)
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.move_left {
            dir.x -= 1.0;
        }
        if self.move_right {
            dir.x += 1.0;
        }
        if self.move_up {
            dir.y -= 1.0;
        }
        if self.move_down {
            dir.y += 1.0;
        }
        dir
    }
}

/// What the caller must do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session not running; nothing happened
    Skipped,
    Continue,
    /// An enemy rammed the player; the session should end
    PlayerDestroyed,
}

/// Advance the state by `dt` seconds
pub fn tick(
    state: &mut SimulationState,
    input: &TickInput,
    dt: f32,
    rng: &mut impl Rng,
) -> TickOutcome {
    if !state.is_running() {
        return TickOutcome::Skipped;
    }
    let dt = if dt.is_finite() { dt.clamp(0.0, MAX_DT) } else { 0.0 };
    state.ticks += 1;

    state.player.steer(input.direction(), dt);
    update_weapon(state, input, dt);

    if let Some(enemy) = state.spawner.advance(dt, rng) {
        log::debug!(
            "Spawned enemy #{} (size {:.0}, hp {}), next interval {:.1} ms",
            state.spawner.spawned,
            enemy.size,
            enemy.hp,
            state.spawner.interval_ms
        );
        state.enemies.push(enemy);
    }

    update_bullets(&mut state.bullets, dt);

    if resolve_enemies(state, dt, rng) == TickOutcome::PlayerDestroyed {
        return TickOutcome::PlayerDestroyed;
    }

    particles::update_particles(&mut state.particles, dt);
    TickOutcome::Continue
}

/// Cool down first, then fire if the gate is open
fn update_weapon(state: &mut SimulationState, input: &TickInput, dt: f32) {
    let player = &mut state.player;
    player.cooldown_ms = (player.cooldown_ms - dt * 1000.0).max(0.0);
    debug_assert!(player.cooldown_ms >= 0.0);

    if input.fire && player.can_fire() {
        player.cooldown_ms = FIRE_COOLDOWN_MS;
        let bullet = Bullet::fired_from(player.pos);
        state.events.push(GameEvent::Fired { pos: bullet.pos });
        state.bullets.push(bullet);
    }
}

fn update_bullets(bullets: &mut Vec<Bullet>, dt: f32) {
    for b in bullets.iter_mut() {
        b.pos += b.vel * dt;
        b.age_ms += dt * 1000.0;
    }
    bullets.retain(|b| !b.expired());
}

/// Move every enemy and resolve bullet hits, rams and off-world exits.
///
/// Enemies are visited newest first. Each enemy consumes at most one bullet
/// per tick, and a destroyed enemy is skipped for the remaining checks.
fn resolve_enemies(state: &mut SimulationState, dt: f32, rng: &mut impl Rng) -> TickOutcome {
    let SimulationState {
        player,
        bullets,
        enemies,
        particles: sparks,
        events,
        score,
        ..
    } = state;
    let player_box = player.bounds();

    for i in (0..enemies.len()).rev() {
        let enemy = &mut enemies[i];
        enemy.pos.y += enemy.speed * dt;
        let enemy_box = enemy.bounds();

        if let Some(j) = collision::first_hit(bullets, &enemy_box) {
            let bullet = bullets.remove(j);
            let hp_before = enemy.hp;
            enemy.hp = enemy.hp.saturating_sub(1);
            debug_assert!(enemy.hp < hp_before, "enemy hp must drop on every hit");
            particles::emit(sparks, Burst::Hit, bullet.pos, rng);
            events.push(GameEvent::EnemyHit { pos: bullet.pos });

            if enemy.hp == 0 {
                let center = enemy.center();
                particles::emit(sparks, Burst::Destroy, center, rng);
                enemies.remove(i);
                *score += ENEMY_KILL_SCORE;
                events.push(GameEvent::EnemyDestroyed { pos: center });
                log::debug!("Enemy destroyed at ({:.0}, {:.0}), score {}", center.x, center.y, score);
                continue;
            }
        }

        if player_box.overlaps(&enemy_box) {
            particles::emit(sparks, Burst::PlayerDeath, player.pos, rng);
            player.alive = false;
            events.push(GameEvent::PlayerDestroyed { pos: player.pos });
            return TickOutcome::PlayerDestroyed;
        }

        if enemies[i].off_world() {
            enemies.remove(i);
        }
    }

    TickOutcome::Continue
}
