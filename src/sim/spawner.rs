//! Adaptive-rate enemy spawner
//!
//! Each spawn shrinks the interval by a fixed factor until it reaches the
//! floor, giving a difficulty ramp that flattens out.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Enemy;
use crate::consts::*;

/// Spawn accumulator and current interval (both ms)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    pub accumulator_ms: f32,
    pub interval_ms: f32,
    /// Enemies spawned since the last reset
    pub spawned: u32,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self {
            accumulator_ms: 0.0,
            interval_ms: SPAWN_INTERVAL_START_MS,
            spawned: 0,
        }
    }
}

impl SpawnTimer {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Accumulate `dt` seconds; once the interval is exceeded, restart the
    /// accumulator, shrink the interval and return a fresh enemy.
    pub fn advance(&mut self, dt: f32, rng: &mut impl Rng) -> Option<Enemy> {
        self.accumulator_ms += (dt * 1000.0).max(0.0);
        if self.accumulator_ms <= self.interval_ms {
            return None;
        }
        self.accumulator_ms = 0.0;
        self.interval_ms = next_interval(self.interval_ms);
        self.spawned += 1;
        Some(spawn_enemy(rng))
    }
}

/// One decay step, floored
#[inline]
pub fn next_interval(interval_ms: f32) -> f32 {
    (interval_ms * SPAWN_INTERVAL_DECAY).max(SPAWN_INTERVAL_FLOOR_MS)
}

/// Interval after `spawns` decay steps from the starting interval
pub fn interval_after(spawns: u32) -> f32 {
    (0..spawns).fold(SPAWN_INTERVAL_START_MS, |i, _| next_interval(i))
}

/// A new enemy just above the top edge, fully inside the side margins
pub fn spawn_enemy(rng: &mut impl Rng) -> Enemy {
    let size = rng.random_range(ENEMY_MIN_SIZE..ENEMY_MAX_SIZE);
    let x = rng.random_range(ENEMY_SIDE_MARGIN..WORLD_WIDTH - ENEMY_SIDE_MARGIN - size);
    let y = -size - ENEMY_SPAWN_GAP;
    let speed = rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
    let hp = 1 + rng.random_range(0..2u8);
    Enemy {
        pos: Vec2::new(x, y),
        size,
        speed,
        hp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawns_only_after_interval_exceeded() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut timer = SpawnTimer::default();
        // 900 ms exactly is not enough (strictly greater)
        for _ in 0..45 {
            assert!(timer.advance(0.020, &mut rng).is_none());
        }
        assert!((timer.accumulator_ms - 900.0).abs() < 0.01);
        let enemy = timer.advance(0.020, &mut rng);
        assert!(enemy.is_some());
        assert_eq!(timer.accumulator_ms, 0.0);
        assert!((timer.interval_ms - 900.0 * 0.985).abs() < 1e-3);
        assert_eq!(timer.spawned, 1);
    }

    #[test]
    fn test_zero_dt_never_spawns() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut timer = SpawnTimer::default();
        for _ in 0..1000 {
            assert!(timer.advance(0.0, &mut rng).is_none());
        }
        assert_eq!(timer.accumulator_ms, 0.0);
    }

    #[test]
    fn test_enemy_ranges() {
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..2000 {
            let e = spawn_enemy(&mut rng);
            assert!((ENEMY_MIN_SIZE..ENEMY_MAX_SIZE).contains(&e.size));
            assert!((ENEMY_MIN_SPEED..ENEMY_MAX_SPEED).contains(&e.speed));
            assert!(e.hp == 1 || e.hp == 2);
            assert!(e.pos.x >= ENEMY_SIDE_MARGIN);
            assert!(e.pos.x + e.size <= WORLD_WIDTH - ENEMY_SIDE_MARGIN);
            // Entirely above the visible top edge
            assert!(e.pos.y + e.size < 0.0);
        }
    }

    #[test]
    fn test_interval_converges_to_floor() {
        assert_eq!(interval_after(0), SPAWN_INTERVAL_START_MS);
        assert_eq!(interval_after(500), SPAWN_INTERVAL_FLOOR_MS);
        // 900 * 0.985^k drops below 420 between k = 50 and 51
        assert!(interval_after(50) > SPAWN_INTERVAL_FLOOR_MS);
        assert_eq!(interval_after(51), SPAWN_INTERVAL_FLOOR_MS);
    }

    #[test]
    fn test_reset_restores_start_interval() {
        let mut timer = SpawnTimer {
            accumulator_ms: 300.0,
            interval_ms: 512.0,
            spawned: 12,
        };
        timer.reset();
        assert_eq!(timer, SpawnTimer::default());
    }

    proptest! {
        #[test]
        fn interval_matches_closed_form(k in 0u32..400) {
            let expected = (900.0f64 * 0.985f64.powi(k as i32)).max(420.0);
            let actual = interval_after(k) as f64;
            prop_assert!((actual - expected).abs() < 0.05, "k={} {} vs {}", k, actual, expected);
            prop_assert!(actual >= 420.0);
        }

        #[test]
        fn interval_never_increases(k in 0u32..400) {
            prop_assert!(interval_after(k + 1) <= interval_after(k));
        }
    }
}
