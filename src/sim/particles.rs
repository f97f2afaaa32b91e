//! Explosion particles
//!
//! Bursts are spawned by destruction events and decay on a fixed lifetime.
//! Particles are purely visual: nothing in the simulation reads them back.

use glam::Vec2;
use rand::Rng;

use super::state::{Particle, ParticleColor};
use crate::consts::*;

/// Burst presets used by the collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Burst {
    /// Bullet impact on a surviving or dying enemy
    Hit,
    /// Enemy destroyed
    Destroy,
    /// Player ship destroyed
    PlayerDeath,
}

impl Burst {
    pub fn count(self) -> usize {
        match self {
            Burst::Hit => HIT_BURST,
            Burst::Destroy => DESTROY_BURST,
            Burst::PlayerDeath => PLAYER_DEATH_BURST,
        }
    }

    pub fn color(self) -> ParticleColor {
        match self {
            Burst::Hit => ParticleColor::Amber,
            Burst::Destroy | Burst::PlayerDeath => ParticleColor::Red,
        }
    }
}

/// Push `count` particles at `origin`, each with a uniform random heading,
/// speed and life budget.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    origin: Vec2,
    color: ParticleColor,
    count: usize,
    rng: &mut impl Rng,
) {
    particles.reserve(count);
    for _ in 0..count {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
        let life_ms = rng.random_range(PARTICLE_MIN_LIFE_MS..PARTICLE_MAX_LIFE_MS);
        particles.push(Particle {
            pos: origin,
            vel: Vec2::from_angle(angle) * speed,
            life_ms,
            age_ms: 0.0,
            color,
        });
    }
}

/// Spawn one of the preset bursts
pub fn emit(particles: &mut Vec<Particle>, burst: Burst, origin: Vec2, rng: &mut impl Rng) {
    spawn_burst(particles, origin, burst.color(), burst.count(), rng);
}

/// Age, apply gravity, then integrate; drop anything past its life budget.
///
/// Gravity is applied to velocity before the position update (semi-implicit
/// Euler).
pub fn update_particles(particles: &mut Vec<Particle>, dt: f32) {
    for p in particles.iter_mut() {
        p.age_ms += dt * 1000.0;
        p.vel.y += PARTICLE_GRAVITY * dt;
        p.pos += p.vel * dt;
    }
    particles.retain(Particle::alive);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn still_particle(life_ms: f32) -> Particle {
        Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life_ms,
            age_ms: 0.0,
            color: ParticleColor::Amber,
        }
    }

    #[test]
    fn test_burst_sizes_and_ranges() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut particles = Vec::new();
        let origin = Vec2::new(100.0, 200.0);
        emit(&mut particles, Burst::Destroy, origin, &mut rng);
        assert_eq!(particles.len(), 28);
        for p in &particles {
            assert_eq!(p.pos, origin);
            assert_eq!(p.age_ms, 0.0);
            assert_eq!(p.color, ParticleColor::Red);
            let speed = p.vel.length();
            assert!(speed >= PARTICLE_MIN_SPEED - 1e-3 && speed < PARTICLE_MAX_SPEED + 1e-3);
            assert!((PARTICLE_MIN_LIFE_MS..PARTICLE_MAX_LIFE_MS).contains(&p.life_ms));
        }
        emit(&mut particles, Burst::Hit, origin, &mut rng);
        assert_eq!(particles.len(), 34);
        assert_eq!(particles[33].color, ParticleColor::Amber);
    }

    #[test]
    fn test_lifecycle_boundary() {
        // 100 ms steps: present while age <= life, gone on the first tick past it
        let mut particles = vec![still_particle(500.0)];
        for _ in 0..5 {
            update_particles(&mut particles, 0.1);
            assert_eq!(particles.len(), 1);
        }
        assert!((particles[0].age_ms - 500.0).abs() < 1e-3);
        update_particles(&mut particles, 0.1);
        assert!(particles.is_empty());
    }

    #[test]
    fn test_gravity_trajectory() {
        let dt = 0.02;
        let mut particles = vec![Particle {
            vel: Vec2::new(50.0, -100.0),
            ..still_particle(10_000.0)
        }];

        // Reference semi-implicit Euler in f64
        let (mut x, mut y, mut vy) = (0.0f64, 0.0f64, -100.0f64);
        for _ in 0..30 {
            update_particles(&mut particles, dt);
            vy += 420.0 * dt as f64;
            x += 50.0 * dt as f64;
            y += vy * dt as f64;
        }
        let p = &particles[0];
        assert!((p.pos.x as f64 - x).abs() < 1e-2);
        assert!((p.pos.y as f64 - y).abs() < 1e-2);
        assert!((p.vel.y as f64 - vy).abs() < 1e-2);
        assert!(p.age_ms >= 0.0);
    }

    #[test]
    fn test_zero_dt_is_frozen() {
        let mut particles = vec![Particle {
            vel: Vec2::new(10.0, 10.0),
            ..still_particle(600.0)
        }];
        update_particles(&mut particles, 0.0);
        assert_eq!(particles[0].pos, Vec2::ZERO);
        assert_eq!(particles[0].vel, Vec2::new(10.0, 10.0));
    }
}
