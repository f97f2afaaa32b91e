//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in world units (y down).

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{Bullet, Enemy, Particle, ParticleColor, Player};

/// Side of the square drawn for each particle
pub const PARTICLE_SIZE: f32 = 6.0;

/// Cooldown below which the thruster flame shows
const THRUSTER_COOLDOWN_MS: f32 = 200.0;

/// Two triangles covering `[min, min + size]`
pub fn quad(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    let tl = Vertex::new(min.x, min.y, color);
    let tr = Vertex::new(max.x, min.y, color);
    let bl = Vertex::new(min.x, max.y, color);
    let br = Vertex::new(max.x, max.y, color);
    [tl, bl, tr, tr, bl, br]
}

/// Vertical gradient quad (top color to bottom color)
pub fn gradient_quad(min: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    let tl = Vertex::new(min.x, min.y, top);
    let tr = Vertex::new(max.x, min.y, top);
    let bl = Vertex::new(min.x, max.y, bottom);
    let br = Vertex::new(max.x, max.y, bottom);
    [tl, bl, tr, tr, bl, br]
}

/// Ship hull, cockpit and (when the gun is nearly ready) thruster
pub fn player(player: &Player, out: &mut Vec<Vertex>) {
    let size = Vec2::new(player.width, player.height);
    out.extend(quad(player.pos - size / 2.0, size, colors::PLAYER_HULL));
    out.extend(quad(
        player.pos + Vec2::new(-12.0, -10.0),
        Vec2::new(24.0, 14.0),
        colors::PLAYER_COCKPIT,
    ));
    if player.cooldown_ms < THRUSTER_COOLDOWN_MS {
        out.extend(quad(
            player.pos + Vec2::new(-12.0, player.height / 2.0),
            Vec2::new(24.0, 12.0),
            colors::THRUSTER,
        ));
    }
}

pub fn bullet(bullet: &Bullet, out: &mut Vec<Vertex>) {
    let size = Vec2::new(bullet.width, bullet.height);
    out.extend(quad(bullet.pos - size / 2.0, size, colors::BULLET));
}

/// Hull, cockpit strip and engine glow, proportional to the enemy size
pub fn enemy(enemy: &Enemy, out: &mut Vec<Vertex>) {
    let s = enemy.size;
    out.extend(quad(enemy.pos, Vec2::splat(s), colors::ENEMY_HULL));
    out.extend(quad(
        enemy.pos + Vec2::new(s * 0.2, s * 0.15),
        Vec2::new(s * 0.6, s * 0.2),
        colors::ENEMY_COCKPIT,
    ));
    out.extend(quad(
        enemy.pos + Vec2::new(s * 0.35, s - 8.0),
        Vec2::new(s * 0.3, 6.0),
        colors::ENEMY_GLOW,
    ));
}

/// Centred square faded by remaining life
pub fn particle(particle: &Particle, out: &mut Vec<Vertex>) {
    let mut color = match particle.color {
        ParticleColor::Amber => colors::SPARK_AMBER,
        ParticleColor::Red => colors::SPARK_RED,
    };
    color[3] *= particle.alpha();
    let half = Vec2::splat(PARTICLE_SIZE / 2.0);
    out.extend(quad(particle.pos - half, half * 2.0, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_covers_rect() {
        let q = quad(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), colors::BULLET);
        let xs: Vec<f32> = q.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = q.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 4.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 2.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 6.0);
    }

    #[test]
    fn test_particle_alpha_applied() {
        let p = Particle {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::ZERO,
            life_ms: 1000.0,
            age_ms: 500.0,
            color: ParticleColor::Red,
        };
        let mut out = Vec::new();
        particle(&p, &mut out);
        assert_eq!(out.len(), 6);
        assert!((out[0].color[3] - 0.5).abs() < 1e-6);
        assert_eq!(out[0].position, [7.0, 7.0]);
    }

    #[test]
    fn test_thruster_follows_cooldown() {
        let mut ship = Player::default();
        let mut out = Vec::new();
        player(&ship, &mut out);
        assert_eq!(out.len(), 18);

        ship.cooldown_ms = 220.0;
        out.clear();
        player(&ship, &mut out);
        assert_eq!(out.len(), 12);
    }
}
