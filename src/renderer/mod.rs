//! Render adapter
//!
//! Turns a [`Snapshot`] into a flat, colored triangle list in world units.
//! Rasterizing it (and scaling the 900x1400 world to the screen) is the
//! host's job; nothing here touches a graphics API.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, as_bytes, colors};

use glam::Vec2;

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::session::Snapshot;
use crate::settings::Settings;

/// Tessellate a frame: background, particles, enemies, bullets, then the ship
pub fn build_frame(snapshot: &Snapshot, settings: &Settings) -> Vec<Vertex> {
    let quads = 1
        + snapshot.bullets.len()
        + snapshot.enemies.len() * 3
        + snapshot.particles.len()
        + 3;
    let mut out = Vec::with_capacity(quads * 6);

    out.extend(shapes::gradient_quad(
        Vec2::ZERO,
        Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
        colors::BACKGROUND_TOP,
        colors::BACKGROUND_BOTTOM,
    ));

    if settings.particles {
        for p in &snapshot.particles {
            shapes::particle(p, &mut out);
        }
    }
    for e in &snapshot.enemies {
        shapes::enemy(e, &mut out);
    }
    for b in &snapshot.bullets {
        shapes::bullet(b, &mut out);
    }
    if snapshot.player.alive {
        shapes::player(&snapshot.player, &mut out);
    }

    out
}
