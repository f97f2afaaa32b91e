//! Axis-aligned bounding box tests
//!
//! Every collision in the game is box against box. Boxes are stored by their
//! top-left corner; centre-anchored entities convert through
//! [`Aabb::from_center`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Bullet;

/// Axis-aligned box, top-left corner plus extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the given full size centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            w: size.x,
            h: size.y,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        rects_collide(
            self.x, self.y, self.w, self.h, other.x, other.y, other.w, other.h,
        )
    }
}

/// Strict overlap: boxes that merely share an edge do not collide
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn rects_collide(ax: f32, ay: f32, aw: f32, ah: f32, bx: f32, by: f32, bw: f32, bh: f32) -> bool {
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

/// Index of the first bullet touching `target`, scanning newest to oldest.
///
/// The scan order is the tie-break when several bullets overlap the same
/// target in one tick.
pub fn first_hit(bullets: &[Bullet], target: &Aabb) -> Option<usize> {
    (0..bullets.len())
        .rev()
        .find(|&j| bullets[j].bounds().overlaps(target))
}
