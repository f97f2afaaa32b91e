//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (world units) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex batch, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER_HULL: [f32; 4] = [0.4, 0.8, 1.0, 1.0]; // #66ccff
    pub const PLAYER_COCKPIT: [f32; 4] = [0.024, 0.165, 0.227, 1.0]; // #062a3a
    pub const THRUSTER: [f32; 4] = [1.0, 0.55, 0.0, 0.6];
    pub const BULLET: [f32; 4] = [1.0, 0.82, 0.4, 1.0]; // #ffd166
    pub const ENEMY_HULL: [f32; 4] = [1.0, 0.42, 0.42, 1.0]; // #ff6b6b
    pub const ENEMY_COCKPIT: [f32; 4] = [0.17, 0.043, 0.043, 1.0]; // #2b0b0b
    pub const ENEMY_GLOW: [f32; 4] = [1.0, 0.55, 0.0, 0.3];
    pub const SPARK_AMBER: [f32; 4] = [1.0, 0.82, 0.4, 1.0];
    pub const SPARK_RED: [f32; 4] = [1.0, 0.42, 0.42, 1.0];
    pub const BACKGROUND_TOP: [f32; 4] = [0.0, 0.067, 0.13, 1.0]; // #001121
    pub const BACKGROUND_BOTTOM: [f32; 4] = [0.027, 0.07, 0.15, 1.0]; // #071226
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::new(1.0, 2.0, colors::BULLET); 3];
        assert_eq!(as_bytes(&verts).len(), 72);
    }
}
