use bytemuck::{Pod, Zeroable};
use gl::types::*;
use memoffset::offset_of;
use std::mem;

/// Sommet du quad plein écran utilisé pour présenter la surface CPU.
///
/// # Layout mémoire GPU
///
/// | Location | Type   | Champs            |
/// |:--------:|:-------|:------------------|
/// | `0`      | `vec2` | `pos_x`, `pos_y`  |
/// | `1`      | `vec2` | `u`, `v`          |
///
/// **Stride total** : `4 × f32 = 16 octets`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Position en coordonnées normalisées (NDC).
    pub pos_x: f32,
    pub pos_y: f32,
    /// Coordonnées de texture ; `v = 0` en haut de la surface.
    pub u: f32,
    pub v: f32,
}

impl QuadVertex {
    pub const fn new(pos_x: f32, pos_y: f32, u: f32, v: f32) -> Self {
        Self { pos_x, pos_y, u, v }
    }

    /// Deux triangles couvrant l'écran. Les lignes de la surface CPU vont du
    /// haut vers le bas, d'où `v` inversé par rapport à `pos_y`.
    pub const FULLSCREEN: [QuadVertex; 6] = [
        QuadVertex::new(-1.0, -1.0, 0.0, 1.0),
        QuadVertex::new(1.0, -1.0, 1.0, 1.0),
        QuadVertex::new(1.0, 1.0, 1.0, 0.0),
        QuadVertex::new(-1.0, -1.0, 0.0, 1.0),
        QuadVertex::new(1.0, 1.0, 1.0, 0.0),
        QuadVertex::new(-1.0, 1.0, 0.0, 0.0),
    ];

    /// Configure les attributs de sommets.
    ///
    /// ⚠️ Pré-requis : le VAO et le VBO doivent déjà être liés.
    pub fn setup_vertex_attribs() {
        let stride = mem::size_of::<Self>() as GLsizei;

        unsafe {
            // Attribut 0 : position (x, y)
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, pos_x) as *const _,
            );
            gl::EnableVertexAttribArray(0);

            // Attribut 1 : uv
            gl::VertexAttribPointer(
                1,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, u) as *const _,
            );
            gl::EnableVertexAttribArray(1);
        }
    }
}
