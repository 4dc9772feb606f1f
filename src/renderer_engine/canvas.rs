use glam::Vec2;

use crate::renderer_engine::color::Rgba;

/// Mode de composition appliqué aux dessins suivants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Composition standard (`source-over`).
    #[default]
    SourceOver,
    /// Efface la destination proportionnellement à l'alpha source (`destination-out`).
    DestinationOut,
    /// Addition des couleurs, saturée à 1 (`lighter`).
    Lighter,
}

/// Surface de dessin 2D persistante, en coordonnées logiques (y vers le bas).
pub trait Canvas {
    /// Taille logique (largeur, hauteur).
    fn logical_size(&self) -> (f32, f32);

    fn blend_mode(&self) -> BlendMode;
    fn set_blend_mode(&mut self, mode: BlendMode);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    /// Trait continu passant par `points` (au moins deux points pour dessiner quelque chose).
    fn stroke_polyline(&mut self, points: &[Vec2], line_width: f32, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}
