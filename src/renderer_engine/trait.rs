use crate::physic_engine::PhysicEngineFull;
use crate::renderer_engine::config::RendererConfig;
use crate::renderer_engine::error::SurfaceError;

pub trait RendererEngine {
    /// (Re)crée la surface pour une taille logique et un facteur d'échelle.
    fn resize(&mut self, width: f32, height: f32, dpr: f32) -> Result<(), SurfaceError>;

    /// Dessine une frame. Retourne `false` si aucune surface n'est disponible.
    fn render_frame<P: PhysicEngineFull>(&mut self, physic: &P) -> bool;

    fn reload_config(&mut self, config: &RendererConfig);

    fn close(&mut self);
}
