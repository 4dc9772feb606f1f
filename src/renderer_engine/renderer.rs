use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::physic_engine::{Particle, PhysicEngineFull, Rocket};
use crate::renderer_engine::{
    canvas::{BlendMode, Canvas},
    color::Rgba,
    config::RendererConfig,
    error::SurfaceError,
    frame_buffer::FrameBuffer,
    RendererEngine,
};

/// Dessine une fusée : segment du plus ancien point de traînée jusqu'à la
/// position courante, puis le marqueur de cible.
pub fn draw_rocket<C: Canvas>(canvas: &mut C, rocket: &Rocket, config: &RendererConfig) {
    if let Some(tail) = rocket.trail().oldest() {
        canvas.stroke_polyline(
            &[tail, rocket.pos()],
            config.rocket_line_width,
            Rgba::from_hsl(rocket.hue, 100.0, rocket.brightness),
        );
    }
    canvas.fill_circle(
        rocket.target(),
        config.target_marker_radius,
        Rgba::from_hsla(rocket.hue, 100.0, 50.0, config.target_marker_alpha),
    );
}

/// Dessine une particule : traînée complète, plus une étincelle éventuelle.
pub fn draw_particle<C: Canvas>(
    canvas: &mut C,
    particle: &Particle,
    config: &RendererConfig,
    sparkle: bool,
) {
    canvas.stroke_polyline(
        particle.trail().as_slice(),
        config.particle_line_width,
        Rgba::from_hsla(particle.hue, 100.0, 60.0, particle.alpha),
    );

    if sparkle {
        let half = config.sparkle_size * 0.5;
        canvas.fill_rect(
            particle.pos.x - half,
            particle.pos.y - half,
            config.sparkle_size,
            config.sparkle_size,
            Rgba::from_hsla(particle.hue, 100.0, 90.0, particle.alpha),
        );
    }
}

/// Passe de rendu complète sur n'importe quel `Canvas` :
/// voile `destination-out`, puis tout en `lighter`.
pub fn render_scene<C: Canvas, P: PhysicEngineFull, R: Rng>(
    canvas: &mut C,
    physic: &P,
    config: &RendererConfig,
    rng: &mut R,
) {
    let (width, height) = canvas.logical_size();

    canvas.set_blend_mode(BlendMode::DestinationOut);
    canvas.fill_rect(0.0, 0.0, width, height, Rgba::black(config.fade_alpha));

    canvas.set_blend_mode(BlendMode::Lighter);
    for rocket in physic.iter_rockets() {
        draw_rocket(canvas, rocket, config);
    }
    // Fusées arrivées pendant ce tick : dessinées une dernière fois
    for rocket in physic.arrived_rockets() {
        draw_rocket(canvas, rocket, config);
    }
    for particle in physic.iter_particles() {
        let sparkle = rng.random_bool(config.sparkle_chance);
        draw_particle(canvas, particle, config, sparkle);
    }
}

/// Moteur de rendu logiciel : maintient la surface persistante.
#[derive(Debug)]
pub struct Renderer {
    surface: Option<FrameBuffer>,
    config: RendererConfig,
    rng: StdRng,
    frames_rendered: u64,
}

impl Renderer {
    pub fn new(config: &RendererConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Renderer reproductible (étincelles tirées d'une graine fixe).
    pub fn with_seed(config: &RendererConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &RendererConfig, rng: StdRng) -> Self {
        Self {
            surface: None,
            config: config.clone(),
            rng,
            frames_rendered: 0,
        }
    }

    pub fn surface(&self) -> Option<&FrameBuffer> {
        self.surface.as_ref()
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Exporte la surface courante en PNG (composée sur la couleur de fond).
    pub fn save_snapshot(&self, path: &str) -> anyhow::Result<()> {
        let surface = self
            .surface
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("no render surface to snapshot"))?;
        surface.save_png(path, self.config.background)?;
        info!("📸 Snapshot saved to {}", path);
        Ok(())
    }

    fn resize(&mut self, width: f32, height: f32, dpr: f32) -> Result<(), SurfaceError> {
        let dpr = self.config.device_pixel_ratio.unwrap_or(dpr);

        if let Some(current) = &self.surface {
            let (w, h) = current.logical_size();
            if w == width && h == height && current.dpr() == dpr {
                return Ok(());
            }
        }

        match FrameBuffer::new(width, height, dpr) {
            Ok(surface) => {
                let (pw, ph) = surface.physical_size();
                info!(
                    "🖼 Render surface {}x{} px ({}x{} @ {:.2})",
                    pw, ph, width, height, dpr
                );
                self.surface = Some(surface);
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ Render surface unavailable: {}", e);
                self.surface = None;
                Err(e)
            }
        }
    }

    fn render_frame<P: PhysicEngineFull>(&mut self, physic: &P) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            debug!("render_frame skipped: no surface");
            return false;
        };
        render_scene(surface, physic, &self.config, &mut self.rng);
        self.frames_rendered += 1;
        true
    }
}

impl RendererEngine for Renderer {
    fn resize(&mut self, width: f32, height: f32, dpr: f32) -> Result<(), SurfaceError> {
        self.resize(width, height, dpr)
    }

    fn render_frame<P: PhysicEngineFull>(&mut self, physic: &P) -> bool {
        self.render_frame(physic)
    }

    fn reload_config(&mut self, config: &RendererConfig) {
        self.config = config.clone();
        info!("🔄 Renderer config reloaded");
    }

    fn close(&mut self) {
        self.surface = None;
        debug!("Renderer closed ({} frames)", self.frames_rendered);
    }
}
