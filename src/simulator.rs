use log::{debug, info, warn};
use std::time::Duration;

use crate::audio_engine::AudioEngine;
use crate::input_bridge::LaunchBridge;
use crate::listener::{FireworksListener, NullListener};
use crate::physic_engine::{LaunchError, LaunchRequest, PhysicEngineFull, UpdateResult};
use crate::renderer_engine::{RendererEngine, SurfaceError};

/// Bilan d'un appel à [`Simulator::frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Lancements issus du tir continu pendant cette frame.
    pub repeat_launches: usize,
    pub update: UpdateResult,
    /// `false` si aucune surface n'était disponible pour dessiner.
    pub rendered: bool,
    pub rockets: usize,
    pub particles: usize,
}

/// Ordonnanceur unique : minuterie de tir, physique, audio, rendu.
///
/// Tout se déroule sur le thread appelant, dans l'ordre d'appel de `frame`.
pub struct Simulator<R, P, A>
where
    R: RendererEngine,
    P: PhysicEngineFull,
    A: AudioEngine,
{
    renderer_engine: R,
    physic_engine: P,
    audio_engine: A,
    bridge: LaunchBridge,
    listener: Box<dyn FireworksListener>,

    running: bool,
    frames: u64,
    surface_size: Option<(f32, f32)>,
}

impl<R, P, A> Simulator<R, P, A>
where
    R: RendererEngine,
    P: PhysicEngineFull,
    A: AudioEngine,
{
    pub fn new(renderer_engine: R, physic_engine: P, audio_engine: A, bridge: LaunchBridge) -> Self {
        Self {
            renderer_engine,
            physic_engine,
            audio_engine,
            bridge,
            listener: Box::new(NullListener),
            running: false,
            frames: 0,
            surface_size: None,
        }
    }

    pub fn set_listener(&mut self, listener: Box<dyn FireworksListener>) {
        self.listener = listener;
    }

    // ------------------------------------------------------------------
    // Cycle de vie
    // ------------------------------------------------------------------

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        info!("🎆 Simulator started");
        self.bridge.cancel();
        self.audio_engine.start_audio_thread();
        self.running = true;
    }

    /// Arrête la boucle : tir continu annulé, thread audio arrêté,
    /// les appels suivants à `frame` ne font plus rien.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.bridge.cancel();
        self.audio_engine.stop_audio_thread();
        self.running = false;
        info!("🛑 Simulator stopped after {} frames", self.frames);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn close(&mut self) {
        self.stop();
        self.physic_engine.close();
        self.renderer_engine.close();
        info!("🧹 Simulator closed");
    }

    // ------------------------------------------------------------------
    // Surface
    // ------------------------------------------------------------------

    /// Nouvelle taille logique de la surface (et facteur d'échelle).
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) -> Result<(), SurfaceError> {
        let result = self.renderer_engine.resize(width, height, dpr);
        match result {
            Ok(()) => {
                self.surface_size = Some((width, height));
                self.bridge.set_surface_size(width, height);
            }
            Err(_) => {
                self.surface_size = None;
                self.bridge.set_surface_size(0.0, 0.0);
            }
        }
        result
    }

    pub fn surface_size(&self) -> Option<(f32, f32)> {
        self.surface_size
    }

    // ------------------------------------------------------------------
    // Lancements
    // ------------------------------------------------------------------

    fn ensure_running(&self) -> Result<(), LaunchError> {
        if self.running {
            Ok(())
        } else {
            Err(LaunchError::NotRunning)
        }
    }

    /// Point d'entrée des lancements distants / hôte. Ne notifie pas `on_launch`.
    /// Refusé hors de `start()`/`stop()`.
    pub fn launch(
        &mut self,
        sx: f32,
        sy: f32,
        tx: f32,
        ty: f32,
        hue: Option<f32>,
    ) -> Result<u64, LaunchError> {
        self.ensure_running()?;
        let request = LaunchRequest::new(sx, sy, tx, ty, hue)?;
        let id = self.physic_engine.launch(&request)?;
        self.audio_engine.play_launch();
        Ok(id)
    }

    /// Lancement local : comme `launch`, puis notifie `on_launch`.
    pub fn launch_local(&mut self, request: &LaunchRequest) -> Result<u64, LaunchError> {
        self.ensure_running()?;
        let id = self.physic_engine.launch(request)?;
        self.audio_engine.play_launch();
        self.listener.on_launch(request);
        Ok(id)
    }

    /// Arrêté, le pointeur n'est pas enregistré et le tir continu n'est pas armé.
    pub fn pointer_down(&mut self, x: f32, y: f32, now: Duration) -> Result<u64, LaunchError> {
        self.ensure_running()?;
        let request = self.bridge.pointer_down(x, y, now)?;
        self.launch_local(&request)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.bridge.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.bridge.pointer_up();
    }

    pub fn pointer_cancel(&mut self) {
        self.bridge.pointer_cancel();
    }

    pub fn pointer_leave(&mut self) {
        self.bridge.pointer_leave();
    }

    // ------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------

    /// Une frame complète à l'instant logique `now`.
    pub fn frame(&mut self, now: Duration) -> FrameStats {
        if !self.running {
            return FrameStats::default();
        }

        let mut stats = FrameStats::default();

        for request in self.bridge.poll(now) {
            match self.launch_local(&request) {
                Ok(_) => stats.repeat_launches += 1,
                Err(e) => debug!("Repeat launch rejected: {}", e),
            }
        }

        stats.update = self.physic_engine.update();

        for explosion in self.physic_engine.explosions() {
            self.audio_engine.play_explosion();
            self.listener.on_explode(explosion);
        }

        stats.rendered = self.renderer_engine.render_frame(&self.physic_engine);
        if !stats.rendered && self.frames % 600 == 0 {
            warn!("⚠️ Frame {} not rendered: no surface", self.frames);
        }

        stats.rockets = self.physic_engine.rockets_count();
        stats.particles = self.physic_engine.particles_count();
        self.frames += 1;
        stats
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    // ------------------------------------------------------------------
    // Accès
    // ------------------------------------------------------------------

    pub fn physic(&self) -> &P {
        &self.physic_engine
    }

    pub fn physic_mut(&mut self) -> &mut P {
        &mut self.physic_engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer_engine
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer_engine
    }

    pub fn audio(&self) -> &A {
        &self.audio_engine
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio_engine
    }

    pub fn bridge(&self) -> &LaunchBridge {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut LaunchBridge {
        &mut self.bridge
    }
}
