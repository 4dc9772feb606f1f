#![allow(dead_code)]

use fireworks_room::audio_engine::AudioEngine;
use fireworks_room::listener::FireworksListener;
use fireworks_room::physic_engine::{Explosion, LaunchRequest, PhysicEngineFull};
use fireworks_room::renderer_engine::{RendererConfig, RendererEngine, SurfaceError};
use std::cell::RefCell;
use std::rc::Rc;

pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn count(log: &CallLog, call: &str) -> usize {
    log.borrow().iter().filter(|c| c.as_str() == call).count()
}

/// Moteur audio qui journalise les appels.
pub struct TestAudio {
    pub log: CallLog,
}

impl TestAudio {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl AudioEngine for TestAudio {
    fn play_launch(&self) {
        self.log.borrow_mut().push("audio.play_launch".into());
    }

    fn play_explosion(&self) {
        self.log.borrow_mut().push("audio.play_explosion".into());
    }

    fn start_audio_thread(&mut self) {
        self.log.borrow_mut().push("audio.start".into());
    }

    fn stop_audio_thread(&mut self) {
        self.log.borrow_mut().push("audio.stop".into());
    }

    fn mute(&mut self) {}

    fn unmute(&mut self) -> f32 {
        0.0
    }
}

/// Renderer sans surface réelle : accepte toute taille positive, ne dessine rien.
pub struct TestRenderer {
    pub log: CallLog,
    surface: Option<(f32, f32)>,
}

impl TestRenderer {
    pub fn new(log: CallLog) -> Self {
        Self { log, surface: None }
    }
}

impl RendererEngine for TestRenderer {
    fn resize(&mut self, width: f32, height: f32, dpr: f32) -> Result<(), SurfaceError> {
        self.log.borrow_mut().push("renderer.resize".into());
        if width > 0.0 && height > 0.0 && dpr > 0.0 {
            self.surface = Some((width, height));
            Ok(())
        } else {
            self.surface = None;
            Err(SurfaceError::InvalidSize { width, height, dpr })
        }
    }

    fn render_frame<P: PhysicEngineFull>(&mut self, _physic: &P) -> bool {
        self.log.borrow_mut().push("renderer.render_frame".into());
        self.surface.is_some()
    }

    fn reload_config(&mut self, _config: &RendererConfig) {}

    fn close(&mut self) {
        self.log.borrow_mut().push("renderer.close".into());
    }
}

/// Listener qui conserve tous les événements reçus.
#[derive(Clone, Default)]
pub struct RecordingListener {
    pub launches: Rc<RefCell<Vec<LaunchRequest>>>,
    pub explosions: Rc<RefCell<Vec<Explosion>>>,
}

impl FireworksListener for RecordingListener {
    fn on_launch(&mut self, request: &LaunchRequest) {
        self.launches.borrow_mut().push(*request);
    }

    fn on_explode(&mut self, explosion: &Explosion) {
        self.explosions.borrow_mut().push(*explosion);
    }
}
