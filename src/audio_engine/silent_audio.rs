use log::debug;

use crate::audio_engine::AudioEngine;

/// Moteur sans sortie : mode headless et snapshots.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio {
    muted: bool,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl AudioEngine for SilentAudio {
    fn play_launch(&self) {}

    fn play_explosion(&self) {}

    fn start_audio_thread(&mut self) {
        debug!("SilentAudio: no audio thread");
    }

    fn stop_audio_thread(&mut self) {}

    fn mute(&mut self) {
        self.muted = true;
    }

    fn unmute(&mut self) -> f32 {
        self.muted = false;
        0.0
    }
}
