//! Synthèse des deux sons du jeu, sans dépendance au périphérique audio.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::audio_engine::settings::AudioEngineSettings;

// Sifflement de lancement
pub const LAUNCH_DURATION_S: f32 = 0.3;
pub const LAUNCH_FREQ_START_HZ: f32 = 150.0;
pub const LAUNCH_FREQ_END_HZ: f32 = 600.0;
pub const LAUNCH_ATTACK_S: f32 = 0.05;
pub const LAUNCH_PEAK_GAIN: f32 = 0.5;

// Explosion
pub const EXPLOSION_DURATION_S: f32 = 1.0;
pub const EXPLOSION_START_GAIN: f32 = 1.0;

/// Gain final des rampes exponentielles (une rampe exponentielle ne peut pas atteindre 0).
pub const RAMP_FLOOR_GAIN: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Launch,
    Explosion,
}

impl SoundKind {
    pub fn duration_s(self) -> f32 {
        match self {
            SoundKind::Launch => LAUNCH_DURATION_S,
            SoundKind::Explosion => EXPLOSION_DURATION_S,
        }
    }
}

/// Rampe exponentielle de `from` vers `to` pour `t` dans [0, duration].
#[inline]
fn exp_ramp(from: f32, to: f32, t: f32, duration: f32) -> f32 {
    let x = (t / duration).clamp(0.0, 1.0);
    from * (to / from).powf(x)
}

/// Fréquence instantanée du sifflement : 150 → 600 Hz, exponentielle sur 0.3 s.
pub fn launch_frequency(t: f32) -> f32 {
    exp_ramp(LAUNCH_FREQ_START_HZ, LAUNCH_FREQ_END_HZ, t, LAUNCH_DURATION_S)
}

/// Enveloppe du sifflement : attaque linéaire 0 → 0.5 en 0.05 s,
/// puis décroissance exponentielle jusqu'à 0.01 à 0.3 s.
pub fn launch_gain(t: f32) -> f32 {
    if t < 0.0 {
        0.0
    } else if t < LAUNCH_ATTACK_S {
        LAUNCH_PEAK_GAIN * t / LAUNCH_ATTACK_S
    } else {
        exp_ramp(
            LAUNCH_PEAK_GAIN,
            RAMP_FLOOR_GAIN,
            t - LAUNCH_ATTACK_S,
            LAUNCH_DURATION_S - LAUNCH_ATTACK_S,
        )
    }
}

/// Enveloppe de l'explosion : 1 → 0.01 exponentielle sur 1 s.
pub fn explosion_gain(t: f32) -> f32 {
    exp_ramp(EXPLOSION_START_GAIN, RAMP_FLOOR_GAIN, t, EXPLOSION_DURATION_S)
}

/// Coefficient d'un passe-bas à un pôle : `y += a * (x - y)`.
pub fn lowpass_coefficient(cutoff_hz: f32, sample_rate: u32) -> f32 {
    1.0 - (-TAU * cutoff_hz / sample_rate as f32).exp()
}

/// Une instance de son en cours de lecture.
#[derive(Debug, Clone)]
pub struct Voice {
    kind: SoundKind,
    index: usize,
    length: usize,
    phase: f32,
    lowpass_state: f32,
}

impl Voice {
    pub fn new(kind: SoundKind, sample_rate: u32) -> Self {
        Self {
            kind,
            index: 0,
            length: (kind.duration_s() * sample_rate as f32).round() as usize,
            phase: 0.0,
            lowpass_state: 0.0,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.index >= self.length
    }

    pub fn kind(&self) -> SoundKind {
        self.kind
    }

    /// Échantillon suivant (mono). `noise` fournit le bruit blanc des explosions.
    pub fn next_sample<R: Rng>(&mut self, sample_rate: u32, lowpass_a: f32, noise: &mut R) -> f32 {
        if self.is_finished() {
            return 0.0;
        }
        let t = self.index as f32 / sample_rate as f32;
        self.index += 1;

        match self.kind {
            SoundKind::Launch => {
                let s = self.phase.sin() * launch_gain(t);
                self.phase = (self.phase + TAU * launch_frequency(t) / sample_rate as f32) % TAU;
                s
            }
            SoundKind::Explosion => {
                let x: f32 = noise.random_range(-1.0..=1.0);
                self.lowpass_state += lowpass_a * (x - self.lowpass_state);
                self.lowpass_state * explosion_gain(t)
            }
        }
    }
}

/// Mixeur : voix actives, gain global, soft clip `tanh`.
#[derive(Debug)]
pub struct Mixer {
    voices: Vec<Voice>,
    max_voices: usize,
    sample_rate: u32,
    lowpass_a: f32,
    gain: f32,
    noise: StdRng,
}

impl Mixer {
    pub fn new(settings: &AudioEngineSettings) -> Self {
        Self {
            voices: Vec::with_capacity(settings.max_voices()),
            max_voices: settings.max_voices(),
            sample_rate: settings.sample_rate(),
            lowpass_a: lowpass_coefficient(settings.lowpass_cutoff_hz(), settings.sample_rate()),
            gain: settings.master_gain(),
            noise: StdRng::seed_from_u64(0x5EED),
        }
    }

    /// Démarre un son. Retourne `false` si toutes les voix sont occupées.
    pub fn trigger(&mut self, kind: SoundKind) -> bool {
        if self.voices.len() >= self.max_voices {
            debug!("🔇 No free voice for {:?}", kind);
            return false;
        }
        self.voices.push(Voice::new(kind, self.sample_rate));
        true
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Remplit un buffer entrelacé de `channels` canaux (même signal sur chaque canal).
    pub fn render(&mut self, out: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        for frame in out.chunks_mut(channels) {
            let mut acc = 0.0;
            for voice in self.voices.iter_mut() {
                acc += voice.next_sample(self.sample_rate, self.lowpass_a, &mut self.noise);
            }
            let sample = (acc * self.gain).tanh();
            frame.fill(sample);
        }
        self.voices.retain(|v| !v.is_finished());
    }
}
