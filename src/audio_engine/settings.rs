// =========================
// Audio Engine Configuration
// =========================

use derive_builder::Builder;

/// Paramètres du synthétiseur : gain global, flux cpal, filtrage.
///
/// La configuration passe exclusivement par le builder :
///
/// ```
/// use fireworks_room::audio_engine::AudioEngineSettingsBuilder;
/// let settings = AudioEngineSettingsBuilder::default()
///     .master_gain(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(settings.max_voices(), 32);
/// ```
#[derive(Clone, Builder, Debug)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
pub struct AudioEngineSettings {
    /// Gain appliqué au mix final (avant soft clip)
    #[builder(default = "0.3")]
    master_gain: f32,

    /// Fréquence d'échantillonnage du flux de sortie
    #[builder(default = "48_000")]
    sample_rate: u32,

    /// Taille de bloc demandée au périphérique (frames)
    #[builder(default = "512")]
    block_size: usize,

    /// Nombre maximal de voix simultanées ; au-delà, les sons sont ignorés
    #[builder(default = "32")]
    max_voices: usize,

    /// Fréquence de coupure du passe-bas appliqué au bruit des explosions
    #[builder(default = "1000.0")]
    lowpass_cutoff_hz: f32,

    /// Capacité de la file de commandes vers le thread audio
    #[builder(default = "256")]
    command_queue_len: usize,
}

impl AudioEngineSettings {
    pub fn master_gain(&self) -> f32 {
        self.master_gain
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn max_voices(&self) -> usize {
        self.max_voices
    }

    pub fn lowpass_cutoff_hz(&self) -> f32 {
        self.lowpass_cutoff_hz
    }

    pub fn command_queue_len(&self) -> usize {
        self.command_queue_len
    }
}

impl Default for AudioEngineSettings {
    fn default() -> Self {
        Self {
            master_gain: 0.3,
            sample_rate: 48_000,
            block_size: 512,
            max_voices: 32,
            lowpass_cutoff_hz: 1000.0,
            command_queue_len: 256,
        }
    }
}
