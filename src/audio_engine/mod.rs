pub mod r#trait;
pub use r#trait::AudioEngine;

pub mod settings;
pub use settings::{AudioEngineSettings, AudioEngineSettingsBuilder};

pub mod synth;
pub use synth::{Mixer, SoundKind};

pub mod synth_audio;
pub use synth_audio::{AudioCommand, SynthAudio};

pub mod silent_audio;
pub use silent_audio::SilentAudio;
