use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{debug, info, warn};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::audio_engine::settings::AudioEngineSettings;
use crate::audio_engine::synth::{Mixer, SoundKind};
use crate::audio_engine::AudioEngine;

/// Erreurs possibles à l'initialisation du thread audio
#[derive(Debug, thiserror::Error)]
enum AudioThreadError {
    #[error("No audio output device available")]
    NoDevice,
    #[error("Failed to build audio stream: {0}")]
    StreamBuildFailed(#[from] cpal::BuildStreamError),
    #[error("Failed to start audio stream: {0}")]
    StreamPlayFailed(#[from] cpal::PlayStreamError),
}

/// Commandes envoyées (sans attente) au thread audio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    Play(SoundKind),
    SetGain(f32),
}

/// Moteur audio synthétisé : un thread cpal + une file de commandes crossbeam.
pub struct SynthAudio {
    settings: AudioEngineSettings,
    sender: Sender<AudioCommand>,
    receiver: Receiver<AudioCommand>,
    running_pair: Arc<(Mutex<bool>, Condvar)>,
    handle: Option<JoinHandle<()>>,
    muted: bool,
}

impl SynthAudio {
    pub fn new(settings: AudioEngineSettings) -> Self {
        let (sender, receiver) = bounded(settings.command_queue_len());
        Self {
            settings,
            sender,
            receiver,
            running_pair: Arc::new((Mutex::new(false), Condvar::new())),
            handle: None,
            muted: false,
        }
    }

    pub fn settings(&self) -> &AudioEngineSettings {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    fn send(&self, command: AudioCommand) {
        match self.sender.try_send(command) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => debug!("Audio queue full, dropping {:?}", command),
            Err(TrySendError::Disconnected(_)) => {}
        }
    }

    fn play(&self, kind: SoundKind) {
        if self.muted || self.handle.is_none() {
            return;
        }
        self.send(AudioCommand::Play(kind));
    }

    fn set_running(&self, value: bool) {
        let (lock, cvar) = &*self.running_pair;
        let mut running = lock.lock().expect("Failed to lock running state");
        *running = value;
        cvar.notify_all();
    }

    pub fn start_audio_thread(&mut self) {
        if self.handle.is_some() {
            return;
        }
        info!("🚀 Starting Audio Engine ...");
        self.set_running(true);

        let settings = self.settings.clone();
        let receiver = self.receiver.clone();
        let running_pair = self.running_pair.clone();
        let initial_gain = if self.muted { 0.0 } else { settings.master_gain() };

        let spawned = thread::Builder::new()
            .name("audio".into())
            .spawn(move || {
                let audio_result =
                    run_output_stream(&settings, receiver.clone(), initial_gain, &running_pair);

                if let Err(e) = audio_result {
                    warn!(
                        "⚠️ Audio thread failed to initialize: {}. Running in silent mode.",
                        e
                    );
                    warn!("   The application will continue without audio output.");

                    // Mode silencieux : on vide la file jusqu'au signal d'arrêt
                    wait_until_stopped(&running_pair, || while receiver.try_recv().is_ok() {});
                    info!("🔇 Silent mode audio thread: terminé");
                }
            });

        match spawned {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => {
                warn!("⚠️ Could not spawn audio thread: {}", e);
                self.set_running(false);
            }
        }
    }

    pub fn stop_audio_thread(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        info!("🧹 Fermeture de l'Audio Engine");
        self.set_running(false);
        if handle.join().is_err() {
            warn!("Audio thread panicked");
        }
    }
}

/// Attend le signal d'arrêt en exécutant `tick` toutes les 100 ms.
fn wait_until_stopped(running_pair: &Arc<(Mutex<bool>, Condvar)>, mut tick: impl FnMut()) {
    let (lock, cvar) = &**running_pair;
    let mut running = lock.lock().expect("Failed to lock running state");
    while *running {
        let result = cvar
            .wait_timeout(running, Duration::from_millis(100))
            .expect("Failed to wait on condvar");
        running = result.0;
        tick();
    }
}

fn run_output_stream(
    settings: &AudioEngineSettings,
    receiver: Receiver<AudioCommand>,
    initial_gain: f32,
    running_pair: &Arc<(Mutex<bool>, Condvar)>,
) -> Result<(), AudioThreadError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(AudioThreadError::NoDevice)?;

    let channels = 2;
    let config = cpal::StreamConfig {
        channels,
        sample_rate: cpal::SampleRate(settings.sample_rate()),
        buffer_size: cpal::BufferSize::Fixed(settings.block_size() as u32),
    };

    let mut mixer = Mixer::new(settings);
    mixer.set_gain(initial_gain);

    let stream = device.build_output_stream(
        &config,
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            while let Ok(command) = receiver.try_recv() {
                match command {
                    AudioCommand::Play(kind) => {
                        mixer.trigger(kind);
                    }
                    AudioCommand::SetGain(gain) => mixer.set_gain(gain),
                }
            }
            mixer.render(data, channels as usize);
        },
        move |err| warn!("CPAL error: {:?}", err),
        None,
    )?;
    stream.play()?;

    info!(
        "🔊 Thread audio: {} Hz, bloc {} frames",
        settings.sample_rate(),
        settings.block_size()
    );
    wait_until_stopped(running_pair, || {});

    // Drop du stream pour fermer CPAL proprement
    drop(stream);
    info!("🔇 Thread audio: terminé");
    Ok(())
}

impl AudioEngine for SynthAudio {
    fn play_launch(&self) {
        self.play(SoundKind::Launch);
    }

    fn play_explosion(&self) {
        self.play(SoundKind::Explosion);
    }

    fn start_audio_thread(&mut self) {
        self.start_audio_thread()
    }

    fn stop_audio_thread(&mut self) {
        self.stop_audio_thread()
    }

    fn mute(&mut self) {
        self.muted = true;
        self.send(AudioCommand::SetGain(0.0));
    }

    fn unmute(&mut self) -> f32 {
        self.muted = false;
        let gain = self.settings.master_gain();
        self.send(AudioCommand::SetGain(gain));
        gain
    }
}

impl Drop for SynthAudio {
    fn drop(&mut self) {
        self.stop_audio_thread();
    }
}
