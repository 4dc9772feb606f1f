pub mod simulator;
pub use simulator::{FrameStats, Simulator};
// Physic engine
pub mod physic_engine;
pub use physic_engine::{LaunchError, LaunchRequest, PhysicEngine};
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::RendererEngine;
// Audio engine
pub mod audio_engine;
pub use audio_engine::AudioEngine;
pub use audio_engine::AudioEngineSettings;
// Pointeur -> lancements
pub mod input_bridge;
// Événements sortants
pub mod listener;
pub use listener::{FireworksEvent, FireworksListener};
// Salon multijoueur
pub mod room;

// Application fenêtrée
pub mod app;
pub mod overlay;
pub mod snapshot;
pub mod window_engine;

// Utilities
pub mod utils;
