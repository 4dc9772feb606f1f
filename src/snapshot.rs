use log::{debug, info};
use std::time::Duration;

use crate::app::AppConfig;
use crate::audio_engine::SilentAudio;
use crate::input_bridge::LaunchBridge;
use crate::physic_engine::{PhysicConfig, PhysicEngineFireworks};
use crate::renderer_engine::Renderer;
use crate::room::{MockRoom, Player, RoomConfig, RoomState, RoomTransport};
use crate::simulator::Simulator;

pub const SNAPSHOT_SIZE: (f32, f32) = (1024.0, 800.0);
pub const SNAPSHOT_SEED: u64 = 2024;
const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Rendu sans fenêtre : un salon simulé tire en continu pendant `frames`
/// frames, puis la surface est écrite en PNG dans `path`.
///
/// Toutes les sources d'aléa sont graines : deux appels identiques
/// produisent la même image.
pub fn render_snapshot(config: &AppConfig, path: &str, frames: u32) -> anyhow::Result<()> {
    let physic_config = PhysicConfig {
        seed: Some(config.physic.seed.unwrap_or(SNAPSHOT_SEED)),
        ..config.physic.clone()
    };
    let room_config = RoomConfig {
        bot_launch_interval_ms: 250,
        bot_launch_chance: 1.0,
        bot_chat_chance: 0.0,
        seed: Some(config.room.seed.unwrap_or(SNAPSHOT_SEED)),
        ..config.room.clone()
    };

    let mut simulator = Simulator::new(
        Renderer::with_seed(&config.renderer, SNAPSHOT_SEED),
        PhysicEngineFireworks::new(&physic_config),
        SilentAudio::new(),
        LaunchBridge::new(&config.input, Some(SNAPSHOT_SEED)),
    );
    let (width, height) = SNAPSHOT_SIZE;
    simulator.resize(width, height, 1.0)?;
    simulator.start();

    let user = Player::new("snapshot", "Snapshot", "#94a3b8");
    let mut room = RoomState::new(user.clone(), room_config.chat_history_limit);
    let mut transport = MockRoom::new(&room_config, user);
    transport.set_surface_size(width, height);

    info!("📸 Rendering {} frames headless", frames);
    for frame in 0..frames {
        let now = FRAME_PERIOD * frame;
        for event in transport.poll(now) {
            if let Some(p) = room.apply(event) {
                match simulator.launch(p.sx, p.sy, p.tx, p.ty, Some(p.hue)) {
                    Ok(_) => room.stats.record_launch(),
                    Err(e) => debug!("Snapshot launch rejected: {}", e),
                }
            }
        }
        let stats = simulator.frame(now);
        room.stats.explosions += stats.update.arrivals as u64;
    }

    simulator.renderer().save_snapshot(path)?;
    info!(
        "📸 Snapshot done: {} launches, {} explosions",
        room.stats.fireworks_launched, room.stats.explosions
    );
    simulator.close();
    Ok(())
}
