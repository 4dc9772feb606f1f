// Ici on importe depuis la crate lib complète
use anyhow::{Context, Result};
use log::info;

use fireworks_room::app::{App, AppConfig};
use fireworks_room::snapshot::render_snapshot;
use fireworks_room::utils::show_rust_core_dependencies;
use fireworks_room::window_engine::{GlfwWindowEngine, WindowEngine};

const CONFIG_DIR: &str = "assets/config";
const DEFAULT_SNAPSHOT_FRAMES: u32 = 180;

/// Main entry point for the Fireworks Room application.
///
/// `fireworks_room --snapshot <path> [frames]` rend sans fenêtre et écrit un PNG.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Fireworks Room...");

    show_rust_core_dependencies();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(pos) = args.iter().position(|a| a == "--snapshot") {
        let path = args
            .get(pos + 1)
            .context("usage: --snapshot <path> [frames]")?;
        let frames = match args.get(pos + 2) {
            Some(n) => n
                .parse()
                .with_context(|| format!("invalid frame count: {}", n))?,
            None => DEFAULT_SNAPSHOT_FRAMES,
        };
        let config = AppConfig::load_from_dir(CONFIG_DIR);
        info!("Config loaded:\n{:#?}", config);
        return render_snapshot(&config, path, frames);
    }

    let window_width = 1024;
    let window_height = 800;

    // 1. Init Window & Context
    let window_engine = GlfwWindowEngine::init(window_width, window_height, "Fireworks Room")?;

    // 2. Init App (now that GL context is ready)
    let mut app = App::new(window_engine, CONFIG_DIR)?;

    let result = app.run();
    app.close();

    result
}
