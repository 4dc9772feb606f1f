use fireworks_room::app::AppConfig;
use fireworks_room::input_bridge::InputConfig;
use fireworks_room::physic_engine::PhysicConfig;
use fireworks_room::renderer_engine::RendererConfig;
use fireworks_room::room::{RoomConfig, RoomMode};
use std::fs;

#[test]
fn test_partial_physic_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("physic.toml");
    fs::write(&path, "gravity = 0.1\nseed = 7\n").unwrap();

    let config = PhysicConfig::from_file(path.to_str().unwrap()).unwrap();

    assert_eq!(config.gravity, 0.1);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.friction, PhysicConfig::default().friction);
}

#[test]
fn test_invalid_ranges_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("physic.toml");
    fs::write(
        &path,
        "particles_per_explosion_min = 90\nparticles_per_explosion_max = 10\n",
    )
    .unwrap();
    assert!(PhysicConfig::from_file(path.to_str().unwrap()).is_err());

    let path = dir.path().join("input.toml");
    fs::write(&path, "repeat_interval_ms = 0\n").unwrap();
    assert!(InputConfig::from_file(path.to_str().unwrap()).is_err());
}

#[test]
fn test_non_finite_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("physic.toml");
    for line in [
        "particle_decay_max = inf",
        "particle_speed_min = -inf",
        "rocket_brightness_max = inf",
        "gravity = nan",
        "particle_hue_jitter = inf",
    ] {
        fs::write(&path, format!("{}\n", line)).unwrap();
        assert!(
            PhysicConfig::from_file(path.to_str().unwrap()).is_err(),
            "{} should be rejected",
            line
        );
    }

    let path = dir.path().join("renderer.toml");
    for line in [
        "rocket_line_width = inf",
        "sparkle_size = nan",
        "target_marker_radius = inf",
        "device_pixel_ratio = inf",
    ] {
        fs::write(&path, format!("{}\n", line)).unwrap();
        assert!(
            RendererConfig::from_file(path.to_str().unwrap()).is_err(),
            "{} should be rejected",
            line
        );
    }
}

#[test]
fn test_renderer_config_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("renderer.toml");
    let config = RendererConfig {
        fade_alpha: 0.35,
        device_pixel_ratio: Some(2.0),
        ..RendererConfig::default()
    };

    config.save_to_file(path.to_str().unwrap()).unwrap();

    assert_eq!(
        RendererConfig::from_file(path.to_str().unwrap()).unwrap(),
        config
    );
}

#[test]
fn test_room_mode_parses_lowercase() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("room.toml");
    fs::write(&path, "mode = \"offline\"\n").unwrap();

    let config = RoomConfig::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.mode, RoomMode::Offline);
    assert_eq!(config.chat_history_limit, 200);
}

#[test]
fn test_app_config_loads_directory_with_fallbacks() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.toml"), "repeat_interval_ms = 90\n").unwrap();
    fs::write(dir.path().join("room.toml"), "bot_launch_chance = 3.0\n").unwrap();

    let config = AppConfig::load_from_dir(dir.path().to_str().unwrap());

    assert_eq!(config.input.repeat_interval_ms, 90);
    // Fichier invalide -> valeurs par défaut
    assert_eq!(config.room, RoomConfig::default());
    assert_eq!(config.physic, PhysicConfig::default());
}

#[test]
fn test_shipped_config_files_are_valid() {
    let config = AppConfig::load_from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config"));
    assert_eq!(config, AppConfig::default());
}
