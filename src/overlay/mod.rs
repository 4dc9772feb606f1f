pub mod game_overlay;
pub use self::game_overlay::GameOverlay;
