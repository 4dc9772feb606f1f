pub mod config;
pub use self::config::InputConfig;

pub mod launch_bridge;
pub use self::launch_bridge::LaunchBridge;
