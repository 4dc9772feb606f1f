pub mod r#trait;
pub use r#trait::{PhysicEngine, PhysicEngineFull, PhysicEngineIterator};

pub mod types;
pub use self::types::{Explosion, LaunchRequest, UpdateResult, Vec2};

pub mod error;
pub use self::error::LaunchError;

pub mod trail;
pub use self::trail::Trail;

pub mod rocket;
pub use self::rocket::Rocket;

pub mod particle;
pub use self::particle::Particle;

pub mod config;
pub use self::config::PhysicConfig;

pub mod physic_engine_fireworks;
pub use self::physic_engine_fireworks::PhysicEngineFireworks;
