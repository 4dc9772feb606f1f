use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::physic_engine::{
    config::PhysicConfig,
    trail::{Trail, ROCKET_TRAIL_LEN},
    types::{LaunchRequest, Vec2},
};

/// Compteur global pour générer des ID uniques pour les rockets
pub static ROCKET_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Représentation d’une fusée en vol, de son point de lancement vers sa cible.
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    /// ID unique de la rocket
    pub id: u64,

    origin: Vec2,
    target: Vec2,
    pos: Vec2,

    /// Cap (radians), figé au lancement
    angle: f32,
    speed: f32,
    acceleration: f32,

    distance_to_target: f32,
    distance_traveled: f32,

    trail: Trail<ROCKET_TRAIL_LEN>,

    /// Teinte (degrés) et luminosité (%) utilisées pour le rendu
    pub hue: f32,
    pub brightness: f32,
}

impl Rocket {
    pub fn new(request: &LaunchRequest, config: &PhysicConfig, rng: &mut impl Rng) -> Self {
        let origin = request.origin();
        let target = request.target();
        let delta = target - origin;

        let hue = request
            .hue()
            .unwrap_or_else(|| rng.random_range(0.0..360.0));
        let brightness =
            rng.random_range(config.rocket_brightness_min..=config.rocket_brightness_max);

        Self {
            id: ROCKET_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            origin,
            target,
            pos: origin,
            angle: delta.y.atan2(delta.x),
            speed: config.rocket_initial_speed,
            acceleration: config.rocket_acceleration,
            distance_to_target: delta.length(),
            distance_traveled: 0.0,
            trail: Trail::filled(origin),
            hue,
            brightness,
        }
    }

    /// Avance la fusée d'un tick. Retourne `true` quand elle a atteint sa cible.
    ///
    /// La distance parcourue est recalculée depuis la position courante (pas
    /// accumulée), l'erreur flottante ne peut donc pas décaler l'explosion de
    /// plus d'un tick.
    pub fn advance(&mut self) -> bool {
        self.pos += Vec2::from_angle(self.angle) * self.speed;
        self.speed *= self.acceleration;
        self.trail.push(self.pos);
        self.distance_traveled = self.pos.distance(self.origin);
        self.has_arrived()
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.distance_traveled >= self.distance_to_target
    }

    /// Nombre de ticks nécessaires pour parcourir `distance` (au moins 1).
    ///
    /// Après `k` ticks la distance parcourue vaut `s0 * (a^k - 1) / (a - 1)`.
    pub fn ticks_to_arrival(distance: f32, initial_speed: f32, acceleration: f32) -> u32 {
        let (d, s0, a) = (
            distance as f64,
            initial_speed as f64,
            acceleration as f64,
        );
        let ticks = if (a - 1.0).abs() < f64::EPSILON {
            d / s0
        } else {
            (1.0 + d * (a - 1.0) / s0).ln() / a.ln()
        };
        (ticks.ceil() as u32).max(1)
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn distance_to_target(&self) -> f32 {
        self.distance_to_target
    }

    #[inline]
    pub fn distance_traveled(&self) -> f32 {
        self.distance_traveled
    }

    #[inline]
    pub fn trail(&self) -> &Trail<ROCKET_TRAIL_LEN> {
        &self.trail
    }
}
