use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Constantes de la simulation (une unité de temps = une frame).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicConfig {
    /// Accélération verticale ajoutée à chaque tick (y vers le bas).
    pub gravity: f32,
    /// Amortissement multiplicatif de la vitesse des particules.
    pub friction: f32,

    pub rocket_initial_speed: f32,
    pub rocket_acceleration: f32,
    pub rocket_brightness_min: f32,
    pub rocket_brightness_max: f32,

    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    pub particle_decay_min: f32,
    pub particle_decay_max: f32,
    /// Écart maximal (degrés) entre la teinte d'une particule et celle de sa fusée.
    pub particle_hue_jitter: f32,
    pub particles_per_explosion_min: usize,
    pub particles_per_explosion_max: usize,
    /// Une particule est retirée dès que son alpha passe sous ce seuil (inclus).
    pub alpha_threshold: f32,

    pub max_rockets: usize,
    pub max_particles: usize,

    /// Graine RNG pour des simulations reproductibles.
    pub seed: Option<u64>,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            gravity: 0.04,
            friction: 0.96,
            rocket_initial_speed: 2.0,
            rocket_acceleration: 1.05,
            rocket_brightness_min: 50.0,
            rocket_brightness_max: 70.0,
            particle_speed_min: 1.0,
            particle_speed_max: 9.0,
            particle_decay_min: 0.01,
            particle_decay_max: 0.03,
            particle_hue_jitter: 20.0,
            particles_per_explosion_min: 30,
            particles_per_explosion_max: 80,
            alpha_threshold: 0.01,
            max_rockets: 512,
            max_particles: 20_000,
            seed: None,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Vérifie la cohérence des bornes (un intervalle vide ferait paniquer `random_range`).
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("rocket_initial_speed", self.rocket_initial_speed),
            ("rocket_acceleration", self.rocket_acceleration),
            ("rocket_brightness_min", self.rocket_brightness_min),
            ("rocket_brightness_max", self.rocket_brightness_max),
            ("particle_speed_min", self.particle_speed_min),
            ("particle_speed_max", self.particle_speed_max),
            ("particle_decay_min", self.particle_decay_min),
            ("particle_decay_max", self.particle_decay_max),
            ("particle_hue_jitter", self.particle_hue_jitter),
            ("alpha_threshold", self.alpha_threshold),
        ] {
            ensure!(value.is_finite(), "{} must be finite (got {})", name, value);
        }
        ensure!(
            self.rocket_initial_speed > 0.0,
            "rocket_initial_speed must be > 0"
        );
        ensure!(
            self.rocket_acceleration >= 1.0,
            "rocket_acceleration must be >= 1 (rockets would never arrive)"
        );
        ensure!(
            self.rocket_brightness_min <= self.rocket_brightness_max,
            "rocket brightness range is empty"
        );
        ensure!(
            self.particle_speed_min <= self.particle_speed_max,
            "particle speed range is empty"
        );
        ensure!(
            self.particle_decay_min > 0.0 && self.particle_decay_min <= self.particle_decay_max,
            "particle decay range must be non-empty and strictly positive"
        );
        ensure!(
            self.particle_hue_jitter >= 0.0,
            "particle_hue_jitter must be >= 0"
        );
        ensure!(
            self.particles_per_explosion_min <= self.particles_per_explosion_max,
            "particles per explosion range is empty"
        );
        ensure!(
            (0.0..1.0).contains(&self.alpha_threshold),
            "alpha_threshold must be in [0, 1)"
        );
        ensure!(
            (0.0..=1.0).contains(&self.friction),
            "friction must be in [0, 1]"
        );
        Ok(())
    }
}
