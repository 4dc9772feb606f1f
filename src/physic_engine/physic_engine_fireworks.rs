use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::physic_engine::{
    config::PhysicConfig,
    error::LaunchError,
    particle::Particle,
    rocket::Rocket,
    types::{Explosion, LaunchRequest, UpdateResult, Vec2},
    PhysicEngine, PhysicEngineFull, PhysicEngineIterator,
};

/// Moteur de feux d'artifice : un ensemble de fusées, un ensemble de particules.
///
/// Les deux `Vec` sont parcourus en ordre d'index décroissant et compactés sur
/// place (`swap_remove`) : pas de nouvelle collection allouée à chaque frame.
#[derive(Debug)]
pub struct PhysicEngineFireworks {
    rockets: Vec<Rocket>,
    particles: Vec<Particle>,

    // Résultats de la dernière frame (buffers réutilisés)
    arrived: Vec<Rocket>,
    explosions: Vec<Explosion>,

    rng: StdRng,
    config: PhysicConfig,
    frame: u64,
}

impl PhysicEngineFireworks {
    pub fn new(config: &PhysicConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            rockets: Vec::with_capacity(64),
            particles: Vec::with_capacity(4096),
            arrived: Vec::new(),
            explosions: Vec::new(),
            rng,
            config: config.clone(),
            frame: 0,
        }
    }

    fn launch(&mut self, request: &LaunchRequest) -> Result<u64, LaunchError> {
        if self.rockets.len() >= self.config.max_rockets {
            warn!(
                "🚫 Launch rejected: {} rockets already in flight",
                self.rockets.len()
            );
            return Err(LaunchError::RocketLimitReached {
                max: self.config.max_rockets,
            });
        }

        let rocket = Rocket::new(request, &self.config, &mut self.rng);
        let id = rocket.id;
        debug!(
            "🚀 Rocket {} launched ({:.1}, {:.1}) -> ({:.1}, {:.1}) hue={:.0}",
            id,
            rocket.origin().x,
            rocket.origin().y,
            rocket.target().x,
            rocket.target().y,
            rocket.hue
        );
        self.rockets.push(rocket);
        Ok(id)
    }

    /// Crée la gerbe d'une fusée arrivée et retourne le nombre de particules créées.
    fn spawn_burst(&mut self, pos: Vec2, hue: f32) -> usize {
        let wanted = self.rng.random_range(
            self.config.particles_per_explosion_min..=self.config.particles_per_explosion_max,
        );
        let budget = self
            .config
            .max_particles
            .saturating_sub(self.particles.len());
        let count = wanted.min(budget);
        if count < wanted {
            debug!(
                "Burst truncated: {} -> {} particles (max_particles = {})",
                wanted, count, self.config.max_particles
            );
        }

        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle::new(pos, hue, &self.config, &mut self.rng);
            self.particles.push(particle);
        }
        count
    }

    fn update(&mut self) -> UpdateResult {
        self.frame += 1;
        self.arrived.clear();
        self.explosions.clear();

        let mut result = UpdateResult::default();

        // Fusées : ordre décroissant, les éléments après `i` sont déjà traités
        let mut i = self.rockets.len();
        while i > 0 {
            i -= 1;
            if self.rockets[i].advance() {
                let rocket = self.rockets.swap_remove(i);
                let spawned = self.spawn_burst(rocket.target(), rocket.hue);

                debug!(
                    "💥 Rocket {} exploded at ({:.1}, {:.1}) with {} particles",
                    rocket.id,
                    rocket.target().x,
                    rocket.target().y,
                    spawned
                );
                self.explosions.push(Explosion {
                    rocket_id: rocket.id,
                    pos: rocket.target(),
                    hue: rocket.hue,
                    particles: spawned,
                });
                self.arrived.push(rocket);

                result.arrivals += 1;
                result.spawned_particles += spawned;
            }
        }

        // Particules (y compris celles créées ci-dessus)
        let (friction, gravity, threshold) = (
            self.config.friction,
            self.config.gravity,
            self.config.alpha_threshold,
        );
        let mut k = self.particles.len();
        while k > 0 {
            k -= 1;
            let particle = &mut self.particles[k];
            particle.advance(friction, gravity);
            if particle.is_expired(threshold) {
                self.particles.swap_remove(k);
                result.expired_particles += 1;
            }
        }

        result
    }

    /// Retourne `true` si la configuration a changé.
    fn reload_config(&mut self, new_config: &PhysicConfig) -> bool {
        if *new_config == self.config {
            return false;
        }
        let seed_changed = new_config.seed != self.config.seed;
        self.config = new_config.clone();

        if seed_changed {
            if let Some(seed) = self.config.seed {
                self.rng = StdRng::seed_from_u64(seed);
            }
        }

        if self.rockets.len() > self.config.max_rockets {
            info!(
                "Dropping {} rockets after max_rockets change",
                self.rockets.len() - self.config.max_rockets
            );
            self.rockets.truncate(self.config.max_rockets);
        }
        if self.particles.len() > self.config.max_particles {
            info!(
                "Dropping {} particles after max_particles change",
                self.particles.len() - self.config.max_particles
            );
            self.particles.truncate(self.config.max_particles);
        }
        true
    }

    /// Nombre de frames simulées depuis la création.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

// ==================================
// Trait PhysicEngine
// ==================================
impl PhysicEngineIterator for PhysicEngineFireworks {
    fn iter_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a> {
        Box::new(self.rockets.iter())
    }

    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a> {
        Box::new(self.particles.iter())
    }
}

impl PhysicEngine for PhysicEngineFireworks {
    fn launch(&mut self, request: &LaunchRequest) -> Result<u64, LaunchError> {
        self.launch(request)
    }

    fn update(&mut self) -> UpdateResult {
        self.update()
    }

    fn arrived_rockets(&self) -> &[Rocket] {
        &self.arrived
    }

    fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    fn rockets_count(&self) -> usize {
        self.rockets.len()
    }

    fn particles_count(&self) -> usize {
        self.particles.len()
    }

    fn reload_config(&mut self, config: &PhysicConfig) -> bool {
        self.reload_config(config)
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn clear(&mut self) {
        self.rockets.clear();
        self.particles.clear();
        self.arrived.clear();
        self.explosions.clear();
    }

    fn close(&mut self) {
        self.clear();
        debug!("PhysicEngineFireworks closed and reset.");
    }
}

impl PhysicEngineFull for PhysicEngineFireworks {}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    /// Injecte directement une particule (court-circuite les explosions).
    fn inject_particle(&mut self, particle: Particle);
    fn rockets(&self) -> &[Rocket];
    fn particles(&self) -> &[Particle];
}

#[cfg(any(test, feature = "test_helpers"))]
impl PhysicEngineTestHelpers for PhysicEngineFireworks {
    fn inject_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PhysicEngineFireworks {
        PhysicEngineFireworks::new(&PhysicConfig {
            seed: Some(42),
            ..PhysicConfig::default()
        })
    }

    #[test]
    fn arrival_spawns_burst_and_removes_rocket() {
        let mut engine = engine();
        let req = LaunchRequest::new(0.0, 0.0, 0.0, 0.0, Some(10.0)).unwrap();
        engine.launch(&req).unwrap();

        let result = engine.update();

        assert_eq!(result.arrivals, 1);
        assert_eq!(engine.rockets_count(), 0);
        assert_eq!(engine.arrived_rockets().len(), 1);
        assert_eq!(engine.explosions().len(), 1);
        assert!((30..=80).contains(&result.spawned_particles));
        assert_eq!(engine.particles_count(), result.spawned_particles);
    }

    #[test]
    fn last_frame_records_are_cleared_on_next_update() {
        let mut engine = engine();
        let req = LaunchRequest::new(0.0, 0.0, 0.0, 0.0, None).unwrap();
        engine.launch(&req).unwrap();
        engine.update();
        engine.update();
        assert!(engine.explosions().is_empty());
        assert!(engine.arrived_rockets().is_empty());
    }

    #[test]
    fn rocket_cap_rejects_extra_launches() {
        let mut engine = PhysicEngineFireworks::new(&PhysicConfig {
            max_rockets: 2,
            seed: Some(1),
            ..PhysicConfig::default()
        });
        let req = LaunchRequest::new(0.0, 500.0, 0.0, 0.0, None).unwrap();
        assert!(engine.launch(&req).is_ok());
        assert!(engine.launch(&req).is_ok());
        assert_eq!(
            engine.launch(&req),
            Err(LaunchError::RocketLimitReached { max: 2 })
        );
    }

    #[test]
    fn particle_cap_truncates_bursts() {
        let mut engine = PhysicEngineFireworks::new(&PhysicConfig {
            max_particles: 40,
            seed: Some(3),
            ..PhysicConfig::default()
        });
        let req = LaunchRequest::new(0.0, 0.0, 0.0, 0.0, None).unwrap();
        engine.launch(&req).unwrap();
        engine.launch(&req).unwrap();
        engine.update();
        assert!(engine.particles_count() <= 40);
        let spawned: usize = engine.explosions().iter().map(|e| e.particles).sum();
        assert!(spawned <= 40);
    }
}
