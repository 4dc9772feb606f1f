use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::error::LaunchError;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::types::{Explosion, LaunchRequest, UpdateResult};

pub trait PhysicEngineIterator {
    /// Retourne un itérateur sur les fusées en vol.
    fn iter_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a>;

    /// Retourne un itérateur sur les particules vivantes.
    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a>;
}

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune des moteurs physiques. Les ensembles de fusées et de
/// particules restent privés au moteur : on ne les modifie qu'à travers
/// [`PhysicEngine::launch`] et [`PhysicEngine::update`].
pub trait PhysicEngine {
    /// Crée une fusée pour une demande déjà validée. Retourne son id.
    fn launch(&mut self, request: &LaunchRequest) -> Result<u64, LaunchError>;

    /// Avance toute la simulation d'une frame.
    fn update(&mut self) -> UpdateResult;

    /// Fusées arrivées pendant la dernière frame (état final, encore à dessiner).
    fn arrived_rockets(&self) -> &[Rocket];

    /// Explosions déclenchées pendant la dernière frame.
    fn explosions(&self) -> &[Explosion];

    fn rockets_count(&self) -> usize;
    fn particles_count(&self) -> usize;

    /// Remplace la configuration (les plafonds réduits tronquent l'existant).
    /// Retourne `true` si la configuration a changé.
    fn reload_config(&mut self, config: &PhysicConfig) -> bool;

    fn get_config(&self) -> &PhysicConfig;

    /// Vide fusées et particules.
    fn clear(&mut self);

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.
}

pub trait PhysicEngineFull: PhysicEngine + PhysicEngineIterator {}
