use rand::Rng;

use crate::physic_engine::{
    config::PhysicConfig,
    trail::{Trail, PARTICLE_TRAIL_LEN},
    types::Vec2,
};

/// Étincelle issue d'une explosion : ralentit, tombe et s'éteint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Teinte (degrés), non normalisée : peut sortir de [0, 360) de ± jitter
    pub hue: f32,
    pub alpha: f32,
    pub decay: f32,
    trail: Trail<PARTICLE_TRAIL_LEN>,
}

impl Particle {
    /// Crée une particule au point d'explosion `pos`, dans une direction aléatoire.
    pub fn new(pos: Vec2, hue: f32, config: &PhysicConfig, rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(config.particle_speed_min..=config.particle_speed_max);
        let jitter = config.particle_hue_jitter;

        Self {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            hue: hue + rng.random_range(-jitter..=jitter),
            alpha: 1.0,
            decay: rng.random_range(config.particle_decay_min..=config.particle_decay_max),
            trail: Trail::filled(pos),
        }
    }

    /// Un tick : friction, gravité, intégration, historique puis extinction.
    #[inline(always)]
    pub fn advance(&mut self, friction: f32, gravity: f32) {
        self.vel *= friction;
        self.vel.y += gravity;
        self.pos += self.vel;
        self.trail.push(self.pos);
        self.alpha -= self.decay;
    }

    #[inline]
    pub fn is_expired(&self, alpha_threshold: f32) -> bool {
        self.alpha <= alpha_threshold
    }

    #[inline]
    pub fn trail(&self) -> &Trail<PARTICLE_TRAIL_LEN> {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn friction_and_gravity_are_applied_before_integration() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let mut p = Particle::new(Vec2::ZERO, 0.0, &PhysicConfig::default(), &mut rng);
        p.vel = Vec2::new(10.0, 0.0);

        p.advance(0.5, 1.0);

        assert_eq!(p.vel, Vec2::new(5.0, 1.0));
        assert_eq!(p.pos, Vec2::new(5.0, 1.0));
        assert_eq!(p.trail().newest(), Some(p.pos));
    }

    #[test]
    fn alpha_decreases_by_decay() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(2);
        let config = PhysicConfig::default();
        let mut p = Particle::new(Vec2::ZERO, 0.0, &config, &mut rng);
        let decay = p.decay;
        p.advance(config.friction, config.gravity);
        assert!((p.alpha - (1.0 - decay)).abs() < 1e-6);
    }

    #[test]
    fn sampled_values_stay_in_configured_ranges() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let config = PhysicConfig::default();
        for _ in 0..500 {
            let p = Particle::new(Vec2::ZERO, 120.0, &config, &mut rng);
            let speed = p.vel.length();
            assert!(speed >= 1.0 - 1e-4 && speed <= 9.0 + 1e-4, "speed {speed}");
            assert!((0.01..=0.03).contains(&p.decay));
            assert!((100.0..=140.0).contains(&p.hue));
            assert_eq!(p.alpha, 1.0);
        }
    }
}
