use crate::physic_engine::error::LaunchError;
pub use glam::Vec2;

/// Bornes acceptées pour les coordonnées d'un lancement (unités logiques).
///
/// Au-delà, la valeur vient presque sûrement d'un message distant corrompu.
pub const COORDINATE_LIMIT: f32 = 1.0e6;

// ------------------------
// LaunchRequest
// ------------------------

/// Demande de lancement validée : origine, cible et teinte optionnelle.
///
/// Les champs sont privés, la seule façon d'en obtenir une est
/// [`LaunchRequest::new`], qui rejette NaN / infinis / valeurs hors bornes.
/// Le moteur physique ne voit donc jamais de coordonnée invalide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchRequest {
    origin: Vec2,
    target: Vec2,
    hue: Option<f32>,
}

impl LaunchRequest {
    pub fn new(sx: f32, sy: f32, tx: f32, ty: f32, hue: Option<f32>) -> Result<Self, LaunchError> {
        check_coordinate("sx", sx)?;
        check_coordinate("sy", sy)?;
        check_coordinate("tx", tx)?;
        check_coordinate("ty", ty)?;

        let hue = match hue {
            Some(h) if !h.is_finite() => return Err(LaunchError::NonFiniteHue(h)),
            Some(h) => Some(h.rem_euclid(360.0)),
            None => None,
        };

        Ok(Self {
            origin: Vec2::new(sx, sy),
            target: Vec2::new(tx, ty),
            hue,
        })
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Teinte imposée (normalisée dans [0, 360)), ou `None` pour une teinte aléatoire.
    #[inline]
    pub fn hue(&self) -> Option<f32> {
        self.hue
    }

    /// Même demande avec une teinte fixée (utilisé pour les lancements locaux,
    /// dont la teinte doit être connue pour être relayée).
    pub fn with_hue(mut self, hue: f32) -> Result<Self, LaunchError> {
        if !hue.is_finite() {
            return Err(LaunchError::NonFiniteHue(hue));
        }
        self.hue = Some(hue.rem_euclid(360.0));
        Ok(self)
    }
}

fn check_coordinate(name: &'static str, value: f32) -> Result<(), LaunchError> {
    if !value.is_finite() {
        return Err(LaunchError::NonFiniteCoordinate { name, value });
    }
    if value.abs() > COORDINATE_LIMIT {
        return Err(LaunchError::CoordinateOutOfRange {
            name,
            value,
            limit: COORDINATE_LIMIT,
        });
    }
    Ok(())
}

// ------------------------
// Explosion
// ------------------------

/// Une fusée arrivée à destination pendant la frame courante.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    pub rocket_id: u64,
    pub pos: Vec2,
    pub hue: f32,
    /// Nombre de particules réellement créées (après plafonnement).
    pub particles: usize,
}

// ------------------------
// UpdateResult
// ------------------------

/// Bilan d'un pas de simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
    pub arrivals: usize,
    pub spawned_particles: usize,
    pub expired_particles: usize,
}
