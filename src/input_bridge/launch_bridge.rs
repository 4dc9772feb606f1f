use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::input_bridge::config::InputConfig;
use crate::physic_engine::{LaunchError, LaunchRequest, Vec2};
use crate::utils::RepeatTimer;

fn repeat_timer(config: &InputConfig) -> RepeatTimer {
    RepeatTimer::new(config.repeat_interval()).with_max_catch_up(config.max_catch_up)
}

/// Transforme les gestes du pointeur en demandes de lancement locales.
///
/// Pointeur appuyé : un lancement immédiat, puis un par période tant qu'il
/// reste appuyé, vers la dernière position connue.
#[derive(Debug)]
pub struct LaunchBridge {
    config: InputConfig,
    surface: Option<(f32, f32)>,
    pointer: Option<Vec2>,
    timer: RepeatTimer,
    rng: StdRng,
}

impl LaunchBridge {
    pub fn new(config: &InputConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config: config.clone(),
            surface: None,
            pointer: None,
            timer: repeat_timer(config),
            rng,
        }
    }

    /// Taille logique courante, utilisée pour l'origine des lancements.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.surface = (width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
            .then_some((width, height));
    }

    pub fn reload_config(&mut self, config: &InputConfig) {
        let was_active = self.timer.is_active();
        self.config = config.clone();
        self.timer = repeat_timer(config);
        if was_active {
            debug!("Repeat timer reset after input config reload");
            self.pointer = None;
        }
    }

    pub fn is_pointer_active(&self) -> bool {
        self.pointer.is_some()
    }

    pub fn is_repeating(&self) -> bool {
        self.timer.is_active()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Demande locale vers `target` : origine en bas de l'écran, teinte tirée au hasard.
    fn local_request(&mut self, target: Vec2) -> Result<LaunchRequest, LaunchError> {
        let (width, height) = self.surface.ok_or(LaunchError::NoSurface)?;
        let spread = self.config.origin_spread;
        let sx = width / 2.0 + self.rng.random_range(-spread..=spread);
        let hue = self.rng.random_range(0.0..360.0);
        LaunchRequest::new(sx, height, target.x, target.y, Some(hue))
    }

    pub fn pointer_down(
        &mut self,
        x: f32,
        y: f32,
        now: Duration,
    ) -> Result<LaunchRequest, LaunchError> {
        let request = self.local_request(Vec2::new(x, y))?;
        self.pointer = Some(request.target());
        self.timer.start(now);
        Ok(request)
    }

    /// Met à jour la cible, seulement pendant un appui.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.pointer.is_some() && x.is_finite() && y.is_finite() {
            self.pointer = Some(Vec2::new(x, y));
        }
    }

    pub fn pointer_up(&mut self) {
        self.release();
    }

    pub fn pointer_cancel(&mut self) {
        self.release();
    }

    pub fn pointer_leave(&mut self) {
        self.release();
    }

    /// Relâche le pointeur et arrête le tir continu.
    pub fn cancel(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.pointer = None;
        self.timer.cancel();
    }

    /// Demandes dues à `now` : une par période écoulée, au plus `max_catch_up`.
    pub fn poll(&mut self, now: Duration) -> Vec<LaunchRequest> {
        let due = self.timer.poll(now);
        let Some(target) = self.pointer else {
            self.timer.cancel();
            return Vec::new();
        };

        let mut requests = Vec::with_capacity(due as usize);
        for _ in 0..due {
            match self.local_request(target) {
                Ok(request) => requests.push(request),
                Err(e) => debug!("Repeat launch skipped: {}", e),
            }
        }
        requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge() -> LaunchBridge {
        let mut b = LaunchBridge::new(&InputConfig::default(), Some(11));
        b.set_surface_size(800.0, 600.0);
        b
    }

    #[test]
    fn pointer_down_requires_surface() {
        let mut b = LaunchBridge::new(&InputConfig::default(), Some(1));
        assert_eq!(
            b.pointer_down(10.0, 10.0, Duration::ZERO),
            Err(LaunchError::NoSurface)
        );
        assert!(!b.is_repeating());
    }

    #[test]
    fn local_origin_is_bottom_center_within_spread() {
        let mut b = bridge();
        for i in 0..100 {
            let req = b.pointer_down(100.0, 50.0, Duration::from_millis(i)).unwrap();
            assert_eq!(req.origin().y, 600.0);
            assert!((350.0..=450.0).contains(&req.origin().x));
            assert_eq!(req.target(), Vec2::new(100.0, 50.0));
            let hue = req.hue().unwrap();
            assert!((0.0..360.0).contains(&hue));
        }
    }

    #[test]
    fn invalid_target_does_not_start_repeat() {
        let mut b = bridge();
        assert!(b.pointer_down(f32::NAN, 1.0, Duration::ZERO).is_err());
        assert!(!b.is_pointer_active());
        assert!(b.poll(Duration::from_secs(1)).is_empty());
    }
}
