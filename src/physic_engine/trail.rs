use glam::Vec2;

pub const ROCKET_TRAIL_LEN: usize = 4;
pub const PARTICLE_TRAIL_LEN: usize = 5;

/// Historique de positions de taille fixe, la plus récente en tête.
///
/// Stocké inline (pas d'allocation) : une fusée ou une particule en possède un,
/// et il est poussé à chaque tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trail<const N: usize> {
    points: [Vec2; N],
}

impl<const N: usize> Trail<N> {
    /// Historique rempli avec un même point (position de départ).
    pub fn filled(point: Vec2) -> Self {
        Self { points: [point; N] }
    }

    /// Ajoute `point` en tête et évince le plus ancien.
    #[inline]
    pub fn push(&mut self, point: Vec2) {
        if N == 0 {
            return;
        }
        self.points.rotate_right(1);
        self.points[0] = point;
    }

    #[inline]
    pub fn newest(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    #[inline]
    pub fn oldest(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        N
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_most_recent_first_and_evicts_oldest() {
        let mut trail = Trail::<3>::filled(Vec2::ZERO);
        trail.push(Vec2::new(1.0, 0.0));
        trail.push(Vec2::new(2.0, 0.0));
        trail.push(Vec2::new(3.0, 0.0));
        trail.push(Vec2::new(4.0, 0.0));

        assert_eq!(
            trail.as_slice(),
            &[
                Vec2::new(4.0, 0.0),
                Vec2::new(3.0, 0.0),
                Vec2::new(2.0, 0.0)
            ]
        );
        assert_eq!(trail.newest(), Some(Vec2::new(4.0, 0.0)));
        assert_eq!(trail.oldest(), Some(Vec2::new(2.0, 0.0)));
        assert_eq!(trail.len(), 3);
    }
}
