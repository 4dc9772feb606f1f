/// Couleur RGBA non prémultipliée, composantes dans [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Noir avec une opacité donnée (utilisé par la passe de fondu).
    pub const fn black(alpha: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, alpha)
    }

    /// Conversion `hsla(h, s%, l%, a)` façon CSS.
    ///
    /// `hue` en degrés, ramenée dans [0, 360) ; `saturation` et `lightness` en
    /// pourcentage.
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::new(r + m, g + m, b + m, alpha.clamp(0.0, 1.0))
    }

    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self::from_hsla(hue, saturation, lightness, 1.0)
    }

    /// Couleur 8 bits `[r, g, b]` opaque.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
            1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-4
            && (a.g - b.g).abs() < 1e-4
            && (a.b - b.b).abs() < 1e-4
            && (a.a - b.a).abs() < 1e-4
    }

    #[test]
    fn primary_hues() {
        assert!(close(Rgba::from_hsl(0.0, 100.0, 50.0), Rgba::new(1.0, 0.0, 0.0, 1.0)));
        assert!(close(Rgba::from_hsl(120.0, 100.0, 50.0), Rgba::new(0.0, 1.0, 0.0, 1.0)));
        assert!(close(Rgba::from_hsl(240.0, 100.0, 50.0), Rgba::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn hue_wraps_like_css() {
        assert!(close(Rgba::from_hsl(360.0, 100.0, 50.0), Rgba::from_hsl(0.0, 100.0, 50.0)));
        assert!(close(Rgba::from_hsl(-20.0, 100.0, 50.0), Rgba::from_hsl(340.0, 100.0, 50.0)));
    }

    #[test]
    fn lightness_extremes() {
        assert!(close(Rgba::from_hsl(42.0, 100.0, 100.0), Rgba::new(1.0, 1.0, 1.0, 1.0)));
        assert!(close(Rgba::from_hsla(42.0, 100.0, 0.0, 0.5), Rgba::new(0.0, 0.0, 0.0, 0.5)));
    }
}
