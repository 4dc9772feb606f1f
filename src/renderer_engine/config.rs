use anyhow::ensure;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Opacité du voile `destination-out` appliqué à chaque frame.
    pub fade_alpha: f32,
    pub rocket_line_width: f32,
    pub particle_line_width: f32,
    /// Probabilité, par particule et par frame, de dessiner une étincelle.
    pub sparkle_chance: f64,
    pub sparkle_size: f32,
    pub target_marker_radius: f32,
    pub target_marker_alpha: f32,
    /// Couleur de fond (sRGB 8 bits) utilisée à la présentation et à l'export.
    pub background: [u8; 3],
    /// Force un facteur d'échelle (sinon celui de la fenêtre).
    pub device_pixel_ratio: Option<f32>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            fade_alpha: 0.2,
            rocket_line_width: 3.0,
            particle_line_width: 2.5,
            sparkle_chance: 0.2,
            sparkle_size: 2.0,
            target_marker_radius: 1.0,
            target_marker_alpha: 0.1,
            background: [15, 23, 42],
            device_pixel_ratio: None,
        }
    }
}

impl RendererConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("fade_alpha", self.fade_alpha),
            ("rocket_line_width", self.rocket_line_width),
            ("particle_line_width", self.particle_line_width),
            ("sparkle_size", self.sparkle_size),
            ("target_marker_radius", self.target_marker_radius),
            ("target_marker_alpha", self.target_marker_alpha),
        ] {
            ensure!(value.is_finite(), "{} must be finite (got {})", name, value);
        }
        ensure!(
            self.sparkle_chance.is_finite(),
            "sparkle_chance must be finite"
        );
        ensure!(
            (0.0..=1.0).contains(&self.fade_alpha),
            "fade_alpha must be in [0, 1]"
        );
        ensure!(
            (0.0..=1.0).contains(&self.sparkle_chance),
            "sparkle_chance must be in [0, 1]"
        );
        ensure!(
            (0.0..=1.0).contains(&self.target_marker_alpha),
            "target_marker_alpha must be in [0, 1]"
        );
        ensure!(
            self.rocket_line_width >= 0.0 && self.particle_line_width >= 0.0,
            "line widths must be >= 0"
        );
        ensure!(
            self.sparkle_size >= 0.0 && self.target_marker_radius >= 0.0,
            "sparkle_size and target_marker_radius must be >= 0"
        );
        if let Some(dpr) = self.device_pixel_ratio {
            ensure!(dpr.is_finite() && dpr > 0.0, "device_pixel_ratio must be > 0");
        }
        Ok(())
    }
}
