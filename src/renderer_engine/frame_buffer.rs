use glam::Vec2;
use itertools::{Itertools, MinMaxResult};
use log::debug;

use crate::renderer_engine::canvas::{BlendMode, Canvas};
use crate::renderer_engine::color::Rgba;
use crate::renderer_engine::error::{SurfaceError, MAX_SURFACE_DIMENSION};

/// Surface CPU persistante : RGBA f32 prémultiplié, taille physique = logique × dpr.
///
/// Le contenu n'est jamais effacé entre deux frames, seulement à la
/// (re)création. L'estompage des traînées repose sur cette persistance.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    logical_width: f32,
    logical_height: f32,
    dpr: f32,
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
    blend_mode: BlendMode,
}

impl FrameBuffer {
    pub fn new(logical_width: f32, logical_height: f32, dpr: f32) -> Result<Self, SurfaceError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(logical_width) || !valid(logical_height) || !valid(dpr) {
            return Err(SurfaceError::InvalidSize {
                width: logical_width,
                height: logical_height,
                dpr,
            });
        }

        let physical_w = (logical_width * dpr).round().max(1.0);
        let physical_h = (logical_height * dpr).round().max(1.0);
        if physical_w > MAX_SURFACE_DIMENSION as f32 || physical_h > MAX_SURFACE_DIMENSION as f32 {
            return Err(SurfaceError::TooLarge {
                width: physical_w as u32,
                height: physical_h as u32,
                max: MAX_SURFACE_DIMENSION,
            });
        }
        let (width, height) = (physical_w as u32, physical_h as u32);

        debug!(
            "FrameBuffer {}x{} (logical {:.0}x{:.0} @ dpr {:.2})",
            width, height, logical_width, logical_height, dpr
        );

        Ok(Self {
            logical_width,
            logical_height,
            dpr,
            width,
            height,
            pixels: vec![[0.0; 4]; (width * height) as usize],
            blend_mode: BlendMode::SourceOver,
        })
    }

    #[inline]
    pub fn physical_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn dpr(&self) -> f32 {
        self.dpr
    }

    /// Pixel physique prémultiplié `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Pixel au point logique `(x, y)`.
    pub fn pixel_at_logical(&self, x: f32, y: f32) -> Option<[f32; 4]> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        self.pixel((x * self.dpr) as u32, (y * self.dpr) as u32)
    }

    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Remet la surface à transparent.
    pub fn clear(&mut self) {
        self.pixels.fill([0.0; 4]);
    }

    /// Composite la surface sur un fond opaque et retourne des octets RGBA8 (lignes du haut vers le bas).
    pub fn to_rgba8(&self, background: [u8; 3]) -> Vec<u8> {
        let bg = Rgba::from_rgb8(background);
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for [r, g, b, a] in &self.pixels {
            let inv = 1.0 - a.clamp(0.0, 1.0);
            out.push(to_u8(r + bg.r * inv));
            out.push(to_u8(g + bg.g * inv));
            out.push(to_u8(b + bg.b * inv));
            out.push(255);
        }
        out
    }

    pub fn save_png(&self, path: &str, background: [u8; 3]) -> anyhow::Result<()> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba8(background))
            .ok_or_else(|| anyhow::anyhow!("frame buffer size mismatch"))?;
        img.save(path)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Composition
    // ------------------------------------------------------------------

    #[inline]
    fn composite(&mut self, x: u32, y: u32, color: Rgba, coverage: f32) {
        let sa = color.a * coverage;
        if sa <= 0.0 {
            return;
        }
        let dst = &mut self.pixels[(y * self.width + x) as usize];
        let src = [color.r * sa, color.g * sa, color.b * sa, sa];

        match self.blend_mode {
            BlendMode::SourceOver => {
                for c in 0..4 {
                    dst[c] = src[c] + dst[c] * (1.0 - sa);
                }
            }
            BlendMode::DestinationOut => {
                for c in dst.iter_mut() {
                    *c *= 1.0 - sa;
                }
            }
            BlendMode::Lighter => {
                for c in 0..4 {
                    dst[c] = (src[c] + dst[c]).min(1.0);
                }
            }
        }
    }

    /// Boîte englobante physique `[x0, x1) × [y0, y1)` bornée à la surface.
    fn clip_box(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        let x0 = min.x.floor().max(0.0);
        let y0 = min.y.floor().max(0.0);
        let x1 = max.x.ceil().min(self.width as f32);
        let y1 = max.y.ceil().min(self.height as f32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// Distance d'un point au segment `[a, b]`.
#[inline]
fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn bounds(values: impl Iterator<Item = f32>) -> Option<(f32, f32)> {
    match values.minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

impl Canvas for FrameBuffer {
    fn logical_size(&self) -> (f32, f32) {
        (self.logical_width, self.logical_height)
    }

    fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        if !(width > 0.0 && height > 0.0) {
            return;
        }
        let min = Vec2::new(x, y) * self.dpr;
        let max = Vec2::new(x + width, y + height) * self.dpr;
        let Some((x0, y0, x1, y1)) = self.clip_box(min, max) else {
            return;
        };

        for py in y0..y1 {
            let cov_y = (max.y.min(py as f32 + 1.0) - min.y.max(py as f32)).clamp(0.0, 1.0);
            for px in x0..x1 {
                let cov_x = (max.x.min(px as f32 + 1.0) - min.x.max(px as f32)).clamp(0.0, 1.0);
                self.composite(px, py, color, cov_x * cov_y);
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[Vec2], line_width: f32, color: Rgba) {
        if points.len() < 2 || line_width <= 0.0 {
            return;
        }
        let phys: Vec<Vec2> = points.iter().map(|p| *p * self.dpr).collect();
        // Tracé de longueur nulle : rien à dessiner (extrémités droites)
        if phys.windows(2).all(|w| w[0].distance_squared(w[1]) <= f32::EPSILON) {
            return;
        }

        let half = line_width * self.dpr * 0.5;
        let (Some((min_x, max_x)), Some((min_y, max_y))) =
            (bounds(phys.iter().map(|p| p.x)), bounds(phys.iter().map(|p| p.y)))
        else {
            return;
        };
        let pad = half + 1.0;
        let Some((x0, y0, x1, y1)) = self.clip_box(
            Vec2::new(min_x - pad, min_y - pad),
            Vec2::new(max_x + pad, max_y + pad),
        ) else {
            return;
        };

        // Une seule composition par pixel, même aux jonctions
        for py in y0..y1 {
            for px in x0..x1 {
                let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let dist = phys
                    .windows(2)
                    .map(|w| distance_to_segment(center, w[0], w[1]))
                    .fold(f32::INFINITY, f32::min);
                let coverage = (half + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.composite(px, py, color, coverage);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let c = center * self.dpr;
        let r = radius * self.dpr;
        let Some((x0, y0, x1, y1)) = self.clip_box(c - Vec2::splat(r + 1.0), c + Vec2::splat(r + 1.0))
        else {
            return;
        };

        for py in y0..y1 {
            for px in x0..x1 {
                let dist = Vec2::new(px as f32 + 0.5, py as f32 + 0.5).distance(c);
                let coverage = (r + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.composite(px, py, color, coverage);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_size_follows_dpr() {
        let fb = FrameBuffer::new(100.0, 50.0, 2.0).unwrap();
        assert_eq!(fb.physical_size(), (200, 100));
        assert_eq!(fb.logical_size(), (100.0, 50.0));
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(matches!(
            FrameBuffer::new(0.0, 10.0, 1.0),
            Err(SurfaceError::InvalidSize { .. })
        ));
        assert!(matches!(
            FrameBuffer::new(10.0, 10.0, f32::NAN),
            Err(SurfaceError::InvalidSize { .. })
        ));
        assert!(matches!(
            FrameBuffer::new(20_000.0, 10.0, 1.0),
            Err(SurfaceError::TooLarge { .. })
        ));
    }

    #[test]
    fn destination_out_scales_existing_pixels() {
        let mut fb = FrameBuffer::new(4.0, 4.0, 1.0).unwrap();
        fb.fill_rect(0.0, 0.0, 4.0, 4.0, Rgba::new(1.0, 0.5, 0.0, 1.0));

        fb.set_blend_mode(BlendMode::DestinationOut);
        fb.fill_rect(0.0, 0.0, 4.0, 4.0, Rgba::black(0.2));

        let [r, g, b, a] = fb.pixel(1, 1).unwrap();
        assert!((r - 0.8).abs() < 1e-6);
        assert!((g - 0.4).abs() < 1e-6);
        assert_eq!(b, 0.0);
        assert!((a - 0.8).abs() < 1e-6);
    }

    #[test]
    fn lighter_adds_and_saturates() {
        let mut fb = FrameBuffer::new(2.0, 2.0, 1.0).unwrap();
        fb.set_blend_mode(BlendMode::Lighter);
        let color = Rgba::new(0.6, 0.2, 0.0, 1.0);
        fb.fill_rect(0.0, 0.0, 2.0, 2.0, color);
        fb.fill_rect(0.0, 0.0, 2.0, 2.0, color);

        let [r, g, _, a] = fb.pixel(0, 0).unwrap();
        assert_eq!(r, 1.0);
        assert!((g - 0.4).abs() < 1e-6);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn partial_rect_coverage_is_antialiased() {
        let mut fb = FrameBuffer::new(4.0, 4.0, 1.0).unwrap();
        fb.fill_rect(0.5, 0.0, 1.0, 1.0, Rgba::new(1.0, 1.0, 1.0, 1.0));
        assert!((fb.pixel(0, 0).unwrap()[3] - 0.5).abs() < 1e-6);
        assert!((fb.pixel(1, 0).unwrap()[3] - 0.5).abs() < 1e-6);
        assert_eq!(fb.pixel(2, 0).unwrap()[3], 0.0);
    }

    #[test]
    fn polyline_covers_its_path_once() {
        let mut fb = FrameBuffer::new(20.0, 20.0, 1.0).unwrap();
        fb.set_blend_mode(BlendMode::Lighter);
        let pts = [Vec2::new(2.0, 10.0), Vec2::new(10.0, 10.0), Vec2::new(18.0, 10.0)];
        fb.stroke_polyline(&pts, 2.0, Rgba::new(0.0, 0.0, 1.0, 0.5));

        // pixel sur la jonction : alpha non doublé
        let joint = fb.pixel(10, 9).unwrap();
        assert!((joint[3] - 0.5).abs() < 1e-6);
        assert_eq!(fb.pixel(10, 2).unwrap()[3], 0.0);
    }

    #[test]
    fn zero_length_polyline_draws_nothing() {
        let mut fb = FrameBuffer::new(10.0, 10.0, 1.0).unwrap();
        let p = Vec2::new(5.0, 5.0);
        fb.stroke_polyline(&[p, p, p], 3.0, Rgba::new(1.0, 1.0, 1.0, 1.0));
        assert!(fb.pixels().iter().all(|px| px[3] == 0.0));
    }

    #[test]
    fn to_rgba8_composites_over_background() {
        let fb = FrameBuffer::new(1.0, 1.0, 1.0).unwrap();
        assert_eq!(fb.to_rgba8([15, 23, 42]), vec![15, 23, 42, 255]);
    }
}
