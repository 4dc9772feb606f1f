use thiserror::Error;

/// Dimension maximale (en pixels physiques) d'une surface de rendu.
pub const MAX_SURFACE_DIMENSION: u32 = 16_384;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height} @ dpr {dpr}")]
    InvalidSize { width: f32, height: f32, dpr: f32 },

    #[error("surface {width}x{height} px exceeds the maximum dimension {max}")]
    TooLarge { width: u32, height: u32, max: u32 },
}
