use thiserror::Error;

/// Raisons pour lesquelles un lancement est refusé.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LaunchError {
    #[error("launch coordinate `{name}` is not finite ({value})")]
    NonFiniteCoordinate { name: &'static str, value: f32 },

    #[error("launch coordinate `{name}` = {value} is outside ±{limit}")]
    CoordinateOutOfRange {
        name: &'static str,
        value: f32,
        limit: f32,
    },

    #[error("launch hue is not finite ({0})")]
    NonFiniteHue(f32),

    #[error("rocket limit reached ({max} rockets in flight)")]
    RocketLimitReached { max: usize },

    #[error("no drawing surface size known, cannot compute a launch origin")]
    NoSurface,

    #[error("simulator is not running")]
    NotRunning,
}
