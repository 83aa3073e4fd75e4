// Error types for the star field and its window host.
// Every variant states *where* things went wrong.

/// Top-level error returned by construction and by the host loop.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The star field configuration was rejected before any star was created.
    #[error("invalid star field config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Creating the window failed.
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed.
    #[error("window update error: {0}")]
    WindowUpdate(String),

    /// Encoding or writing a screenshot failed.
    #[error("screenshot error: {0}")]
    Screenshot(#[source] image::ImageError),
}

/// Which construction parameter failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("viewport must be at least 1x1 pixels, got {width}x{height}")]
    EmptyViewport { width: usize, height: usize },

    #[error("min depth must be finite and positive, got {0}")]
    NonPositiveMinDepth(f32),

    #[error("max depth ({max}) must be finite and greater than min depth ({min})")]
    DepthRange { min: f32, max: f32 },

    #[error("base speed must be finite, got {0}")]
    NonFiniteSpeed(f32),

    #[error("base radius must be finite and positive, got {0}")]
    NonPositiveRadius(f32),
}
