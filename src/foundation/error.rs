/// Convenience result type used across spriteforge.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Error taxonomy shared by the raster engine and the asset pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ForgeError {
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A job's source directory is absent or yielded no usable frames.
    #[error("source missing: {0}")]
    SourceMissing(String),

    /// A single frame file (or generated frame id) is absent.
    #[error("frame missing: {0}")]
    FrameMissing(String),

    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("empty frame set")]
    EmptyFrameSet,

    #[error("layout error: {0}")]
    Layout(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("write error: {0}")]
    Write(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ForgeError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn source_missing(msg: impl Into<String>) -> Self {
        Self::SourceMissing(msg.into())
    }

    pub fn frame_missing(msg: impl Into<String>) -> Self {
        Self::FrameMissing(msg.into())
    }

    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Configuration errors abort a whole batch before any job runs;
    /// everything else only fails the job that raised it.
    pub fn is_fatal_to_batch(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
