/// Convenience result type used across crewcanvas.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Top-level error taxonomy surfaced to callers of the poster generator.
///
/// Only crew-data and configuration failures are expected to reach a caller during a normal
/// render. Logo problems are contained inside the compositor and never produce an error.
#[derive(thiserror::Error, Debug)]
pub enum CanvasError {
    /// Invalid crew or request data supplied by the caller.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown template/variant identifiers or unusable generator configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required bundled asset (default boat silhouette, fonts) is missing or undecodable.
    #[error("asset error: {0}")]
    Asset(String),

    /// Raster or encoding failure while producing the poster.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CanvasError {
    /// Build a [`CanvasError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CanvasError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CanvasError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`CanvasError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Return `true` for errors caused by caller-supplied data.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Return `true` for unknown template or variant identifiers and bad generator settings.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
