/// Convenience result type used across the crate.
pub type BoothResult<T> = Result<T, BoothError>;

/// Error taxonomy for compositing, export and archival.
///
/// Every variant is fatal to the call that produced it. A failed render never yields a
/// partial composite and nothing is persisted unless encoding succeeded.
#[derive(thiserror::Error, Debug)]
pub enum BoothError {
    /// The requested layout id is not in the registry.
    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    /// A placement references a decoration kind that is not registered.
    #[error("unknown asset: {0}")]
    UnknownAsset(String),

    /// A photo or rendered decoration failed to decode.
    #[error("decode error: {0}")]
    Decode(String),

    /// The finished surface could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid caller-provided data (colors, placement numbers, ids).
    #[error("validation error: {0}")]
    Validation(String),

    /// Gallery archive failures.
    #[error("storage error: {0}")]
    Storage(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoothError {
    /// Build a [`BoothError::UnknownLayout`] value.
    pub fn unknown_layout(id: impl Into<String>) -> Self {
        Self::UnknownLayout(id.into())
    }

    /// Build a [`BoothError::UnknownAsset`] value.
    pub fn unknown_asset(id: impl Into<String>) -> Self {
        Self::UnknownAsset(id.into())
    }

    /// Build a [`BoothError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`BoothError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BoothError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BoothError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
