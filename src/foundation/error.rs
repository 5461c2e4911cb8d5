/// Convenience result type used across the crate.
pub type RevealResult<T> = Result<T, RevealError>;

/// Top-level error taxonomy.
///
/// Schedule construction only ever yields [`RevealError::InvalidConfiguration`]; evaluation is
/// infallible once a [`crate::Schedule`] exists.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Scene list or timing configuration that cannot produce a valid window table.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Errors when reading or parsing a reveal document.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for configuration errors raised while building a schedule.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
