/// Convenience result type used across herokit.
pub type HeroResult<T> = Result<T, HeroError>;

/// Top-level error taxonomy used by view and configuration APIs.
#[derive(thiserror::Error, Debug)]
pub enum HeroError {
    /// Invalid construction-time input (empty lists, zero durations, bad geometry).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while loading a configuration document.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeroError {
    /// Build a [`HeroError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeroError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`HeroError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
