/// Convenience result type used across clockface.
pub type ClockResult<T> = Result<T, ClockError>;

/// Top-level error taxonomy used by the face builders, the alarm registry and the sinks.
#[derive(thiserror::Error, Debug)]
pub enum ClockError {
    /// A form selector or numeric field outside its enumeration or range.
    #[error("range error: {0}")]
    Range(String),

    /// Invalid configuration data (unknown locale, zero-sized canvas, ...).
    #[error("config error: {0}")]
    Config(String),

    /// A scene lookup that the builders guarantee did not resolve.
    #[error("scene error: {0}")]
    Scene(String),

    /// Errors while turning a document into pixels.
    #[error("render error: {0}")]
    Render(String),

    /// IO performed by file-backed sinks.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClockError {
    /// Build a [`ClockError::Range`] value.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Build a [`ClockError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ClockError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`ClockError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
