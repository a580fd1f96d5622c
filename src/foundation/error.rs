/// Convenience result type used across hilbertmap.
pub type HilbertResult<T> = Result<T, HilbertError>;

/// Top-level error taxonomy used by the public APIs.
#[derive(thiserror::Error, Debug)]
pub enum HilbertError {
    /// A caller-supplied argument is outside the accepted domain
    /// (non power-of-two grid order, empty input, non-finite data, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A curve distance or coordinate lies outside the grid it was checked against.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HilbertError {
    /// Build a [`HilbertError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`HilbertError::OutOfRange`] value.
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Prefix the message with `ctx`, keeping the variant.
    pub(crate) fn context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            Self::InvalidArgument(msg) => Self::InvalidArgument(format!("{ctx}: {msg}")),
            Self::OutOfRange(msg) => Self::OutOfRange(format!("{ctx}: {msg}")),
            Self::Other(err) => Self::Other(err.context(ctx.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
