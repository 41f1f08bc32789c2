use thiserror::Error;

/// Errors raised while turning a configuration into compiled patterns.
#[derive(Debug, Error)]
pub enum SlugError {
    /// A custom replacement pair has an empty match string, which would
    /// match between every character of the input.
    #[error("custom replacement #{index} has an empty match string")]
    EmptyReplacement { index: usize },

    /// A derived pattern failed to compile.
    #[error("failed to compile slug pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, SlugError>;
