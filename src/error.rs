use thiserror::Error;

use crate::demangle::DemangleError;

/// Why a frame (or frame sequence) could not be parsed.
///
/// Every variant is a normal, expected outcome: foreign and system frames
/// routinely fail one of these checks. The `Option`-returning API collapses
/// all of them to `None`.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("INSUFFICIENT_FIELDS: frame line has {found} whitespace-separated fields, need at least 4")]
    InsufficientFields { found: usize },

    #[error("DEMANGLE_FAILED: {0}")]
    Demangle(#[from] DemangleError),

    #[error("INSUFFICIENT_COMPONENTS: qualified name '{token}' has {found} dot-separated components, need at least 2")]
    InsufficientComponents { token: String, found: usize },

    #[error("INSUFFICIENT_FRAME_DEPTH: stack has {found} frames, query needs at least {required}")]
    InsufficientFrameDepth { required: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, ParseError>;
