//! Error types

/// Errors raised while rebuilding an option list.
///
/// Every variant is a flavour of invalid argument: the call was malformed and
/// retrying it unchanged cannot succeed. The target is never touched when one
/// of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum DropdownError {
    /// No target control was supplied.
    #[error("Invalid argument: missing target control")]
    MissingTarget,

    /// The results were neither a sequence nor the empty marker.
    #[error("Invalid argument: unsupported result shape ({found})")]
    UnsupportedShape {
        /// Short description of what was found instead.
        found: String,
    },

    /// A result item lacked a usable `id` or `name`.
    #[error("Invalid argument: result item {index}: {reason}")]
    InvalidItem {
        /// Position of the item in the result sequence.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Result text could not be parsed as JSON.
    #[error("Invalid argument: malformed result payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl DropdownError {
    /// Creates an unsupported-shape error.
    pub fn unsupported_shape(found: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            found: found.into(),
        }
    }

    /// Creates an invalid-item error.
    pub fn invalid_item(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidItem {
            index,
            reason: reason.into(),
        }
    }

    /// Returns `true` for every error this crate produces.
    ///
    /// Callers matching on the error kind rather than the variant can rely on
    /// this staying true if variants are added.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::MissingTarget
            | Self::UnsupportedShape { .. }
            | Self::InvalidItem { .. }
            | Self::Json(_) => true,
        }
    }
}

/// Result type for option-list operations.
pub type Result<T> = std::result::Result<T, DropdownError>;
