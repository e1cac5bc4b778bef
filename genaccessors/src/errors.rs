use std::io;

use thiserror::Error;

/// Errors produced while rendering or writing an accessor module.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Writing to the output sink failed.
    #[error("failed to write accessor module")]
    Io(#[from] io::Error),

    /// A field name is not a usable Elm identifier (strict mode only).
    #[error("invalid field name '{name}': {reason}")]
    InvalidFieldName { name: String, reason: &'static str },

    /// The same field name appears more than once (strict mode only).
    #[error("duplicate field name '{name}'")]
    DuplicateFieldName { name: String },
}

impl EmitError {
    pub fn invalid(name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidFieldName {
            name: name.into(),
            reason,
        }
    }
}
