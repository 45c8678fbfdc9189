use std::path::PathBuf;

use thiserror::Error;
use tint_style::{ColorError, EditError, ImportError, ModeError, RoleError};

pub type Result<T> = std::result::Result<T, TintError>;

/// Exit code for rejected theme or color input.
pub const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Debug, Error)]
pub enum TintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    #[error("{0}")]
    Edit(#[from] EditError),

    #[error("{0}")]
    Color(#[from] ColorError),

    #[error("{0}")]
    Role(#[from] RoleError),

    #[error("{0}")]
    Mode(#[from] ModeError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("required path does not exist: {path}")]
    MissingPath { path: PathBuf },
}

impl TintError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Import(_) | Self::Edit(_) | Self::Color(_) | Self::Role(_) | Self::Mode(_) => {
                EXIT_INVALID_INPUT
            }
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
