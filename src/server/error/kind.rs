//! Error classification for callers at the boundary layer.

use crate::server::error::{consent::ConsentError, Error};

/// Coarse error category exposed to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No identity context attached.
    Unauthorized,
    /// Caller-supplied parameter outside its contract.
    Validation,
    /// A referenced entity does not exist.
    NotFound,
    /// The cancellation signal fired.
    Cancelled,
    /// Unexpected persistence or data integrity failure.
    Internal,
}

impl Error {
    /// Classifies the error for the boundary layer.
    ///
    /// Database, configuration and data integrity failures all map to `Internal` so they
    /// never reach the validation channel.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthError(_) => ErrorKind::Unauthorized,
            Self::ValidationError(_) => ErrorKind::Validation,
            Self::ConsentError(ConsentError::CollectionPointNotFound(_)) => ErrorKind::NotFound,
            Self::Cancelled(_) => ErrorKind::Cancelled,
            Self::ConsentError(_) | Self::ConfigError(_) | Self::DbErr(_) => ErrorKind::Internal,
        }
    }

    /// Message safe to show to an end user.
    ///
    /// Internal errors are logged in full and replaced by a generic message.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => {
                tracing::error!("{}", self);

                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}
