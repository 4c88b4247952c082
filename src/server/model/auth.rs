use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Authenticated caller attached to every command and query.
///
/// The company is the tenant: every read and write is scoped to `company_id`, and records
/// created on the caller's behalf are attributed to `user_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub company_id: i32,
    pub user_id: i32,
}

impl Identity {
    /// Returns the identity, or `AuthError::MissingIdentity` when none is attached.
    pub fn require(identity: Option<Identity>) -> Result<Identity, AuthError> {
        identity.ok_or(AuthError::MissingIdentity)
    }
}
