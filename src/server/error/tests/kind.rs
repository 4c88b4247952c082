//! Tests for `Error::kind` and `Error::public_message`.

use crate::server::error::{
    auth::AuthError, config::ConfigError, consent::ConsentError, kind::ErrorKind,
    validation::ValidationError, Error,
};

/// Expected: each domain error maps to its boundary category
#[test]
fn classifies_errors() {
    assert_eq!(
        Error::from(AuthError::MissingIdentity).kind(),
        ErrorKind::Unauthorized
    );
    assert_eq!(
        Error::from(ValidationError::new("limit", "must be greater than 0")).kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        Error::from(ConsentError::CollectionPointNotFound("cp-1".to_string())).kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        Error::Cancelled("load consents".to_string()).kind(),
        ErrorKind::Cancelled
    );
    assert_eq!(
        Error::from(ConsentError::IdOutOfRange {
            field: "uid",
            value: i64::MAX
        })
        .kind(),
        ErrorKind::Internal
    );
    assert_eq!(
        Error::from(ConfigError::MissingEnvVar("DATABASE_URL".to_string())).kind(),
        ErrorKind::Internal
    );
    assert_eq!(
        Error::from(sea_orm::DbErr::Custom("connection reset".to_string())).kind(),
        ErrorKind::Internal
    );
}

/// Expected: internal details are hidden while validation details are kept
#[test]
fn public_message_hides_internal_detail() {
    let db_error = Error::from(sea_orm::DbErr::Custom("relation consent does not exist".to_string()));
    assert_eq!(db_error.public_message(), "Internal server error");

    let validation = Error::from(ValidationError::new("count", "must not be negative"));
    assert_eq!(
        validation.public_message(),
        "Invalid value for count: must not be negative"
    );
}
