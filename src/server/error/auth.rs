use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No authenticated identity is attached to the request")]
    MissingIdentity,
}
