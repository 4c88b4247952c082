use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsentError {
    #[error("Collection point with external id {0:?} not found for this company")]
    CollectionPointNotFound(String),
    #[error("Unable to parse retention period {0:?}")]
    InvalidRetentionPeriod(String),
    #[error("Value {value} of {field} does not fit in a 32-bit integer")]
    IdOutOfRange { field: &'static str, value: i64 },
}
