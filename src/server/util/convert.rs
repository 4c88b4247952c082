//! Checked numeric narrowing for database values.

use crate::server::error::consent::ConsentError;

/// Narrows a 64-bit database value to `i32`.
///
/// Values outside the `i32` range are a data integrity problem and are reported as
/// `ConsentError::IdOutOfRange` instead of being truncated.
pub fn narrow_to_i32(field: &'static str, value: i64) -> Result<i32, ConsentError> {
    i32::try_from(value).map_err(|_| ConsentError::IdOutOfRange { field, value })
}
