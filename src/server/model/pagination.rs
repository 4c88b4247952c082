use serde::Serialize;

use crate::server::error::validation::ValidationError;

/// Validated 1-based page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    offset: u64,
    limit: u64,
}

impl PageRequest {
    /// Validates a page request.
    ///
    /// # Arguments
    /// - `offset` - 1-based page number
    /// - `limit` - Maximum number of items per page
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Request within contract
    /// - `Err(ValidationError)` - `offset` below 1 or `limit` not positive, naming the field
    pub fn new(offset: i64, limit: i64) -> Result<Self, ValidationError> {
        if offset < 1 {
            return Err(ValidationError::new("offset", "must be 1 or greater"));
        }
        if limit <= 0 {
            return Err(ValidationError::new("limit", "must be greater than 0"));
        }

        Ok(Self {
            offset: offset as u64,
            limit: limit as u64,
        })
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

/// One page of results with totals across all pages.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub total_pages: u64,
}

impl<T> PaginatedList<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
        }
    }

    /// Maps every item, keeping the totals.
    pub fn try_map<U, E, F>(self, f: F) -> Result<PaginatedList<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        Ok(PaginatedList {
            items: self.items.into_iter().map(f).collect::<Result<Vec<U>, E>>()?,
            total_count: self.total_count,
            total_pages: self.total_pages,
        })
    }
}
