//! Consent read service.
//!
//! This module contains the consent query pipeline: compose a tenant-scoped filtered query,
//! page it, load reference data for the page in one batch per table, then enrich each record
//! in memory. No query is ever issued per consent record.

pub mod enrich;
pub mod lookup;

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::RecordStatus;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};

use crate::server::{
    data::{
        collection_point::CollectionPointRepository,
        consent::{compose_consent_query, ConsentRepository},
    },
    error::{consent::ConsentError, validation::ValidationError, Error},
    model::{
        auth::Identity,
        consent::{ConsentFilter, ConsentView, FindConsentQuery, ListConsentsQuery},
        pagination::{PageRequest, PaginatedList},
    },
    service::{
        consent::{
            enrich::enrich_consent,
            lookup::LookupIndexBuilder,
        },
        pagination::paginate,
    },
    util::cancel::CancelSignal,
};

/// Service for reading enriched consent records.
pub struct ConsentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConsentService<'a> {
    /// Creates a new instance of ConsentService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active consents of the caller's company matching the filter, one page at a time.
    ///
    /// The identity and page request are validated before any store access. When no filter is
    /// set the result is an empty page rather than every consent of the company.
    ///
    /// # Arguments
    /// - `query` - Identity, filters, current version flag and 1-based page request
    /// - `cancel` - Checked before each store call
    ///
    /// # Returns
    /// - `Ok(PaginatedList<ConsentView>)` - Enriched page with totals
    /// - `Err(Error::AuthError)` - No identity attached
    /// - `Err(Error::ValidationError)` - `offset` below 1 or `limit` not positive
    /// - `Err(Error::ConsentError)` - A stored counter does not fit in 32 bits
    /// - `Err(Error::Cancelled)` - Signal fired before a store call
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_consents(
        &self,
        query: ListConsentsQuery,
        cancel: &CancelSignal,
    ) -> Result<PaginatedList<ConsentView>, Error> {
        let identity = Identity::require(query.identity)?;
        let page = PageRequest::new(query.offset, query.limit)?;

        let Some(select) = compose_consent_query(
            identity.company_id,
            query.current_version_only,
            &query.filter,
        ) else {
            tracing::debug!(
                company_id = %identity.company_id,
                "No consent filter set, returning empty page"
            );

            return Ok(PaginatedList::empty());
        };
        let select = select.filter(entity::consent::Column::Status.eq(RecordStatus::Active));

        let consents = paginate(self.db, select, page, cancel).await?;

        let collection_point_ids: Vec<i32> = consents
            .items
            .iter()
            .map(|consent| consent.collection_point_id)
            .collect();
        let indexes = LookupIndexBuilder::new(self.db)
            .build(identity.company_id, &collection_point_ids, cancel)
            .await?;

        let consents = consents.try_map(|consent| enrich_consent(consent, &indexes))?;

        tracing::debug!(
            company_id = %identity.company_id,
            total_count = %consents.total_count,
            "Listed consents"
        );

        Ok(consents)
    }

    /// Finds the current consent of a data subject on one collection point.
    ///
    /// # Arguments
    /// - `query` - Identity and filters; the collection point external id is required once any
    ///   filter is set
    /// - `cancel` - Checked before each store call
    ///
    /// # Returns
    /// - `Ok(Some(ConsentView))` - First current consent by id, enriched
    /// - `Ok(None)` - No filter set, or no consent matches
    /// - `Err(Error::AuthError)` - No identity attached
    /// - `Err(Error::ValidationError)` - Filters set without `collection_point_guid`
    /// - `Err(Error::ConsentError)` - Collection point unknown for the company, or a stored
    ///   counter does not fit in 32 bits
    /// - `Err(Error::Cancelled)` - Signal fired before a store call
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_consent(
        &self,
        query: FindConsentQuery,
        cancel: &CancelSignal,
    ) -> Result<Option<ConsentView>, Error> {
        let identity = Identity::require(query.identity)?;

        if query.filter.is_unset() {
            return Ok(None);
        }
        let guid = ConsentFilter::present(&query.filter.collection_point_guid).ok_or_else(|| {
            ValidationError::new(
                "collection_point_guid",
                "is required to look up a single consent",
            )
        })?;

        cancel.ensure_active("find collection point")?;
        CollectionPointRepository::new(self.db)
            .find_by_guid(identity.company_id, guid)
            .await?
            .ok_or_else(|| ConsentError::CollectionPointNotFound(guid.to_string()))?;

        let Some(select) = compose_consent_query(identity.company_id, true, &query.filter) else {
            return Ok(None);
        };

        cancel.ensure_active("find consent")?;
        let Some(consent) = ConsentRepository::new(self.db).find_first(select).await? else {
            return Ok(None);
        };

        let indexes = LookupIndexBuilder::new(self.db)
            .build(identity.company_id, &[consent.collection_point_id], cancel)
            .await?;

        Ok(Some(enrich_consent(consent, &indexes)?))
    }
}
