//! Collection point write service.
//!
//! Creates a collection point together with its purpose links, custom field configuration and
//! consent page detail in a single transaction. Either every row is persisted or none is.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::collection_point::{
        custom_field::CustomFieldConfigRepository, page_detail::PageDetailRepository,
        purpose_link::PurposeLinkRepository, CollectionPointRepository,
    },
    error::{validation::ValidationError, Error},
    model::{
        auth::Identity,
        collection_point::{
            CreateCollectionPointCommand, IdentityKey, KeyConfiguration, KeyFlags,
            KeyIdentifierInput,
        },
    },
    util::{cancel::CancelSignal, expiration::RetentionPeriod},
};

/// Service for creating collection point aggregates.
pub struct CollectionPointService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollectionPointService<'a> {
    /// Creates a new instance of CollectionPointService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a collection point with its purposes, custom fields and page detail.
    ///
    /// Everything the caller supplied is validated before the transaction begins. The
    /// collection point is created active at version 1 with a new external GUID, owned by the
    /// caller's company and attributed to the caller's user. The cancellation signal is only
    /// checked before the transaction begins.
    ///
    /// # Arguments
    /// - `command` - Collection point attributes and child entries
    /// - `cancel` - Cancellation signal
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new collection point
    /// - `Err(Error::AuthError)` - No identity attached
    /// - `Err(Error::ValidationError)` - Unknown key type code, more than one primary key, or
    ///   unparsable `expiration_period`
    /// - `Err(Error::Cancelled)` - Signal fired before the transaction began
    /// - `Err(Error::DbErr)` - A write failed; the transaction was rolled back
    pub async fn create_collection_point(
        &self,
        command: CreateCollectionPointCommand,
        cancel: &CancelSignal,
    ) -> Result<i32, Error> {
        let identity = Identity::require(command.identity)?;
        let keys = key_configuration(&command.key_identifiers)?;
        command
            .expiration_period
            .parse::<RetentionPeriod>()
            .map_err(|err| ValidationError::new("expiration_period", err.to_string()))?;

        cancel.ensure_active("create collection point")?;

        let txn = self.db.begin().await?;

        let staged = Self::stage_aggregate(&txn, &identity, &command, &keys).await;

        match staged {
            Ok(collection_point_id) => {
                txn.commit().await?;

                tracing::debug!(
                    company_id = %identity.company_id,
                    collection_point_id = %collection_point_id,
                    purposes = %command.purposes.len(),
                    custom_fields = %command.custom_fields.len(),
                    "Created collection point"
                );

                Ok(collection_point_id)
            }
            Err(err) => {
                tracing::error!(
                    company_id = %identity.company_id,
                    "Failed to create collection point {:?}, rolling back: {}",
                    command.name,
                    err
                );

                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back collection point creation: {}", rollback_err);
                }

                Err(err)
            }
        }
    }

    async fn stage_aggregate(
        txn: &DatabaseTransaction,
        identity: &Identity,
        command: &CreateCollectionPointCommand,
        keys: &KeyConfiguration,
    ) -> Result<i32, Error> {
        let collection_point = CollectionPointRepository::new(txn)
            .create(identity, command, keys, Uuid::new_v4().to_string())
            .await?;

        PurposeLinkRepository::new(txn)
            .create_many(collection_point.id, identity.user_id, &command.purposes)
            .await?;

        CustomFieldConfigRepository::new(txn)
            .create_many(collection_point.id, &command.custom_fields)
            .await?;

        PageDetailRepository::new(txn)
            .create(collection_point.id, &command.page_detail)
            .await?;

        Ok(collection_point.id)
    }
}

/// Parses key type codes into the primary/required configuration.
///
/// A later entry for the same key replaces an earlier one.
fn key_configuration(entries: &[KeyIdentifierInput]) -> Result<KeyConfiguration, ValidationError> {
    let mut keys = KeyConfiguration::default();

    for entry in entries {
        let key = entry
            .code
            .parse::<IdentityKey>()
            .map_err(|message| ValidationError::new("consent_key_identifier", message))?;

        *keys.flags_mut(key) = KeyFlags {
            primary: entry.is_primary_key,
            required: entry.is_required,
        };
    }

    if keys.primary_count() > 1 {
        return Err(ValidationError::new(
            "consent_key_identifier",
            "at most one key may be marked as primary",
        ));
    }

    Ok(keys)
}
