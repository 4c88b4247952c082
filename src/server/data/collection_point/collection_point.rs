use chrono::Utc;
use entity::sea_orm_active_enums::RecordStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::{
    auth::Identity,
    collection_point::{CreateCollectionPointCommand, KeyConfiguration},
    db::CollectionPointModel,
};

pub struct CollectionPointRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollectionPointRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active collection point at version 1 owned by the identity's company
    ///
    /// # Arguments
    /// - `identity`: Caller, recorded as creator and updater
    /// - `command`: Collection point attributes
    /// - `keys`: Validated identity key configuration
    /// - `guid`: New external identifier
    pub async fn create(
        &self,
        identity: &Identity,
        command: &CreateCollectionPointCommand,
        keys: &KeyConfiguration,
        guid: String,
    ) -> Result<CollectionPointModel, DbErr> {
        let now = Utc::now().naive_utc();

        let collection_point = entity::collection_point::ActiveModel {
            guid: ActiveValue::Set(guid),
            company_id: ActiveValue::Set(identity.company_id),
            website_id: ActiveValue::Set(command.website_id),
            name: ActiveValue::Set(command.name.clone()),
            language: ActiveValue::Set(command.language.clone()),
            expiration_period: ActiveValue::Set(command.expiration_period.clone()),
            status: ActiveValue::Set(RecordStatus::Active),
            version: ActiveValue::Set(1),
            uid_primary: ActiveValue::Set(keys.uid.primary),
            uid_required: ActiveValue::Set(keys.uid.required),
            id_card_number_primary: ActiveValue::Set(keys.id_card_number.primary),
            id_card_number_required: ActiveValue::Set(keys.id_card_number.required),
            email_primary: ActiveValue::Set(keys.email.primary),
            email_required: ActiveValue::Set(keys.email.required),
            full_name_primary: ActiveValue::Set(keys.full_name.primary),
            full_name_required: ActiveValue::Set(keys.full_name.required),
            phone_number_primary: ActiveValue::Set(keys.phone_number.primary),
            phone_number_required: ActiveValue::Set(keys.phone_number.required),
            created_by: ActiveValue::Set(identity.user_id),
            created_at: ActiveValue::Set(now),
            updated_by: ActiveValue::Set(identity.user_id),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        collection_point.insert(self.db).await
    }

    /// Gets collection points of a company by id, excluding deleted ones
    pub async fn get_many_by_ids(
        &self,
        company_id: i32,
        ids: &[i32],
    ) -> Result<Vec<CollectionPointModel>, DbErr> {
        entity::prelude::CollectionPoint::find()
            .filter(entity::collection_point::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::collection_point::Column::CompanyId.eq(company_id))
            .filter(entity::collection_point::Column::Status.ne(RecordStatus::Deleted))
            .all(self.db)
            .await
    }

    /// Finds a collection point of a company by its external identifier
    pub async fn find_by_guid(
        &self,
        company_id: i32,
        guid: &str,
    ) -> Result<Option<CollectionPointModel>, DbErr> {
        entity::prelude::CollectionPoint::find()
            .filter(entity::collection_point::Column::Guid.eq(guid))
            .filter(entity::collection_point::Column::CompanyId.eq(company_id))
            .filter(entity::collection_point::Column::Status.ne(RecordStatus::Deleted))
            .one(self.db)
            .await
    }
}
