use chrono::Utc;
use entity::sea_orm_active_enums::RecordStatus;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::{collection_point::PurposeInput, db::PurposeLinkModel};

pub struct PurposeLinkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PurposeLinkRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links purposes to a collection point as active, version 1 links
    ///
    /// # Arguments
    /// - `collection_point_id`: Collection point the purposes are offered on
    /// - `user_id`: Caller, recorded as creator and updater
    /// - `purposes`: Purpose ids with display priority and optional section
    pub async fn create_many(
        &self,
        collection_point_id: i32,
        user_id: i32,
        purposes: &[PurposeInput],
    ) -> Result<(), DbErr> {
        if purposes.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let links = purposes
            .iter()
            .map(|purpose| entity::collection_point_purpose::ActiveModel {
                collection_point_id: ActiveValue::Set(collection_point_id),
                purpose_id: ActiveValue::Set(purpose.purpose_id),
                section_info_id: ActiveValue::Set(purpose.section_info_id),
                priority: ActiveValue::Set(purpose.priority),
                status: ActiveValue::Set(RecordStatus::Active),
                version: ActiveValue::Set(1),
                created_by: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(now),
                updated_by: ActiveValue::Set(user_id),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::CollectionPointPurpose::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets active purpose links for the provided collection points
    pub async fn get_active_by_collection_point_ids(
        &self,
        collection_point_ids: &[i32],
    ) -> Result<Vec<PurposeLinkModel>, DbErr> {
        entity::prelude::CollectionPointPurpose::find()
            .filter(
                entity::collection_point_purpose::Column::CollectionPointId
                    .is_in(collection_point_ids.iter().copied()),
            )
            .filter(entity::collection_point_purpose::Column::Status.eq(RecordStatus::Active))
            .all(self.db)
            .await
    }
}
