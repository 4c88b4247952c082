use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::collection_point::CustomFieldInput;

pub struct CustomFieldConfigRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomFieldConfigRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Configures custom fields on a collection point
    pub async fn create_many(
        &self,
        collection_point_id: i32,
        custom_fields: &[CustomFieldInput],
    ) -> Result<(), DbErr> {
        if custom_fields.is_empty() {
            return Ok(());
        }

        let configs = custom_fields.iter().map(|custom_field| {
            entity::collection_point_custom_field::ActiveModel {
                collection_point_id: ActiveValue::Set(collection_point_id),
                custom_field_id: ActiveValue::Set(custom_field.custom_field_id),
                required: ActiveValue::Set(custom_field.is_required),
                sequence: ActiveValue::Set(custom_field.sequence),
                ..Default::default()
            }
        });

        entity::prelude::CollectionPointCustomField::insert_many(configs)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
