use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000004_custom_field::CustomField,
    m20251101_000005_collection_point::CollectionPoint,
};

static FK_COLLECTION_POINT_CUSTOM_FIELD_COLLECTION_POINT_ID: &str =
    "fk-collection_point_custom_field-collection_point_id";
static FK_COLLECTION_POINT_CUSTOM_FIELD_CUSTOM_FIELD_ID: &str =
    "fk-collection_point_custom_field-custom_field_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectionPointCustomField::Table)
                    .if_not_exists()
                    .col(pk_auto(CollectionPointCustomField::Id))
                    .col(integer(CollectionPointCustomField::CollectionPointId))
                    .col(integer(CollectionPointCustomField::CustomFieldId))
                    .col(boolean(CollectionPointCustomField::Required))
                    .col(integer(CollectionPointCustomField::Sequence))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COLLECTION_POINT_CUSTOM_FIELD_COLLECTION_POINT_ID)
                            .from(
                                CollectionPointCustomField::Table,
                                CollectionPointCustomField::CollectionPointId,
                            )
                            .to(CollectionPoint::Table, CollectionPoint::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COLLECTION_POINT_CUSTOM_FIELD_CUSTOM_FIELD_ID)
                            .from(
                                CollectionPointCustomField::Table,
                                CollectionPointCustomField::CustomFieldId,
                            )
                            .to(CustomField::Table, CustomField::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CollectionPointCustomField::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum CollectionPointCustomField {
    Table,
    Id,
    CollectionPointId,
    CustomFieldId,
    Required,
    Sequence,
}
