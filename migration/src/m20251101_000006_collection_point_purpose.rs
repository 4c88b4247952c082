use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000003_purpose::Purpose, m20251101_000005_collection_point::CollectionPoint,
};

static IDX_COLLECTION_POINT_PURPOSE_COLLECTION_POINT_ID: &str =
    "idx-collection_point_purpose-collection_point_id";
static FK_COLLECTION_POINT_PURPOSE_COLLECTION_POINT_ID: &str =
    "fk-collection_point_purpose-collection_point_id";
static FK_COLLECTION_POINT_PURPOSE_PURPOSE_ID: &str = "fk-collection_point_purpose-purpose_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectionPointPurpose::Table)
                    .if_not_exists()
                    .col(pk_auto(CollectionPointPurpose::Id))
                    .col(integer(CollectionPointPurpose::CollectionPointId))
                    .col(integer(CollectionPointPurpose::PurposeId))
                    .col(integer_null(CollectionPointPurpose::SectionInfoId))
                    .col(integer(CollectionPointPurpose::Priority))
                    .col(string_len(CollectionPointPurpose::Status, 16))
                    .col(integer(CollectionPointPurpose::Version))
                    .col(integer(CollectionPointPurpose::CreatedBy))
                    .col(timestamp(CollectionPointPurpose::CreatedAt))
                    .col(integer(CollectionPointPurpose::UpdatedBy))
                    .col(timestamp(CollectionPointPurpose::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COLLECTION_POINT_PURPOSE_COLLECTION_POINT_ID)
                            .from(
                                CollectionPointPurpose::Table,
                                CollectionPointPurpose::CollectionPointId,
                            )
                            .to(CollectionPoint::Table, CollectionPoint::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COLLECTION_POINT_PURPOSE_PURPOSE_ID)
                            .from(CollectionPointPurpose::Table, CollectionPointPurpose::PurposeId)
                            .to(Purpose::Table, Purpose::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLECTION_POINT_PURPOSE_COLLECTION_POINT_ID)
                    .table(CollectionPointPurpose::Table)
                    .col(CollectionPointPurpose::CollectionPointId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COLLECTION_POINT_PURPOSE_COLLECTION_POINT_ID)
                    .table(CollectionPointPurpose::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CollectionPointPurpose::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CollectionPointPurpose {
    Table,
    Id,
    CollectionPointId,
    PurposeId,
    SectionInfoId,
    Priority,
    Status,
    Version,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}
