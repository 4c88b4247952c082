use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_company::Company, m20251101_000002_website::Website};

static IDX_COLLECTION_POINT_COMPANY_ID: &str = "idx-collection_point-company_id";
static FK_COLLECTION_POINT_COMPANY_ID: &str = "fk-collection_point-company_id";
static FK_COLLECTION_POINT_WEBSITE_ID: &str = "fk-collection_point-website_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectionPoint::Table)
                    .if_not_exists()
                    .col(pk_auto(CollectionPoint::Id))
                    .col(string_uniq(CollectionPoint::Guid))
                    .col(integer(CollectionPoint::CompanyId))
                    .col(integer(CollectionPoint::WebsiteId))
                    .col(string(CollectionPoint::Name))
                    .col(string(CollectionPoint::Language))
                    .col(string(CollectionPoint::ExpirationPeriod))
                    .col(string_len(CollectionPoint::Status, 16))
                    .col(integer(CollectionPoint::Version))
                    .col(boolean(CollectionPoint::UidPrimary))
                    .col(boolean(CollectionPoint::UidRequired))
                    .col(boolean(CollectionPoint::IdCardNumberPrimary))
                    .col(boolean(CollectionPoint::IdCardNumberRequired))
                    .col(boolean(CollectionPoint::EmailPrimary))
                    .col(boolean(CollectionPoint::EmailRequired))
                    .col(boolean(CollectionPoint::FullNamePrimary))
                    .col(boolean(CollectionPoint::FullNameRequired))
                    .col(boolean(CollectionPoint::PhoneNumberPrimary))
                    .col(boolean(CollectionPoint::PhoneNumberRequired))
                    .col(integer(CollectionPoint::CreatedBy))
                    .col(timestamp(CollectionPoint::CreatedAt))
                    .col(integer(CollectionPoint::UpdatedBy))
                    .col(timestamp(CollectionPoint::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COLLECTION_POINT_COMPANY_ID)
                            .from(CollectionPoint::Table, CollectionPoint::CompanyId)
                            .to(Company::Table, Company::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COLLECTION_POINT_WEBSITE_ID)
                            .from(CollectionPoint::Table, CollectionPoint::WebsiteId)
                            .to(Website::Table, Website::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLECTION_POINT_COMPANY_ID)
                    .table(CollectionPoint::Table)
                    .col(CollectionPoint::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COLLECTION_POINT_COMPANY_ID)
                    .table(CollectionPoint::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CollectionPoint::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CollectionPoint {
    Table,
    Id,
    Guid,
    CompanyId,
    WebsiteId,
    Name,
    Language,
    ExpirationPeriod,
    Status,
    Version,
    UidPrimary,
    UidRequired,
    IdCardNumberPrimary,
    IdCardNumberRequired,
    EmailPrimary,
    EmailRequired,
    FullNamePrimary,
    FullNameRequired,
    PhoneNumberPrimary,
    PhoneNumberRequired,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}
