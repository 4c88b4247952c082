use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_company::Company, m20251101_000002_website::Website,
    m20251101_000005_collection_point::CollectionPoint,
};

static IDX_CONSENT_COMPANY_ID: &str = "idx-consent-company_id";
static IDX_CONSENT_COLLECTION_POINT_ID: &str = "idx-consent-collection_point_id";
static FK_CONSENT_COMPANY_ID: &str = "fk-consent-company_id";
static FK_CONSENT_COLLECTION_POINT_ID: &str = "fk-consent-collection_point_id";
static FK_CONSENT_WEBSITE_ID: &str = "fk-consent-website_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Consent::Table)
                    .if_not_exists()
                    .col(pk_auto(Consent::Id))
                    .col(big_integer(Consent::Uid))
                    .col(integer(Consent::CompanyId))
                    .col(integer(Consent::CollectionPointId))
                    .col(integer(Consent::WebsiteId))
                    .col(string_null(Consent::FullName))
                    .col(string_null(Consent::IdCardNumber))
                    .col(string_null(Consent::Email))
                    .col(string_null(Consent::PhoneNumber))
                    .col(string_null(Consent::FromBrowser))
                    .col(text_null(Consent::Remark))
                    .col(string_null(Consent::VerifyType))
                    .col(big_integer(Consent::TotalTransactions))
                    .col(timestamp(Consent::ConsentDatetime))
                    .col(timestamp(Consent::CreatedAt))
                    .col(string_len(Consent::Status, 16))
                    .col(boolean(Consent::IsCurrent))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONSENT_COMPANY_ID)
                            .from(Consent::Table, Consent::CompanyId)
                            .to(Company::Table, Company::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONSENT_COLLECTION_POINT_ID)
                            .from(Consent::Table, Consent::CollectionPointId)
                            .to(CollectionPoint::Table, CollectionPoint::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONSENT_WEBSITE_ID)
                            .from(Consent::Table, Consent::WebsiteId)
                            .to(Website::Table, Website::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONSENT_COMPANY_ID)
                    .table(Consent::Table)
                    .col(Consent::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONSENT_COLLECTION_POINT_ID)
                    .table(Consent::Table)
                    .col(Consent::CollectionPointId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONSENT_COLLECTION_POINT_ID)
                    .table(Consent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONSENT_COMPANY_ID)
                    .table(Consent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Consent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Consent {
    Table,
    Id,
    Uid,
    CompanyId,
    CollectionPointId,
    WebsiteId,
    FullName,
    IdCardNumber,
    Email,
    PhoneNumber,
    FromBrowser,
    Remark,
    VerifyType,
    TotalTransactions,
    ConsentDatetime,
    CreatedAt,
    Status,
    IsCurrent,
}
