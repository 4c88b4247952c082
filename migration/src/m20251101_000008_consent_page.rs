use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_collection_point::CollectionPoint;

static FK_CONSENT_PAGE_COLLECTION_POINT_ID: &str = "fk-consent_page-collection_point_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConsentPage::Table)
                    .if_not_exists()
                    .col(pk_auto(ConsentPage::Id))
                    .col(integer_uniq(ConsentPage::CollectionPointId))
                    .col(string_null(ConsentPage::HeaderLogo))
                    .col(text_null(ConsentPage::HeaderLabel))
                    .col(string_null(ConsentPage::HeaderBgImage))
                    .col(text_null(ConsentPage::BodyTopDescription))
                    .col(text_null(ConsentPage::BodyBottomDescription))
                    .col(string_null(ConsentPage::BodyBgImage))
                    .col(text_null(ConsentPage::LabelCheckBoxAccept))
                    .col(string_null(ConsentPage::LabelActionOk))
                    .col(string_null(ConsentPage::LabelActionCancel))
                    .col(string_null(ConsentPage::LabelLinkToPolicy))
                    .col(string_null(ConsentPage::LabelLinkToPolicyUrl))
                    .col(string_null(ConsentPage::RedirectUrl))
                    .col(text_null(ConsentPage::HeaderLabelThankPage))
                    .col(text_null(ConsentPage::ShortDescriptionThankPage))
                    .col(string_null(ConsentPage::ButtonThankPage))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONSENT_PAGE_COLLECTION_POINT_ID)
                            .from(ConsentPage::Table, ConsentPage::CollectionPointId)
                            .to(CollectionPoint::Table, CollectionPoint::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConsentPage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConsentPage {
    Table,
    Id,
    CollectionPointId,
    HeaderLogo,
    HeaderLabel,
    HeaderBgImage,
    BodyTopDescription,
    BodyBottomDescription,
    BodyBgImage,
    LabelCheckBoxAccept,
    LabelActionOk,
    LabelActionCancel,
    LabelLinkToPolicy,
    LabelLinkToPolicyUrl,
    RedirectUrl,
    HeaderLabelThankPage,
    ShortDescriptionThankPage,
    ButtonThankPage,
}
