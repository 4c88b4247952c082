use entity::sea_orm_active_enums::RecordStatus;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::WebsiteModel;

pub struct WebsiteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WebsiteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets websites of a company by id, excluding deleted ones
    pub async fn get_many_by_ids(
        &self,
        company_id: i32,
        ids: &[i32],
    ) -> Result<Vec<WebsiteModel>, DbErr> {
        entity::prelude::Website::find()
            .filter(entity::website::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::website::Column::CompanyId.eq(company_id))
            .filter(entity::website::Column::Status.ne(RecordStatus::Deleted))
            .all(self.db)
            .await
    }
}
