use entity::sea_orm_active_enums::RecordStatus;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::CompanyModel;

pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets active companies by id
    pub async fn get_active_by_ids(&self, ids: &[i32]) -> Result<Vec<CompanyModel>, DbErr> {
        entity::prelude::Company::find()
            .filter(entity::company::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::company::Column::Status.eq(RecordStatus::Active))
            .all(self.db)
            .await
    }
}
