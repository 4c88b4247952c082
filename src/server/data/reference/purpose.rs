use entity::sea_orm_active_enums::RecordStatus;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::PurposeModel;

pub struct PurposeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PurposeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets active purposes of a company by id
    pub async fn get_active_by_ids(
        &self,
        company_id: i32,
        ids: &[i32],
    ) -> Result<Vec<PurposeModel>, DbErr> {
        entity::prelude::Purpose::find()
            .filter(entity::purpose::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::purpose::Column::CompanyId.eq(company_id))
            .filter(entity::purpose::Column::Status.eq(RecordStatus::Active))
            .all(self.db)
            .await
    }
}
