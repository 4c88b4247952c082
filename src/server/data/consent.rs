use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

use crate::server::model::{consent::ConsentFilter, db::ConsentModel};

/// Builds the base consent query for a tenant.
///
/// Joins collection point, website and company for filtering only; rows are consent records
/// ordered by id ascending. Each set filter is an exact match and filters are ANDed together.
/// Returns `None` when no filter is set so callers never query the whole table by accident.
///
/// # Arguments
/// - `company_id` - Tenant whose consents are queried
/// - `current_version_only` - Restrict to records flagged as the current version
/// - `filter` - Subject identity and collection point filters
pub fn compose_consent_query(
    company_id: i32,
    current_version_only: bool,
    filter: &ConsentFilter,
) -> Option<Select<entity::consent::Entity>> {
    if filter.is_unset() {
        return None;
    }

    let mut condition = Condition::all()
        .add(entity::consent::Column::CompanyId.eq(company_id))
        .add(entity::collection_point::Column::CompanyId.eq(company_id));

    if current_version_only {
        condition = condition.add(entity::consent::Column::IsCurrent.eq(true));
    }

    let subject_filters = [
        (entity::consent::Column::FullName, &filter.full_name),
        (entity::consent::Column::IdCardNumber, &filter.id_card_number),
        (entity::consent::Column::PhoneNumber, &filter.phone_number),
        (entity::consent::Column::Email, &filter.email),
    ];
    for (column, value) in subject_filters {
        if let Some(value) = ConsentFilter::present(value) {
            condition = condition.add(column.eq(value));
        }
    }

    if let Some(guid) = ConsentFilter::present(&filter.collection_point_guid) {
        condition = condition.add(entity::collection_point::Column::Guid.eq(guid));
    }

    Some(
        entity::prelude::Consent::find()
            .inner_join(entity::prelude::CollectionPoint)
            .inner_join(entity::prelude::Website)
            .inner_join(entity::prelude::Company)
            .filter(condition)
            .order_by_asc(entity::consent::Column::Id),
    )
}

pub struct ConsentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConsentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the first row of a composed consent query.
    pub async fn find_first(
        &self,
        query: Select<entity::consent::Entity>,
    ) -> Result<Option<ConsentModel>, DbErr> {
        query.limit(1).one(self.db).await
    }
}
