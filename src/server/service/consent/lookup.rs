//! Batched reference lookups for consent enrichment.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDateTime;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        collection_point::{purpose_link::PurposeLinkRepository, CollectionPointRepository},
        reference::{
            company::CompanyRepository, purpose::PurposeRepository, website::WebsiteRepository,
        },
    },
    error::Error,
    model::{
        consent::{CollectionPointView, CompanyView, PurposeView, WebsiteView},
        db::PurposeModel,
    },
    util::{cancel::CancelSignal, expiration::expiration_date_time},
};

/// Reference data keyed by collection point id.
///
/// Built once per request so enrichment never queries per record. Missing entries mean the
/// referenced row was not found or is filtered out by status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupIndexes {
    pub collection_points: HashMap<i32, CollectionPointView>,
    pub websites: HashMap<i32, WebsiteView>,
    pub companies: HashMap<i32, CompanyView>,
    /// Active purposes over active links, ordered by priority then purpose id.
    pub purposes: HashMap<i32, Vec<PurposeView>>,
}

pub struct LookupIndexBuilder<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LookupIndexBuilder<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the reference data of a set of collection points.
    ///
    /// Issues at most one query per table (collection point, website, company, purpose link,
    /// purpose) regardless of how many ids are provided, and none at all for an empty id set.
    ///
    /// # Arguments
    /// - `company_id` - Tenant the collection points, websites and purposes must belong to
    /// - `collection_point_ids` - Collection points of interest, duplicates allowed
    /// - `cancel` - Checked before each query
    ///
    /// # Returns
    /// - `Ok(LookupIndexes)` - Indexes, empty when nothing matches
    /// - `Err(Error::Cancelled)` - Signal fired before a query
    /// - `Err(Error::DbErr)` - A lookup query failed
    pub async fn build(
        &self,
        company_id: i32,
        collection_point_ids: &[i32],
        cancel: &CancelSignal,
    ) -> Result<LookupIndexes, Error> {
        let ids = unique(collection_point_ids.iter().copied());
        if ids.is_empty() {
            return Ok(LookupIndexes::default());
        }

        cancel.ensure_active("load collection points")?;
        let collection_points = CollectionPointRepository::new(self.db)
            .get_many_by_ids(company_id, &ids)
            .await?;
        if collection_points.is_empty() {
            return Ok(LookupIndexes::default());
        }

        let website_ids = unique(collection_points.iter().map(|cp| cp.website_id));
        cancel.ensure_active("load websites")?;
        let websites: HashMap<i32, WebsiteView> = WebsiteRepository::new(self.db)
            .get_many_by_ids(company_id, &website_ids)
            .await?
            .into_iter()
            .map(|website| {
                (
                    website.id,
                    WebsiteView {
                        id: website.id,
                        description: website.description,
                        url_home_page: website.url,
                        url_policy_page: website.url_policy,
                    },
                )
            })
            .collect();

        let company_ids = unique(collection_points.iter().map(|cp| cp.company_id));
        cancel.ensure_active("load companies")?;
        let companies: HashMap<i32, CompanyView> = CompanyRepository::new(self.db)
            .get_active_by_ids(&company_ids)
            .await?
            .into_iter()
            .map(|company| {
                (
                    company.id,
                    CompanyView {
                        id: company.id,
                        name: company.name,
                        status: company.status,
                    },
                )
            })
            .collect();

        let found_ids: Vec<i32> = collection_points.iter().map(|cp| cp.id).collect();
        cancel.ensure_active("load purpose links")?;
        let links = PurposeLinkRepository::new(self.db)
            .get_active_by_collection_point_ids(&found_ids)
            .await?;

        let mut purposes_by_id: HashMap<i32, PurposeModel> = HashMap::new();
        if !links.is_empty() {
            let purpose_ids = unique(links.iter().map(|link| link.purpose_id));
            cancel.ensure_active("load purposes")?;
            purposes_by_id = PurposeRepository::new(self.db)
                .get_active_by_ids(company_id, &purpose_ids)
                .await?
                .into_iter()
                .map(|purpose| (purpose.id, purpose))
                .collect();
        }

        let mut indexes = LookupIndexes::default();

        for link in links {
            let Some(purpose) = purposes_by_id.get(&link.purpose_id) else {
                continue;
            };

            indexes
                .purposes
                .entry(link.collection_point_id)
                .or_default()
                .push(PurposeView {
                    id: purpose.id,
                    guid: purpose.guid.clone(),
                    company_id: purpose.company_id,
                    code: purpose.code.clone(),
                    description: purpose.description.clone(),
                    warning_description: purpose.warning_description.clone(),
                    purpose_category_id: purpose.purpose_category_id,
                    expired_date_time: purpose_expiration(purpose),
                    version: purpose.version,
                    priority: link.priority,
                    status: purpose.status,
                });
        }

        for purposes in indexes.purposes.values_mut() {
            purposes.sort_by_key(|purpose| (purpose.priority, purpose.id));
        }

        for collection_point in collection_points {
            if let Some(website) = websites.get(&collection_point.website_id) {
                indexes
                    .websites
                    .insert(collection_point.id, website.clone());
            }
            if let Some(company) = companies.get(&collection_point.company_id) {
                indexes
                    .companies
                    .insert(collection_point.id, company.clone());
            }

            indexes.collection_points.insert(
                collection_point.id,
                CollectionPointView {
                    id: collection_point.id,
                    guid: collection_point.guid,
                    version: collection_point.version,
                    status: collection_point.status,
                },
            );
        }

        Ok(indexes)
    }
}

fn unique(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    ids.collect::<BTreeSet<i32>>().into_iter().collect()
}

/// Unparsable stored retention periods mean "no expiration" on the read path.
fn purpose_expiration(purpose: &PurposeModel) -> Option<NaiveDateTime> {
    match expiration_date_time(&purpose.expiration_period, purpose.created_at) {
        Ok(expires_at) => Some(expires_at),
        Err(err) => {
            tracing::warn!(
                purpose_id = %purpose.id,
                "{}, treating purpose as non-expiring",
                err
            );

            None
        }
    }
}
