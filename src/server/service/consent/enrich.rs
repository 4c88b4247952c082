//! Consent enrichment from prebuilt lookup indexes.

use crate::server::{
    error::consent::ConsentError,
    model::{consent::ConsentView, db::ConsentModel},
    service::consent::lookup::LookupIndexes,
    util::convert::narrow_to_i32,
};

/// Attaches company, website, purposes and collection point details to a consent record.
///
/// Absent index entries yield `None` or an empty purpose list. 64-bit counters are narrowed
/// with a range check.
///
/// # Returns
/// - `Ok(ConsentView)` - Enriched record
/// - `Err(ConsentError::IdOutOfRange)` - `uid` or `total_transactions` does not fit in 32 bits
pub fn enrich_consent(
    consent: ConsentModel,
    indexes: &LookupIndexes,
) -> Result<ConsentView, ConsentError> {
    let collection_point = indexes.collection_points.get(&consent.collection_point_id);

    Ok(ConsentView {
        id: consent.id,
        uid: narrow_to_i32("uid", consent.uid)?,
        company_id: consent.company_id,
        company_name: indexes
            .companies
            .get(&consent.collection_point_id)
            .map(|company| company.name.clone()),
        collection_point_id: consent.collection_point_id,
        collection_point_guid: collection_point.map(|cp| cp.guid.clone()),
        collection_point_version: collection_point.map(|cp| cp.version),
        website: indexes.websites.get(&consent.collection_point_id).cloned(),
        purposes: indexes
            .purposes
            .get(&consent.collection_point_id)
            .cloned()
            .unwrap_or_default(),
        full_name: consent.full_name,
        id_card_number: consent.id_card_number,
        email: consent.email,
        phone_number: consent.phone_number,
        from_browser: consent.from_browser,
        remark: consent.remark,
        verify_type: consent.verify_type,
        total_transactions: narrow_to_i32("total_transactions", consent.total_transactions)?,
        consent_date_time: consent.consent_datetime,
        created_at: consent.created_at,
        status: consent.status,
    })
}
