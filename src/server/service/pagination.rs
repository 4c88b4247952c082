//! Page slicing for ordered SeaORM queries.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Select};

use crate::server::{
    error::Error,
    model::pagination::{PageRequest, PaginatedList},
    util::cancel::CancelSignal,
};

/// Fetches one page of an ordered query along with the total row and page counts.
///
/// Issues a count query, then fetches the page only when `page.offset()` is within
/// `total_pages`; a page past the end yields an empty item list. The cancellation signal is
/// checked before each store call.
///
/// # Arguments
/// - `db` - Database connection
/// - `select` - Ordered query to slice
/// - `page` - Validated 1-based page request
/// - `cancel` - Cancellation signal
///
/// # Returns
/// - `Ok(PaginatedList)` - Items of the page, `total_count` and `total_pages = ceil(total_count / limit)`
/// - `Err(Error::Cancelled)` - Signal fired before a store call
/// - `Err(Error::DbErr)` - Count or fetch query failed
pub async fn paginate<C, E>(
    db: &C,
    select: Select<E>,
    page: PageRequest,
    cancel: &CancelSignal,
) -> Result<PaginatedList<E::Model>, Error>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
{
    let paginator = select.paginate(db, page.limit());

    cancel.ensure_active("count page items")?;
    let total_count = paginator.num_items().await?;
    let total_pages = total_count.div_ceil(page.limit());

    if page.offset() > total_pages {
        return Ok(PaginatedList {
            items: Vec::new(),
            total_count,
            total_pages,
        });
    }

    cancel.ensure_active("fetch page items")?;
    let items = paginator.fetch_page(page.offset() - 1).await?;

    Ok(PaginatedList {
        items,
        total_count,
        total_pages,
    })
}
