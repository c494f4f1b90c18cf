//! Flattens a paged list endpoint into one ordered `Vec`.

use std::future::Future;

use crate::query::PagedQuery;
use crate::types::PageResponse;
use crate::Error;

/// Page size requested on every call made by [`fetch_all`].
pub const MAX_PAGE_SIZE: u32 = 500;

/// Fetches every page of a list endpoint and concatenates the results.
///
/// The first call uses `first_page_options` with `pageSize` set to
/// [`MAX_PAGE_SIZE`] and no explicit page. If the server reports more than
/// one page, pages `2..=totalPages` are requested one after another, each
/// awaited before the next is sent, with the same page size. Results keep the
/// server's order within a page and ascending page order across pages.
///
/// The first error aborts the whole operation; partial results are dropped.
pub async fn fetch_all<T, Q, F, Fut>(mut list_fn: F, first_page_options: Q) -> Result<Vec<T>, Error>
where
    Q: PagedQuery + Clone,
    F: FnMut(Q) -> Fut,
    Fut: Future<Output = Result<PageResponse<T>, Error>>,
{
    let mut options = first_page_options.with_page_size(MAX_PAGE_SIZE);
    options.get_common().page = None;

    let first = list_fn(options.clone()).await?;
    let total_pages = first.total_pages;
    if total_pages <= 1 {
        return Ok(first.results);
    }

    let mut results = first.results;
    for page in 2..=total_pages {
        tracing::debug!("Fetching page {}/{}", page, total_pages);
        let next = list_fn(options.clone().with_page(page)).await?;
        results.extend(next.results);
    }

    Ok(results)
}
