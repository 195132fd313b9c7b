//! Remote-mode data loading.
//!
//! The server sorts and pages; the table only translates its state into a
//! [`QueryFilterDto`] and hands back what the server returned.

use std::future::Future;

use dioxus_logger::tracing;

use crate::model::{api::LazyResultDto, query::QueryFilterDto};

use super::state::TableState;

impl QueryFilterDto {
    /// Filter with paging and ordering taken from `state`. Other fields are kept.
    pub fn with_state(mut self, state: &TableState) -> Self {
        self.offset = state.offset();
        self.limit = state.rows_per_page;
        self.desc = state.order.is_desc();
        self.order_by = state.sort_column.clone();
        self
    }
}

/// Fetches the page described by `state` through `fetch`.
///
/// `filter` carries the screen's own criteria (query text, deleted flag); paging and
/// ordering are overwritten from `state`.
///
/// # Returns
/// - `Ok(LazyResultDto)` - The page and the total row count of the query
/// - `Err(E)` - Whatever error `fetch` produced
pub async fn fetch_page<T, E, F, Fut>(
    filter: QueryFilterDto,
    state: &TableState,
    fetch: F,
) -> Result<LazyResultDto<T>, E>
where
    F: FnOnce(QueryFilterDto) -> Fut,
    Fut: Future<Output = Result<LazyResultDto<T>, E>>,
{
    let filter = filter.with_state(state);

    tracing::debug!(
        "Fetching {} rows from offset {} ordered by {} {}",
        filter.limit,
        filter.offset,
        filter.order_by,
        state.order.as_str()
    );

    fetch(filter).await
}
