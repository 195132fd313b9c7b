use test_utils::{builder::TestBuilder, TestError};

use super::*;
use crate::model::{api::LazyResultDto, query::QueryFilterDto};

fn query_source(
    source: &test_utils::source::MemorySource,
    filter: &QueryFilterDto,
) -> Result<LazyResultDto<TestRow>, TestError> {
    let (data, count) = source.query(&filter.order_by, filter.desc, filter.offset, filter.limit)?;
    Ok(LazyResultDto { count, data })
}

/// Tests translating table state into a query filter.
///
/// Verifies that paging and ordering come from the state while the screen's own
/// criteria are kept.
///
/// Expected: offset 40, limit 20, ascending by name, query and deleted untouched
#[test]
fn builds_filter_from_state() {
    let state = TableState::new("name", Order::Ascending, 20).with_page(2);
    let filter = QueryFilterDto {
        query: "grief".to_string(),
        deleted: true,
        ..Default::default()
    };

    let filter = filter.with_state(&state);

    assert_eq!(filter.offset, 40);
    assert_eq!(filter.limit, 20);
    assert!(!filter.desc);
    assert_eq!(filter.order_by, "name");
    assert_eq!(filter.query, "grief");
    assert!(filter.deleted);
}

/// Tests fetching the second page from a paged source.
///
/// Expected: 10 rows in descending id order after the first 10, total 30
#[tokio::test]
async fn fetches_requested_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_rows(30).build();
    let state = TableState::new("id", Order::Descending, 10).with_page(1);

    let result = fetch_page(QueryFilterDto::default(), &state, |filter| {
        let result = query_source(&test.source, &filter);
        async move { result }
    })
    .await?;

    let (all, _) = test.source.query("id", true, 0, 30)?;
    assert_eq!(result.count, 30);
    assert_eq!(ids(&result.data), ids(&all[10..20]));
    Ok(())
}

/// Tests that a failing source error reaches the caller unchanged.
///
/// Expected: Err(SourceFailure) after a single query
#[tokio::test]
async fn propagates_source_error() {
    let test = TestBuilder::new().with_rows(5).failing(500, "boom").build();
    let state = TableState::new("id", Order::Descending, 10);

    let result = fetch_page(QueryFilterDto::default(), &state, |filter| {
        let result = query_source(&test.source, &filter);
        async move { result }
    })
    .await;

    assert_eq!(
        result.err(),
        Some(TestError::SourceFailure {
            status: 500,
            message: "boom".to_string()
        })
    );
    assert_eq!(test.source.calls(), 1);
}
