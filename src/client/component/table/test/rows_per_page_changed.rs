use super::*;

/// Tests changing the page size from a later page.
///
/// Expected: new size, page 0, RowsPerPageChanged then PageChanged(0)
#[test]
fn resets_page_on_size_change() {
    let state = TableState::new("id", Order::Descending, 25).with_page(3);

    let change = state.rows_per_page_changed(50).unwrap();

    assert_eq!(change.state.rows_per_page, 50);
    assert_eq!(change.state.page, 0);
    assert_eq!(
        change.events,
        vec![TableEvent::RowsPerPageChanged(50), TableEvent::PageChanged(0)]
    );
}

/// Tests changing the page size while already on the first page.
///
/// Verifies that the page reset is still reported so a remote caller always re-fetches
/// from the first page.
///
/// Expected: PageChanged(0) present
#[test]
fn reports_page_reset_on_first_page() {
    let state = TableState::new("id", Order::Descending, 25);

    let change = state.rows_per_page_changed(10).unwrap();

    assert!(change.events.contains(&TableEvent::PageChanged(0)));
}

/// Tests selecting the current size or a zero size.
///
/// Expected: None
#[test]
fn ignores_same_or_zero_size() {
    let state = TableState::new("id", Order::Descending, 25).with_page(1);

    assert!(state.rows_per_page_changed(25).is_none());
    assert!(state.rows_per_page_changed(0).is_none());
}
