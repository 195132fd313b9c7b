use super::*;

/// Tests moving to another page within range.
///
/// Expected: PageChanged with the requested page
#[test]
fn moves_to_requested_page() {
    let state = TableState::new("id", Order::Descending, 10);

    let change = state.page_changed(2, 5).unwrap();

    assert_eq!(change.state.page, 2);
    assert_eq!(change.events, vec![TableEvent::PageChanged(2)]);
}

/// Tests requesting a page past the last one.
///
/// Expected: page clamped to the last page
#[test]
fn clamps_to_last_page() {
    let state = TableState::new("id", Order::Descending, 10);

    let change = state.page_changed(10, 3).unwrap();

    assert_eq!(change.state.page, 2);
}

/// Tests requesting the current page, or any page when there are no pages.
///
/// Expected: None
#[test]
fn ignores_unchanged_page() {
    let state = TableState::new("id", Order::Descending, 10).with_page(1);

    assert!(state.page_changed(1, 4).is_none());
    assert!(TableState::default().page_changed(5, 0).is_none());
}
