use super::*;

/// Tests reconciling a page that lies past a shrunken result.
///
/// Expected: page moved to the last page that has rows
#[test]
fn pulls_page_back_inside_total() {
    let state = TableState::new("id", Order::Descending, 10).with_page(5);

    let change = state.reconcile(23).unwrap();

    assert_eq!(change.state.page, 2);
    assert_eq!(change.events, vec![TableEvent::PageChanged(2)]);
}

/// Tests reconciling against an empty result.
///
/// Expected: first page
#[test]
fn returns_to_first_page_when_empty() {
    let state = TableState::new("id", Order::Descending, 10).with_page(3);

    let change = state.reconcile(0).unwrap();

    assert_eq!(change.state.page, 0);
}

/// Tests reconciling a page that is still in range.
///
/// Expected: None
#[test]
fn keeps_page_in_range() {
    let state = TableState::new("id", Order::Descending, 10).with_page(2);

    assert!(state.reconcile(21).is_none());
    assert_eq!(state.clamped(21), state);
}
