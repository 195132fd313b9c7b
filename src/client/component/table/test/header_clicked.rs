use super::*;

/// Tests clicking the header of the active sort column.
///
/// Expected: order toggles, single SortOrderChanged event
#[test]
fn toggles_order_on_active_column() {
    let state = TableState::new("name", Order::Descending, 25);

    let change = state.header_clicked(&name_column()).unwrap();

    assert_eq!(change.state.order, Order::Ascending);
    assert_eq!(change.state.sort_column, "name");
    assert_eq!(
        change.events,
        vec![TableEvent::SortOrderChanged(Order::Ascending)]
    );
}

/// Tests clicking the active column header twice.
///
/// Expected: state equal to the starting state
#[test]
fn double_toggle_restores_order() {
    let state = TableState::new("name", Order::Ascending, 25);
    let column = name_column();

    let once = state.header_clicked(&column).unwrap();
    let twice = once.state.header_clicked(&column).unwrap();

    assert_eq!(twice.state, state);
}

/// Tests clicking a different sortable column on a later page.
///
/// Verifies that the column becomes the sort column, the order resets to descending and
/// the page returns to the first one, each reported as an event.
///
/// Expected: SortColumnChanged, SortOrderChanged(Descending), PageChanged(0)
#[test]
fn switches_column_and_resets_order() {
    let state = TableState::new("name", Order::Ascending, 25).with_page(2);

    let change = state.header_clicked(&score_column()).unwrap();

    assert_eq!(change.state.sort_column, "score");
    assert_eq!(change.state.order, Order::Descending);
    assert_eq!(change.state.page, 0);
    assert_eq!(
        change.events,
        vec![
            TableEvent::SortColumnChanged("score".to_string()),
            TableEvent::SortOrderChanged(Order::Descending),
            TableEvent::PageChanged(0),
        ]
    );
}

/// Tests switching column when the order is already descending on the first page.
///
/// Expected: only SortColumnChanged
#[test]
fn reports_only_column_change_when_nothing_else_moves() {
    let state = TableState::new("name", Order::Descending, 25);

    let change = state.header_clicked(&id_column()).unwrap();

    assert_eq!(
        change.events,
        vec![TableEvent::SortColumnChanged("id".to_string())]
    );
}

/// Tests clicking a column that was not marked sortable.
///
/// Expected: None
#[test]
fn ignores_unsortable_column() {
    let state = TableState::new("name", Order::Descending, 25);
    let column = Column::field("Active", "active", |row: &TestRow| row.active.into());

    assert!(state.header_clicked(&column).is_none());
}

/// Tests clicking virtual and display-only columns, even when marked sortable.
///
/// Expected: None for both
#[test]
fn ignores_virtual_and_display_columns() {
    let state = TableState::new("name", Order::Descending, 25);
    let computed = Column::computed("Length", "length", |row: &TestRow| {
        (row.name.len() as u64).into()
    })
    .sortable();
    let actions: Column<TestRow> = Column::new("Actions").sortable();

    assert!(state.header_clicked(&computed).is_none());
    assert!(state.header_clicked(&actions).is_none());
}
