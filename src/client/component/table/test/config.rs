use super::*;

/// Tests building a config with a valid default sort.
///
/// Expected: default state on page 0 with the default page size
#[test]
fn builds_default_state() {
    let config =
        TableConfig::new(vec![id_column(), name_column()], "name", Order::Ascending).unwrap();

    let state = config.default_state();
    assert_eq!(state.sort_column, "name");
    assert_eq!(state.order, Order::Ascending);
    assert_eq!(state.page, 0);
    assert_eq!(state.rows_per_page, DEFAULT_ROWS_PER_PAGE);
    assert_eq!(config.page_sizes(), &DEFAULT_PAGE_SIZES);
    assert_eq!(
        config.sort_column(state).map(|column| column.label.as_str()),
        Some("Name")
    );
}

/// Tests building a config without columns.
///
/// Expected: Err(NoColumns)
#[test]
fn rejects_empty_columns() {
    let result = TableConfig::<TestRow>::new(Vec::new(), "id", Order::Descending);

    assert_eq!(result.err(), Some(TableError::NoColumns));
}

/// Tests a default sort column that no column declares.
///
/// Expected: Err(UnknownSortColumn)
#[test]
fn rejects_unknown_sort_column() {
    let result = TableConfig::new(vec![id_column()], "missing", Order::Descending);

    assert_eq!(
        result.err(),
        Some(TableError::UnknownSortColumn("missing".to_string()))
    );
}

/// Tests a default sort column that exists but isn't sortable.
///
/// Expected: Err(UnsortableColumn)
#[test]
fn rejects_unsortable_sort_column() {
    let active = Column::field("Active", "active", |row: &TestRow| row.active.into());

    let result = TableConfig::new(vec![id_column(), active], "active", Order::Descending);

    assert_eq!(
        result.err(),
        Some(TableError::UnsortableColumn("active".to_string()))
    );
}

/// Tests invalid page size configurations.
///
/// Expected: NoPageSizes, ZeroPageSize and PageSizeNotOffered respectively
#[test]
fn rejects_invalid_page_sizes() {
    let config = || TableConfig::new(vec![id_column()], "id", Order::Descending).unwrap();

    assert_eq!(
        config().with_page_sizes(Vec::new(), 10).err(),
        Some(TableError::NoPageSizes)
    );
    assert_eq!(
        config().with_page_sizes(vec![0, 10], 10).err(),
        Some(TableError::ZeroPageSize)
    );
    assert_eq!(
        config().with_page_sizes(vec![10, 20], 25).err(),
        Some(TableError::PageSizeNotOffered(25))
    );
}

/// Tests replacing the offered page sizes.
///
/// Expected: new sizes offered, default state uses the chosen size
#[test]
fn accepts_custom_page_sizes() {
    let config = TableConfig::new(vec![id_column()], "id", Order::Descending)
        .unwrap()
        .with_page_sizes(vec![5, 20], 20)
        .unwrap();

    assert_eq!(config.page_sizes(), &[5, 20]);
    assert_eq!(config.default_state().rows_per_page, 20);
}
