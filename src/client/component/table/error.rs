use thiserror::Error;

/// Table configuration errors, raised when a screen builds its `TableConfig`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The column set is empty.
    #[error("Table has no columns")]
    NoColumns,

    /// The default sort column does not name any column's field key.
    #[error("Unknown sort column: {0}")]
    UnknownSortColumn(String),

    /// The default sort column exists but is virtual, display-only or not marked sortable.
    #[error("Column is not sortable: {0}")]
    UnsortableColumn(String),

    /// The set of offered page sizes is empty.
    #[error("No page sizes configured")]
    NoPageSizes,

    /// A page size of zero was offered.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// The default page size is not one of the offered sizes.
    #[error("Default page size {0} is not one of the offered page sizes")]
    PageSizeNotOffered(u64),
}
