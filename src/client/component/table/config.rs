use super::{
    column::Column,
    error::TableError,
    order::Order,
    state::{TableState, DEFAULT_PAGE_SIZES, DEFAULT_ROWS_PER_PAGE},
};

/// Validated column set plus the state a table starts in.
///
/// Built once per screen. Construction fails if the default sort column or page size
/// can't be honoured, so a misconfigured screen fails when it is set up rather than
/// rendering a table that silently ignores its sort.
pub struct TableConfig<T> {
    columns: Vec<Column<T>>,
    default_state: TableState,
    page_sizes: Vec<u64>,
}

impl<T> TableConfig<T> {
    /// Creates a config with the default page sizes and page size.
    ///
    /// # Arguments
    /// - `columns` - Column descriptors, in display order
    /// - `sort_column` - Field key of the column sorted on initially
    /// - `order` - Initial sort order
    ///
    /// # Returns
    /// - `Ok(TableConfig)` - Validated configuration
    /// - `Err(TableError)` - No columns, or the sort column is unknown or unsortable
    pub fn new(
        columns: Vec<Column<T>>,
        sort_column: &str,
        order: Order,
    ) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }

        let column = columns
            .iter()
            .find(|column| column.sort_key() == Some(sort_column))
            .ok_or_else(|| TableError::UnknownSortColumn(sort_column.to_string()))?;
        if !column.is_sortable() {
            return Err(TableError::UnsortableColumn(sort_column.to_string()));
        }

        Ok(Self {
            columns,
            default_state: TableState::new(sort_column, order, DEFAULT_ROWS_PER_PAGE),
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
        })
    }

    /// Replaces the offered page sizes and the initial page size.
    pub fn with_page_sizes(
        mut self,
        page_sizes: Vec<u64>,
        rows_per_page: u64,
    ) -> Result<Self, TableError> {
        if page_sizes.is_empty() {
            return Err(TableError::NoPageSizes);
        }
        if page_sizes.contains(&0) {
            return Err(TableError::ZeroPageSize);
        }
        if !page_sizes.contains(&rows_per_page) {
            return Err(TableError::PageSizeNotOffered(rows_per_page));
        }

        self.page_sizes = page_sizes;
        self.default_state.rows_per_page = rows_per_page;
        Ok(self)
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn default_state(&self) -> &TableState {
        &self.default_state
    }

    pub fn page_sizes(&self) -> &[u64] {
        &self.page_sizes
    }

    /// Column sorted on in `state`, if it names one.
    pub fn sort_column(&self, state: &TableState) -> Option<&Column<T>> {
        self.columns
            .iter()
            .find(|column| column.sort_key() == Some(state.sort_column.as_str()))
    }
}

impl<T> Clone for TableConfig<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            default_state: self.default_state.clone(),
            page_sizes: self.page_sizes.clone(),
        }
    }
}

impl<T> PartialEq for TableConfig<T> {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.default_state == other.default_state
            && self.page_sizes == other.page_sizes
    }
}
