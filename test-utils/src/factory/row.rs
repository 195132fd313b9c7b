//! Row factory for creating test rows with unique ids.

use chrono::Duration;

use crate::{factory::helpers::next_id, fixture, row::TestRow};

/// Factory for creating test rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::row::RowFactory;
///
/// let row = RowFactory::new().name("alpha").active(false).build();
/// ```
pub struct RowFactory {
    row: TestRow,
}

impl RowFactory {
    /// Creates a new RowFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - name: `"Row {id}"`
    /// - score: `id / 4`
    /// - created_on: fixture timestamp plus `id` hours
    /// - active: `true` for even ids
    /// - note: `None`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            row: TestRow {
                id,
                name: format!("Row {}", id),
                score: id as f64 / 4.0,
                created_on: fixture::row::default_created_on() + Duration::hours(id),
                active: id % 2 == 0,
                note: None,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.row.name = name.into();
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.row.score = score;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.row.active = active;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.row.note = Some(note.into());
        self
    }

    pub fn build(self) -> TestRow {
        self.row
    }
}

impl Default for RowFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a row with default values.
pub fn create_row() -> TestRow {
    RowFactory::new().build()
}

/// Creates `count` rows with unique, increasing ids.
pub fn create_rows(count: usize) -> Vec<TestRow> {
    (0..count).map(|_| create_row()).collect()
}
