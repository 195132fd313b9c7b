//! Row fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};

use crate::row::TestRow;

/// Default row id.
pub const DEFAULT_ID: i64 = 1;

/// Default row name.
pub const DEFAULT_NAME: &str = "Test Row";

/// Default row score.
pub const DEFAULT_SCORE: f64 = 1.5;

/// Default creation timestamp (2024-03-05 12:00:00 UTC).
pub fn default_created_on() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap()
}

/// Creates a row with default values.
pub fn entity() -> TestRow {
    entity_builder().build()
}

/// Creates a builder for customizing a row fixture.
pub fn entity_builder() -> TestRowBuilder {
    TestRowBuilder {
        row: TestRow {
            id: DEFAULT_ID,
            name: DEFAULT_NAME.to_string(),
            score: DEFAULT_SCORE,
            created_on: default_created_on(),
            active: true,
            note: None,
        },
    }
}

/// Builder for row fixtures.
pub struct TestRowBuilder {
    row: TestRow,
}

impl TestRowBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.row.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.row.name = name.into();
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.row.score = score;
        self
    }

    pub fn created_on(mut self, created_on: DateTime<Utc>) -> Self {
        self.row.created_on = created_on;
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

/// Rows `[{3,"b"}, {1,"a"}, {2,"a"}]`, in that order.
///
/// Rows 1 and 2 share a name, so sorting by name shows whether ties keep their
/// input order.
pub fn named_rows() -> Vec<TestRow> {
    vec![
        entity_builder().id(3).name("b").build(),
        entity_builder().id(1).name("a").build(),
        entity_builder().id(2).name("a").build(),
    ]
}

/// Rows where only some carry a note.
pub fn noted_rows() -> Vec<TestRow> {
    vec![
        entity_builder().id(1).note("m").build(),
        entity_builder().id(2).build(),
        entity_builder().id(3).note("a").build(),
        entity_builder().id(4).build(),
        entity_builder().id(5).note("z").build(),
    ]
}
