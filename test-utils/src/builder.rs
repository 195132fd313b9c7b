use crate::{context::TestContext, factory, row::TestRow, source::MemorySource};

/// Builder for creating test contexts with a configurable row set.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_rows(20)
///     .with_row(fixture::row::entity())
///     .build();
/// ```
pub struct TestBuilder {
    /// Rows served by the source, in insertion order.
    rows: Vec<TestRow>,

    /// Failure every query returns, if set.
    failure: Option<(u64, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no rows.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            failure: None,
        }
    }

    /// Adds `count` factory-generated rows.
    pub fn with_rows(mut self, count: usize) -> Self {
        self.rows.extend(factory::create_rows(count));
        self
    }

    /// Adds a specific row.
    pub fn with_row(mut self, row: TestRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Makes the built source fail every query with the given status and message.
    pub fn failing(mut self, status: u64, message: impl Into<String>) -> Self {
        self.failure = Some((status, message.into()));
        self
    }

    /// Builds the test context.
    pub fn build(self) -> TestContext {
        let mut source = MemorySource::new(self.rows);
        if let Some((status, message)) = self.failure {
            source.fail_with(status, message);
        }
        TestContext::new(source)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
