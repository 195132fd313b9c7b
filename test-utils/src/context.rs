use crate::source::MemorySource;

/// Test context containing the in-memory data source.
///
/// Built by `TestBuilder`; tests query `source` the way a screen queries the API.
pub struct TestContext {
    /// Paged source serving the rows configured on the builder.
    pub source: MemorySource,
}

impl TestContext {
    /// Creates a context around an existing source.
    pub fn new(source: MemorySource) -> Self {
        Self { source }
    }
}
