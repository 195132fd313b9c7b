//! Modpanel Test Utils
//!
//! Provides shared testing utilities for the modpanel table components. This crate offers
//! a plain row type, in-memory fixtures, factories that generate rows with unique ids, and
//! a builder for test contexts backed by an in-memory paged data source.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestRow**: Row type with one field per sortable value kind
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the in-memory source
//! - **TestError**: Errors the in-memory source can produce
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn pages_through_rows() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_rows(30).build();
//!
//!     let (rows, count) = test.source.query("id", true, 0, 10)?;
//!     assert_eq!(rows.len(), 10);
//!     assert_eq!(count, 30);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod row;
pub mod source;

pub use error::TestError;
pub use row::TestRow;
