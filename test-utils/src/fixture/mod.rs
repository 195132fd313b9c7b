//! Test fixtures providing reusable rows without any id bookkeeping.
//!
//! Unlike factories, fixtures return fixed values so assertions can name exact ids and
//! fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let row = fixture::row::entity();
//! let inactive = fixture::row::entity_builder().active(false).build();
//! ```

pub mod row;

pub use row::{entity as row_entity, entity_builder as row_entity_builder};
