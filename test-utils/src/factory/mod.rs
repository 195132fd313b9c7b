//! Factory methods for creating test rows.
//!
//! Factories hand out unique ids so rows built in separate calls never collide, which
//! matters for tests asserting on relative order.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let row = factory::create_row();
//! let rows = factory::create_rows(25);
//!
//! let custom = factory::row::RowFactory::new()
//!     .name("custom")
//!     .score(9.5)
//!     .build();
//! ```

pub mod helpers;
pub mod row;

pub use row::{create_row, create_rows};
