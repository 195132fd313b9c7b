//! In-memory stand-in for a paged API endpoint.

use std::{cell::Cell, cmp::Ordering};

use crate::{error::TestError, row::TestRow};

/// Serves sorted, paged slices of a fixed row set, the way the API's list endpoints do.
///
/// Counts every query so tests can check how often a caller hit the source.
pub struct MemorySource {
    rows: Vec<TestRow>,
    failure: Option<(u64, String)>,
    calls: Cell<u32>,
}

impl MemorySource {
    pub fn new(rows: Vec<TestRow>) -> Self {
        Self {
            rows,
            failure: None,
            calls: Cell::new(0),
        }
    }

    /// Makes every subsequent query fail with the given status and message.
    pub fn fail_with(&mut self, status: u64, message: impl Into<String>) {
        self.failure = Some((status, message.into()));
    }

    /// Number of queries served so far, failed ones included.
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns one page of rows ordered by `order_by`, plus the unpaged total.
    ///
    /// Ties are broken by id ascending so results are deterministic.
    ///
    /// # Arguments
    /// - `order_by` - Field name of `TestRow` to order on
    /// - `desc` - Sort descending when true
    /// - `offset` - Number of rows to skip
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// - `Ok((rows, count))` - Page of rows and the total row count
    /// - `Err(TestError)` - Configured failure or unknown column
    pub fn query(
        &self,
        order_by: &str,
        desc: bool,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<TestRow>, u64), TestError> {
        self.calls.set(self.calls.get() + 1);

        if let Some((status, message)) = &self.failure {
            return Err(TestError::SourceFailure {
                status: *status,
                message: message.clone(),
            });
        }

        let compare: fn(&TestRow, &TestRow) -> Ordering = match order_by {
            "id" => |a, b| a.id.cmp(&b.id),
            "name" => |a, b| a.name.cmp(&b.name),
            "score" => |a, b| a.score.total_cmp(&b.score),
            "created_on" => |a, b| a.created_on.cmp(&b.created_on),
            "active" => |a, b| a.active.cmp(&b.active),
            "note" => |a, b| a.note.cmp(&b.note),
            other => return Err(TestError::UnknownColumn(other.to_string())),
        };

        let mut sorted = self.rows.clone();
        sorted.sort_by(|a, b| {
            let ordering = compare(a, b);
            let ordering = if desc { ordering.reverse() } else { ordering };
            ordering.then(a.id.cmp(&b.id))
        });

        let page = sorted
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok((page, self.rows.len() as u64))
    }
}
