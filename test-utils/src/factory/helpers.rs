//! Id source shared by the factories.

use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Next row id. Ids increase across the whole test binary, so tests running in
/// parallel never hand out the same id twice.
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
