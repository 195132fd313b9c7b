use std::cmp::Ordering;

use super::{column::Column, order::Order};

/// Orders `a` before `b` when `a`'s value is the greater one.
pub fn descending_comparator<T>(a: &T, b: &T, column: &Column<T>) -> Ordering {
    column.value(b).cmp(&column.value(a))
}

/// Comparator for sorting rows by `column` in the given order.
///
/// The ascending comparator is the exact reverse of the descending one. Columns without
/// an accessor compare every pair as equal, leaving the input order untouched.
pub fn compare<T>(order: Order, column: &Column<T>) -> impl Fn(&T, &T) -> Ordering + '_ {
    move |a: &T, b: &T| {
        let ordering = descending_comparator(a, b, column);
        match order {
            Order::Descending => ordering,
            Order::Ascending => ordering.reverse(),
        }
    }
}
