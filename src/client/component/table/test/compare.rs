use std::cmp::Ordering;

use super::*;

/// Tests the descending comparator on two distinct values.
///
/// Expected: the row with the larger value orders first
#[test]
fn orders_larger_value_first_when_descending() {
    let high = fixture::row_entity_builder().id(1).score(2.0).build();
    let low = fixture::row_entity_builder().id(2).score(1.0).build();
    let column = score_column();

    let compare = compare(Order::Descending, &column);

    assert_eq!(compare(&high, &low), Ordering::Less);
    assert_eq!(compare(&low, &high), Ordering::Greater);
}

/// Tests that the ascending comparator reverses the descending one.
///
/// Verifies for every ordered pair of rows, including equal pairs, that the ascending
/// result is the exact reverse of the descending result.
///
/// Expected: ascending == descending.reverse() for all pairs
#[test]
fn ascending_reverses_descending() {
    let mut rows = factory::create_rows(4);
    rows.push(fixture::row_entity_builder().score(0.5).build());
    rows.push(fixture::row_entity_builder().score(0.5).build());
    let column = score_column();

    let descending = compare(Order::Descending, &column);
    let ascending = compare(Order::Ascending, &column);

    for a in &rows {
        for b in &rows {
            assert_eq!(ascending(a, b), descending(a, b).reverse());
        }
    }
}

/// Tests comparator antisymmetry.
///
/// Expected: compare(a, b) == compare(b, a).reverse() for all pairs
#[test]
fn comparator_is_antisymmetric() {
    let rows = fixture::row::noted_rows();
    let column = note_column();

    let compare = compare(Order::Descending, &column);

    for a in &rows {
        for b in &rows {
            assert_eq!(compare(a, b), compare(b, a).reverse());
        }
    }
}

/// Tests that equal values compare as equal in both orders.
///
/// Expected: Ordering::Equal
#[test]
fn equal_values_compare_equal() {
    let rows = fixture::row::named_rows();
    let column = name_column();

    assert_eq!(
        compare(Order::Descending, &column)(&rows[1], &rows[2]),
        Ordering::Equal
    );
    assert_eq!(
        compare(Order::Ascending, &column)(&rows[1], &rows[2]),
        Ordering::Equal
    );
}

/// Tests that missing values sort below every defined value.
///
/// Verifies that rows without a note trail in descending order and lead in ascending
/// order, keeping their input order among themselves.
///
/// Expected: descending [5, 1, 3, 2, 4], ascending [2, 4, 3, 1, 5]
#[test]
fn missing_values_sort_lowest() {
    let rows = fixture::row::noted_rows();
    let column = note_column();

    let descending = stable_sort(&rows, compare(Order::Descending, &column));
    let ascending = stable_sort(&rows, compare(Order::Ascending, &column));

    assert_eq!(ids(&descending), vec![5, 1, 3, 2, 4]);
    assert_eq!(ids(&ascending), vec![2, 4, 3, 1, 5]);
}

/// Tests the comparator on a column without an accessor.
///
/// Expected: every pair compares equal, so sorting keeps input order
#[test]
fn column_without_value_keeps_input_order() {
    let rows = fixture::row::named_rows();
    let column: Column<TestRow> = Column::new("Actions");

    let sorted = stable_sort(&rows, compare(Order::Ascending, &column));

    assert_eq!(ids(&sorted), vec![3, 1, 2]);
}

/// Tests ordering between integer and float values.
///
/// Expected: values compare numerically across kinds, NaN above every number
#[test]
fn mixes_integers_and_floats_numerically() {
    assert!(SortValue::Int(2) > SortValue::Float(1.5));
    assert!(SortValue::Float(2.5) > SortValue::Int(2));
    assert_eq!(SortValue::Int(3), SortValue::Float(3.0));
    assert_eq!(SortValue::Float(-0.0), SortValue::Float(0.0));
    assert!(SortValue::Float(f64::NAN) > SortValue::Int(i64::MAX));
    assert!(SortValue::Missing < SortValue::Bool(false));
}
