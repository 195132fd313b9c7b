use super::*;

/// Tests sorting rows by name ascending.
///
/// Verifies that rows sharing a name keep their input order.
///
/// Expected: ids [1, 2, 3]
#[test]
fn sorts_by_name_ascending() {
    let rows = fixture::row::named_rows();
    let column = name_column();

    let sorted = stable_sort(&rows, compare(Order::Ascending, &column));

    assert_eq!(ids(&sorted), vec![1, 2, 3]);
}

/// Tests sorting rows by name descending.
///
/// Expected: ids [3, 1, 2], the tied rows still in input order
#[test]
fn sorts_by_name_descending() {
    let rows = fixture::row::named_rows();
    let column = name_column();

    let sorted = stable_sort(&rows, compare(Order::Descending, &column));

    assert_eq!(ids(&sorted), vec![3, 1, 2]);
}

/// Tests that sorting yields a permutation of its input.
///
/// Expected: same ids, no row lost or duplicated
#[test]
fn returns_permutation_of_input() {
    let mut rows = factory::create_rows(9);
    rows.push(fixture::row_entity_builder().id(-1).score(1.0).build());
    let column = score_column();

    let sorted = stable_sort(&rows, compare(Order::Descending, &column));

    let mut expected = ids(&rows);
    let mut actual = ids(&sorted);
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

/// Tests that sorting an already sorted sequence changes nothing.
///
/// Expected: second sort equals the first
#[test]
fn sorting_is_idempotent() {
    let rows = fixture::row::noted_rows();
    let column = note_column();
    let compare = compare(Order::Ascending, &column);

    let once = stable_sort(&rows, &compare);
    let twice = stable_sort(&once, &compare);

    assert_eq!(once, twice);
}

/// Tests that the input slice is left untouched.
///
/// Expected: input order unchanged after sorting
#[test]
fn leaves_input_untouched() {
    let rows = fixture::row::named_rows();
    let column = name_column();

    let _ = stable_sort(&rows, compare(Order::Ascending, &column));

    assert_eq!(ids(&rows), vec![3, 1, 2]);
}

/// Tests sorting empty and single-row inputs.
///
/// Expected: empty and identity index lists
#[test]
fn handles_trivial_inputs() {
    let column = name_column();
    let empty: Vec<TestRow> = Vec::new();
    let single = vec![fixture::row_entity()];

    assert!(sorted_indices(&empty, compare(Order::Ascending, &column)).is_empty());
    assert_eq!(
        sorted_indices(&single, compare(Order::Ascending, &column)),
        vec![0]
    );
}
