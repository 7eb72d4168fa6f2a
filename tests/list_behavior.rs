// File: tests/list_behavior.rs
use quickdo::store::{IndexError, NotFoundError, TaskList, ValidationError};

fn make_list(titles: &[&str]) -> TaskList {
    let mut list = TaskList::new();
    for t in titles {
        list.add(t).expect("fixture titles must be valid");
    }
    list
}

#[test]
fn test_add_appends_and_returns_new_index() {
    let mut list = TaskList::new();

    assert_eq!(list.add("Buy milk"), Ok(0));
    assert_eq!(list.add("Walk dog"), Ok(1));

    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Ok("Buy milk"));
    assert_eq!(list.get(1), Ok("Walk dog"));
}

#[test]
fn test_add_stores_trimmed_title() {
    let mut list = TaskList::new();

    let idx = list.add("  Water plants \t").unwrap();
    assert_eq!(list.get(idx), Ok("Water plants"));
}

#[test]
fn test_blank_input_rejected_without_mutation() {
    let mut list = make_list(&["Existing"]);

    for blank in ["", " ", "   ", "\t", "\n", " \t \n "] {
        assert_eq!(list.add(blank), Err(ValidationError::Blank));
        assert_eq!(list.len(), 1, "rejected add must not mutate");
    }
    assert_eq!(list.get(0), Ok("Existing"));
}

#[test]
fn test_duplicates_are_distinct_entries() {
    let mut list = TaskList::new();

    assert_eq!(list.add("Laundry"), Ok(0));
    assert_eq!(list.add("Laundry"), Ok(1));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_remove_at_shifts_later_entries_down() {
    let mut list = make_list(&["a", "b", "c", "d"]);

    let removed = list.remove_at(1).unwrap();

    assert_eq!(removed, "b");
    assert_eq!(list.len(), 3);
    // Entries before the removal point are untouched, later ones
    // shift down by exactly one.
    assert_eq!(list.titles(), &["a", "c", "d"]);
}

#[test]
fn test_remove_at_out_of_range_leaves_list_unchanged() {
    let mut list = make_list(&["a", "b"]);

    assert_eq!(
        list.remove_at(2),
        Err(IndexError::OutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(
        list.remove_at(usize::MAX),
        Err(IndexError::OutOfBounds {
            index: usize::MAX,
            len: 2
        })
    );
    assert_eq!(list.titles(), &["a", "b"]);
}

#[test]
fn test_remove_at_on_empty_list() {
    let mut list = TaskList::new();
    assert_eq!(
        list.remove_at(0),
        Err(IndexError::OutOfBounds { index: 0, len: 0 })
    );
}

#[test]
fn test_remove_value_takes_first_match_only() {
    let mut list = make_list(&["a", "b", "a"]);

    assert_eq!(list.remove_value("a"), Ok(0));
    assert_eq!(list.titles(), &["b", "a"]);
}

#[test]
fn test_remove_value_exact_equality() {
    let mut list = make_list(&["Call mom"]);

    // No trimming or case folding on lookup.
    assert_eq!(
        list.remove_value("call mom"),
        Err(NotFoundError {
            title: "call mom".to_string()
        })
    );
    assert_eq!(
        list.remove_value(" Call mom"),
        Err(NotFoundError {
            title: " Call mom".to_string()
        })
    );
    assert_eq!(list.len(), 1);

    assert_eq!(list.remove_value("Call mom"), Ok(0));
    assert!(list.is_empty());
}

#[test]
fn test_get_out_of_range() {
    let list = make_list(&["only"]);
    assert_eq!(
        list.get(1),
        Err(IndexError::OutOfBounds { index: 1, len: 1 })
    );
}

#[test]
fn test_end_to_end_scenario() {
    let mut list = TaskList::new();

    assert_eq!(list.add("Buy milk"), Ok(0));
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Ok("Buy milk"));

    assert_eq!(list.add("  "), Err(ValidationError::Blank));
    assert_eq!(list.len(), 1);

    assert_eq!(list.add("Walk dog"), Ok(1));
    assert_eq!(list.len(), 2);

    assert_eq!(list.remove_at(0), Ok("Buy milk".to_string()));
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Ok("Walk dog"));
}
