use crate::error::widget::WidgetError;
use crate::tasks::TaskList;

fn texts(list: &TaskList) -> Vec<&str> {
    list.entries().iter().map(|entry| entry.text.as_str()).collect()
}

/// **VALUE**: Verifies blank input never creates an entry.
///
/// **BUG THIS CATCHES**: Would catch the trim being dropped, letting "   " in.
#[test]
fn given_whitespace_input_when_add_task_then_list_and_count_unchanged() {
    // GIVEN: A list with one task and whitespace in the input
    let mut list = TaskList::with_entries(["existing"]);
    list.set_input("   \t ");

    // WHEN: Adding
    let added = list.add_task();

    // THEN: Nothing changes, input left as typed
    assert!(added.is_none());
    assert_eq!(list.count(), 1);
    assert_eq!(texts(&list), ["existing"]);
    assert_eq!(list.input(), "   \t ");
}

/// **VALUE**: Verifies a new task is appended last, counted once, and clears the input.
#[test]
fn given_text_input_when_add_task_then_appends_last_and_increments_count() {
    // GIVEN: Two existing tasks
    let mut list = TaskList::with_entries(["first", "second"]);
    list.set_input("buy milk");

    // WHEN: Adding
    let added = list.add_task();

    // THEN: Appended at the end, count + 1, input cleared
    assert!(added.is_some());
    assert_eq!(list.count(), 3);
    assert_eq!(texts(&list), ["first", "second", "buy milk"]);
    assert_eq!(list.input(), "");
}

#[test]
fn given_padded_input_when_add_task_then_stores_trimmed_text() {
    let mut list = TaskList::new();
    list.set_input("  walk dog  ");

    list.add_task();

    assert_eq!(texts(&list), ["walk dog"]);
}

#[test]
fn given_duplicate_text_when_added_twice_then_both_kept() {
    let mut list = TaskList::new();
    list.set_input("same");
    list.add_task();
    list.set_input("same");
    list.add_task();

    assert_eq!(list.count(), 2);
}

/// **VALUE**: Verifies deletion removes only the targeted entry and keeps order.
///
/// **BUG THIS CATCHES**: Would catch swap_remove-style deletion that reorders
/// the tail of the list.
#[test]
fn given_three_tasks_when_middle_deleted_then_others_keep_order() {
    // GIVEN: a, b, c
    let mut list = TaskList::with_entries(["a", "b", "c", "d"]);
    let middle = list.entries()[1].id;

    // WHEN: Deleting b
    let removed = list.delete_task(middle).expect("task exists");

    // THEN: count - 1 and order preserved
    assert_eq!(removed.text, "b");
    assert_eq!(list.count(), 3);
    assert_eq!(texts(&list), ["a", "c", "d"]);
}

#[test]
fn given_deleted_task_when_deleted_again_then_returns_unknown_task() {
    let mut list = TaskList::with_entries(["only"]);
    let id = list.entries()[0].id;
    list.delete_task(id).expect("task exists");

    let result = list.delete_task(id);

    assert!(matches!(result, Err(WidgetError::UnknownTask { .. })));
    assert_eq!(list.count(), 0);
}

#[test]
fn given_input_when_enter_pressed_then_adds_task() {
    let mut list = TaskList::new();
    list.set_input("from keyboard");

    assert!(list.handle_key("a").is_none());
    assert_eq!(list.count(), 0);

    assert!(list.handle_key("Enter").is_some());
    assert_eq!(texts(&list), ["from keyboard"]);
}

#[test]
fn given_seed_with_blank_entries_when_constructed_then_blank_entries_skipped() {
    let list = TaskList::with_entries(["one", "  ", "", "two"]);

    assert_eq!(texts(&list), ["one", "two"]);
}
