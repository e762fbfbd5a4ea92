use chrono::{TimeZone, Utc};
use taskdeck_core::{
    FilterPatch, MemoryStorage, Priority, SortBy, StatusFilter, Task, TaskDraft, TaskStatus,
    TaskStore,
};
use uuid::Uuid;

fn draft(title: &str, status: TaskStatus, priority: Priority) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: String::new(),
        status,
        priority,
    }
}

fn seeded_task(title: &str, day: u32) -> Task {
    let created = Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap();
    Task::with_id(
        Uuid::new_v4(),
        draft(title, TaskStatus::Todo, Priority::Medium),
        created,
        created,
    )
}

#[test]
fn open_loads_persisted_list_and_default_filter() {
    let storage = MemoryStorage::with_tasks(vec![seeded_task("a", 1), seeded_task("b", 2)]);
    let store = TaskStore::open(storage).unwrap();

    assert_eq!(store.tasks().len(), 2);
    assert_eq!(store.filter().status, StatusFilter::All);
    assert_eq!(store.filter().sort_by, SortBy::Date);
}

#[test]
fn add_task_appends_and_persists() {
    let storage = MemoryStorage::new();
    let probe = storage.clone();
    let mut store = TaskStore::open(storage).unwrap();

    let first = store
        .add_task(draft("first", TaskStatus::Todo, Priority::Low))
        .unwrap();
    let second = store
        .add_task(draft("second", TaskStatus::InProgress, Priority::High))
        .unwrap();

    assert_eq!(store.tasks().len(), 2);
    assert_eq!(store.tasks()[0].id, first);
    assert_eq!(store.tasks()[1].id, second);

    let persisted = probe.snapshot();
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[1].title, "second");
}

#[test]
fn update_task_replaces_in_place_and_refreshes_updated_at() {
    let tasks = vec![seeded_task("a", 1), seeded_task("b", 2), seeded_task("c", 3)];
    let target = tasks[1].clone();
    let storage = MemoryStorage::with_tasks(tasks);
    let probe = storage.clone();
    let mut store = TaskStore::open(storage).unwrap();

    let mut edited = target.clone();
    edited.title = "b, revised".to_string();
    edited.status = TaskStatus::Completed;
    assert!(store.update_task(edited).unwrap());

    assert_eq!(store.tasks().len(), 3);
    let replaced = &store.tasks()[1];
    assert_eq!(replaced.id, target.id);
    assert_eq!(replaced.title, "b, revised");
    assert_eq!(replaced.status, TaskStatus::Completed);
    assert_eq!(replaced.created_at, target.created_at);
    assert!(replaced.updated_at > target.updated_at);

    // Neighbors untouched, persisted list matches.
    assert_eq!(store.tasks()[0].title, "a");
    assert_eq!(store.tasks()[2].title, "c");
    assert_eq!(probe.snapshot()[1].title, "b, revised");
}

#[test]
fn update_unknown_id_is_a_silent_no_op() {
    let storage = MemoryStorage::with_tasks(vec![seeded_task("only", 1)]);
    let probe = storage.clone();
    let mut store = TaskStore::open(storage).unwrap();

    let stranger = seeded_task("stranger", 2);
    assert!(!store.update_task(stranger).unwrap());

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].title, "only");
    assert_eq!(probe.snapshot()[0].title, "only");
}

#[test]
fn delete_task_removes_exactly_one_and_is_idempotent() {
    let tasks = vec![seeded_task("a", 1), seeded_task("b", 2)];
    let doomed = tasks[0].id;
    let storage = MemoryStorage::with_tasks(tasks);
    let probe = storage.clone();
    let mut store = TaskStore::open(storage).unwrap();

    assert!(store.delete_task(doomed).unwrap());
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].title, "b");
    assert_eq!(probe.snapshot().len(), 1);

    assert!(!store.delete_task(doomed).unwrap());
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn reorder_tasks_replaces_display_order_and_persists() {
    let tasks = vec![seeded_task("a", 1), seeded_task("b", 2), seeded_task("c", 3)];
    let reversed: Vec<Task> = tasks.iter().rev().cloned().collect();
    let storage = MemoryStorage::with_tasks(tasks);
    let probe = storage.clone();
    let mut store = TaskStore::open(storage).unwrap();

    store.reorder_tasks(reversed).unwrap();

    let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["c", "b", "a"]);
    assert_eq!(probe.snapshot()[0].title, "c");
}

#[test]
fn set_filter_merges_partially_and_never_persists() {
    let storage = MemoryStorage::with_tasks(vec![seeded_task("a", 1)]);
    let probe = storage.clone();
    let mut store = TaskStore::open(storage).unwrap();
    let persisted_before = probe.snapshot();

    store.set_filter(FilterPatch {
        status: Some(StatusFilter::Completed),
        ..FilterPatch::default()
    });
    assert_eq!(store.filter().status, StatusFilter::Completed);
    // Untouched fields keep their previous values.
    assert_eq!(store.filter().sort_by, SortBy::Date);

    store.set_filter(FilterPatch {
        sort_by: Some(SortBy::Priority),
        ..FilterPatch::default()
    });
    assert_eq!(store.filter().status, StatusFilter::Completed);
    assert_eq!(store.filter().sort_by, SortBy::Priority);

    assert_eq!(probe.snapshot(), persisted_before);
}

#[test]
fn added_task_is_most_recent_under_default_view() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::open(storage).unwrap();

    store
        .add_task(draft("older", TaskStatus::Todo, Priority::Low))
        .unwrap();
    let newest = store
        .add_task(draft("newest", TaskStatus::Todo, Priority::Low))
        .unwrap();

    let visible = store.visible_tasks();
    assert_eq!(visible[0].id, newest);
}
