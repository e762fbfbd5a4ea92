use chrono::{TimeZone, Utc};
use taskdeck_core::{
    JsonFileStorage, Priority, Task, TaskDraft, TaskStatus, TaskStorage, TaskStore,
};
use uuid::Uuid;

fn task(title: &str, day: u32) -> Task {
    let created = Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap();
    Task::with_id(
        Uuid::new_v4(),
        TaskDraft {
            title: title.to_string(),
            description: "some body".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
        },
        created,
        created,
    )
}

#[test]
fn save_then_load_round_trips_the_list() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("tasks.json"));

    let tasks = vec![task("a", 1), task("b", 2), task("c", 3)];
    storage.save(&tasks).unwrap();

    assert_eq!(storage.load().unwrap(), tasks);
}

#[test]
fn missing_file_loads_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("never-written.json"));

    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn corrupt_blob_loads_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let storage = JsonFileStorage::new(&path);
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn blob_with_wrong_shape_loads_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, r#"{"tasks": []}"#).unwrap();

    let storage = JsonFileStorage::new(&path);
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("tasks.json");

    let storage = JsonFileStorage::new(&path);
    storage.save(&[task("a", 1)]).unwrap();

    assert!(path.exists());
    assert_eq!(storage.load().unwrap().len(), 1);
}

#[test]
fn save_overwrites_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let storage = JsonFileStorage::new(&path);

    storage.save(&[task("a", 1), task("b", 2)]).unwrap();
    storage.save(&[task("c", 3)]).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "c");
    assert!(!dir.path().join("tasks.json.tmp").exists());
}

#[test]
fn blob_on_disk_uses_the_wire_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let storage = JsonFileStorage::new(&path);

    let tasks = vec![task("wire check", 1)];
    storage.save(&tasks).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("\"createdAt\""));
    assert!(raw.contains("\"in-progress\""));
    assert!(raw.contains(&tasks[0].id.to_string()));
}

#[test]
fn store_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let mut store = TaskStore::open(JsonFileStorage::new(&path)).unwrap();
    let kept = store
        .add_task(TaskDraft {
            title: "kept".to_string(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Low,
        })
        .unwrap();
    let dropped = store
        .add_task(TaskDraft {
            title: "dropped".to_string(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Low,
        })
        .unwrap();
    store.delete_task(dropped).unwrap();
    drop(store);

    let reopened = TaskStore::open(JsonFileStorage::new(&path)).unwrap();
    assert_eq!(reopened.tasks().len(), 1);
    assert_eq!(reopened.tasks()[0].id, kept);
    assert_eq!(reopened.tasks()[0].title, "kept");
}
