//! Tests for the JSON-file binding store and the configuration action.

use std::fs;
use std::path::PathBuf;

use countdown_engine::{
    choices, configure_surface, render_surface, BindingStore, CountdownError, Event,
    FileBindingStore, GlobalDefaults, MemoryBindingStore, SharedSnapshot, Vocabulary,
};

/// Helper: a fresh scratch directory unique to one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "countdown-engine-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("scratch dir must be creatable");
    dir
}

// ─────────────────────────────────────────────────────────────────────────────
// FileBindingStore
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_file_reads_as_unbound() {
    let dir = scratch_dir("missing");
    let store = FileBindingStore::new(dir.join("bindings.json"));

    assert_eq!(store.get_binding(1).unwrap(), None);
    assert!(store.entries().unwrap().is_empty());
}

#[test]
fn set_get_clear_persist_across_reopen() {
    let dir = scratch_dir("persist");
    let path = dir.join("bindings.json");

    let mut store = FileBindingStore::new(&path);
    store.set_binding(4, 2).unwrap();
    store.set_binding(5, 9).unwrap();
    store.set_binding(4, 3).unwrap();

    let reopened = FileBindingStore::new(&path);
    assert_eq!(reopened.get_binding(4).unwrap(), Some(3));
    assert_eq!(reopened.get_binding(5).unwrap(), Some(9));
    assert_eq!(
        reopened.entries().unwrap().into_iter().collect::<Vec<_>>(),
        vec![(4, 3), (5, 9)]
    );

    store.clear_binding(4).unwrap();
    assert_eq!(FileBindingStore::new(&path).get_binding(4).unwrap(), None);
    assert_eq!(FileBindingStore::new(&path).get_binding(5).unwrap(), Some(9));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn file_uses_widget_preference_keys_and_keeps_other_keys() {
    let dir = scratch_dir("keys");
    let path = dir.join("widget_config.json");
    fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

    let mut store = FileBindingStore::new(&path);
    store.set_binding(12, 1).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["widget_event_12"], 1);
    assert_eq!(raw["theme"], "dark");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unset_sentinel_reads_as_unbound() {
    let dir = scratch_dir("sentinel");
    let path = dir.join("bindings.json");
    fs::write(&path, r#"{"widget_event_1": -1, "widget_event_2": 0}"#).unwrap();

    let store = FileBindingStore::new(&path);
    assert_eq!(store.get_binding(1).unwrap(), None);
    assert_eq!(store.get_binding(2).unwrap(), Some(0));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = scratch_dir("corrupt");
    let path = dir.join("bindings.json");
    fs::write(&path, "[1, 2").unwrap();

    let store = FileBindingStore::new(&path);
    assert!(matches!(
        store.get_binding(1),
        Err(CountdownError::Store { .. })
    ));

    fs::write(&path, "[1, 2]").unwrap();
    assert!(matches!(
        store.get_binding(1),
        Err(CountdownError::Store { .. })
    ));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn failed_write_keeps_previous_binding() {
    let dir = scratch_dir("failed-write");
    let path = dir.join("bindings.json");
    let mut store = FileBindingStore::new(&path);
    store.set_binding(1, 5).unwrap();

    // A directory squatting on the temp file name makes the write fail.
    let tmp = dir.join("bindings.json.tmp");
    fs::create_dir_all(&tmp).unwrap();

    assert!(store.set_binding(1, 6).is_err());
    assert_eq!(store.get_binding(1).unwrap(), Some(5));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn negative_event_id_is_rejected_and_keeps_previous_binding() {
    let dir = scratch_dir("negative-id");
    let path = dir.join("bindings.json");
    let mut store = FileBindingStore::new(&path);
    store.set_binding(7, 2).unwrap();

    let result = configure_surface(&mut store, 7, -5);

    assert!(matches!(result, Err(CountdownError::Store { .. })));
    assert_eq!(store.get_binding(7).unwrap(), Some(2));
    assert_eq!(FileBindingStore::new(&path).get_binding(7).unwrap(), Some(2));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn negative_event_id_on_fresh_store_writes_nothing() {
    let dir = scratch_dir("negative-id-fresh");
    let path = dir.join("bindings.json");
    let mut store = FileBindingStore::new(&path);

    assert!(store.set_binding(1, -1).is_err());
    assert_eq!(store.get_binding(1).unwrap(), None);
    assert!(!path.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_parent_directory_is_created() {
    let dir = scratch_dir("nested");
    let path = dir.join("a").join("b").join("bindings.json");

    let mut store = FileBindingStore::new(&path);
    store.set_binding(1, 1).unwrap();
    assert!(path.exists());

    let _ = fs::remove_dir_all(&dir);
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration action
// ─────────────────────────────────────────────────────────────────────────────

fn sample_events() -> Vec<Event> {
    vec![
        Event::new(1, "Birthday", 5, "2025-06-01"),
        Event::new(2, "Exam", -3, "2025-01-01"),
        Event::new(3, "Launch", 0, "2025-03-03"),
    ]
}

#[test]
fn choices_list_every_event_with_suffix() {
    let list = choices(&sample_events(), &Vocabulary::chinese());
    let titles: Vec<&str> = list.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Birthday (还有5天)", "Exam (已过3天)", "Launch (今天)"]
    );
    assert_eq!(
        list.iter().map(|c| c.event_id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn choices_in_english() {
    let list = choices(&sample_events(), &Vocabulary::english());
    assert_eq!(list[0].title, "Birthday (5 days left)");
    assert_eq!(list[1].title, "Exam (3 days ago)");
    assert_eq!(list[2].title, "Launch (today)");
}

#[test]
fn no_events_means_no_choices() {
    assert!(choices(&[], &Vocabulary::default()).is_empty());
}

#[test]
fn configure_then_render_shows_selection() {
    let data = SharedSnapshot::new(GlobalDefaults::default(), sample_events());
    let mut store = MemoryBindingStore::new();

    configure_surface(&mut store, 21, 3).unwrap();
    let model = render_surface(21, &store, &data);

    assert_eq!(model.display_name, "Launch");
    assert_eq!(model.label.as_str(), "today");
}

#[test]
fn configure_accepts_ids_not_in_list() {
    let data = SharedSnapshot::new(GlobalDefaults::default(), sample_events());
    let mut store = MemoryBindingStore::new();

    configure_surface(&mut store, 21, 404).unwrap();
    assert_eq!(store.get_binding(21).unwrap(), Some(404));
    assert_eq!(render_surface(21, &store, &data).target_event_id, 1);
}

#[test]
fn configure_failure_is_reported() {
    let dir = scratch_dir("configure-failure");
    let path = dir.join("bindings.json");
    fs::write(&path, "not json").unwrap();

    let mut store = FileBindingStore::new(&path);
    assert!(configure_surface(&mut store, 1, 2).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json");

    let _ = fs::remove_dir_all(&dir);
}
