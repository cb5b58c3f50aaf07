//! 기록 저장소의 한도/영속성 회귀 테스트.

use std::fs;

use unitflow::conversion::Category;
use unitflow::history::{HistoryEntry, HistoryStore, HISTORY_LIMIT};

fn entry(from_value: f64, result: f64) -> HistoryEntry {
    HistoryEntry::new(from_value, "meters", result, "feet", Category::Length)
}

#[test]
fn append_keeps_only_five_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = HistoryStore::load(&path);
    for i in 1..=6 {
        store.append(entry(i as f64, i as f64 * 3.28084)).unwrap();
    }
    assert_eq!(store.entries().len(), HISTORY_LIMIT);
    // 최신 항목이 맨 앞, 가장 오래된 1번은 밀려난다
    assert_eq!(store.entries()[0].from_value, 6.0);
    assert_eq!(store.entries()[4].from_value, 2.0);
}

#[test]
fn result_is_rounded_to_two_decimals_at_append() {
    let e = entry(12.0, 39.37008);
    assert_eq!(e.to_value, 39.37);
    let e = entry(1.0, 9.876);
    assert_eq!(e.to_value, 9.88);
}

#[test]
fn identical_conversions_are_not_deduplicated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = HistoryStore::load(&path);
    for _ in 0..3 {
        store.append(entry(1.0, 3.28084)).unwrap();
    }
    assert_eq!(store.entries().len(), 3);
}

#[test]
fn log_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    {
        let mut store = HistoryStore::load(&path);
        store.append(entry(1.0, 3.28)).unwrap();
        store.append(entry(2.0, 6.56)).unwrap();
    }
    let store = HistoryStore::load(&path);
    assert_eq!(store.entries().len(), 2);
    assert_eq!(store.entries()[0].from_value, 2.0);
    assert_eq!(store.entries()[0].category, Category::Length);
}

#[test]
fn clear_removes_the_file_entirely() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = HistoryStore::load(&path);
    store.append(entry(5.0, 16.4)).unwrap();
    assert!(path.exists());
    store.clear().unwrap();
    assert!(store.entries().is_empty());
    assert!(!path.exists());
    // 삭제 후 재로드하면 빈 기록이다
    let reloaded = HistoryStore::load(&path);
    assert!(reloaded.entries().is_empty());
}

#[test]
fn clear_on_empty_store_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = HistoryStore::load(&path);
    store.clear().unwrap();
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::load(dir.path().join("absent.json"));
    assert!(store.entries().is_empty());
}

#[test]
fn corrupt_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "{ not json at all").unwrap();
    let store = HistoryStore::load(&path);
    assert!(store.entries().is_empty());
}

#[test]
fn render_lists_rows_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = HistoryStore::load(&path);
    store.append(entry(12.0, 39.37008)).unwrap();
    let rows = store.render();
    assert_eq!(rows, vec!["12 meters → 39.37 feet".to_string()]);
}

#[test]
fn render_empty_log_yields_placeholder_row() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::load(dir.path().join("history.json"));
    let rows = store.render();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], "최근 변환 기록이 없습니다.");
}

#[test]
fn render_strips_underscores_from_unit_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = HistoryStore::load(&path);
    store
        .append(HistoryEntry::new(
            2.0,
            "metric_tons",
            2000.0,
            "kilograms",
            Category::Weight,
        ))
        .unwrap();
    assert_eq!(store.render()[0], "2 metric tons → 2000.00 kilograms");
}
