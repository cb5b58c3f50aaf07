//! 디바운스 캡처 정책 회귀 테스트.

use std::time::{Duration, Instant};

use unitflow::conversion::Category;
use unitflow::debounce::{Debouncer, HISTORY_CAPTURE_WINDOW};
use unitflow::history::{HistoryEntry, HistoryStore};

const WINDOW: Duration = Duration::from_millis(1500);

#[test]
fn capture_window_is_one_and_a_half_seconds() {
    assert_eq!(HISTORY_CAPTURE_WINDOW, Duration::from_millis(1500));
}

#[test]
fn fires_only_after_the_quiet_window() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(WINDOW);
    debouncer.submit(1, t0);
    assert_eq!(debouncer.poll(t0 + Duration::from_millis(1499)), None);
    assert_eq!(debouncer.poll(t0 + Duration::from_millis(1500)), Some(1));
    // 한 번 꺼내면 대기 상태가 비워진다
    assert_eq!(debouncer.poll(t0 + Duration::from_secs(10)), None);
}

#[test]
fn new_submit_cancels_the_pending_one() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(WINDOW);
    debouncer.submit(1, t0);
    debouncer.submit(2, t0 + Duration::from_millis(100));
    debouncer.submit(3, t0 + Duration::from_millis(200));
    // 마지막 제출 기준으로 기한이 다시 시작된다
    assert_eq!(debouncer.poll(t0 + Duration::from_millis(1699)), None);
    assert_eq!(debouncer.poll(t0 + Duration::from_millis(1700)), Some(3));
}

#[test]
fn cancel_discards_the_pending_value() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(WINDOW);
    debouncer.submit(7, t0);
    assert!(debouncer.is_pending());
    debouncer.cancel();
    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.poll(t0 + Duration::from_secs(5)), None);
}

#[test]
fn rapid_edit_burst_appends_exactly_one_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = HistoryStore::load(&path);
    let mut debouncer: Debouncer<HistoryEntry> = Debouncer::new(WINDOW);

    // 빠르게 세 번 수정하고 잠시 멈추는 시나리오
    let t0 = Instant::now();
    for (i, value) in [1.0, 12.0, 123.0].iter().enumerate() {
        let at = t0 + Duration::from_millis(300 * i as u64);
        let entry = HistoryEntry::new(*value, "meters", value * 3.28084, "feet", Category::Length);
        if let Some(fired) = debouncer.poll(at) {
            store.append(fired).unwrap();
        }
        debouncer.submit(entry, at);
    }
    let settled = t0 + Duration::from_millis(600) + WINDOW;
    if let Some(fired) = debouncer.poll(settled) {
        store.append(fired).unwrap();
    }

    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0].from_value, 123.0);
}
