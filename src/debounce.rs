use std::time::{Duration, Instant};

/// 기록 캡처 전에 입력이 멈춰 있어야 하는 시간.
pub const HISTORY_CAPTURE_WINDOW: Duration = Duration::from_millis(1500);

/// 마지막 제출 이후 일정 시간 새 제출이 없을 때만 값을 내보내는 디바운서.
///
/// 새 제출은 대기 중이던 예약을 취소하고 기한을 다시 잡으므로, 연속
/// 수정 중에는 마지막 값 하나만 살아남는다. 스레드나 타이머 없이
/// 호출자가 넘겨주는 시각으로만 동작하므로 단일 이벤트 루프에서
/// 결정적으로 테스트할 수 있다.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// 값을 제출한다. 대기 중이던 값은 버려지고 기한이 새로 시작된다.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    /// 기한이 지난 값을 꺼낸다. 기한 전이거나 대기 값이 없으면 `None`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// 대기 중인 예약을 취소한다.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
