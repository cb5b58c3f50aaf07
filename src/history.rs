use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::conversion::{spaced_name, Category};

/// 기본 기록 파일 이름.
pub const HISTORY_FILE: &str = "unitflow_history.json";

/// 기록에 보관하는 최대 건수.
pub const HISTORY_LIMIT: usize = 5;

/// 변환 기록 한 건. 생성 이후에는 수정하지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 생성 시각(epoch 밀리초). 생성 순서 식별자로 사용한다.
    pub id: i64,
    pub from_value: f64,
    pub from_unit: String,
    /// 표시 정밀도 설정과 무관하게 소수 2자리로 반올림해 저장한 결과.
    pub to_value: f64,
    pub to_unit: String,
    pub category: Category,
}

impl HistoryEntry {
    /// 기록 항목을 만든다. 결과 값은 이 시점에 소수 2자리로 반올림된다.
    pub fn new(
        from_value: f64,
        from_unit: &str,
        result: f64,
        to_unit: &str,
        category: Category,
    ) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            from_value,
            from_unit: from_unit.to_string(),
            to_value: (result * 100.0).round() / 100.0,
            to_unit: to_unit.to_string(),
            category,
        }
    }
}

/// 기록 저장/삭제 시 발생 가능한 오류.
#[derive(Debug)]
pub enum HistoryError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화 오류
    Serialize(serde_json::Error),
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "기록 파일 입출력 오류: {e}"),
            HistoryError::Serialize(e) => write!(f, "기록 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<std::io::Error> for HistoryError {
    fn from(value: std::io::Error) -> Self {
        HistoryError::Io(value)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(value: serde_json::Error) -> Self {
        HistoryError::Serialize(value)
    }
}

/// 최근 변환 기록 저장소. 최신 항목이 앞에 오고 최대 5건을 유지한다.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// 파일에서 기록을 읽어 저장소를 연다.
    ///
    /// 파일이 없거나 파싱할 수 없으면 빈 기록으로 시작한다. 손상된 저장
    /// 상태는 오류가 아니라 부재로 취급한다.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// 항목을 맨 앞에 넣고 한도를 넘는 오래된 항목을 잘라낸 뒤 전체를 저장한다.
    ///
    /// 중복 제거는 하지 않는다. 같은 변환을 반복하면 한도까지 그대로 쌓인다.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
        self.persist()
    }

    /// 기록을 비우고 저장 파일 자체를 삭제한다. 빈 목록을 쓰는 것이 아니다.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HistoryError::Io(e)),
        }
    }

    /// 표시용 행 목록을 만든다. 최신 항목이 먼저 온다.
    ///
    /// 기록이 없으면 자리 표시 행 하나를 돌려준다.
    pub fn render(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec!["최근 변환 기록이 없습니다.".to_string()];
        }
        self.entries
            .iter()
            .map(|e| {
                format!(
                    "{} {} → {:.2} {}",
                    e.from_value,
                    spaced_name(&e.from_unit),
                    e.to_value,
                    spaced_name(&e.to_unit)
                )
            })
            .collect()
    }

    /// 전체 기록을 통째로 다시 쓴다. 부분 기록 상태를 남기지 않는다.
    fn persist(&self) -> Result<(), HistoryError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
