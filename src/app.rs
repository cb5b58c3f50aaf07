use std::path::PathBuf;
use std::time::Instant;

use crate::config::{Config, ConfigError};
use crate::conversion::{Category, ConversionError};
use crate::debounce::{Debouncer, HISTORY_CAPTURE_WINDOW};
use crate::history::{HistoryEntry, HistoryError, HistoryStore};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 단위 변환 오류
    Conversion(ConversionError),
    /// 기록 저장 오류
    History(HistoryError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::History(e) => write!(f, "기록 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<HistoryError> for AppError {
    fn from(value: HistoryError) -> Self {
        AppError::History(value)
    }
}

/// 컨트롤러가 소유하는 애플리케이션 상태.
///
/// 현재 카테고리와 기록 캐시를 전역이 아니라 여기에 모아 두므로 변환
/// 엔진과 기록 저장소는 화면 없이도 그대로 테스트할 수 있다.
pub struct App {
    pub config: Config,
    pub config_path: PathBuf,
    pub history: HistoryStore,
    pub capture: Debouncer<HistoryEntry>,
    pub category: Category,
    /// 실시간 결과 표시에만 쓰는 소수 자리수. 기록 저장 정밀도와는 무관하다.
    pub precision: usize,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf, history: HistoryStore) -> Self {
        let category = config.last_category;
        Self {
            config,
            config_path,
            history,
            capture: Debouncer::new(HISTORY_CAPTURE_WINDOW),
            category,
            precision: 2,
        }
    }

    /// 카테고리를 바꾸고 마지막 카테고리 설정을 즉시 저장한다.
    pub fn set_category(&mut self, category: Category) -> Result<(), AppError> {
        self.category = category;
        self.config.last_category = category;
        self.config.save(&self.config_path)?;
        Ok(())
    }

    /// 테마를 전환하고 저장한다.
    pub fn toggle_theme(&mut self) -> Result<(), AppError> {
        self.config.theme = self.config.theme.toggled();
        self.config.save(&self.config_path)?;
        Ok(())
    }

    /// 정지 구간을 넘긴 대기 항목이 있으면 기록으로 옮긴다.
    pub fn flush_capture(&mut self, now: Instant) -> Result<(), AppError> {
        if let Some(entry) = self.capture.poll(now) {
            self.history.append(entry)?;
        }
        Ok(())
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(app: &mut App) -> Result<(), AppError> {
    loop {
        app.flush_capture(Instant::now())?;
        match ui_cli::main_menu(app)? {
            MenuChoice::Convert => ui_cli::handle_conversion(app)?,
            MenuChoice::ChangeCategory => ui_cli::handle_category_change(app)?,
            MenuChoice::History => ui_cli::show_history(app),
            MenuChoice::ClearHistory => {
                app.history.clear()?;
                println!("기록을 모두 삭제했습니다.");
            }
            MenuChoice::Settings => ui_cli::handle_settings(app)?,
            MenuChoice::Exit => {
                app.flush_capture(Instant::now())?;
                println!("UnitFlow를 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
