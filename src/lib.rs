//! 변환 엔진과 기록 저장소를 라이브러리로 분리하여 화면 없이도 단위 테스트가 가능하게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod debounce;
pub mod history;
pub mod ui_cli;
pub mod units;
