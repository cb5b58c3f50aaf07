use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::conversion::Category;

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "unitflow.toml";

/// 화면 테마.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// 반대 테마를 돌려준다.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// 사용자 환경 설정. 시작 시 한 번 읽고 바뀔 때마다 저장한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub last_category: Category,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            last_category: Category::Length,
        }
    }
}

/// 설정 저장 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드한다.
///
/// 파일이 없으면 기본 설정을 만들어 저장한 뒤 돌려주고, 파싱할 수 없는
/// 파일은 부재로 취급해 기본값을 돌려준다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content).unwrap_or_default()),
        Err(_) => {
            let cfg = Config::default();
            cfg.save(path)?;
            Ok(cfg)
        }
    }
}

impl Config {
    /// 설정을 지정된 경로에 통째로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
