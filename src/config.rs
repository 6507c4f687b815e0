use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::keys;

/// 기본 설정 파일 위치.
pub const CONFIG_FILE: &str = "config.toml";

/// 화면 밝기 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    /// 운영체제 설정을 따른다.
    #[default]
    System,
    Light,
    Dark,
}

impl AppearanceMode {
    pub const ALL: [AppearanceMode; 3] = [
        AppearanceMode::System,
        AppearanceMode::Light,
        AppearanceMode::Dark,
    ];

    pub fn i18n_key(&self) -> &'static str {
        match self {
            AppearanceMode::System => keys::APPEARANCE_SYSTEM,
            AppearanceMode::Light => keys::APPEARANCE_LIGHT,
            AppearanceMode::Dark => keys::APPEARANCE_DARK,
        }
    }
}

/// 표시 언어. `System`이면 로케일을 감지한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LanguageOption {
    #[default]
    #[serde(rename = "system")]
    System,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "nl")]
    Dutch,
}

impl LanguageOption {
    pub const ALL: [LanguageOption; 3] = [
        LanguageOption::System,
        LanguageOption::English,
        LanguageOption::Dutch,
    ];

    /// 언어 코드. 시스템 설정이면 `None`.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            LanguageOption::System => None,
            LanguageOption::English => Some("en"),
            LanguageOption::Dutch => Some("nl"),
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            LanguageOption::System => keys::LANGUAGE_SYSTEM,
            LanguageOption::English => keys::LANGUAGE_ENGLISH,
            LanguageOption::Dutch => keys::LANGUAGE_DUTCH,
        }
    }
}

/// 강조 색상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Blue,
    Green,
    Orange,
    Indigo,
    Purple,
    Pink,
    Red,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 7] = [
        ThemeColor::Blue,
        ThemeColor::Green,
        ThemeColor::Orange,
        ThemeColor::Indigo,
        ThemeColor::Purple,
        ThemeColor::Pink,
        ThemeColor::Red,
    ];

    /// 미리보기용 sRGB 값.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ThemeColor::Blue => [0x1E, 0x88, 0xE5],
            ThemeColor::Green => [0x43, 0xA0, 0x47],
            ThemeColor::Orange => [0xFB, 0x8C, 0x00],
            ThemeColor::Indigo => [0x39, 0x49, 0xAB],
            ThemeColor::Purple => [0x8E, 0x24, 0xAA],
            ThemeColor::Pink => [0xD8, 0x1B, 0x60],
            ThemeColor::Red => [0xE5, 0x39, 0x35],
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            ThemeColor::Blue => keys::THEME_BLUE,
            ThemeColor::Green => keys::THEME_GREEN,
            ThemeColor::Orange => keys::THEME_ORANGE,
            ThemeColor::Indigo => keys::THEME_INDIGO,
            ThemeColor::Purple => keys::THEME_PURPLE,
            ThemeColor::Pink => keys::THEME_PINK,
            ThemeColor::Red => keys::THEME_RED,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceMode,
    pub language: LanguageOption,
    pub theme_color: ThemeColor,
    /// 프로젝트 데이터(`projects.json`)가 놓이는 디렉터리.
    pub data_dir: PathBuf,
    /// TOML 언어팩 디렉터리. 없으면 내장 문자열만 쓴다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            appearance: AppearanceMode::System,
            language: LanguageOption::System,
            theme_color: ThemeColor::Blue,
            data_dir: PathBuf::from("."),
            language_pack_dir: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(CONFIG_FILE))
}

/// 지정한 경로에서 설정을 읽는다. 파일이 없으면 기본값을 그 경로에 저장한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!("created default config at {}", path.display());
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)?;
        info!("saved config to {}", path.display());
        Ok(())
    }

    pub fn language_code(&self) -> Option<&'static str> {
        self.language.code()
    }
}
