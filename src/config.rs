//! 설정 파일 로드 (JSON)
//!
//! 설정은 읽기만 합니다. 실행 중 바꾼 음량/모드는 저장되지 않습니다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::DEFAULT_VOLUME_LEVEL;
use crate::practice::mode::PracticeMode;

/// 타닥 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TadakConfig {
    /// 낱말을 다 친 뒤 다음 낱말까지 대기 시간 (ms)
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// 음량 단계 (1~5)
    #[serde(default = "default_volume_level")]
    pub volume_level: u8,
    #[serde(default)]
    pub muted: bool,
    /// 시작 연습 모드
    #[serde(default)]
    pub mode: PracticeMode,
}

fn default_settle_delay_ms() -> u64 {
    500
}

fn default_volume_level() -> u8 {
    DEFAULT_VOLUME_LEVEL
}

impl Default for TadakConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            volume_level: default_volume_level(),
            muted: false,
            mode: PracticeMode::default(),
        }
    }
}

/// 설정 파일 경로: ~/.config/tadak/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("tadak").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> TadakConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> TadakConfig {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            log::warn!("{}: {}, 기본 설정 사용", path.display(), e);
            TadakConfig::default()
        }),
        Err(_) => {
            log::debug!("설정 파일 없음: {}", path.display());
            TadakConfig::default()
        }
    }
}

pub fn parse_config(json: &str) -> Result<TadakConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("설정 파일 파싱 실패: {}", e))
}
