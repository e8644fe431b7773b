use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::energy::{EnergySource, PriceTable};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
///
/// 계산기 상태(입력값)는 저장하지 않는다. 여기에는 기본 단가와 표시 설정만 둔다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 금액 뒤에 붙는 통화 기호
    pub currency: String,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    pub always_on_top: bool,
    /// `RUST_LOG`가 없을 때 쓰는 로그 필터
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    /// 잘못된 단가 입력 시 대체되는 기본 단가
    pub default_prices: PriceTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "€".into(),
            window_alpha: 1.0,
            always_on_top: false,
            log_filter: None,
            default_prices: PriceTable::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("기본 단가는 양수여야 합니다: {0:?}")]
    NonPositivePrice(EnergySource),
    #[error("창 투명도는 0.3~1.0 범위여야 합니다: {0}")]
    WindowAlpha(f32),
}

impl Config {
    /// 값 범위를 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(source) = self.default_prices.first_non_positive() {
            return Err(ConfigError::NonPositivePrice(source));
        }
        if !(0.3..=1.0).contains(&self.window_alpha) {
            return Err(ConfigError::WindowAlpha(self.window_alpha));
        }
        Ok(())
    }

    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// TOML 문자열에서 설정을 읽고 검증한다.
pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    cfg.validate()?;
    Ok(cfg)
}

/// 설정 파일을 읽는다. 파일이 없으면 기본 설정을 돌려준다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found; using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = from_toml_str(&content)?;
    info!(path = %path.display(), "config loaded");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = from_toml_str("currency = \"$\"\n").unwrap();
        assert_eq!(cfg.currency, "$");
        assert_eq!(cfg.default_prices, PriceTable::default());
        assert_eq!(cfg.window_alpha, 1.0);
    }

    #[test]
    fn zero_default_price_is_rejected() {
        let err = from_toml_str(
            "[default_prices]\nelectricity = 0.0\ngasoline = 1.7\ndiesel = 1.6\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositivePrice(EnergySource::Electric)
        ));
    }

    #[test]
    fn alpha_out_of_range_is_rejected() {
        let err = from_toml_str("window_alpha = 0.1\n").unwrap_err();
        assert!(matches!(err, ConfigError::WindowAlpha(_)));
    }
}
