use crate::player::ai::{Heuristic, SearchParams};
use anyhow::{bail, Context};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "minichess.json";
pub const DEFAULT_TRANSCRIPT_PATH: &str = "output.txt";
/// 1手あたりの思考時間の上限 (24時間)
pub const MAX_TIME_LIMIT_SECS: f64 = 24.0 * 60.0 * 60.0;

/// 各陣営を担当するプレイヤーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Ai,
    Random,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Ai => write!(f, "ai"),
            PlayerKind::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 1手あたりの思考時間 (秒)
    pub time_limit_secs: f64,
    /// 駒取りなしで引き分けになる手数 (ply)
    pub max_turns: u32,
    pub alpha_beta: bool,
    pub depth: u32,
    pub heuristic: Heuristic,
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub transcript: Option<PathBuf>,
    pub record: Option<PathBuf>,
    /// 初期配置ファイル (省略時は標準配置)
    pub layout: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            time_limit_secs: 5.0,
            max_turns: 20,
            alpha_beta: true,
            depth: 4,
            heuristic: Heuristic::Material,
            white: PlayerKind::Human,
            black: PlayerKind::Ai,
            transcript: Some(PathBuf::from(DEFAULT_TRANSCRIPT_PATH)),
            record: None,
            layout: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&config_str)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// `minichess.json` があれば読み、無ければ既定値
    pub fn load_or_default() -> anyhow::Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.time_limit_secs <= 0.0 || !self.time_limit_secs.is_finite() {
            bail!("time limit must be positive, got {}", self.time_limit_secs);
        }
        if self.time_limit_secs > MAX_TIME_LIMIT_SECS {
            bail!(
                "time limit must be at most {}s, got {}",
                MAX_TIME_LIMIT_SECS,
                self.time_limit_secs
            );
        }
        if self.max_turns == 0 {
            bail!("max_turns must be positive");
        }
        if self.depth == 0 {
            bail!("depth must be positive");
        }
        Ok(())
    }

    /// `validate` 前の値でも panic しないよう上限で丸める
    pub fn time_limit(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_limit_secs.min(MAX_TIME_LIMIT_SECS))
            .unwrap_or_default()
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            depth: self.depth,
            time_limit: self.time_limit(),
            alpha_beta: self.alpha_beta,
            max_turns: self.max_turns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search_params().time_limit, Duration::from_secs(5));
        assert_eq!(config.search_params().max_turns, 20);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(
            r#"{ "heuristic": "blended", "white": "ai", "black": "random", "depth": 3 }"#,
        )
        .unwrap();
        assert_eq!(config.heuristic, Heuristic::Blended);
        assert_eq!(config.white, PlayerKind::Ai);
        assert_eq!(config.black, PlayerKind::Random);
        assert_eq!(config.depth, 3);
        assert_eq!(config.max_turns, 20);
        assert!(config.alpha_beta);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.time_limit_secs = 0.0;
        assert!(config.validate().is_err());
        config.time_limit_secs = -1.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.max_turns = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn huge_time_limit_is_rejected_without_panicking() {
        let mut config = GameConfig::default();
        config.time_limit_secs = 1e30;
        assert!(config.validate().is_err());
        assert_eq!(
            config.search_params().time_limit,
            Duration::from_secs_f64(MAX_TIME_LIMIT_SECS)
        );

        config.time_limit_secs = MAX_TIME_LIMIT_SECS;
        assert!(config.validate().is_ok());

        config.time_limit_secs = f64::NAN;
        assert!(config.validate().is_err());
        let _ = config.time_limit();
    }

    #[test]
    fn load_reports_missing_file() {
        let err = GameConfig::load("/nonexistent/minichess.json").unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
