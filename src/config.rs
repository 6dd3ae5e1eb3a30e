use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{OptimizeError, OptimizeResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub words_per_minute: u32,
    pub hook_max_chars: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 150,
            hook_max_chars: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub hook_max_chars: usize,
    pub min_keyword_density: f64,
    pub density_min_intensity: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            hook_max_chars: 150,
            min_keyword_density: 1.0,
            density_min_intensity: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriterConfig {
    pub hook_trigger_chars: usize,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            hook_trigger_chars: 150,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub keyword_stuffing_density: f64,
    pub max_average_sentence_length: f64,
    pub duration_short_ratio: f64,
    pub duration_long_ratio: f64,
    pub primary_keyword_min_mentions: usize,
    pub secondary_keyword_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            keyword_stuffing_density: 3.0,
            max_average_sentence_length: 25.0,
            duration_short_ratio: 0.8,
            duration_long_ratio: 1.2,
            primary_keyword_min_mentions: 3,
            secondary_keyword_limit: 3,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub metrics: MetricsConfig,
    pub planner: PlannerConfig,
    pub rewriter: RewriterConfig,
    pub report: ReportConfig,
}

impl OptimizerConfig {
    pub fn load(path: Option<PathBuf>) -> OptimizeResult<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| OptimizeError::Config(format!("failed to read config: {}", err)))?;
                Self::from_toml(&contents)?
            }
            _ => OptimizerConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn from_toml(contents: &str) -> OptimizeResult<Self> {
        toml::from_str(contents)
            .map_err(|err| OptimizeError::Config(format!("failed to parse config: {}", err)))
    }

    pub fn write(&self, path: &Path) -> OptimizeResult<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| {
                OptimizeError::Config(format!("failed to create config dir: {}", err))
            })?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| OptimizeError::Config(format!("failed to serialize config: {}", err)))?;
        std::fs::write(path, payload)
            .map_err(|err| OptimizeError::Config(format!("failed to write config: {}", err)))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(rate) = env::var("OPTIMIZER_WORDS_PER_MINUTE") {
            if let Ok(value) = rate.parse::<u32>() {
                if value > 0 {
                    self.metrics.words_per_minute = value;
                }
            }
        }
        if let Ok(chars) = env::var("OPTIMIZER_HOOK_MAX_CHARS") {
            if let Ok(value) = chars.parse::<usize>() {
                self.planner.hook_max_chars = value;
                self.rewriter.hook_trigger_chars = value;
            }
        }
        if let Ok(density) = env::var("OPTIMIZER_STUFFING_DENSITY") {
            if let Ok(value) = density.parse::<f64>() {
                self.report.keyword_stuffing_density = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("OPTIMIZER_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/optimizer.toml")))
}
