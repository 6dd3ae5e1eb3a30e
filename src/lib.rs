pub mod config;
pub mod error;
pub mod keywords;
pub mod metrics;
pub mod optimizer;
pub mod phrases;
pub mod request;
pub mod server;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::OptimizerConfig;

pub use crate::error::{OptimizeError, OptimizeResult};
pub use crate::keywords::{KeywordData, KeywordEntry, KeywordSet, RecommendedKeywords};
pub use crate::metrics::{analyze_script, ReadabilityLevel, ScriptMetrics};
pub use crate::optimizer::{
    OptimizationChange, OptimizationResult, Optimizer, Report,
};
pub use crate::phrases::{FixedHookSelector, HookSelector, RandomHookSelector};
pub use crate::request::{OptimizationJob, OptimizeRequest};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentStyle {
    #[default]
    Tutorial,
    Review,
    Vlog,
    Educational,
    Entertainment,
    Other(String),
}

impl ContentStyle {
    pub fn from_name(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tutorial" => ContentStyle::Tutorial,
            "review" => ContentStyle::Review,
            "vlog" => ContentStyle::Vlog,
            "educational" => ContentStyle::Educational,
            "entertainment" => ContentStyle::Entertainment,
            other => ContentStyle::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ContentStyle::Tutorial => "tutorial",
            ContentStyle::Review => "review",
            ContentStyle::Vlog => "vlog",
            ContentStyle::Educational => "educational",
            ContentStyle::Entertainment => "entertainment",
            ContentStyle::Other(name) => name,
        }
    }
}

impl From<String> for ContentStyle {
    fn from(value: String) -> Self {
        ContentStyle::from_name(&value)
    }
}

impl From<ContentStyle> for String {
    fn from(value: ContentStyle) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OptimizationLevel {
    Light,
    #[default]
    Moderate,
    Aggressive,
}

impl OptimizationLevel {
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(OptimizationLevel::Light),
            "moderate" => Some(OptimizationLevel::Moderate),
            "aggressive" => Some(OptimizationLevel::Aggressive),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OptimizationLevel::Light => "light",
            OptimizationLevel::Moderate => "moderate",
            OptimizationLevel::Aggressive => "aggressive",
        }
    }

    pub fn intensity(self) -> u8 {
        match self {
            OptimizationLevel::Light => 1,
            OptimizationLevel::Moderate => 2,
            OptimizationLevel::Aggressive => 3,
        }
    }
}

impl From<String> for OptimizationLevel {
    fn from(value: String) -> Self {
        OptimizationLevel::from_name(&value).unwrap_or_default()
    }
}

impl From<OptimizationLevel> for String {
    fn from(value: OptimizationLevel) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

fn load_optimizer_config() -> OptimizerConfig {
    OptimizerConfig::load(None)
        .map(|(config, _)| config)
        .unwrap_or_default()
}

pub fn optimize(request: OptimizeRequest) -> OptimizeResult<Report> {
    Optimizer::new(load_optimizer_config()).optimize(request)
}

pub fn capabilities() -> Value {
    let keyword_list = json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": { "keyword": { "type": "string" } },
            "required": ["keyword"]
        }
    });

    json!({
        "name": "optimize_script",
        "description": "Optimize a video script for keywords, readability and engagement, returning the rewritten script and an analysis report.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "script": {
                    "type": "string",
                    "description": "The video script to optimize"
                },
                "concept": {
                    "type": "string",
                    "description": "Video concept or topic"
                },
                "keywords": {
                    "type": "object",
                    "description": "Keyword research data",
                    "properties": {
                        "recommended": {
                            "type": "object",
                            "properties": {
                                "primary": keyword_list.clone(),
                                "secondary": keyword_list.clone(),
                                "longTail": keyword_list
                            }
                        }
                    }
                },
                "targetDuration": {
                    "type": "number",
                    "description": "Target video duration in minutes",
                    "default": 10
                },
                "contentStyle": {
                    "type": "string",
                    "enum": ["tutorial", "review", "vlog", "educational", "entertainment"],
                    "default": "tutorial"
                },
                "optimizationLevel": {
                    "type": "string",
                    "enum": ["light", "moderate", "aggressive"],
                    "default": "moderate"
                }
            },
            "required": ["script", "concept"]
        }
    })
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

pub fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{} minutes", minutes as i64)
    } else {
        format!("{} minutes", minutes)
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
