use serde::{Deserialize, Serialize};

use crate::error::{OptimizeError, OptimizeResult};
use crate::keywords::{KeywordData, KeywordSet};
use crate::{ContentStyle, OptimizationLevel};

pub const DEFAULT_TARGET_DURATION: f64 = 10.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizeRequest {
    pub script: Option<String>,
    pub concept: Option<String>,
    pub keywords: Option<KeywordData>,
    pub target_duration: Option<f64>,
    pub content_style: Option<ContentStyle>,
    pub optimization_level: Option<OptimizationLevel>,
}

impl OptimizeRequest {
    pub fn new(script: impl Into<String>, concept: impl Into<String>) -> Self {
        Self {
            script: Some(script.into()),
            concept: Some(concept.into()),
            ..Self::default()
        }
    }

    pub fn into_job(self) -> OptimizeResult<OptimizationJob> {
        let script = self.script.unwrap_or_default();
        if script.trim().is_empty() {
            return Err(OptimizeError::validation("script is required"));
        }

        let concept = self.concept.unwrap_or_default().trim().to_string();
        if concept.is_empty() {
            return Err(OptimizeError::validation("concept is required"));
        }

        let target_duration = self.target_duration.unwrap_or(DEFAULT_TARGET_DURATION);
        if !target_duration.is_finite() || target_duration <= 0.0 {
            return Err(OptimizeError::validation(format!(
                "targetDuration must be a positive number of minutes: {}",
                target_duration
            )));
        }

        let keywords = KeywordSet::derive(self.keywords.as_ref(), &concept);

        Ok(OptimizationJob {
            script,
            concept,
            keywords,
            target_duration,
            content_style: self.content_style.unwrap_or_default(),
            optimization_level: self.optimization_level.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationJob {
    pub script: String,
    pub concept: String,
    pub keywords: KeywordSet,
    pub target_duration: f64,
    pub content_style: ContentStyle,
    pub optimization_level: OptimizationLevel,
}
