use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::PlannerConfig;
use crate::metrics::{contains_ignore_case, count_keyword, split_paragraphs, split_words};
use crate::{format_float, ContentStyle, OptimizationLevel, Priority};

pub(crate) static CTA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)subscribe|like|comment").unwrap());

static STEP_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)step|first|next|then|finally").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    KeywordInsertion,
    Engagement,
    Cta,
    KeywordDensity,
    Hook,
    Structure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationChange {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub location: String,
    pub suggestion: String,
    pub priority: Priority,
}

impl OptimizationChange {
    fn new(kind: ChangeKind, location: &str, suggestion: String, priority: Priority) -> Self {
        Self {
            kind,
            location: location.to_string(),
            suggestion,
            priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub changes: Vec<OptimizationChange>,
    pub engagement_points: Vec<EngagementPoint>,
}

impl OptimizationResult {
    pub fn has_change(&self, kind: ChangeKind) -> bool {
        self.changes.iter().any(|change| change.kind == kind)
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationPlanner {
    config: PlannerConfig,
}

impl OptimizationPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn plan(
        &self,
        script: &str,
        keywords: &[String],
        style: &ContentStyle,
        level: OptimizationLevel,
    ) -> OptimizationResult {
        let mut result = OptimizationResult::default();

        if let Some(primary) = keywords.first() {
            let opening = split_paragraphs(script).first().copied().unwrap_or("");
            if !contains_ignore_case(opening, primary) {
                result.changes.push(OptimizationChange::new(
                    ChangeKind::KeywordInsertion,
                    "opening paragraph",
                    format!(
                        "Include your primary keyword \"{}\" in the first paragraph so the topic is clear from the start.",
                        primary
                    ),
                    Priority::High,
                ));
            }
        }

        if !script.contains('?') {
            result.changes.push(OptimizationChange::new(
                ChangeKind::Engagement,
                "middle of script",
                "Add a direct question to invite comments and boost engagement.".to_string(),
                Priority::Medium,
            ));
            result.engagement_points.push(EngagementPoint {
                kind: "question".to_string(),
                location: "middle".to_string(),
                suggestion: "Ask viewers for their opinion and send them to the comments.".to_string(),
            });
        }

        if !CTA_RE.is_match(script) {
            result.changes.push(OptimizationChange::new(
                ChangeKind::Cta,
                "end of script",
                "Close with a call to action asking viewers to like, subscribe, and comment.".to_string(),
                Priority::High,
            ));
        }

        let density = planner_keyword_density(script, keywords);
        if density < self.config.min_keyword_density
            && level.intensity() >= self.config.density_min_intensity
        {
            result.changes.push(OptimizationChange::new(
                ChangeKind::KeywordDensity,
                "throughout script",
                format!(
                    "Keyword density is {}%. Work your keywords in naturally to reach 1-2%.",
                    format_float(density, 2)
                ),
                Priority::Medium,
            ));
        }

        if opening_sentence(script).chars().count() > self.config.hook_max_chars {
            result.changes.push(OptimizationChange::new(
                ChangeKind::Hook,
                "opening sentence",
                "Shorten the opening sentence so the hook lands within the first 15 seconds.".to_string(),
                Priority::High,
            ));
        }

        if *style == ContentStyle::Tutorial && !STEP_MARKER_RE.is_match(script) {
            result.changes.push(OptimizationChange::new(
                ChangeKind::Structure,
                "script structure",
                "Signal each step with markers like first, next, then and finally.".to_string(),
                Priority::Medium,
            ));
        }

        result
    }
}

// Unrounded, and a keyword listed twice is counted twice.
pub fn planner_keyword_density(script: &str, keywords: &[String]) -> f64 {
    let word_count = split_words(script).len();
    if word_count == 0 {
        return 0.0;
    }
    let total: usize = keywords
        .iter()
        .map(|keyword| count_keyword(script, keyword))
        .sum();
    total as f64 / word_count as f64 * 100.0
}

pub fn opening_sentence(script: &str) -> &str {
    script
        .find(|ch: char| matches!(ch, '.' | '!' | '?'))
        .map(|end| &script[..end])
        .unwrap_or(script)
}
