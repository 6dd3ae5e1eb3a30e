use serde::Serialize;
use tracing::debug;

use crate::config::{MetricsConfig, ReportConfig};
use crate::metrics::{analyze_script, ScriptMetrics};
use crate::optimizer::planner::{EngagementPoint, OptimizationChange, OptimizationResult};
use crate::phrases::{PhraseBook, PHRASES};
use crate::request::OptimizationJob;
use crate::{format_float, format_minutes, ContentStyle};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvements {
    pub keyword_density_change: String,
    pub keywords_added: i64,
    pub engagement_points_added: usize,
    pub readability_change: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    TooShort,
    TooLong,
    RecommendedStructure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureRecommendation {
    #[serde(rename = "type")]
    pub kind: StructureKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_duration: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementCategory {
    Retention,
    MidVideoEngagement,
    Transitions,
    Hook,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementSuggestion {
    pub category: EngagementCategory,
    pub description: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordInsertion {
    pub keyword: String,
    pub current_count: usize,
    pub target_count: String,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    KeywordStuffing,
    Readability,
    MissingCta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub original_script: String,
    pub optimized_script: String,
    pub original_metrics: ScriptMetrics,
    pub optimized_metrics: ScriptMetrics,
    pub improvements: Improvements,
    pub optimizations: Vec<OptimizationChange>,
    pub engagement_points: Vec<EngagementPoint>,
    pub structure_recommendations: Vec<StructureRecommendation>,
    pub engagement_suggestions: Vec<EngagementSuggestion>,
    pub keyword_insertions: Vec<KeywordInsertion>,
    pub tips: Vec<String>,
    pub warnings: Vec<ReportWarning>,
}

impl Report {
    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|warning| warning.kind == kind)
    }
}

#[derive(Debug, Clone)]
pub struct ReportAssembler {
    metrics: MetricsConfig,
    config: ReportConfig,
    phrases: &'static PhraseBook,
}

impl ReportAssembler {
    pub fn new(metrics: MetricsConfig, config: ReportConfig) -> Self {
        Self {
            metrics,
            config,
            phrases: &PHRASES,
        }
    }

    pub fn assemble(
        &self,
        job: &OptimizationJob,
        plan: OptimizationResult,
        optimized_script: String,
    ) -> Report {
        let keywords = job.keywords.flattened();
        let original_metrics = analyze_script(&job.script, &keywords, &self.metrics);
        let optimized_metrics = analyze_script(&optimized_script, &keywords, &self.metrics);

        let improvements = Improvements {
            keyword_density_change: format_float(
                optimized_metrics.keyword_density - original_metrics.keyword_density,
                2,
            ),
            keywords_added: optimized_metrics.unique_keywords_found as i64
                - original_metrics.unique_keywords_found as i64,
            engagement_points_added: plan.engagement_points.len(),
            readability_change: optimized_metrics.readability.score
                - original_metrics.readability.score,
        };

        let structure_recommendations = self.structure_recommendations(
            &original_metrics,
            job.target_duration,
            &job.content_style,
        );
        let keyword_insertions = self.keyword_insertions(job, &original_metrics);
        let warnings = self.warnings(&original_metrics);
        debug!(
            warnings = warnings.len(),
            insertions = keyword_insertions.len(),
            "report assembled"
        );

        Report {
            original_script: job.script.clone(),
            optimized_script,
            original_metrics,
            optimized_metrics,
            improvements,
            optimizations: plan.changes,
            engagement_points: plan.engagement_points,
            structure_recommendations,
            engagement_suggestions: self.engagement_suggestions(),
            keyword_insertions,
            tips: self.tips(&job.content_style),
            warnings,
        }
    }

    pub fn structure_recommendations(
        &self,
        metrics: &ScriptMetrics,
        target_minutes: f64,
        style: &ContentStyle,
    ) -> Vec<StructureRecommendation> {
        let mut recommendations = Vec::new();
        let estimated = metrics.estimated_duration_minutes as f64;
        let current = Some(format_minutes(estimated));
        let target = Some(format_minutes(target_minutes));

        if estimated < target_minutes * self.config.duration_short_ratio {
            recommendations.push(StructureRecommendation {
                kind: StructureKind::TooShort,
                message: "Script is shorter than the target duration. Add examples, demonstrations, or deeper explanations.".to_string(),
                current_duration: current,
                target_duration: target,
                sections: Vec::new(),
            });
        } else if estimated > target_minutes * self.config.duration_long_ratio {
            recommendations.push(StructureRecommendation {
                kind: StructureKind::TooLong,
                message: "Script is longer than the target duration. Cut tangents and tighten explanations.".to_string(),
                current_duration: current,
                target_duration: target,
                sections: Vec::new(),
            });
        }

        let sections = self.phrases.sections_for(style);
        let style_name = match style {
            ContentStyle::Other(_) => ContentStyle::Tutorial.label().to_string(),
            known => known.label().to_string(),
        };
        recommendations.push(StructureRecommendation {
            kind: StructureKind::RecommendedStructure,
            message: format!("Recommended structure for {} content", style_name),
            current_duration: None,
            target_duration: None,
            sections: sections.iter().map(|section| section.to_string()).collect(),
        });

        recommendations
    }

    pub fn engagement_suggestions(&self) -> Vec<EngagementSuggestion> {
        vec![
            EngagementSuggestion {
                category: EngagementCategory::Retention,
                description: "Promise upcoming value so viewers keep watching.".to_string(),
                examples: examples(self.phrases.retention),
            },
            EngagementSuggestion {
                category: EngagementCategory::MidVideoEngagement,
                description: "Prompt a reaction around the middle of the video.".to_string(),
                examples: examples(self.phrases.engagement),
            },
            EngagementSuggestion {
                category: EngagementCategory::Transitions,
                description: "Bridge sections with a line that builds anticipation.".to_string(),
                examples: examples(self.phrases.transitions),
            },
            EngagementSuggestion {
                category: EngagementCategory::Hook,
                description: "Open with a line that creates curiosity in the first seconds.".to_string(),
                examples: examples(self.phrases.hooks),
            },
        ]
    }

    pub fn keyword_insertions(
        &self,
        job: &OptimizationJob,
        metrics: &ScriptMetrics,
    ) -> Vec<KeywordInsertion> {
        let count_of = |keyword: &str| {
            metrics
                .keyword_occurrences
                .get(keyword)
                .copied()
                .unwrap_or(0)
        };
        let mut insertions = Vec::new();

        for keyword in &job.keywords.primary {
            let current_count = count_of(keyword);
            if current_count < self.config.primary_keyword_min_mentions {
                insertions.push(KeywordInsertion {
                    keyword: keyword.clone(),
                    current_count,
                    target_count: "3-5".to_string(),
                    locations: vec![
                        "opening".to_string(),
                        "middle".to_string(),
                        "conclusion".to_string(),
                    ],
                });
            }
        }

        for keyword in job
            .keywords
            .secondary
            .iter()
            .take(self.config.secondary_keyword_limit)
        {
            if count_of(keyword) == 0 {
                insertions.push(KeywordInsertion {
                    keyword: keyword.clone(),
                    current_count: 0,
                    target_count: "1-2".to_string(),
                    locations: vec!["body content".to_string()],
                });
            }
        }

        insertions
    }

    pub fn tips(&self, style: &ContentStyle) -> Vec<String> {
        self.phrases
            .general_tips
            .iter()
            .chain(self.phrases.style_tips(style).iter())
            .map(|tip| tip.to_string())
            .collect()
    }

    pub fn warnings(&self, metrics: &ScriptMetrics) -> Vec<ReportWarning> {
        let mut warnings = Vec::new();
        if metrics.keyword_density > self.config.keyword_stuffing_density {
            warnings.push(ReportWarning {
                kind: WarningKind::KeywordStuffing,
                message: format!(
                    "Keyword density of {}% may read as keyword stuffing. Aim for 1-2%.",
                    format_float(metrics.keyword_density, 2)
                ),
            });
        }
        if metrics.average_sentence_length > self.config.max_average_sentence_length {
            warnings.push(ReportWarning {
                kind: WarningKind::Readability,
                message: format!(
                    "Average sentence length is {} words. Break long sentences up for spoken delivery.",
                    format_float(metrics.average_sentence_length, 1)
                ),
            });
        }
        if !metrics.engagement.has_call_to_action {
            warnings.push(ReportWarning {
                kind: WarningKind::MissingCta,
                message: "No call to action found. Ask viewers to like, subscribe, or comment.".to_string(),
            });
        }
        warnings
    }
}

fn examples(pool: &[&str]) -> Vec<String> {
    pool.iter().take(2).map(|phrase| phrase.to_string()).collect()
}
