use serde_json::json;

use script_optimizer::optimizer::{ChangeKind, StructureKind, WarningKind};
use script_optimizer::phrases::PHRASES;
use script_optimizer::{
    capabilities, ContentStyle, FixedHookSelector, KeywordData, KeywordEntry, OptimizeError,
    OptimizeRequest, Optimizer, RecommendedKeywords,
};

const BASIC_SCRIPT: &str = "This is a basic video. It has no questions or calls to action.";

fn optimizer() -> Optimizer {
    Optimizer::default().with_selector(FixedHookSelector(0))
}

fn entries(values: &[&str]) -> Option<Vec<KeywordEntry>> {
    Some(values.iter().map(|value| KeywordEntry::new(*value)).collect())
}

fn has_call_to_action(text: &str) -> bool {
    let lower = text.to_lowercase();
    ["subscribe", "like", "comment"]
        .iter()
        .any(|word| lower.contains(word))
}

#[test]
fn basic_tutorial_script_end_to_end() {
    let mut request = OptimizeRequest::new(BASIC_SCRIPT, "gardening tips");
    request.content_style = Some(ContentStyle::Tutorial);

    let report = optimizer().optimize(request).unwrap();

    let kinds: Vec<ChangeKind> = report.optimizations.iter().map(|change| change.kind).collect();
    assert!(kinds.contains(&ChangeKind::KeywordInsertion));
    assert!(kinds.contains(&ChangeKind::Engagement));
    assert!(kinds.contains(&ChangeKind::Cta));
    assert!(kinds.contains(&ChangeKind::Structure));

    assert_eq!(report.original_script, BASIC_SCRIPT);
    assert_ne!(report.optimized_script, report.original_script);
    assert!(report.optimized_script.contains('?'));
    assert!(has_call_to_action(&report.optimized_script));

    assert_eq!(report.improvements.engagement_points_added, 1);
    assert_eq!(report.improvements.keywords_added, 1);
    assert!(report.has_warning(WarningKind::MissingCta));
}

#[test]
fn optimized_metrics_use_the_same_analysis() {
    let report = optimizer()
        .optimize(OptimizeRequest::new(BASIC_SCRIPT, "gardening tips"))
        .unwrap();

    let keywords = vec!["gardening tips".to_string()];
    let config = script_optimizer::config::MetricsConfig::default();
    assert_eq!(
        report.optimized_metrics,
        script_optimizer::analyze_script(&report.optimized_script, &keywords, &config)
    );
    assert_eq!(
        report.original_metrics,
        script_optimizer::analyze_script(BASIC_SCRIPT, &keywords, &config)
    );
}

#[test]
fn missing_script_or_concept_is_a_validation_error() {
    let err = optimizer()
        .optimize(OptimizeRequest {
            concept: Some("gardening".to_string()),
            ..OptimizeRequest::default()
        })
        .unwrap_err();
    assert!(matches!(err, OptimizeError::Validation(ref message) if message.contains("script")));

    let err = optimizer()
        .optimize(OptimizeRequest::new(BASIC_SCRIPT, "   "))
        .unwrap_err();
    assert!(matches!(err, OptimizeError::Validation(ref message) if message.contains("concept")));

    let err = optimizer()
        .optimize(OptimizeRequest::new("  \n ", "gardening"))
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn non_positive_target_duration_is_rejected() {
    let mut request = OptimizeRequest::new(BASIC_SCRIPT, "gardening");
    request.target_duration = Some(0.0);
    assert!(optimizer().optimize(request).unwrap_err().is_validation());
}

#[test]
fn request_defaults_are_applied() {
    let job = OptimizeRequest::new(BASIC_SCRIPT, "gardening tips")
        .into_job()
        .unwrap();

    assert_eq!(job.keywords.primary, vec!["gardening tips".to_string()]);
    assert!(job.keywords.secondary.is_empty());
    assert!(job.keywords.long_tail.is_empty());
    assert_eq!(job.target_duration, 10.0);
    assert_eq!(job.content_style, ContentStyle::Tutorial);
    assert_eq!(job.optimization_level.intensity(), 2);
}

#[test]
fn supplied_keywords_replace_concept() {
    let mut request = OptimizeRequest::new(BASIC_SCRIPT, "gardening tips");
    request.keywords = Some(KeywordData {
        recommended: Some(RecommendedKeywords {
            primary: entries(&["organic gardening", " "]),
            secondary: entries(&["soil"]),
            long_tail: entries(&["organic gardening for beginners"]),
        }),
    });

    let job = request.into_job().unwrap();
    assert_eq!(job.keywords.primary, vec!["organic gardening".to_string()]);
    assert_eq!(
        job.keywords.flattened(),
        vec![
            "organic gardening".to_string(),
            "soil".to_string(),
            "organic gardening for beginners".to_string(),
        ]
    );
}

#[test]
fn wire_request_parses_camel_case_and_unknown_style() {
    let request: OptimizeRequest = serde_json::from_value(json!({
        "script": BASIC_SCRIPT,
        "concept": "gardening tips",
        "targetDuration": 5,
        "contentStyle": "comedy",
        "optimizationLevel": "extreme",
        "keywords": {
            "recommended": {
                "primary": [{ "keyword": "gardening tips" }],
                "longTail": [{ "keyword": "gardening tips for small yards" }]
            }
        }
    }))
    .unwrap();

    let job = request.clone().into_job().unwrap();
    assert_eq!(job.content_style, ContentStyle::Other("comedy".to_string()));
    assert_eq!(job.optimization_level.intensity(), 2);
    assert_eq!(job.keywords.long_tail.len(), 1);

    let report = optimizer().optimize(request).unwrap();
    let structure = report
        .structure_recommendations
        .iter()
        .find(|rec| rec.kind == StructureKind::RecommendedStructure)
        .unwrap();
    let tutorial: Vec<String> = PHRASES
        .sections_for(&ContentStyle::Tutorial)
        .iter()
        .map(|section| section.to_string())
        .collect();
    assert_eq!(structure.sections, tutorial);
    assert_eq!(report.tips.len(), PHRASES.general_tips.len());
    assert!(!report
        .optimizations
        .iter()
        .any(|change| change.kind == ChangeKind::Structure));
}

#[test]
fn style_tips_are_added_for_supported_styles() {
    let mut request = OptimizeRequest::new(BASIC_SCRIPT, "gardening tips");
    request.content_style = Some(ContentStyle::Review);
    let report = optimizer().optimize(request).unwrap();
    assert_eq!(report.tips.len(), 8);

    let mut request = OptimizeRequest::new(BASIC_SCRIPT, "gardening tips");
    request.content_style = Some(ContentStyle::Vlog);
    let report = optimizer().optimize(request).unwrap();
    assert_eq!(report.tips.len(), 5);
}

#[test]
fn keyword_stuffing_warning_above_three_percent() {
    let script = "alpha one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen seventeen eighteen nineteen.";
    let report = optimizer()
        .optimize(OptimizeRequest::new(script, "alpha"))
        .unwrap();

    assert!((report.original_metrics.keyword_density - 5.0).abs() < 1e-9);
    assert!(report.has_warning(WarningKind::KeywordStuffing));
    assert!(!report.has_warning(WarningKind::Readability));
}

#[test]
fn long_sentences_trigger_readability_warning() {
    let script = format!("{}lorem.", "lorem ".repeat(29));
    let report = optimizer()
        .optimize(OptimizeRequest::new(script, "gardening"))
        .unwrap();

    assert!((report.original_metrics.average_sentence_length - 30.0).abs() < 1e-9);
    assert!(report.has_warning(WarningKind::Readability));
}

#[test]
fn duration_checks_against_target() {
    let report = optimizer()
        .optimize(OptimizeRequest::new(BASIC_SCRIPT, "gardening"))
        .unwrap();
    let first = &report.structure_recommendations[0];
    assert_eq!(first.kind, StructureKind::TooShort);
    assert_eq!(first.current_duration.as_deref(), Some("1 minutes"));
    assert_eq!(first.target_duration.as_deref(), Some("10 minutes"));

    let mut request = OptimizeRequest::new("word ".repeat(400), "gardening");
    request.target_duration = Some(1.0);
    let report = optimizer().optimize(request).unwrap();
    assert_eq!(report.structure_recommendations[0].kind, StructureKind::TooLong);

    let mut request = OptimizeRequest::new("word ".repeat(300), "gardening");
    request.target_duration = Some(2.0);
    let report = optimizer().optimize(request).unwrap();
    assert_eq!(report.structure_recommendations.len(), 1);
}

#[test]
fn keyword_insertions_target_primary_and_missing_secondary() {
    let script = "Soil matters. Good soil grows food.";
    let mut request = OptimizeRequest::new(script, "gardening");
    request.keywords = Some(KeywordData {
        recommended: Some(RecommendedKeywords {
            primary: entries(&["gardening"]),
            secondary: entries(&["soil", "compost", "mulch", "seeds"]),
            long_tail: None,
        }),
    });

    let report = optimizer().optimize(request).unwrap();
    let keywords: Vec<&str> = report
        .keyword_insertions
        .iter()
        .map(|insertion| insertion.keyword.as_str())
        .collect();
    assert_eq!(keywords, vec!["gardening", "compost", "mulch"]);
    assert_eq!(report.keyword_insertions[0].target_count, "3-5");
    assert_eq!(report.keyword_insertions[0].locations.len(), 3);
    assert_eq!(report.keyword_insertions[1].target_count, "1-2");
    assert_eq!(report.keyword_insertions[1].locations, vec!["body content".to_string()]);
}

#[test]
fn engagement_suggestions_cover_four_categories() {
    let report = optimizer()
        .optimize(OptimizeRequest::new(BASIC_SCRIPT, "gardening"))
        .unwrap();

    assert_eq!(report.engagement_suggestions.len(), 4);
    assert!(report
        .engagement_suggestions
        .iter()
        .all(|suggestion| suggestion.examples.len() == 2));
}

#[test]
fn report_serializes_with_wire_names() {
    let report = optimizer()
        .optimize(OptimizeRequest::new(BASIC_SCRIPT, "gardening tips"))
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["originalScript"], BASIC_SCRIPT);
    assert!(value["optimizedScript"].is_string());
    assert!(value["improvements"]["keywordDensityChange"].is_string());
    assert_eq!(value["optimizations"][0]["type"], "keyword_insertion");
    assert_eq!(value["optimizations"][0]["priority"], "high");
    assert_eq!(value["warnings"][0]["type"], "missing_cta");
    assert_eq!(value["structureRecommendations"][0]["type"], "too_short");
}

#[test]
fn capabilities_describe_required_inputs() {
    let doc = capabilities();

    assert_eq!(doc["name"], "optimize_script");
    let required = doc["inputSchema"]["required"].as_array().unwrap();
    assert!(required.contains(&json!("script")));
    assert!(required.contains(&json!("concept")));
    assert_eq!(doc["inputSchema"]["properties"]["targetDuration"]["default"], 10);
}
