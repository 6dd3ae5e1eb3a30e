use script_optimizer::config::MetricsConfig;
use script_optimizer::metrics::{
    count_keyword, count_syllables, readability, split_paragraphs, split_sentences,
    split_sentences_keeping_punctuation, split_words,
};
use script_optimizer::{analyze_script, ReadabilityLevel};

fn keywords(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn keyword_density_counts_every_match() {
    let metrics = analyze_script("x x x x", &keywords(&["x"]), &MetricsConfig::default());

    assert_eq!(metrics.word_count, 4);
    assert_eq!(metrics.total_keyword_mentions, 4);
    assert!((metrics.keyword_density - 100.0).abs() < 1e-9);
}

#[test]
fn keyword_density_rounds_to_two_decimals() {
    let metrics = analyze_script(
        "seo is fun and easy",
        &keywords(&["seo"]),
        &MetricsConfig::default(),
    );

    assert!((metrics.keyword_density - 20.0).abs() < 1e-9);

    let metrics = analyze_script("seo a b", &keywords(&["seo"]), &MetricsConfig::default());
    assert!((metrics.keyword_density - 33.33).abs() < 1e-9);
}

#[test]
fn unmatched_keywords_are_left_out_of_occurrences() {
    let metrics = analyze_script("x x", &keywords(&["x", "y"]), &MetricsConfig::default());

    assert_eq!(metrics.keyword_occurrences.len(), 1);
    assert_eq!(metrics.keyword_occurrences.get("x"), Some(&2));
    assert!(!metrics.keyword_occurrences.contains_key("y"));
    assert_eq!(metrics.unique_keywords_found, 1);
}

#[test]
fn keyword_match_is_case_insensitive_and_literal() {
    assert_eq!(count_keyword("I love c++ and C++.", "c++"), 2);
    assert_eq!(count_keyword("Gardening Tips and gardening tips", "gardening tips"), 2);
    assert_eq!(count_keyword("a.b axb", "a.b"), 1);
    assert_eq!(count_keyword("anything", ""), 0);
}

#[test]
fn splits_words_sentences_and_paragraphs() {
    let script = "Hello world. How are you?\n\nGreat! Thanks.";

    assert_eq!(split_words(script).len(), 7);
    assert_eq!(split_sentences(script).len(), 4);
    assert_eq!(split_paragraphs(script).len(), 2);

    let metrics = analyze_script(script, &[], &MetricsConfig::default());
    assert_eq!(metrics.word_count, 7);
    assert_eq!(metrics.sentence_count, 4);
    assert_eq!(metrics.paragraph_count, 2);
    assert!((metrics.average_sentence_length - 1.75).abs() < 1e-9);
    assert_eq!(metrics.estimated_duration_minutes, 1);
    assert!(metrics.engagement.has_question);
    assert_eq!(metrics.engagement.question_count, 1);
    assert!(metrics.engagement.has_hook);
    assert!(!metrics.engagement.has_call_to_action);
}

#[test]
fn sentence_split_keeps_punctuation() {
    let parts = split_sentences_keeping_punctuation("One. Two!  Three? Four");
    assert_eq!(parts, vec!["One.", "Two!", "Three?", "Four"]);
}

#[test]
fn call_to_action_includes_share() {
    let metrics = analyze_script("Please share this.", &[], &MetricsConfig::default());
    assert!(metrics.engagement.has_call_to_action);
}

#[test]
fn long_opening_sentence_is_not_a_hook() {
    let script = format!("{}end. Short.", "word ".repeat(30));
    let metrics = analyze_script(&script, &[], &MetricsConfig::default());
    assert!(!metrics.engagement.has_hook);
}

#[test]
fn hook_length_counts_leading_whitespace() {
    let script = format!("  {}word. Short.", "word ".repeat(19));
    let metrics = analyze_script(&script, &[], &MetricsConfig::default());
    assert!(!metrics.engagement.has_hook);
}

#[test]
fn duration_uses_speaking_rate() {
    let script = "word ".repeat(151);
    let metrics = analyze_script(&script, &[], &MetricsConfig::default());
    assert_eq!(metrics.estimated_duration_minutes, 2);

    let config = MetricsConfig {
        words_per_minute: 200,
        ..MetricsConfig::default()
    };
    let metrics = analyze_script(&script, &[], &config);
    assert_eq!(metrics.estimated_duration_minutes, 1);
}

#[test]
fn syllable_heuristic() {
    assert_eq!(count_syllables("cat"), 1);
    assert_eq!(count_syllables("banana"), 3);
    assert_eq!(count_syllables("simple"), 2);
    assert_eq!(count_syllables("make"), 1);
    assert_eq!(count_syllables("Banana!"), 3);
    assert_eq!(count_syllables("1234"), 1);
}

#[test]
fn readability_levels_are_inclusive_at_lower_bound() {
    assert_eq!(ReadabilityLevel::from_score(80), ReadabilityLevel::VeryEasy);
    assert_eq!(ReadabilityLevel::from_score(79), ReadabilityLevel::Easy);
    assert_eq!(ReadabilityLevel::from_score(60), ReadabilityLevel::Easy);
    assert_eq!(ReadabilityLevel::from_score(59), ReadabilityLevel::Moderate);
    assert_eq!(ReadabilityLevel::from_score(40), ReadabilityLevel::Moderate);
    assert_eq!(ReadabilityLevel::from_score(20), ReadabilityLevel::Difficult);
    assert_eq!(ReadabilityLevel::from_score(19), ReadabilityLevel::VeryDifficult);
}

#[test]
fn readability_score_for_short_words() {
    let words = split_words("The cat sat.");
    let result = readability(&words, 1);
    // 206.835 - 1.015 * 3 - 84.6 * 1
    assert_eq!(result.score, 119);
    assert_eq!(result.level, ReadabilityLevel::VeryEasy);
}

#[test]
fn empty_script_has_defined_zero_metrics() {
    let metrics = analyze_script("   \n\n  ", &keywords(&["x"]), &MetricsConfig::default());

    assert_eq!(metrics.word_count, 0);
    assert_eq!(metrics.sentence_count, 0);
    assert_eq!(metrics.keyword_density, 0.0);
    assert_eq!(metrics.average_sentence_length, 0.0);
    assert_eq!(metrics.estimated_duration_minutes, 0);
    assert_eq!(metrics.readability.score, 0);
    assert_eq!(metrics.readability.level, ReadabilityLevel::VeryDifficult);
    assert!(!metrics.engagement.has_hook);
}

#[test]
fn metrics_are_idempotent() {
    let script = "Gardening tips for you. Do you like soil?\n\nSubscribe for more.";
    let keywords = keywords(&["gardening tips", "soil"]);
    let config = MetricsConfig::default();

    let first = analyze_script(script, &keywords, &config);
    let second = analyze_script(script, &keywords, &config);
    assert_eq!(first, second);
}

#[test]
fn metrics_serialize_with_wire_names() {
    let metrics = analyze_script("The cat sat.", &keywords(&["cat"]), &MetricsConfig::default());
    let value = serde_json::to_value(&metrics).unwrap();

    assert_eq!(value["wordCount"], 3);
    assert_eq!(value["estimatedDuration"], "1 minutes");
    assert_eq!(value["keywordOccurrences"]["cat"], 1);
    assert_eq!(value["engagement"]["hasQuestion"], false);
    assert_eq!(value["readability"]["level"], "very easy");
}
