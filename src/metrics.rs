use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::ops::Range;

use crate::config::MetricsConfig;
use crate::{format_minutes, round2};

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\r?\n){2,}").unwrap());

static SENTENCE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

static CALL_TO_ACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)subscribe|like|comment|share").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadabilityLevel {
    #[serde(rename = "very easy")]
    VeryEasy,
    #[serde(rename = "easy")]
    Easy,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "difficult")]
    Difficult,
    #[serde(rename = "very difficult")]
    VeryDifficult,
}

impl ReadabilityLevel {
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            ReadabilityLevel::VeryEasy
        } else if score >= 60 {
            ReadabilityLevel::Easy
        } else if score >= 40 {
            ReadabilityLevel::Moderate
        } else if score >= 20 {
            ReadabilityLevel::Difficult
        } else {
            ReadabilityLevel::VeryDifficult
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReadabilityLevel::VeryEasy => "very easy",
            ReadabilityLevel::Easy => "easy",
            ReadabilityLevel::Moderate => "moderate",
            ReadabilityLevel::Difficult => "difficult",
            ReadabilityLevel::VeryDifficult => "very difficult",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Readability {
    pub score: i64,
    pub level: ReadabilityLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementFlags {
    pub has_question: bool,
    pub has_call_to_action: bool,
    pub has_hook: bool,
    pub question_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub average_sentence_length: f64,
    #[serde(rename = "estimatedDuration", serialize_with = "serialize_minutes")]
    pub estimated_duration_minutes: u32,
    pub keyword_occurrences: BTreeMap<String, usize>,
    pub total_keyword_mentions: usize,
    pub unique_keywords_found: usize,
    pub keyword_density: f64,
    pub engagement: EngagementFlags,
    pub readability: Readability,
}

fn serialize_minutes<S: Serializer>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_minutes(*minutes as f64))
}

pub fn analyze_script(script: &str, keywords: &[String], config: &MetricsConfig) -> ScriptMetrics {
    let words = split_words(script);
    let sentences = split_sentences(script);
    let paragraphs = split_paragraphs(script);

    let word_count = words.len();
    let sentence_count = sentences.len();

    // Only keywords that actually occur enter the map; repeated keywords collapse to one entry.
    let mut keyword_occurrences = BTreeMap::new();
    for keyword in keywords {
        let count = count_keyword(script, keyword);
        if count > 0 {
            keyword_occurrences.insert(keyword.clone(), count);
        }
    }
    let total_keyword_mentions: usize = keyword_occurrences.values().sum();
    let unique_keywords_found = keyword_occurrences.len();

    let keyword_density = if word_count == 0 {
        0.0
    } else {
        round2(total_keyword_mentions as f64 / word_count as f64 * 100.0)
    };

    let average_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        round2(word_count as f64 / sentence_count as f64)
    };

    let words_per_minute = config.words_per_minute.max(1) as usize;
    let estimated_duration_minutes = word_count.div_ceil(words_per_minute) as u32;

    let question_count = script.matches('?').count();
    let has_hook = sentences
        .first()
        .map(|sentence| sentence.chars().count() < config.hook_max_chars)
        .unwrap_or(false);

    ScriptMetrics {
        word_count,
        sentence_count,
        paragraph_count: paragraphs.len(),
        average_sentence_length,
        estimated_duration_minutes,
        keyword_occurrences,
        total_keyword_mentions,
        unique_keywords_found,
        keyword_density,
        engagement: EngagementFlags {
            has_question: question_count > 0,
            has_call_to_action: CALL_TO_ACTION_RE.is_match(script),
            has_hook,
            question_count,
        },
        readability: readability(&words, sentence_count),
    }
}

pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_SPLIT_RE
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

// Punctuation stays with its sentence; blank segments are kept.
pub fn split_sentences_keeping_punctuation(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY_RE.find_iter(text) {
        parts.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    parts.push(&text[start..]);
    parts
}

pub(crate) fn second_sentence_offset(text: &str) -> Option<usize> {
    SENTENCE_BOUNDARY_RE.find(text).map(|boundary| boundary.end())
}

/// Byte range of the first non-blank paragraph, leading whitespace excluded.
pub(crate) fn first_paragraph_range(text: &str) -> Range<usize> {
    let mut start = 0;
    for separator in PARAGRAPH_SPLIT_RE.find_iter(text) {
        if !text[start..separator.start()].trim().is_empty() {
            return skip_leading_whitespace(text, start)..separator.start();
        }
        start = separator.end();
    }
    skip_leading_whitespace(text, start)..text.len()
}

fn skip_leading_whitespace(text: &str, start: usize) -> usize {
    let rest = &text[start..];
    start + (rest.len() - rest.trim_start().len())
}

pub fn count_keyword(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .map(|pattern| pattern.find_iter(text).count())
        .unwrap_or(0)
}

pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(&needle.to_lowercase())
}

pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase())
        .collect();
    if letters.len() <= 3 {
        return 1;
    }

    let mut count = 0usize;
    let mut previous_vowel = false;
    for &ch in &letters {
        let vowel = is_vowel(ch);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    if has_silent_e(&letters) {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

// Consonant + "le" keeps its own syllable ("simple", "table").
fn has_silent_e(letters: &[char]) -> bool {
    match letters {
        [.., before, 'l', 'e'] if !is_vowel(*before) => false,
        [.., 'e'] => true,
        _ => false,
    }
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

// Empty text scores 0.
pub fn readability(words: &[&str], sentence_count: usize) -> Readability {
    if words.is_empty() || sentence_count == 0 {
        return Readability {
            score: 0,
            level: ReadabilityLevel::from_score(0),
        };
    }

    let avg_words_per_sentence = words.len() as f64 / sentence_count as f64;
    let total_syllables: usize = words.iter().map(|word| count_syllables(word)).sum();
    let avg_syllables = total_syllables as f64 / words.len() as f64;

    let score = (206.835 - 1.015 * avg_words_per_sentence - 84.6 * avg_syllables).round() as i64;
    Readability {
        score,
        level: ReadabilityLevel::from_score(score),
    }
}
