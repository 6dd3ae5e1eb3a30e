use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordEntry {
    #[serde(default)]
    pub keyword: String,
}

impl KeywordEntry {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendedKeywords {
    pub primary: Option<Vec<KeywordEntry>>,
    pub secondary: Option<Vec<KeywordEntry>>,
    pub long_tail: Option<Vec<KeywordEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordData {
    pub recommended: Option<RecommendedKeywords>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSet {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub long_tail: Vec<String>,
}

impl KeywordSet {
    // The concept only stands in when no primary list was supplied at all.
    pub fn derive(data: Option<&KeywordData>, concept: &str) -> Self {
        let recommended = data.and_then(|data| data.recommended.as_ref());

        let primary = match recommended.and_then(|r| r.primary.as_deref()) {
            Some(entries) => collect_keywords(entries),
            None => collect_keywords(&[KeywordEntry::new(concept)]),
        };
        let secondary = recommended
            .and_then(|r| r.secondary.as_deref())
            .map(collect_keywords)
            .unwrap_or_default();
        let long_tail = recommended
            .and_then(|r| r.long_tail.as_deref())
            .map(collect_keywords)
            .unwrap_or_default();

        Self {
            primary,
            secondary,
            long_tail,
        }
    }

    pub fn primary_keyword(&self) -> Option<&str> {
        self.primary.first().map(String::as_str)
    }

    pub fn flattened(&self) -> Vec<String> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .chain(self.long_tail.iter())
            .cloned()
            .collect()
    }
}

fn collect_keywords(entries: &[KeywordEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.keyword.trim())
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}
