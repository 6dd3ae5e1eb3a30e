use tracing::debug;

use crate::config::RewriterConfig;
use crate::metrics::{
    contains_ignore_case, first_paragraph_range, second_sentence_offset,
    split_sentences_keeping_punctuation,
};
use crate::optimizer::planner::{OptimizationResult, CTA_RE};
use crate::phrases::{pick, HookSelector, PhraseBook, RandomHookSelector, PHRASES};
use crate::ContentStyle;

pub struct ScriptRewriter {
    config: RewriterConfig,
    phrases: &'static PhraseBook,
    selector: Box<dyn HookSelector>,
}

impl ScriptRewriter {
    pub fn new(config: RewriterConfig) -> Self {
        Self {
            config,
            phrases: &PHRASES,
            selector: Box::new(RandomHookSelector),
        }
    }

    pub fn with_selector(mut self, selector: impl HookSelector + 'static) -> Self {
        self.selector = Box::new(selector);
        self
    }

    // Each step re-checks its own trigger against the output of the previous step.
    pub fn rewrite(
        &self,
        script: &str,
        plan: &OptimizationResult,
        primary: Option<&str>,
        style: &ContentStyle,
    ) -> String {
        let mut current = script.to_string();
        let mut applied = Vec::new();

        if let Some(next) = primary.and_then(|keyword| self.insert_hook(&current, keyword)) {
            current = next;
            applied.push("hook");
        }
        if let Some(next) = primary.and_then(|keyword| inject_opening_keyword(&current, keyword)) {
            current = next;
            applied.push("keyword");
        }
        if let Some(next) = inject_question(&current, primary) {
            current = next;
            applied.push("question");
        }
        if let Some(next) = self.append_call_to_action(&current) {
            current = next;
            applied.push("cta");
        }

        debug!(
            style = style.label(),
            planned = plan.changes.len(),
            applied = ?applied,
            "script rewritten"
        );
        current
    }

    pub fn insert_hook(&self, script: &str, primary_keyword: &str) -> Option<String> {
        let sentences = split_sentences_keeping_punctuation(script);
        let first = sentences.first()?;
        if first.chars().count() <= self.config.hook_trigger_chars {
            return None;
        }
        let phrase = pick(&*self.selector, self.phrases.hooks)?;
        Some(format!("{} {}. {}", phrase, primary_keyword, script))
    }

    pub fn append_call_to_action(&self, script: &str) -> Option<String> {
        if CTA_RE.is_match(script) {
            return None;
        }
        Some(format!("{}\n\n{}", script, self.phrases.closing_call_to_action))
    }
}

pub fn inject_opening_keyword(script: &str, primary_keyword: &str) -> Option<String> {
    let range = first_paragraph_range(script);
    let paragraph = &script[range.clone()];
    if contains_ignore_case(paragraph, primary_keyword) {
        return None;
    }
    if split_sentences_keeping_punctuation(paragraph).len() < 2 {
        return None;
    }

    let second_start = second_sentence_offset(paragraph)?;
    let second = &paragraph[second_start..];
    let mut chars = second.chars();
    let first_char = chars.next()?;

    let mut rewritten = String::with_capacity(script.len() + primary_keyword.len() + 24);
    rewritten.push_str(&script[..range.start]);
    rewritten.push_str(&paragraph[..second_start]);
    rewritten.push_str("When it comes to ");
    rewritten.push_str(primary_keyword);
    rewritten.push_str(", ");
    rewritten.extend(first_char.to_lowercase());
    rewritten.push_str(chars.as_str());
    rewritten.push_str(&script[range.end..]);
    Some(rewritten)
}

pub fn inject_question(script: &str, primary_keyword: Option<&str>) -> Option<String> {
    if script.contains('?') {
        return None;
    }

    let midpoint_chars = script.chars().count() / 2;
    let midpoint = script
        .char_indices()
        .nth(midpoint_chars)
        .map(|(index, _)| index)
        .unwrap_or(script.len());
    let period = midpoint + script[midpoint..].find('.')?;
    let insert_at = period + 1;

    let topic = primary_keyword.unwrap_or("this");
    let prompt = format!(
        "\n\nWhat do you think about {}? Let me know in the comments.\n\n",
        topic
    );

    let mut rewritten = String::with_capacity(script.len() + prompt.len());
    rewritten.push_str(&script[..insert_at]);
    rewritten.push_str(&prompt);
    rewritten.push_str(&script[insert_at..]);
    Some(rewritten)
}
