use rand::Rng;

use crate::ContentStyle;

#[derive(Debug)]
pub struct PhraseBook {
    pub hooks: &'static [&'static str],
    pub transitions: &'static [&'static str],
    pub engagement: &'static [&'static str],
    pub retention: &'static [&'static str],
    pub closing_call_to_action: &'static str,
    pub general_tips: &'static [&'static str],
}

pub static PHRASES: PhraseBook = PhraseBook {
    hooks: &[
        "Want to know the secret to",
        "Here's what nobody tells you about",
        "Stop scrolling if you care about",
        "The truth about",
        "Everything changes once you understand",
    ],
    transitions: &[
        "Now here's where it gets interesting...",
        "But that's not all...",
        "Let me show you something even better...",
        "This next part is crucial...",
        "Here's the game-changer...",
    ],
    engagement: &[
        "Let me know in the comments below",
        "What's your experience with this?",
        "Have you tried this before?",
        "Drop a comment if you agree",
        "Which tip will you try first?",
    ],
    retention: &[
        "Stay until the end because",
        "Coming up, I'll show you",
        "In just a moment, you'll discover",
        "Before we get to that",
        "Make sure you watch until the end",
    ],
    closing_call_to_action: "If you found this video helpful, make sure to like and subscribe for more content like this. Drop a comment below and let me know what you'd like to see next!",
    general_tips: &[
        "Keep sentences short and conversational; you are writing for the ear, not the page.",
        "Deliver the main promise of the video within the first 15 seconds.",
        "Use pattern interrupts every 30-60 seconds to hold attention.",
        "Mention your primary keyword naturally in the first 30 seconds.",
        "End with a clear next step for the viewer.",
    ],
};

impl PhraseBook {
    pub fn sections_for(&self, style: &ContentStyle) -> &'static [&'static str] {
        match style {
            ContentStyle::Review => &[
                "Hook: the verdict teased up front",
                "Overview of the product",
                "Key features",
                "Pros and cons",
                "Comparison with alternatives",
                "Final verdict and recommendation",
            ],
            ContentStyle::Educational => &[
                "Hook: a surprising fact or question",
                "Context and background",
                "Core concept explained",
                "Examples and applications",
                "Common misconceptions",
                "Summary and key takeaways",
            ],
            ContentStyle::Entertainment => &[
                "Cold open",
                "Setup",
                "Escalation",
                "Climax",
                "Payoff and outro",
            ],
            ContentStyle::Vlog => &[
                "Hook: a preview of the best moment",
                "Intro and context for the day",
                "Main story beats",
                "Reflection",
                "Outro and teaser for the next video",
            ],
            ContentStyle::Tutorial | ContentStyle::Other(_) => &[
                "Hook: the problem you will solve",
                "Introduction: what viewers will learn",
                "Step-by-step walkthrough",
                "Common mistakes to avoid",
                "Recap and call to action",
            ],
        }
    }

    pub fn style_tips(&self, style: &ContentStyle) -> &'static [&'static str] {
        match style {
            ContentStyle::Tutorial => &[
                "Number your steps out loud so viewers can follow along.",
                "Show the finished result early to prove the method works.",
                "Call out the mistakes beginners usually make.",
            ],
            ContentStyle::Review => &[
                "State who the product is for before listing features.",
                "Back up every claim with something you actually tested.",
                "Give a clear buy or skip verdict.",
            ],
            ContentStyle::Educational => &[
                "Tie each concept to an everyday example.",
                "Recap key points before moving to the next idea.",
                "Use visuals to explain anything abstract.",
            ],
            _ => &[],
        }
    }
}

pub trait HookSelector: Send + Sync {
    /// Returns an index into `options`; out-of-range values wrap around.
    fn select(&self, options: &[&str]) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomHookSelector;

impl HookSelector for RandomHookSelector {
    fn select(&self, options: &[&str]) -> usize {
        if options.is_empty() {
            return 0;
        }
        rand::thread_rng().gen_range(0..options.len())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedHookSelector(pub usize);

impl HookSelector for FixedHookSelector {
    fn select(&self, _options: &[&str]) -> usize {
        self.0
    }
}

pub(crate) fn pick<'a>(selector: &dyn HookSelector, options: &[&'a str]) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let index = selector.select(options) % options.len();
    options.get(index).copied()
}
