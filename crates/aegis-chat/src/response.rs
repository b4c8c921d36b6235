//! Response composition.
//!
//! Builds the final reply strings from knowledge-base responses, sentiment
//! prefixes, and contextual repeat prefixes, without any NLU.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::Sentiment;

// =============================================================================
// Phrase tables
// =============================================================================

/// Opening phrase per non-neutral sentiment category.
fn sentiment_prefix(sentiment: Sentiment) -> Option<&'static str> {
    match sentiment {
        Sentiment::Worried => Some("No need to panic, let's sort this out."),
        Sentiment::Positive => Some("Glad to hear it!"),
        Sentiment::Negative => Some("Sorry you're having a rough time."),
        Sentiment::Curious => Some("Great question."),
        Sentiment::Neutral => None,
    }
}

/// Contextual prefixes for repeat topics, tiered by discussion count.
/// Selected pseudo-randomly among same-tier variants.
pub(crate) static TIER_TWICE: &[&str] = &[
    "We've touched on this before.",
    "Back to this one, I see.",
];
pub(crate) static TIER_THRICE: &[&str] = &[
    "You keep coming back to this topic!",
    "Third time we're discussing this, it must matter to you.",
];
pub(crate) static TIER_OFTEN: &[&str] = &[
    "You're becoming a regular expert on this one.",
    "At this point you could give this talk yourself.",
];

// =============================================================================
// ResponseComposer
// =============================================================================

/// Composes display-ready reply lines.
#[derive(Debug, Default)]
pub struct ResponseComposer;

impl ResponseComposer {
    pub fn new() -> Self {
        Self
    }

    /// Contextual prefix for a topic discussed `count` times (including the
    /// current turn). `None` below the first tier.
    pub fn contextual_prefix<R: Rng>(&self, count: u32, rng: &mut R) -> Option<&'static str> {
        let tier = match count {
            0 | 1 => return None,
            2 => TIER_TWICE,
            3 => TIER_THRICE,
            _ => TIER_OFTEN,
        };
        tier.choose(rng).copied()
    }

    /// Compose one reply line: sentiment prefix, then contextual prefix,
    /// then the base response.
    pub fn compose(
        &self,
        sentiment: Sentiment,
        contextual: Option<&str>,
        base: &str,
    ) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if let Some(prefix) = sentiment_prefix(sentiment) {
            parts.push(prefix);
        }
        if let Some(prefix) = contextual {
            parts.push(prefix);
        }
        parts.push(base);
        parts.join(" ")
    }

    /// The "no topic matched" reply, still carrying the sentiment prefix.
    pub fn fallback(&self, sentiment: Sentiment) -> String {
        self.compose(
            sentiment,
            None,
            "I'm not sure about that one. Type 'help' to see the topics I know.",
        )
    }

    /// Prompt shown for empty or whitespace-only input.
    pub fn rephrase_prompt(&self) -> String {
        "I didn't catch that. Could you rephrase?".to_string()
    }

    /// Session-opening greeting; personalized for returning users.
    pub fn greeting(&self, name: &str, returning: bool, interest: Option<&str>) -> String {
        if !returning {
            return format!(
                "Nice to meet you, {name}! Ask me anything about staying safe online, \
                 or type 'help' to see the topics I know."
            );
        }
        match interest {
            Some(topic) => format!(
                "Welcome back, {name}! Last time you were interested in {topic}. \
                 Shall we pick up there, or type 'help' for the full list?"
            ),
            None => format!(
                "Welcome back, {name}! Type 'help' to see the topics I know."
            ),
        }
    }

    /// Reply for the name-recall command.
    pub fn name_recall(&self, name: &str) -> String {
        format!("You're {name}, of course. I never forget a name mid-session.")
    }

    /// Farewell printed on exit.
    pub fn farewell(&self, name: &str) -> String {
        format!("Stay safe out there, {name}. Bye!")
    }

    /// Header plus bulleted topic list for the help command.
    pub fn help(&self, topics: &[&str]) -> String {
        let mut out = String::from("Here's what I can talk about:\n");
        for topic in topics {
            out.push_str("  - ");
            out.push_str(topic);
            out.push('\n');
        }
        out.push_str("Say a topic name, or 'exit' when you're done.");
        out
    }

    /// Rendered stats listing, or a nudge when nothing was discussed yet.
    pub fn stats(&self, top: &[(String, u32)]) -> String {
        if top.is_empty() {
            return "We haven't discussed anything yet. Ask me about a topic first!".to_string();
        }
        let mut out = String::from("Your most discussed topics so far:\n");
        for (keyword, count) in top {
            out.push_str(&format!("  {keyword}: {count}\n"));
        }
        out.trim_end().to_string()
    }

    /// Rendered favorites listing.
    pub fn favorites(&self, favorites: &[String]) -> String {
        if favorites.is_empty() {
            return "No favorites saved yet. Use 'favorites add <text>' to keep one.".to_string();
        }
        let mut out = String::from("Your favorites:\n");
        for (i, favorite) in favorites.iter().enumerate() {
            out.push_str(&format!("  {}. {favorite}\n", i + 1));
        }
        out.trim_end().to_string()
    }

    pub fn favorite_saved(&self) -> String {
        "Saved. 'favorites' shows everything you've kept.".to_string()
    }

    pub fn favorite_usage(&self) -> String {
        "Tell me what to save: 'favorites add <text>'.".to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
