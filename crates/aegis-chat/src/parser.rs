//! Rule-based input parser.
//!
//! Detects console commands, tags sentiment, extracts keywords, and spots
//! explicit interest expressions in raw user input.

use regex::Regex;
use std::sync::LazyLock;

use aegis_knowledge::KnowledgeBase;

use crate::types::{Command, ParsedInput, Sentiment};

// =============================================================================
// Static pattern tables
// =============================================================================

/// Exact-match exit synonyms.
static EXIT_WORDS: &[&str] = &["exit", "quit", "bye", "goodbye"];

/// Exact-match help synonyms.
static HELP_WORDS: &[&str] = &["help", "options", "topics"];

/// Exact-match stats synonyms.
static STATS_WORDS: &[&str] = &["stats", "my stats"];

/// Name-recall phrases (substring match).
static NAME_RECALL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bwhat(?:'s| is) my name\b",
        r"(?i)\bwho am i\b",
        r"(?i)\bdo you know my name\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid name-recall regex"))
    .collect()
});

static PURPOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:purpose|what (?:can|do) you do)\b").expect("invalid purpose regex")
});

static HOW_ARE_YOU_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhow are you\b").expect("invalid small-talk regex"));

/// The phrase that marks an explicit interest expression.
const INTEREST_PHRASE: &str = "interested in";

/// Sentiment keyword sets, checked in declaration order; first match wins.
static SENTIMENT_SETS: &[(Sentiment, &[&str])] = &[
    (
        Sentiment::Worried,
        &["worried", "scared", "afraid", "nervous", "anxious", "concerned", "panicking"],
    ),
    (
        Sentiment::Positive,
        &["great", "good", "awesome", "thanks", "thank", "cool", "nice", "love"],
    ),
    (
        Sentiment::Negative,
        &["bad", "terrible", "awful", "hate", "angry", "annoyed", "frustrated"],
    ),
    (
        Sentiment::Curious,
        &["curious", "wonder", "wondering", "intrigued", "interested"],
    ),
];

// =============================================================================
// Command detection
// =============================================================================

/// Detect a console command, checked in fixed priority order: exit, help,
/// name recall, favorites, stats, small talk. Returns `None` when the input
/// should take the natural-language path.
pub fn detect_command(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if EXIT_WORDS.contains(&lower.as_str()) {
        return Some(Command::Exit);
    }
    if HELP_WORDS.contains(&lower.as_str()) {
        return Some(Command::Help);
    }
    if NAME_RECALL_PATTERNS.iter().any(|re| re.is_match(trimmed)) {
        return Some(Command::NameRecall);
    }
    const FAVORITE_ADD: &str = "favorites add";
    if lower.starts_with(FAVORITE_ADD) {
        let payload = trimmed.get(FAVORITE_ADD.len()..).unwrap_or("").trim();
        return Some(Command::FavoriteAdd(payload.to_string()));
    }
    if lower == "favorites" {
        return Some(Command::FavoriteList);
    }
    if STATS_WORDS.contains(&lower.as_str()) {
        return Some(Command::Stats);
    }
    if HOW_ARE_YOU_RE.is_match(trimmed) {
        return Some(Command::HowAreYou);
    }
    if PURPOSE_RE.is_match(trimmed) {
        return Some(Command::Purpose);
    }

    None
}

// =============================================================================
// Sentiment tagging
// =============================================================================

/// Tag the input with a sentiment category.
///
/// Scans lowercased tokens for membership in the fixed keyword sets, in
/// declaration order. Independent of topic detection: an input can carry a
/// sentiment even if it matches no topic.
pub fn detect_sentiment(input: &str) -> Sentiment {
    let tokens: Vec<String> = tokenize(input);
    for (sentiment, words) in SENTIMENT_SETS {
        if tokens.iter().any(|t| words.contains(&t.as_str())) {
            return *sentiment;
        }
    }
    Sentiment::Neutral
}

// =============================================================================
// Keyword extraction
// =============================================================================

/// Extract meaningful keywords from the input.
///
/// Splits on whitespace and punctuation, lowercases, and discards tokens of
/// length <= 2 or present in the stop-word set. Duplicates are preserved in
/// input order; callers deduplicate where needed.
pub fn extract_keywords(input: &str, kb: &KnowledgeBase) -> Vec<String> {
    tokenize(input)
        .into_iter()
        .filter(|token| token.len() > 2 && !kb.is_stop_word(token))
        .collect()
}

fn tokenize(input: &str) -> Vec<String> {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

// =============================================================================
// Interest detection
// =============================================================================

/// Detect an explicit "interested in <topic>" expression.
///
/// Returns the first known topic appearing as a substring of the input,
/// provided the interest phrase is present.
pub fn detect_interest(input: &str, kb: &KnowledgeBase) -> Option<String> {
    if !input.to_lowercase().contains(INTEREST_PHRASE) {
        return None;
    }
    kb.find_topic(input).map(|topic| topic.to_string())
}

// =============================================================================
// Full parse
// =============================================================================

/// Run the whole natural-language parse: sentiment, keywords, interest.
pub fn parse(input: &str, kb: &KnowledgeBase) -> ParsedInput {
    ParsedInput {
        sentiment: detect_sentiment(input),
        keywords: extract_keywords(input, kb),
        interest: detect_interest(input, kb),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new()
    }

    // ---- Command detection: exit ----

    #[test]
    fn test_command_exit_synonyms() {
        for word in ["exit", "quit", "bye", "goodbye"] {
            assert_eq!(detect_command(word), Some(Command::Exit), "word: {word}");
        }
    }

    #[test]
    fn test_command_exit_case_insensitive_and_trimmed() {
        assert_eq!(detect_command("  EXIT  "), Some(Command::Exit));
        assert_eq!(detect_command("Bye"), Some(Command::Exit));
    }

    #[test]
    fn test_command_exit_requires_exact_match() {
        assert_eq!(detect_command("exit scam"), None);
        assert_eq!(detect_command("goodbye cruel world"), None);
    }

    // ---- Command detection: help ----

    #[test]
    fn test_command_help_synonyms() {
        for word in ["help", "options", "topics", "HELP"] {
            assert_eq!(detect_command(word), Some(Command::Help), "word: {word}");
        }
    }

    // ---- Command detection: name recall ----

    #[test]
    fn test_command_name_recall_phrases() {
        assert_eq!(detect_command("what is my name"), Some(Command::NameRecall));
        assert_eq!(detect_command("what's my name?"), Some(Command::NameRecall));
        assert_eq!(
            detect_command("hey, who am I again?"),
            Some(Command::NameRecall)
        );
        assert_eq!(
            detect_command("do you know my name"),
            Some(Command::NameRecall)
        );
    }

    // ---- Command detection: favorites ----

    #[test]
    fn test_command_favorites_list() {
        assert_eq!(detect_command("favorites"), Some(Command::FavoriteList));
        assert_eq!(detect_command("FAVORITES"), Some(Command::FavoriteList));
    }

    #[test]
    fn test_command_favorites_add_with_text() {
        assert_eq!(
            detect_command("favorites add always verify the sender"),
            Some(Command::FavoriteAdd("always verify the sender".to_string()))
        );
    }

    #[test]
    fn test_command_favorites_add_preserves_original_case() {
        assert_eq!(
            detect_command("Favorites add Use MFA everywhere"),
            Some(Command::FavoriteAdd("Use MFA everywhere".to_string()))
        );
    }

    #[test]
    fn test_command_favorites_add_empty_payload() {
        assert_eq!(
            detect_command("favorites add"),
            Some(Command::FavoriteAdd(String::new()))
        );
    }

    // ---- Command detection: stats / small talk ----

    #[test]
    fn test_command_stats() {
        assert_eq!(detect_command("stats"), Some(Command::Stats));
        assert_eq!(detect_command("my stats"), Some(Command::Stats));
    }

    #[test]
    fn test_command_how_are_you() {
        assert_eq!(detect_command("how are you today?"), Some(Command::HowAreYou));
    }

    #[test]
    fn test_command_purpose() {
        assert_eq!(detect_command("what is your purpose"), Some(Command::Purpose));
        assert_eq!(detect_command("what can you do"), Some(Command::Purpose));
    }

    // ---- Command detection: fallthrough ----

    #[test]
    fn test_command_none_for_topic_questions() {
        assert_eq!(detect_command("tell me about phishing"), None);
        assert_eq!(detect_command(""), None);
    }

    // ---- Sentiment ----

    #[test]
    fn test_sentiment_categories() {
        assert_eq!(detect_sentiment("I'm worried about hackers"), Sentiment::Worried);
        assert_eq!(detect_sentiment("thanks, that was great"), Sentiment::Positive);
        assert_eq!(detect_sentiment("this is terrible news"), Sentiment::Negative);
        assert_eq!(detect_sentiment("I'm curious about vpns"), Sentiment::Curious);
        assert_eq!(detect_sentiment("tell me about firewalls"), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_declaration_order_wins() {
        // "worried" (first category) beats "great" (second category).
        assert_eq!(
            detect_sentiment("worried but the talk was great"),
            Sentiment::Worried
        );
    }

    #[test]
    fn test_sentiment_matches_whole_tokens_only() {
        // "goodness" must not match "good".
        assert_eq!(detect_sentiment("my goodness"), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_case_insensitive() {
        assert_eq!(detect_sentiment("I am SCARED"), Sentiment::Worried);
    }

    #[test]
    fn test_sentiment_independent_of_topics() {
        // No known topic in sight, sentiment still detected.
        assert_eq!(detect_sentiment("I feel anxious today"), Sentiment::Worried);
    }

    // ---- Keyword extraction ----

    #[test]
    fn test_extract_keywords_filters_stop_words_and_short_tokens() {
        let kb = kb();
        let keywords = extract_keywords("tell me about the password", &kb);
        assert_eq!(keywords, ["password"]);
    }

    #[test]
    fn test_extract_keywords_all_stop_words_yields_empty() {
        let kb = kb();
        assert!(extract_keywords("what is the of in to", &kb).is_empty());
        assert!(extract_keywords("go do it", &kb).is_empty());
        assert!(extract_keywords("", &kb).is_empty());
    }

    #[test]
    fn test_extract_keywords_splits_on_punctuation() {
        let kb = kb();
        let keywords = extract_keywords("phishing, malware; ransomware!", &kb);
        assert_eq!(keywords, ["phishing", "malware", "ransomware"]);
    }

    #[test]
    fn test_extract_keywords_preserves_order_and_duplicates() {
        let kb = kb();
        let keywords = extract_keywords("password phishing password", &kb);
        assert_eq!(keywords, ["password", "phishing", "password"]);
    }

    #[test]
    fn test_extract_keywords_lowercases() {
        let kb = kb();
        assert_eq!(extract_keywords("PHISHING", &kb), ["phishing"]);
    }

    // ---- Interest detection ----

    #[test]
    fn test_interest_detected_with_known_topic() {
        let kb = kb();
        assert_eq!(
            detect_interest("I'm interested in phishing", &kb),
            Some("phishing".to_string())
        );
    }

    #[test]
    fn test_interest_requires_phrase() {
        let kb = kb();
        assert_eq!(detect_interest("phishing sounds fascinating", &kb), None);
    }

    #[test]
    fn test_interest_requires_known_topic() {
        let kb = kb();
        assert_eq!(detect_interest("I'm interested in knitting", &kb), None);
    }

    #[test]
    fn test_interest_case_insensitive() {
        let kb = kb();
        assert_eq!(
            detect_interest("I am INTERESTED IN Ransomware", &kb),
            Some("ransomware".to_string())
        );
    }

    // ---- Full parse ----

    #[test]
    fn test_parse_combined() {
        let kb = kb();
        let parsed = parse("I'm worried about phishing and malware", &kb);
        assert_eq!(parsed.sentiment, Sentiment::Worried);
        // "worried" survives extraction: sentiment words are not stop words.
        assert_eq!(parsed.keywords, ["worried", "phishing", "malware"]);
        assert!(parsed.interest.is_none());
    }

    #[test]
    fn test_parse_interest_expression() {
        let kb = kb();
        let parsed = parse("I'm interested in vpn", &kb);
        assert_eq!(parsed.interest, Some("vpn".to_string()));
        assert_eq!(parsed.sentiment, Sentiment::Curious);
    }
}
