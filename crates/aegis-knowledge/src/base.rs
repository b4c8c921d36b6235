//! Read-only lookup table over the static topic data.

use std::collections::HashMap;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::topics::{META_ENTRIES, META_TOPICS, STOP_WORDS, TOPIC_ENTRIES};

/// Case-insensitive topic lookup with random variant selection.
///
/// Constructed once at startup; immutable thereafter. Lookups of absent
/// topics return `None`, never an error.
pub struct KnowledgeBase {
    entries: HashMap<&'static str, &'static [&'static str]>,
}

impl KnowledgeBase {
    /// Build the knowledge base from the static topic tables.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for (topic, variants) in TOPIC_ENTRIES.iter().chain(META_ENTRIES.iter()) {
            debug_assert!(!variants.is_empty(), "topic {topic} has no variants");
            entries.insert(*topic, *variants);
        }
        Self { entries }
    }

    /// Look up a topic, returning one of its variants chosen uniformly at
    /// random. Repeat calls for a multi-variant topic may differ; that is
    /// intentional, to avoid repetitive canned replies.
    pub fn lookup<R: Rng>(&self, topic: &str, rng: &mut R) -> Option<&'static str> {
        let key = topic.trim().to_lowercase();
        self.entries
            .get(key.as_str())
            .and_then(|variants| variants.choose(rng))
            .copied()
    }

    /// Case-insensitive membership test against the stop-word set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        STOP_WORDS.contains(&lower.as_str())
    }

    /// All browsable topic keys in sorted order. Meta-topics reserved for
    /// command handling are excluded.
    pub fn topics(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = TOPIC_ENTRIES.iter().map(|(t, _)| *t).collect();
        keys.sort_unstable();
        keys
    }

    /// Whether `topic` is a meta-topic (reserved for command handling).
    pub fn is_meta_topic(&self, topic: &str) -> bool {
        let lower = topic.trim().to_lowercase();
        META_TOPICS.contains(&lower.as_str())
    }

    /// First browsable topic that appears as a substring of `text`
    /// (case-insensitive). Scans topics in sorted order so the result is
    /// deterministic when several match.
    pub fn find_topic(&self, text: &str) -> Option<&'static str> {
        let lower = text.to_lowercase();
        self.topics()
            .into_iter()
            .find(|topic| lower.contains(topic))
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    // ---- lookup ----

    #[test]
    fn test_lookup_every_topic_returns_a_declared_variant() {
        let kb = kb();
        let mut rng = rng();
        for (topic, variants) in TOPIC_ENTRIES {
            let response = kb.lookup(topic, &mut rng);
            let response = response.unwrap_or_else(|| panic!("no response for {topic}"));
            assert!(
                variants.contains(&response),
                "response for {topic} is not a declared variant"
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let kb = kb();
        let mut rng = rng();
        assert!(kb.lookup("PHISHING", &mut rng).is_some());
        assert!(kb.lookup("  Password  ", &mut rng).is_some());
    }

    #[test]
    fn test_lookup_absent_topic_returns_none() {
        let kb = kb();
        let mut rng = rng();
        assert!(kb.lookup("quantum", &mut rng).is_none());
        assert!(kb.lookup("", &mut rng).is_none());
    }

    #[test]
    fn test_lookup_meta_entry() {
        let kb = kb();
        let mut rng = rng();
        let response = kb.lookup("purpose", &mut rng).unwrap();
        assert!(response.contains("cybersecurity"));
    }

    #[test]
    fn test_lookup_fixed_seed_is_deterministic() {
        let kb = kb();
        let a = kb.lookup("password", &mut StdRng::seed_from_u64(7));
        let b = kb.lookup("password", &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_lookup_multi_variant_topics_eventually_vary() {
        let kb = kb();
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            seen.insert(kb.lookup("phishing", &mut rng).unwrap());
        }
        assert!(seen.len() > 1, "variant selection never varied");
    }

    // ---- stop words ----

    #[test]
    fn test_is_stop_word() {
        let kb = kb();
        assert!(kb.is_stop_word("the"));
        assert!(kb.is_stop_word("What"));
        assert!(kb.is_stop_word("EXPLAIN"));
        assert!(!kb.is_stop_word("phishing"));
        assert!(!kb.is_stop_word("router"));
    }

    // ---- topics ----

    #[test]
    fn test_topics_sorted_and_excludes_meta() {
        let kb = kb();
        let topics = kb.topics();
        assert!(!topics.is_empty());
        let mut sorted = topics.clone();
        sorted.sort_unstable();
        assert_eq!(topics, sorted);
        assert!(!topics.contains(&"purpose"));
        assert!(!topics.contains(&"help"));
        assert!(!topics.contains(&"how are you"));
        assert!(topics.contains(&"phishing"));
    }

    #[test]
    fn test_is_meta_topic() {
        let kb = kb();
        assert!(kb.is_meta_topic("help"));
        assert!(kb.is_meta_topic("How Are You"));
        assert!(!kb.is_meta_topic("phishing"));
    }

    // ---- find_topic ----

    #[test]
    fn test_find_topic_in_text() {
        let kb = kb();
        assert_eq!(kb.find_topic("i am interested in phishing"), Some("phishing"));
        assert_eq!(kb.find_topic("VPN please"), Some("vpn"));
        assert_eq!(kb.find_topic("nothing relevant here"), None);
    }

    #[test]
    fn test_find_topic_prefers_sorted_order_when_several_match() {
        let kb = kb();
        // "backup" sorts before "password"
        assert_eq!(
            kb.find_topic("backup my password list"),
            Some("backup")
        );
    }
}
