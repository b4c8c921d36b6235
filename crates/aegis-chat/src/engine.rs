//! The conversation engine: one long-lived loop over user turns.
//!
//! Each turn runs command detection first; if nothing matches, the input
//! takes the natural-language path (sentiment, keyword extraction, interest
//! tracking, topic resolution). All session state lives on the engine so
//! independent sessions never interfere.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use uuid::Uuid;

use aegis_core::config::ChatConfig;
use aegis_knowledge::KnowledgeBase;
use aegis_memory::MemoryStore;

use crate::error::ChatError;
use crate::parser;
use crate::response::ResponseComposer;
use crate::types::{Command, TurnOutcome};

/// Fallback display name before the user introduces themselves.
const ANONYMOUS: &str = "friend";

/// Single-user conversation engine.
pub struct ConversationEngine {
    kb: KnowledgeBase,
    memory: MemoryStore,
    composer: ResponseComposer,
    rng: StdRng,
    config: ChatConfig,
    session_id: Uuid,
    turns: u64,
}

impl ConversationEngine {
    /// Create an engine with an OS-seeded random source.
    pub fn new(kb: KnowledgeBase, memory: MemoryStore, config: ChatConfig) -> Self {
        Self::with_rng(kb, memory, config, StdRng::from_os_rng())
    }

    /// Create an engine with an injected random source, so tests can assert
    /// against a fixed sequence.
    pub fn with_rng(
        kb: KnowledgeBase,
        memory: MemoryStore,
        config: ChatConfig,
        rng: StdRng,
    ) -> Self {
        let session_id = Uuid::new_v4();
        debug!(%session_id, "Conversation session created");
        Self {
            kb,
            memory,
            composer: ResponseComposer::new(),
            rng,
            config,
            session_id,
            turns: 0,
        }
    }

    /// Validate and set the user's name for this session.
    pub fn set_name(&mut self, raw: &str) -> Result<String, ChatError> {
        let name = self.memory.set_name(raw)?;
        Ok(name.to_string())
    }

    /// Session-opening greeting, personalized for returning users.
    pub fn greeting(&self) -> String {
        self.composer.greeting(
            self.display_name(),
            self.memory.has_history(),
            self.memory.interest(),
        )
    }

    /// Run one conversation turn over a raw input line.
    pub fn process(&mut self, raw: &str) -> Result<TurnOutcome, ChatError> {
        let input = raw.trim();
        if input.is_empty() {
            return Ok(TurnOutcome::Continue(vec![self.composer.rephrase_prompt()]));
        }
        if input.chars().count() > self.config.max_input_len {
            return Err(ChatError::InputTooLong(self.config.max_input_len));
        }

        self.turns += 1;
        debug!(session_id = %self.session_id, turn = self.turns, "Processing turn");

        if let Some(command) = parser::detect_command(input) {
            return Ok(self.handle_command(command));
        }
        Ok(self.handle_statement(input))
    }

    /// Read access to the underlying memory store.
    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    /// This session's identifier.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    // -----------------------------------------------------------------
    // Command path
    // -----------------------------------------------------------------

    fn handle_command(&mut self, command: Command) -> TurnOutcome {
        debug!(?command, "Command detected");
        match command {
            Command::Exit => TurnOutcome::Exit(self.composer.farewell(self.display_name())),
            Command::Help => {
                TurnOutcome::Continue(vec![self.composer.help(&self.kb.topics())])
            }
            Command::NameRecall => {
                TurnOutcome::Continue(vec![self.composer.name_recall(self.display_name())])
            }
            Command::FavoriteAdd(text) => {
                let reply = if text.trim().is_empty() {
                    self.composer.favorite_usage()
                } else {
                    self.memory.add_favorite(&text);
                    self.composer.favorite_saved()
                };
                TurnOutcome::Continue(vec![reply])
            }
            Command::FavoriteList => {
                TurnOutcome::Continue(vec![self.composer.favorites(self.memory.favorites())])
            }
            Command::Stats => {
                let top = self.memory.top_keywords(self.config.stats_top_n);
                TurnOutcome::Continue(vec![self.composer.stats(&top)])
            }
            Command::HowAreYou => TurnOutcome::Continue(vec![self.meta_reply("how are you")]),
            Command::Purpose => TurnOutcome::Continue(vec![self.meta_reply("purpose")]),
        }
    }

    fn meta_reply(&mut self, topic: &str) -> String {
        self.kb
            .lookup(topic, &mut self.rng)
            .map(str::to_string)
            .unwrap_or_else(|| self.composer.fallback(crate::types::Sentiment::Neutral))
    }

    // -----------------------------------------------------------------
    // Natural-language path
    // -----------------------------------------------------------------

    fn handle_statement(&mut self, input: &str) -> TurnOutcome {
        let parsed = parser::parse(input, &self.kb);

        // Record every surviving keyword, duplicates included.
        for keyword in &parsed.keywords {
            self.memory.record_keyword(keyword);
        }

        // Explicit interest expression short-circuits the turn: the topic
        // response is emitted once and does not also run topic resolution.
        if let Some(topic) = parsed.interest {
            if self.memory.set_interest(&topic).is_ok() {
                debug!(topic = %topic, "Interest expressed");
            }
            let reply = self
                .kb
                .lookup(&topic, &mut self.rng)
                .map(str::to_string)
                .unwrap_or_else(|| self.composer.fallback(parsed.sentiment));
            return TurnOutcome::Continue(vec![reply]);
        }

        // Topic resolution: one reply per matched keyword, in order of
        // first appearance.
        let mut replies = Vec::new();
        let mut seen: Vec<&str> = Vec::new();
        for keyword in &parsed.keywords {
            if seen.contains(&keyword.as_str()) {
                continue;
            }
            seen.push(keyword);

            let Some(base) = self.kb.lookup(keyword, &mut self.rng) else {
                continue;
            };
            let count = self.memory.keyword_count(keyword);
            if count > 1 {
                // A repeatedly discussed topic becomes the current interest.
                let _ = self.memory.set_interest(keyword);
            }
            let contextual = self.composer.contextual_prefix(count, &mut self.rng);
            replies.push(self.composer.compose(parsed.sentiment, contextual, base));
        }

        if replies.is_empty() {
            replies.push(self.composer.fallback(parsed.sentiment));
        }
        TurnOutcome::Continue(replies)
    }

    fn display_name(&self) -> &str {
        self.memory.name().unwrap_or(ANONYMOUS)
    }
}

// =============================================================================
// Tests
// =============================================================================
