//! Conversation engine for the Aegis chatbot.
//!
//! Consumes raw user input, runs it through command detection, sentiment
//! tagging, keyword extraction, and interest tracking, and composes the
//! response lines to display.

pub mod engine;
pub mod error;
pub mod parser;
pub mod response;
pub mod types;

pub use engine::ConversationEngine;
pub use error::ChatError;
pub use response::ResponseComposer;
pub use types::{Command, ParsedInput, Sentiment, TurnOutcome};
