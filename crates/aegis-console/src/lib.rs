//! Console presentation boundary for the Aegis chatbot.
//!
//! Owns everything cosmetic: colored speaker tags, the typed-text effect,
//! the startup banner, and blocking line reads. The conversation core only
//! depends on the semantic operations here (say, error, read line), never
//! on specific colors or fonts.

pub mod banner;
pub mod render;

pub use render::Console;
