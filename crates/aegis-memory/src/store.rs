//! Flat-file persistence for the user profile.
//!
//! File format, one entry per line:
//!   `# ...`          comment / marker line, skipped on load
//!   `@interest:TOPIC` the user's current interest
//!   `*TEXT`          one saved favorite
//!   `KEYWORD:COUNT`  a keyword usage count (non-negative integer)
//!
//! The loader skips any line that fails to parse in the expected shape.
//! Saves are a full rewrite of the file, not an append. Any I/O failure
//! downgrades the store to session-only memory for the rest of the run.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::MemoryError;
use crate::profile::{validate_name, UserProfile};

const INTEREST_PREFIX: &str = "@interest:";
const FAVORITE_PREFIX: char = '*';
const COMMENT_PREFIX: char = '#';

/// Persistent per-user memory. One instance per process; single-writer,
/// single-reader discipline on the backing file.
pub struct MemoryStore {
    path: PathBuf,
    profile: UserProfile,
    persistent: bool,
}

impl MemoryStore {
    /// Open a store backed by `path`, loading any existing state.
    ///
    /// A missing file is treated as empty state. Unreadable files and
    /// malformed lines are logged and skipped rather than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut store = Self {
            path,
            profile: UserProfile::default(),
            persistent: true,
        };
        store.load();
        store
    }

    /// The validated session name, if set.
    pub fn name(&self) -> Option<&str> {
        self.profile.name.as_deref()
    }

    /// Validate and store the user's name. Session-only: never persisted.
    pub fn set_name(&mut self, raw: &str) -> Result<&str, MemoryError> {
        let name = validate_name(raw)?;
        self.profile.name = Some(name);
        Ok(self.profile.name.as_deref().unwrap_or_default())
    }

    /// Record one occurrence of a recognized keyword and flush.
    /// No-op on empty or whitespace-only input.
    pub fn record_keyword(&mut self, keyword: &str) {
        let key = keyword.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        *self.profile.keyword_counts.entry(key).or_insert(0) += 1;
        self.flush();
    }

    /// Times `keyword` has been recorded; 0 if never.
    pub fn keyword_count(&self, keyword: &str) -> u32 {
        let key = keyword.trim().to_lowercase();
        self.profile.keyword_counts.get(&key).copied().unwrap_or(0)
    }

    /// Set the user's current interest and flush.
    pub fn set_interest(&mut self, topic: &str) -> Result<(), MemoryError> {
        let normalized = topic.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(MemoryError::EmptyInterest);
        }
        self.profile.interest = Some(normalized);
        self.flush();
        Ok(())
    }

    /// The user's current interest, if any.
    pub fn interest(&self) -> Option<&str> {
        self.profile.interest.as_deref()
    }

    pub fn has_interest(&self) -> bool {
        self.profile.interest.is_some()
    }

    /// Append a favorite if non-empty after trimming, then flush.
    pub fn add_favorite(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        self.profile.favorites.push(trimmed.to_string());
        self.flush();
    }

    /// Saved favorites in insertion order.
    pub fn favorites(&self) -> &[String] {
        &self.profile.favorites
    }

    /// Whether any keyword has ever been recorded (i.e. a returning user).
    pub fn has_history(&self) -> bool {
        !self.profile.keyword_counts.is_empty()
    }

    /// Top `n` keywords by count, descending; ties broken alphabetically.
    pub fn top_keywords(&self, n: usize) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self
            .profile
            .keyword_counts
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// Whether the store is still writing to disk, or has degraded to
    /// session-only memory after an I/O failure.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Rewrite the backing file with the full current state.
    ///
    /// On failure, logs a warning and downgrades the store to session-only
    /// memory; the conversation continues without persistence.
    pub fn save(&mut self) {
        if !self.persistent {
            return;
        }
        if let Err(e) = self.write_file() {
            warn!(
                path = %self.path.display(),
                error = %e,
                "Memory save failed; continuing with session-only memory"
            );
            self.persistent = false;
        }
    }

    fn flush(&mut self) {
        self.save();
    }

    fn write_file(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut out = String::new();
        out.push_str(&format!(
            "# aegis memory, saved {}\n",
            chrono::Local::now().to_rfc3339()
        ));
        if let Some(ref interest) = self.profile.interest {
            out.push_str(INTEREST_PREFIX);
            out.push_str(interest);
            out.push('\n');
        }
        for favorite in &self.profile.favorites {
            out.push(FAVORITE_PREFIX);
            out.push_str(favorite);
            out.push('\n');
        }
        let mut counts: Vec<(&String, &u32)> = self.profile.keyword_counts.iter().collect();
        counts.sort_by(|a, b| a.0.cmp(b.0));
        for (keyword, count) in counts {
            out.push_str(&format!("{keyword}:{count}\n"));
        }

        std::fs::write(&self.path, out)
    }

    fn load(&mut self) {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No memory file yet; starting empty");
                return;
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Memory load failed; continuing with session-only memory"
                );
                self.persistent = false;
                return;
            }
        };

        for line in content.lines() {
            self.load_line(line);
        }
        debug!(
            keywords = self.profile.keyword_counts.len(),
            favorites = self.profile.favorites.len(),
            "Memory loaded"
        );
    }

    fn load_line(&mut self, line: &str) {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return;
        }
        if let Some(topic) = line.strip_prefix(INTEREST_PREFIX) {
            let topic = topic.trim().to_lowercase();
            if !topic.is_empty() {
                self.profile.interest = Some(topic);
            }
            return;
        }
        if let Some(favorite) = line.strip_prefix(FAVORITE_PREFIX) {
            let favorite = favorite.trim();
            if !favorite.is_empty() {
                self.profile.favorites.push(favorite.to_string());
            }
            return;
        }
        match line.rsplit_once(':') {
            Some((keyword, count)) => {
                let keyword = keyword.trim().to_lowercase();
                match count.trim().parse::<u32>() {
                    Ok(count) if !keyword.is_empty() => {
                        self.profile.keyword_counts.insert(keyword, count);
                    }
                    _ => debug!(line, "Skipping malformed count line"),
                }
            }
            None => debug!(line, "Skipping unrecognized memory line"),
        }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
