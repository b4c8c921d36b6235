//! In-memory user profile held by the store.

use std::collections::HashMap;

use crate::error::MemoryError;

/// Per-user session state. Counts, interest, and favorites survive restarts
/// through [`crate::MemoryStore`]; the name does not.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    /// Validated display name, set once per session.
    pub name: Option<String>,
    /// Last topic the user explicitly expressed interest in.
    pub interest: Option<String>,
    /// Normalized keyword -> times recognized in user input.
    pub keyword_counts: HashMap<String, u32>,
    /// Free-text favorites, append-only within a session.
    pub favorites: Vec<String>,
}

/// Validate a raw name: trimmed, non-empty, letters and whitespace only.
pub fn validate_name(raw: &str) -> Result<String, MemoryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MemoryError::EmptyName);
    }
    if !trimmed.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Err(MemoryError::InvalidName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Ada  ").unwrap(), "Ada");
    }

    #[test]
    fn test_validate_name_allows_spaces() {
        assert_eq!(validate_name("Ada Lovelace").unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_validate_name_rejects_empty() {
        assert!(matches!(validate_name(""), Err(MemoryError::EmptyName)));
        assert!(matches!(validate_name("   "), Err(MemoryError::EmptyName)));
    }

    #[test]
    fn test_validate_name_rejects_digits_and_symbols() {
        assert!(matches!(validate_name("Ada1"), Err(MemoryError::InvalidName)));
        assert!(matches!(validate_name("Ada!"), Err(MemoryError::InvalidName)));
        assert!(matches!(
            validate_name("root@host"),
            Err(MemoryError::InvalidName)
        ));
    }

    #[test]
    fn test_validate_name_accepts_unicode_letters() {
        assert_eq!(validate_name("José").unwrap(), "José");
    }

    #[test]
    fn test_profile_default_is_empty() {
        let profile = UserProfile::default();
        assert!(profile.name.is_none());
        assert!(profile.interest.is_none());
        assert!(profile.keyword_counts.is_empty());
        assert!(profile.favorites.is_empty());
    }
}
