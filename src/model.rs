//! Data carried between the score source and the notifier.

use std::fmt;

/// A participant's identity paired with their score.
///
/// Entries are produced fresh by every fetch and cannot be modified once
/// built; collaborators only ever read them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreEntry {
    identity: String,
    score: i64,
}

impl ScoreEntry {
    /// Create a new entry.
    pub fn new(identity: impl Into<String>, score: i64) -> Self {
        Self {
            identity: identity.into(),
            score,
        }
    }

    /// Opaque participant identifier.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The participant's score.
    pub fn score(&self) -> i64 {
        self.score
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identity, self.score)
    }
}

/// A delivered top-score notification, as seen by in-process listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub identity: String,
    pub score: i64,
}

impl Notification {
    pub fn new(identity: impl Into<String>, score: i64) -> Self {
        Self {
            identity: identity.into(),
            score,
        }
    }
}

impl From<ScoreEntry> for Notification {
    fn from(entry: ScoreEntry) -> Self {
        Self {
            identity: entry.identity,
            score: entry.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_entry_accessors() {
        let entry = ScoreEntry::new("user-1", 10);
        assert_eq!(entry.identity(), "user-1");
        assert_eq!(entry.score(), 10);
        assert_eq!(entry.to_string(), "user-1 (10)");
    }

    #[test]
    fn test_notification_from_entry() {
        let notification = Notification::from(ScoreEntry::new("user-2", -3));
        assert_eq!(notification, Notification::new("user-2", -3));
    }
}
