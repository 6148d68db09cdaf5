//! The score source capability and an in-memory provider.
//!
//! `ScoreSource` asks for exactly one thing: the top `count` entries, best
//! first. Any type that can rank participants plugs in without knowing about
//! the leaderboard or anything else it might be used for.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::SourceResult;
use crate::model::ScoreEntry;

/// Supplies ranked participants.
///
/// # Contract
///
/// - `count == 0` yields an empty vector, never an error.
/// - Entries are ordered by descending score; ties keep a stable,
///   source-defined order.
/// - At most `count` entries are returned, fewer if fewer exist.
/// - On failure nothing is returned; there are no partial results.
///
/// # Example
///
/// ```rust
/// use leaderboard::{async_trait, ScoreEntry, ScoreSource, SourceResult};
///
/// struct Fixed;
///
/// #[async_trait]
/// impl ScoreSource for Fixed {
///     async fn fetch_top(&self, count: usize) -> SourceResult<Vec<ScoreEntry>> {
///         let mut entries = vec![ScoreEntry::new("TY", 9), ScoreEntry::new("Maru", 8)];
///         entries.truncate(count);
///         Ok(entries)
///     }
/// }
/// ```
#[async_trait]
pub trait ScoreSource: Send + Sync {
    /// Fetch the top `count` entries ranked by score.
    async fn fetch_top(&self, count: usize) -> SourceResult<Vec<ScoreEntry>>;
}

#[async_trait]
impl<T: ScoreSource + ?Sized> ScoreSource for Arc<T> {
    async fn fetch_top(&self, count: usize) -> SourceResult<Vec<ScoreEntry>> {
        (**self).fetch_top(count).await
    }
}

#[async_trait]
impl<T: ScoreSource + ?Sized> ScoreSource for Box<T> {
    async fn fetch_top(&self, count: usize) -> SourceResult<Vec<ScoreEntry>> {
        (**self).fetch_top(count).await
    }
}

/// In-memory score table.
///
/// Participants keep the position they were first inserted at, which is what
/// breaks ties when ranking.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    /// Create an empty score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant, builder style.
    pub fn with_entry(mut self, identity: impl Into<String>, score: i64) -> Self {
        self.insert(identity, score);
        self
    }

    /// Set a participant's score, creating the participant if needed.
    ///
    /// Returns the previous score when the participant already existed.
    pub fn insert(&mut self, identity: impl Into<String>, score: i64) -> Option<i64> {
        let identity = identity.into();
        match self.position(&identity) {
            Some(index) => {
                let previous = self.entries[index].score();
                self.entries[index] = ScoreEntry::new(identity, score);
                Some(previous)
            }
            None => {
                self.entries.push(ScoreEntry::new(identity, score));
                None
            }
        }
    }

    /// Add `points` to every listed participant.
    ///
    /// Unknown identities are skipped. Returns how many participants were
    /// updated.
    pub fn award_points<I, S>(&mut self, identities: I, points: i64) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut awarded = 0;
        for identity in identities {
            if let Some(index) = self.position(identity.as_ref()) {
                let entry = &self.entries[index];
                let updated = ScoreEntry::new(entry.identity(), entry.score().saturating_add(points));
                self.entries[index] = updated;
                awarded += 1;
            }
        }
        awarded
    }

    /// Remove a participant.
    pub fn remove(&mut self, identity: &str) -> Option<ScoreEntry> {
        self.position(identity).map(|index| self.entries.remove(index))
    }

    /// Look up a single participant's score.
    pub fn score_of(&self, identity: &str) -> Option<i64> {
        self.position(identity).map(|index| self.entries[index].score())
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the board has no participants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, identity: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.identity() == identity)
    }
}

#[async_trait]
impl ScoreSource for ScoreBoard {
    async fn fetch_top(&self, count: usize) -> SourceResult<Vec<ScoreEntry>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        // sort_by is stable, so ties stay in insertion order
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score().cmp(&a.score()));
        ranked.truncate(count);

        debug!(requested = count, returned = ranked.len(), "ranked score board");
        Ok(ranked)
    }
}
