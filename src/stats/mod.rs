//! Terminal summaries and the best-record persistence seam.
//!
//! When a session ends, the scored engines produce a [`GameSummary`]. The
//! shell hands it to a [`ResultSink`], which merges it into a per-user,
//! per-game [`BestRecord`]: best score only goes up, best time and best
//! moves only go down, and a play counter increments. Because the merge
//! only ever improves bests, at-least-once delivery (retries after a
//! reported failure) is safe for everything except the play counter.
//!
//! The sink is a seam: the real application stores records in an external
//! document store keyed by user id. [`MemoryStore`] is the in-process
//! reference implementation and what the tests use.

use chrono::Utc;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// The games a summary can belong to.
///
/// `key()` values double as the per-game field names in the external
/// document store, so they are part of the persisted contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    TicTacToe,
    NumberGuess,
    WordGuess,
    MemoryMatch,
    SlidingPuzzle,
    Sudoku,
}

impl GameKind {
    /// Stable storage key for this game.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "ticTacToe",
            GameKind::NumberGuess => "numberGuess",
            GameKind::WordGuess => "wordGuess",
            GameKind::MemoryMatch => "memoryMatch",
            GameKind::SlidingPuzzle => "puzzleTime",
            GameKind::Sudoku => "sudoku",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Terminal summary of one completed session.
///
/// This is the only thing that outlives a session; in-progress state is
/// never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game: GameKind,
    pub score: i64,
    pub time_secs: u32,
    pub moves: u32,
    pub difficulty: Option<Difficulty>,
    /// Unix timestamp (seconds) of completion.
    pub timestamp: i64,
}

impl GameSummary {
    /// Build a summary stamped with the current time.
    #[must_use]
    pub fn now(
        game: GameKind,
        score: i64,
        time_secs: u32,
        moves: u32,
        difficulty: Option<Difficulty>,
    ) -> Self {
        Self {
            game,
            score,
            time_secs,
            moves,
            difficulty,
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// Per-user, per-game aggregate of best results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRecord {
    pub best_score: i64,
    pub best_time_secs: u32,
    pub best_moves: u32,
    pub games_played: u32,
    pub last_difficulty: Option<Difficulty>,
    /// Unix timestamp (seconds) of the most recent play.
    pub last_played: i64,
}

impl BestRecord {
    fn from_summary(summary: &GameSummary) -> Self {
        Self {
            best_score: summary.score,
            best_time_secs: summary.time_secs,
            best_moves: summary.moves,
            games_played: 1,
            last_difficulty: summary.difficulty,
            last_played: summary.timestamp,
        }
    }

    /// Merge a new summary in. Bests only improve.
    fn merge(&mut self, summary: &GameSummary) {
        self.best_score = self.best_score.max(summary.score);
        self.best_time_secs = self.best_time_secs.min(summary.time_secs);
        self.best_moves = self.best_moves.min(summary.moves);
        self.games_played += 1;
        self.last_difficulty = summary.difficulty;
        self.last_played = summary.timestamp;
    }
}

/// Failure reported by a sink. The session that produced the summary is
/// unaffected either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkError {
    /// The backing store could not be reached or refused the write.
    Unavailable(String),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::Unavailable(reason) => write!(f, "result sink unavailable: {reason}"),
        }
    }
}

impl std::error::Error for SinkError {}

/// Destination for terminal summaries.
pub trait ResultSink {
    /// Merge `summary` into the aggregate record for `user_id`.
    fn record_result(&mut self, user_id: &str, summary: &GameSummary) -> Result<(), SinkError>;
}

/// Record a summary, logging instead of propagating on failure.
///
/// A completed session's score is shown to the user whether or not the
/// store accepted it, so callers that have nothing useful to do with the
/// error go through this. Returns whether the write succeeded.
pub fn record_best_effort(sink: &mut dyn ResultSink, user_id: &str, summary: &GameSummary) -> bool {
    match sink.record_result(user_id, summary) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("failed to record {} result for {user_id}: {err}", summary.game);
            false
        }
    }
}

/// In-memory reference sink.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: FxHashMap<String, FxHashMap<GameKind, BestRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user's aggregate record for a game.
    #[must_use]
    pub fn best(&self, user_id: &str, game: GameKind) -> Option<&BestRecord> {
        self.records.get(user_id)?.get(&game)
    }
}

impl ResultSink for MemoryStore {
    fn record_result(&mut self, user_id: &str, summary: &GameSummary) -> Result<(), SinkError> {
        let games = self.records.entry(user_id.to_string()).or_default();
        match games.entry(summary.game) {
            std::collections::hash_map::Entry::Occupied(mut entry) => {
                entry.get_mut().merge(summary);
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(BestRecord::from_summary(summary));
            }
        }
        log::debug!("recorded {} result for {user_id}", summary.game);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(score: i64, time_secs: u32, moves: u32) -> GameSummary {
        GameSummary {
            game: GameKind::Sudoku,
            score,
            time_secs,
            moves,
            difficulty: Some(Difficulty::Easy),
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_first_record() {
        let mut store = MemoryStore::new();
        store.record_result("alice", &summary(9000, 120, 40)).unwrap();

        let record = store.best("alice", GameKind::Sudoku).unwrap();
        assert_eq!(record.best_score, 9000);
        assert_eq!(record.best_time_secs, 120);
        assert_eq!(record.best_moves, 40);
        assert_eq!(record.games_played, 1);
    }

    #[test]
    fn test_merge_keeps_bests() {
        let mut store = MemoryStore::new();
        store.record_result("alice", &summary(9000, 120, 40)).unwrap();
        // Worse score and moves, better time.
        store.record_result("alice", &summary(7000, 90, 60)).unwrap();

        let record = store.best("alice", GameKind::Sudoku).unwrap();
        assert_eq!(record.best_score, 9000);
        assert_eq!(record.best_time_secs, 90);
        assert_eq!(record.best_moves, 40);
        assert_eq!(record.games_played, 2);
    }

    #[test]
    fn test_retry_never_degrades_bests() {
        let mut store = MemoryStore::new();
        let s = summary(9000, 120, 40);
        store.record_result("alice", &s).unwrap();
        store.record_result("alice", &s).unwrap();

        let record = store.best("alice", GameKind::Sudoku).unwrap();
        assert_eq!(record.best_score, 9000);
        assert_eq!(record.best_time_secs, 120);
        // Only the play counter moves on a duplicate delivery.
        assert_eq!(record.games_played, 2);
    }

    #[test]
    fn test_users_are_independent() {
        let mut store = MemoryStore::new();
        store.record_result("alice", &summary(9000, 120, 40)).unwrap();

        assert!(store.best("bob", GameKind::Sudoku).is_none());
        assert!(store.best("alice", GameKind::MemoryMatch).is_none());
    }

    #[test]
    fn test_best_effort_swallows_failure() {
        struct FailingSink;
        impl ResultSink for FailingSink {
            fn record_result(&mut self, _: &str, _: &GameSummary) -> Result<(), SinkError> {
                Err(SinkError::Unavailable("offline".into()))
            }
        }

        let mut sink = FailingSink;
        assert!(!record_best_effort(&mut sink, "alice", &summary(1, 1, 1)));

        let mut store = MemoryStore::new();
        assert!(record_best_effort(&mut store, "alice", &summary(1, 1, 1)));
    }

    #[test]
    fn test_record_serde() {
        let mut store = MemoryStore::new();
        store.record_result("alice", &summary(9000, 120, 40)).unwrap();
        let record = store.best("alice", GameKind::Sudoku).unwrap();

        let json = serde_json::to_string(record).unwrap();
        let back: BestRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(*record, back);
    }
}
