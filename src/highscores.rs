//! High score leaderboard
//!
//! Tracks the top 5 name/score pairs, descending. Persisted as a JSON blob
//! through the storage seam; a missing or corrupt blob falls back to the
//! deterministic default seed list so a first run always has a board.

use serde::{Deserialize, Serialize};

use crate::persistence::Storage;

/// Maximum number of leaderboard entries to display/store
pub const MAX_LEADERBOARD_ENTRIES: usize = 5;

/// Longest accepted player name
pub const MAX_NAME_LEN: usize = 15;

/// Name used when the player submits an empty one
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Ordered top-5 leaderboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

/// Trim, cap at [`MAX_NAME_LEN`] characters, default empty names.
pub fn sanitize_name(name: &str) -> String {
    let capped: String = name.trim().chars().take(MAX_NAME_LEN).collect();
    let capped = capped.trim_end();
    if capped.is_empty() {
        return DEFAULT_PLAYER_NAME.to_string();
    }
    capped.to_string()
}

impl Leaderboard {
    const STORAGE_KEY: &'static str = "star_guardian_leaderboard";

    pub fn new() -> Self {
        Self::default()
    }

    /// Board shipped on first run, highest first.
    pub fn default_seed() -> Self {
        let seed = [
            ("Maui", 1500),
            ("Tane", 1000),
            ("Hine", 750),
            ("Tangaroa", 500),
            ("Rongo", 250),
        ];
        Self {
            entries: seed
                .into_iter()
                .map(|(name, score)| LeaderboardEntry {
                    name: name.to_string(),
                    score,
                })
                .collect(),
        }
    }

    /// Whether a score qualifies: always while the board is short (even a
    /// zero qualifies), otherwise it must beat the current minimum.
    pub fn is_high_score(&self, score: u32) -> bool {
        if self.entries.len() < MAX_LEADERBOARD_ENTRIES {
            return true;
        }
        match self.entries.last() {
            Some(lowest) => score > lowest.score,
            None => true,
        }
    }

    /// Insert a score, keeping the board sorted descending and capped at
    /// [`MAX_LEADERBOARD_ENTRIES`]. Returns whether the entry survived.
    pub fn add_score(&mut self, name: &str, score: u32) -> bool {
        let name = sanitize_name(name);
        self.entries.push(LeaderboardEntry {
            name: name.clone(),
            score,
        });
        self.sort_and_truncate();
        self.entries
            .iter()
            .any(|e| e.name == name && e.score == score)
    }

    fn sort_and_truncate(&mut self) {
        // Stable sort: on ties the earlier entry keeps its rank
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_LEADERBOARD_ENTRIES);
    }

    /// Load from storage, falling back to the default seed list (which is
    /// written back so the next run finds it, matching first-run behavior).
    pub fn load(storage: &mut dyn Storage) -> Self {
        if let Some(json) = storage.get(Self::STORAGE_KEY) {
            match serde_json::from_str::<Leaderboard>(&json) {
                Ok(mut board) => {
                    board.sort_and_truncate();
                    log::info!("leaderboard loaded ({} entries)", board.entries.len());
                    return board;
                }
                Err(err) => {
                    log::warn!("leaderboard blob unreadable ({}), reseeding", err);
                }
            }
        } else {
            log::info!("no leaderboard found, seeding defaults");
        }
        let board = Self::default_seed();
        board.save(storage);
        board
    }

    /// Persist the board; failure is logged and otherwise ignored.
    pub fn save(&self, storage: &mut dyn Storage) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if storage.set(Self::STORAGE_KEY, &json) {
                    log::info!("leaderboard saved ({} entries)", self.entries.len());
                }
            }
            Err(err) => log::warn!("failed to encode leaderboard: {}", err),
        }
    }
}
