//! Per-player tallies of finished matches.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Win/loss/tie tallies for a single player.
///
/// Serialized field names are capitalized ("Wins", "Losses", "Ties") to
/// match the on-disk leaderboard format. A player absent from the table
/// implicitly holds all zeros.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters, new,
)]
#[serde(rename_all = "PascalCase")]
pub struct LeaderboardRecord {
    wins: u64,
    losses: u64,
    ties: u64,
}

impl LeaderboardRecord {
    pub(crate) fn add_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn add_loss(&mut self) {
        self.losses += 1;
    }

    pub(crate) fn add_tie(&mut self) {
        self.ties += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let record = LeaderboardRecord::new(3, 1, 2);
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "Wins": 3, "Losses": 1, "Ties": 2 })
        );
    }

    #[test]
    fn test_default_is_all_zeros() {
        let record = LeaderboardRecord::default();
        assert_eq!(record, LeaderboardRecord::new(0, 0, 0));
    }
}
