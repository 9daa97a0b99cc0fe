//! The persisted world: the player, the quest ledger and the in-game day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::starter_quests;
use crate::player::PlayerProgress;
use crate::quest::{Quest, QuestStatus};

/// Whole game state. Quests are kept in scheduling order and never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub player: PlayerProgress,
    #[serde(default)]
    pub quests: Vec<Quest>,
    pub current_day: NaiveDate,
}

impl GameState {
    pub fn new(player: PlayerProgress, current_day: NaiveDate) -> Self {
        Self {
            player,
            quests: Vec::new(),
            current_day,
        }
    }

    /// Fresh save for `player_name` starting on `today` with the starter quests.
    pub fn bootstrap(player_name: &str, today: NaiveDate) -> Self {
        let mut player = PlayerProgress::new(player_name);
        player.last_login = Some(today);
        Self {
            player,
            quests: starter_quests(today),
            current_day: today,
        }
    }

    /// Pending quests due exactly on `day`.
    pub fn quests_due_today(&self, day: NaiveDate) -> Vec<&Quest> {
        self.quests
            .iter()
            .filter(|q| q.is_pending() && q.deadline == day)
            .collect()
    }

    /// Pending quests whose deadline is already behind `day`.
    pub fn overdue_quests(&self, day: NaiveDate) -> Vec<&Quest> {
        self.quests
            .iter()
            .filter(|q| q.is_pending() && q.deadline < day)
            .collect()
    }

    pub fn completed_today(&self, day: NaiveDate) -> Vec<&Quest> {
        self.quests
            .iter()
            .filter(|q| q.status == QuestStatus::Completed && q.deadline == day)
            .collect()
    }

    pub fn quests_with_status(&self, status: QuestStatus) -> Vec<&Quest> {
        self.quests.iter().filter(|q| q.status == status).collect()
    }

    /// Index of the first quest whose id equals or starts with `needle`.
    ///
    /// Colliding prefixes are not rejected: the earliest quest in the ledger
    /// wins. An empty needle matches nothing.
    pub fn find_quest_index(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.quests.iter().position(|q| q.id.starts_with(needle))
    }

    pub fn find_quest(&self, needle: &str) -> Option<&Quest> {
        self.find_quest_index(needle).map(|i| &self.quests[i])
    }
}
