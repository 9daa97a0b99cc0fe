//! Result values returned by engine operations.
//!
//! Refused operations are not errors: an unknown quest id, a template index
//! outside the catalog, or completing something already completed all come
//! back as [`Outcome::Rejected`] with the state left untouched.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::player::XpAward;
use crate::quest::{Difficulty, Quest, QuestStatus};

/// Why an operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// No quest id equals or starts with the given text.
    NotFound { needle: String },
    /// Template index outside the catalog.
    InvalidSelection { index: usize, available: usize },
    /// Deadline would fall outside the supported calendar.
    DeadlineOutOfRange { days_from_now: i64 },
    /// The quest is already in the requested state.
    AlreadyInState { title: String, status: QuestStatus },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotFound { .. } => write!(f, "Quest not found."),
            Rejection::InvalidSelection { .. } => write!(f, "Invalid template selection."),
            Rejection::DeadlineOutOfRange { days_from_now } => {
                write!(f, "Cannot schedule {days_from_now} days from now.")
            }
            Rejection::AlreadyInState { status, .. } => match status {
                QuestStatus::Completed => write!(f, "Quest already completed."),
                QuestStatus::Failed => write!(f, "Quest already marked as failed."),
                QuestStatus::Pending => write!(f, "Quest already pending."),
            },
        }
    }
}

/// Either the operation ran, or it was refused and nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum Outcome<T> {
    Applied(T),
    Rejected(Rejection),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn applied(&self) -> Option<&T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Applied(_) => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied(value) => value.fmt(f),
            Outcome::Rejected(rejection) => rejection.fmt(f),
        }
    }
}

/// A quest was completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub quest_id: String,
    pub title: String,
    pub award: XpAward,
    pub new_level: u32,
    pub streak: u32,
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✔ Mission Cleared: {}", self.title)?;
        writeln!(f, "XP +{}", self.award.amount)?;
        write!(f, "Track streak → {} days", self.streak)?;
        if self.award.leveled_up() {
            write!(f, "\nLevel up → {}", self.new_level)?;
        }
        if !self.award.unlocked_titles.is_empty() {
            write!(f, "\nUnlocked titles: {}", self.award.unlocked_titles.join(", "))?;
        }
        Ok(())
    }
}

/// A quest was failed and escalated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub quest_id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub xp_reward: u64,
    pub failure_count: u32,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✖ Mission Failed. Difficulty escalated, XP doubled. New difficulty: {}, XP: {}.",
            self.difficulty, self.xp_reward
        )
    }
}

/// A quest was planned from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scheduled {
    pub quest_id: String,
    pub title: String,
    pub deadline: NaiveDate,
}

impl fmt::Display for Scheduled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Planned: {} → due {}", self.title, self.deadline)
    }
}

/// What a day rollover did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rollover {
    pub closed_day: NaiveDate,
    pub new_day: NaiveDate,
    /// Snapshots of the quests that were failed and re-armed for `new_day`.
    pub rearmed: Vec<Quest>,
}
