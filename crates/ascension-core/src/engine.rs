//! Progression engine.
//!
//! The engine owns the [`GameState`] and a [`SaveStore`]. Every operation
//! runs to completion synchronously; every operation that changes state
//! saves the whole document before returning.
//!
//! ## Usage
//!
//! ```ignore
//! let store = JsonSaveFile::new(config.save_path_in(&data_dir()?));
//! let mut engine = GameEngine::open(store, &config.player.name, today)?;
//! println!("{}", engine.complete_quest("3fa2")?);
//! println!("{}", engine.advance_day()?);
//! ```

use chrono::{Days, NaiveDate};
use tracing::{debug, info, warn};

use crate::catalog::quest_templates;
use crate::error::{CoreError, Result};
use crate::outcome::{Completion, Failure, Outcome, Rejection, Rollover, Scheduled};
use crate::quest::QuestStatus;
use crate::report;
use crate::state::GameState;
use crate::storage::save::{load_or_bootstrap, SaveStore};

/// Orchestrates the quest loop over an owned state and its store.
#[derive(Debug)]
pub struct GameEngine<S: SaveStore> {
    state: GameState,
    store: S,
}

impl<S: SaveStore> GameEngine<S> {
    pub fn new(state: GameState, store: S) -> Self {
        Self { state, store }
    }

    /// Load the saved game, bootstrapping a new one on first run.
    pub fn open(mut store: S, player_name: &str, today: NaiveDate) -> Result<Self> {
        let state = load_or_bootstrap(&mut store, player_name, today)?;
        Ok(Self { state, store })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (GameState, S) {
        (self.state, self.store)
    }

    pub fn morning_briefing(&self) -> String {
        report::morning_briefing(&self.state)
    }

    pub fn status_overview(&self) -> String {
        report::status_overview(&self.state)
    }

    pub fn list_templates(&self) -> String {
        report::list_templates()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Complete the quest matching `needle` (exact id or leading prefix).
    pub fn complete_quest(&mut self, needle: &str) -> Result<Outcome<Completion>> {
        let Some(index) = self.lookup(needle) else {
            return Ok(Outcome::Rejected(Rejection::NotFound {
                needle: needle.to_string(),
            }));
        };

        let today = self.state.current_day;
        let GameState { player, quests, .. } = &mut self.state;
        let quest = &mut quests[index];

        if quest.status == QuestStatus::Completed {
            warn!(quest = %quest.id, "quest already completed");
            return Ok(Outcome::Rejected(Rejection::AlreadyInState {
                title: quest.title.clone(),
                status: QuestStatus::Completed,
            }));
        }

        quest.mark_completed();
        let award = player.award_xp(quest.xp_reward);
        let streak = {
            let track = player.ensure_track(&quest.skill);
            track.register_completion(today);
            track.streak
        };

        let completion = Completion {
            quest_id: quest.id.clone(),
            title: quest.title.clone(),
            award,
            new_level: player.level,
            streak,
        };
        info!(
            quest = %completion.quest_id,
            xp = completion.award.amount,
            level = completion.new_level,
            streak = completion.streak,
            "quest completed"
        );
        for title in &completion.award.unlocked_titles {
            info!(%title, "title unlocked");
        }

        self.persist()?;
        Ok(Outcome::Applied(completion))
    }

    /// Fail the quest matching `needle`, escalating it and breaking its streak.
    pub fn fail_quest(&mut self, needle: &str) -> Result<Outcome<Failure>> {
        let Some(index) = self.lookup(needle) else {
            return Ok(Outcome::Rejected(Rejection::NotFound {
                needle: needle.to_string(),
            }));
        };

        let GameState { player, quests, .. } = &mut self.state;
        let quest = &mut quests[index];

        if quest.status == QuestStatus::Failed {
            warn!(quest = %quest.id, "quest already failed");
            return Ok(Outcome::Rejected(Rejection::AlreadyInState {
                title: quest.title.clone(),
                status: QuestStatus::Failed,
            }));
        }

        quest.mark_failed();
        player.ensure_track(&quest.skill).break_streak();

        let failure = Failure {
            quest_id: quest.id.clone(),
            title: quest.title.clone(),
            difficulty: quest.difficulty,
            xp_reward: quest.xp_reward,
            failure_count: quest.failure_count,
        };
        info!(
            quest = %failure.quest_id,
            difficulty = %failure.difficulty,
            xp_reward = failure.xp_reward,
            "quest failed and escalated"
        );

        self.persist()?;
        Ok(Outcome::Applied(failure))
    }

    /// Plan a new quest from the catalog, due `days_from_now` days after the
    /// current in-game day. A negative offset plans a quest that is already
    /// overdue.
    pub fn schedule_quest(
        &mut self,
        template_index: usize,
        days_from_now: i64,
    ) -> Result<Outcome<Scheduled>> {
        let templates = quest_templates();
        let Some(template) = templates.get(template_index) else {
            warn!(template_index, available = templates.len(), "template index out of range");
            return Ok(Outcome::Rejected(Rejection::InvalidSelection {
                index: template_index,
                available: templates.len(),
            }));
        };
        let today = self.state.current_day;
        let offset = Days::new(days_from_now.unsigned_abs());
        let deadline = if days_from_now >= 0 {
            today.checked_add_days(offset)
        } else {
            today.checked_sub_days(offset)
        };
        let Some(deadline) = deadline else {
            return Ok(Outcome::Rejected(Rejection::DeadlineOutOfRange { days_from_now }));
        };

        let quest = template.instantiate(deadline);
        let scheduled = Scheduled {
            quest_id: quest.id.clone(),
            title: quest.title.clone(),
            deadline,
        };
        self.state.quests.push(quest);
        info!(quest = %scheduled.quest_id, %deadline, "quest scheduled");

        self.persist()?;
        Ok(Outcome::Applied(scheduled))
    }

    /// Close the current day.
    ///
    /// Every pending quest due on or before the closing day is failed,
    /// escalated and re-armed for the new day. The in-game day then moves
    /// forward by exactly one.
    pub fn advance_day(&mut self) -> Result<Rollover> {
        let closed_day = self.state.current_day;
        let new_day = closed_day
            .succ_opt()
            .ok_or_else(|| CoreError::Validation(format!("no day after {closed_day}")))?;

        let mut rearmed = Vec::new();
        for quest in self
            .state
            .quests
            .iter_mut()
            .filter(|q| q.is_pending() && q.deadline <= closed_day)
        {
            quest.mark_failed();
            quest.reset_for_new_day(new_day);
            debug!(quest = %quest.id, failures = quest.failure_count, "quest re-armed");
            rearmed.push(quest.clone());
        }
        self.state.current_day = new_day;
        info!(%closed_day, %new_day, rearmed = rearmed.len(), "day rolled over");

        self.persist()?;
        Ok(Rollover {
            closed_day,
            new_day,
            rearmed,
        })
    }

    fn lookup(&self, needle: &str) -> Option<usize> {
        let found = self.state.find_quest_index(needle);
        if found.is_none() {
            warn!(needle, "no quest matches");
        } else {
            debug!(needle, index = ?found, "quest lookup");
        }
        found
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.state)
    }
}
