//! Player progression: level, XP, rank, titles and per-skill streaks.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::curve::{rank_for_level, title_for_level, xp_for_next_level, Rank};

pub const DEFAULT_PLAYER_NAME: &str = "Houssam";

/// Streak state for a single skill.
///
/// Invariant: `streak > 0` implies `last_completed` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTrackProgress {
    pub skill_name: String,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,
}

impl SkillTrackProgress {
    pub fn new(skill_name: impl Into<String>) -> Self {
        Self {
            skill_name: skill_name.into(),
            streak: 0,
            last_completed: None,
        }
    }

    /// Record a completion on `today`.
    ///
    /// A completion the day after the previous one extends the streak; a
    /// second completion on the same day leaves it untouched; any other gap
    /// restarts it at 1.
    pub fn register_completion(&mut self, today: NaiveDate) {
        match self.last_completed {
            Some(last) if last == today => return,
            Some(last) if last == today - Duration::days(1) => self.streak += 1,
            _ => self.streak = 1,
        }
        self.last_completed = Some(today);
    }

    pub fn break_streak(&mut self) {
        self.streak = 0;
        self.last_completed = None;
    }
}

/// Result of a single XP award.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpAward {
    pub amount: u64,
    pub levels_gained: u32,
    /// Titles unlocked by this award, in unlock order.
    pub unlocked_titles: Vec<String>,
}

impl XpAward {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

fn default_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

fn default_level() -> u32 {
    1
}

/// The single player's aggregate state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub xp: u64,
    #[serde(default)]
    pub rank: Rank,
    #[serde(default)]
    pub last_login: Option<NaiveDate>,
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub skill_tracks: BTreeMap<String, SkillTrackProgress>,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}

impl PlayerProgress {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            xp: 0,
            rank: Rank::E,
            last_login: None,
            titles: Vec::new(),
            skill_tracks: BTreeMap::new(),
        }
    }

    /// Track for `skill_name`, created on first use.
    pub fn ensure_track(&mut self, skill_name: &str) -> &mut SkillTrackProgress {
        self.skill_tracks
            .entry(skill_name.to_string())
            .or_insert_with(|| SkillTrackProgress::new(skill_name))
    }

    pub fn track(&self, skill_name: &str) -> Option<&SkillTrackProgress> {
        self.skill_tracks.get(skill_name)
    }

    /// XP still needed to reach the next level.
    pub fn xp_to_next_level(&self) -> u128 {
        xp_for_next_level(self.level).saturating_sub(u128::from(self.xp))
    }

    /// Grant XP, cascading through as many level-ups as it pays for.
    pub fn award_xp(&mut self, amount: u64) -> XpAward {
        let mut award = XpAward {
            amount,
            ..XpAward::default()
        };
        self.xp = self.xp.saturating_add(amount);

        loop {
            let threshold = xp_for_next_level(self.level);
            let banked = u128::from(self.xp);
            if banked < threshold {
                break;
            }
            let Some(next_level) = self.level.checked_add(1) else {
                break;
            };
            // Remainder is at most the previous xp, so it fits.
            self.xp = u64::try_from(banked - threshold).unwrap_or(u64::MAX);
            self.level = next_level;
            self.rank = rank_for_level(self.level);
            award.levels_gained += 1;

            if let Some(title) = title_for_level(self.level) {
                if !self.titles.iter().any(|held| held == title) {
                    self.titles.push(title.to_string());
                    award.unlocked_titles.push(title.to_string());
                }
            }
        }

        award
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_streak_extends_from_yesterday() {
        let mut track = SkillTrackProgress::new("Strength");
        track.register_completion(day(9));
        track.register_completion(day(10));
        assert_eq!(track.streak, 2);
        assert_eq!(track.last_completed, Some(day(10)));
    }

    #[test]
    fn test_streak_restarts_after_gap() {
        let mut track = SkillTrackProgress::new("Strength");
        track.streak = 5;
        track.last_completed = Some(day(7));
        track.register_completion(day(10));
        assert_eq!(track.streak, 1);
        assert_eq!(track.last_completed, Some(day(10)));
    }

    #[test]
    fn test_first_completion_starts_at_one() {
        let mut track = SkillTrackProgress::new("Strength");
        track.register_completion(day(10));
        assert_eq!(track.streak, 1);
    }

    #[test]
    fn test_same_day_completion_keeps_streak() {
        let mut track = SkillTrackProgress::new("Strength");
        track.register_completion(day(9));
        track.register_completion(day(10));
        track.register_completion(day(10));
        assert_eq!(track.streak, 2);
        assert_eq!(track.last_completed, Some(day(10)));
    }

    #[test]
    fn test_break_streak() {
        let mut track = SkillTrackProgress::new("Strength");
        track.register_completion(day(10));
        track.break_streak();
        assert_eq!(track.streak, 0);
        assert!(track.last_completed.is_none());
    }

    #[test]
    fn test_award_single_level() {
        let mut player = PlayerProgress::default();
        let award = player.award_xp(150);
        assert_eq!(player.level, 2);
        assert_eq!(player.xp, 30);
        assert_eq!(player.rank, Rank::E);
        assert_eq!(award.levels_gained, 1);
        assert!(award.unlocked_titles.is_empty());
    }

    #[test]
    fn test_award_below_threshold() {
        let mut player = PlayerProgress::default();
        let award = player.award_xp(119);
        assert_eq!(player.level, 1);
        assert_eq!(player.xp, 119);
        assert!(!award.leveled_up());
        assert_eq!(player.xp_to_next_level(), 1);
    }

    #[test]
    fn test_award_multi_level_unlocks_titles() {
        let mut player = PlayerProgress::default();
        // 120 + 175 + 255 + 370 + 535 + 775 = 2230 reaches level 7.
        let award = player.award_xp(2230);
        assert_eq!(player.level, 7);
        assert_eq!(player.xp, 0);
        assert_eq!(award.levels_gained, 6);
        assert_eq!(award.unlocked_titles, vec!["Beginner Seeker", "First Ember"]);
        assert_eq!(player.titles, vec!["Beginner Seeker", "First Ember"]);
    }

    #[test]
    fn test_title_not_duplicated() {
        let mut player = PlayerProgress::default();
        player.titles.push("Beginner Seeker".to_string());
        let award = player.award_xp(295);
        assert_eq!(player.level, 3);
        assert!(award.unlocked_titles.is_empty());
        assert_eq!(player.titles, vec!["Beginner Seeker"]);
    }

    #[test]
    fn test_rank_changes_at_band_edge() {
        let mut player = PlayerProgress::default();
        player.level = 9;
        player.rank = Rank::E;
        player.award_xp(u64::try_from(xp_for_next_level(9)).unwrap());
        assert_eq!(player.level, 10);
        assert_eq!(player.rank, Rank::D);
    }

    #[test]
    fn test_award_at_top_level_stops_cascade() {
        let mut player = PlayerProgress::default();
        player.level = u32::MAX;
        player.rank = Rank::S;
        let award = player.award_xp(u64::MAX);
        assert_eq!(player.level, u32::MAX);
        assert_eq!(player.xp, u64::MAX);
        assert_eq!(award.levels_gained, 0);
    }

    #[test]
    fn test_split_award_landing_on_title_level() {
        // 120 + 175 = 295 lands exactly on level 3 and its title.
        let mut split = PlayerProgress::default();
        let first = split.award_xp(295);
        assert_eq!(split.level, 3);
        assert_eq!(split.xp, 0);
        assert_eq!(first.unlocked_titles, vec!["Beginner Seeker"]);

        // The title is not re-granted when the cascade continues from level 3.
        let second = split.award_xp(255 + 370 + 10);
        assert_eq!(split.level, 5);
        assert_eq!(split.xp, 10);
        assert!(second.unlocked_titles.is_empty());

        let mut single = PlayerProgress::default();
        let whole = single.award_xp(295 + 255 + 370 + 10);
        assert_eq!(whole.unlocked_titles, vec!["Beginner Seeker"]);
        assert_eq!((single.level, single.xp, single.rank), (split.level, split.xp, split.rank));
        assert_eq!(single.titles, split.titles);
    }

    #[test]
    fn test_ensure_track_is_lazy() {
        let mut player = PlayerProgress::default();
        assert!(player.track("Strength").is_none());
        player.ensure_track("Strength").streak = 3;
        assert_eq!(player.ensure_track("Strength").streak, 3);
        assert_eq!(player.skill_tracks.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_split_award_matches_single_award(a in 0u64..20_000, b in 0u64..20_000) {
            let mut split = PlayerProgress::default();
            split.award_xp(a);
            split.award_xp(b);

            let mut single = PlayerProgress::default();
            single.award_xp(a + b);

            prop_assert_eq!(split.level, single.level);
            prop_assert_eq!(split.xp, single.xp);
            prop_assert_eq!(split.rank, single.rank);
            prop_assert_eq!(split.titles, single.titles);
        }

        #[test]
        fn prop_xp_below_threshold_after_award(amount in 0u64..1_000_000) {
            let mut player = PlayerProgress::default();
            player.award_xp(amount);
            prop_assert!(u128::from(player.xp) < xp_for_next_level(player.level));
        }
    }
}
