//! Plain-text renderings of the game state for terminal front ends.
//!
//! These are read-only views: nothing here mutates state.

use std::fmt;

use crate::catalog::quest_templates;
use crate::curve::xp_for_next_level;
use crate::outcome::Rollover;
use crate::quest::{Quest, QuestStatus};
use crate::state::GameState;

pub const WIDTH: usize = 72;

fn divider() -> String {
    "═".repeat(WIDTH)
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = WIDTH)
}

/// Glyph for a streak length.
pub fn streak_flame(streak: u32) -> &'static str {
    match streak {
        30.. => "🔥🔥🔥",
        14..=29 => "🔥🔥",
        7..=13 => "🔥",
        3..=6 => "⚡",
        1..=2 => "✦",
        0 => "□",
    }
}

/// One-line summary of a quest, prefixed with its short id.
pub fn format_quest_line(quest: &Quest) -> String {
    let urgency = if quest.urgency { " !!" } else { "" };
    format!(
        "[{}] {} — {}/{} — {} — {} XP — due {}{}",
        quest.short_id(),
        quest.title,
        quest.tree,
        quest.skill,
        quest.difficulty,
        quest.xp_reward,
        quest.deadline,
        urgency
    )
}

fn rank_banner(state: &GameState) -> String {
    let player = &state.player;
    centered(&format!(
        "◈ {}-Rank Ascendant · Level {} ◈",
        player.rank, player.level
    ))
}

/// Morning summary: overdue quests first, then what is due today.
pub fn morning_briefing(state: &GameState) -> String {
    let today = state.current_day;
    let due = state.quests_due_today(today);
    let overdue = state.overdue_quests(today);

    let mut lines = vec![
        rank_banner(state),
        divider(),
        centered(&format!("DAWN REPORT · {today}")),
        divider(),
    ];
    if !overdue.is_empty() {
        lines.push("⚠ URGENT QUESTS FROM YESTERDAY ⚠".to_string());
        lines.extend(overdue.into_iter().map(format_quest_line));
        lines.push(divider());
    }
    if due.is_empty() {
        lines.push("No quests scheduled. Use night planning to prime the next assault.".to_string());
    } else {
        lines.push("TODAY'S ACTIVE MISSIONS".to_string());
        lines.extend(due.into_iter().map(format_quest_line));
    }
    lines.join("\n")
}

/// Full ledger with player progress and streaks.
pub fn status_overview(state: &GameState) -> String {
    let player = &state.player;
    let mut lines = vec![divider(), centered("ASCENSION STATUS"), divider()];
    lines.push(format!(
        "Name: {} · Rank: {}-Rank · Level {}",
        player.name, player.rank, player.level
    ));
    lines.push(format!(
        "XP in reserve: {} / next threshold {}",
        player.xp,
        xp_for_next_level(player.level)
    ));
    if !player.titles.is_empty() {
        lines.push(format!("Titles: {}", player.titles.join(", ")));
    }
    lines.push(String::new());

    lines.push("Streak Flames:".to_string());
    if player.skill_tracks.is_empty() {
        lines.push("  No flames yet. Ignite a streak tonight.".to_string());
    }
    for (name, track) in &player.skill_tracks {
        lines.push(format!(
            "  {}: {}d streak {}",
            name,
            track.streak,
            streak_flame(track.streak)
        ));
    }
    lines.push(String::new());

    lines.push("Quest Ledger:".to_string());
    for status in QuestStatus::ALL {
        lines.push(format!(" {} ::", status.as_str().to_uppercase()));
        let quests = state.quests_with_status(status);
        if quests.is_empty() {
            lines.push("  — none —".to_string());
        }
        for quest in quests {
            lines.push(format!("  {}", format_quest_line(quest)));
        }
    }
    lines.join("\n")
}

/// The planning catalog with user-facing indices.
pub fn list_templates() -> String {
    let mut lines = vec!["Available Quest Blueprints:".to_string()];
    for (idx, template) in quest_templates().iter().enumerate() {
        lines.push(format!(
            "[{}] {} ({} · {}) — {} / {} / {} XP",
            idx,
            template.title,
            template.tree(),
            template.skill,
            template.estimated_effort,
            template.difficulty,
            template.xp_reward
        ));
    }
    lines.join("\n")
}

impl fmt::Display for Rollover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", divider())?;
        writeln!(f, "{}", centered(&format!("MIDNIGHT ROLLOVER → {}", self.new_day)))?;
        writeln!(f, "{}", divider())?;
        if self.rearmed.is_empty() {
            return write!(f, "All missions resolved. Tomorrow awaits fresh orders.");
        }
        write!(f, "The dungeon punished hesitation. These quests returned angrier:")?;
        for quest in &self.rearmed {
            write!(f, "\n{}", format_quest_line(quest))?;
        }
        Ok(())
    }
}
