//! # Ascension Core Library
//!
//! This library provides the progression engine behind the Ascension habit
//! tracker: personal habits are modelled as quests across three skill trees,
//! and completing or failing them drives XP, levels, rank, streaks and title
//! unlocks. The CLI binary is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Curve**: pure XP-threshold, rank and title lookups
//! - **Model**: quests, player progress, skill tracks and the game state
//! - **Engine**: quest lifecycle, failure escalation and day rollover
//! - **Storage**: JSON save file and TOML configuration
//!
//! ## Key Components
//!
//! - [`GameEngine`]: owns the state and saves after every change
//! - [`GameState`]: the persisted world
//! - [`SaveStore`]: where the state is read from and written to
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod curve;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod player;
pub mod quest;
pub mod report;
pub mod state;
pub mod storage;

pub use catalog::{quest_templates, starter_quests, QuestTemplate};
pub use curve::{rank_for_level, title_for_level, xp_for_next_level, Rank};
pub use engine::GameEngine;
pub use error::{ConfigError, CoreError};
pub use outcome::{Completion, Failure, Outcome, Rejection, Rollover, Scheduled};
pub use player::{PlayerProgress, SkillTrackProgress, XpAward};
pub use quest::{Difficulty, Quest, QuestStatus, Skill, SkillTree};
pub use state::GameState;
pub use storage::{data_dir, Config, JsonSaveFile, MemoryStore, SaveStore};
