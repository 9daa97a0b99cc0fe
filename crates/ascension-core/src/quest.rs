//! Quest types: skill taxonomy, difficulty scale and the quest record itself.
//!
//! A quest moves through a small state machine:
//!
//! ```text
//!            complete
//!   PENDING ──────────> COMPLETED
//!     │  ^
//!     │  │ rollover (re-armed with a new deadline)
//!     v  │
//!    FAILED
//! ```
//!
//! Failure always escalates the quest: it becomes urgent, one difficulty step
//! harder, and worth twice the XP.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The three skill trees a quest can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillTree {
    Dev,
    Faith,
    Body,
}

impl SkillTree {
    pub const ALL: [SkillTree; 3] = [SkillTree::Dev, SkillTree::Faith, SkillTree::Body];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillTree::Dev => "Dev",
            SkillTree::Faith => "Faith",
            SkillTree::Body => "Body",
        }
    }

    /// Skills grouped under this tree.
    pub fn skills(&self) -> &'static [Skill] {
        match self {
            SkillTree::Dev => &[
                Skill::MathFundamentals,
                Skill::ProgrammingBasics,
                Skill::Algorithms,
                Skill::DataStructures,
                Skill::ProblemSolving,
            ],
            SkillTree::Faith => &[
                Skill::PrayerConsistency,
                Skill::QuranRecitation,
                Skill::QuranUnderstanding,
                Skill::QuranMemorization,
                Skill::VoluntaryFasting,
                Skill::BehaviorDiscipline,
            ],
            SkillTree::Body => &[
                Skill::Strength,
                Skill::Endurance,
                Skill::Mobility,
                Skill::Nutrition,
                Skill::PhysicalForm,
            ],
        }
    }
}

impl fmt::Display for SkillTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known skills across all trees.
///
/// Quests persist the skill as its display name so save files stay readable;
/// this enum is the closed set the catalog and starter quests draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    // Dev
    MathFundamentals,
    ProgrammingBasics,
    Algorithms,
    DataStructures,
    ProblemSolving,
    // Faith
    PrayerConsistency,
    QuranRecitation,
    QuranUnderstanding,
    QuranMemorization,
    VoluntaryFasting,
    BehaviorDiscipline,
    // Body
    Strength,
    Endurance,
    Mobility,
    Nutrition,
    PhysicalForm,
}

impl Skill {
    pub fn tree(&self) -> SkillTree {
        match self {
            Skill::MathFundamentals
            | Skill::ProgrammingBasics
            | Skill::Algorithms
            | Skill::DataStructures
            | Skill::ProblemSolving => SkillTree::Dev,
            Skill::PrayerConsistency
            | Skill::QuranRecitation
            | Skill::QuranUnderstanding
            | Skill::QuranMemorization
            | Skill::VoluntaryFasting
            | Skill::BehaviorDiscipline => SkillTree::Faith,
            Skill::Strength
            | Skill::Endurance
            | Skill::Mobility
            | Skill::Nutrition
            | Skill::PhysicalForm => SkillTree::Body,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Skill::MathFundamentals => "Math Fundamentals",
            Skill::ProgrammingBasics => "Programming Basics",
            Skill::Algorithms => "Algorithms",
            Skill::DataStructures => "Data Structures",
            Skill::ProblemSolving => "Problem Solving",
            Skill::PrayerConsistency => "Prayer Consistency",
            Skill::QuranRecitation => "Qur'an Recitation",
            Skill::QuranUnderstanding => "Qur'an Understanding",
            Skill::QuranMemorization => "Qur'an Memorization",
            Skill::VoluntaryFasting => "Voluntary Fasting",
            Skill::BehaviorDiscipline => "Behavior & Discipline",
            Skill::Strength => "Strength",
            Skill::Endurance => "Endurance",
            Skill::Mobility => "Mobility & Flexibility",
            Skill::Nutrition => "Nutrition Discipline",
            Skill::PhysicalForm => "Physical Form",
        }
    }

    /// Look a skill up by its display name.
    pub fn from_name(name: &str) -> Option<Skill> {
        SkillTree::ALL
            .iter()
            .flat_map(|tree| tree.skills().iter())
            .find(|skill| skill.name() == name)
            .copied()
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered difficulty scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Tutorial,
    Easy,
    Standard,
    Demanding,
    Brutal,
}

impl Difficulty {
    /// One step up the scale. Brutal is the ceiling.
    pub fn escalate(self) -> Difficulty {
        match self {
            Difficulty::Tutorial => Difficulty::Easy,
            Difficulty::Easy => Difficulty::Standard,
            Difficulty::Standard => Difficulty::Demanding,
            Difficulty::Demanding | Difficulty::Brutal => Difficulty::Brutal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Tutorial => "Tutorial",
            Difficulty::Easy => "Easy",
            Difficulty::Standard => "Standard",
            Difficulty::Demanding => "Demanding",
            Difficulty::Brutal => "Brutal",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Tutorial
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quest status.
///
/// Valid transitions:
/// - PENDING → COMPLETED (complete)
/// - PENDING → FAILED (fail / rollover)
/// - FAILED → PENDING (rollover re-arm only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    Pending,
    Completed,
    Failed,
}

impl QuestStatus {
    pub const ALL: [QuestStatus; 3] = [
        QuestStatus::Pending,
        QuestStatus::Completed,
        QuestStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestStatus::Pending => "pending",
            QuestStatus::Completed => "completed",
            QuestStatus::Failed => "failed",
        }
    }
}

impl Default for QuestStatus {
    fn default() -> Self {
        QuestStatus::Pending
    }
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fresh opaque quest identifier (32 lowercase hex characters).
pub fn new_quest_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// A single trackable habit instance with a deadline and a reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub title: String,
    pub tree: SkillTree,
    /// Skill display name, grouped under `tree`
    pub skill: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub estimated_effort: String,
    pub xp_reward: u64,
    pub streak_impact: u32,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub status: QuestStatus,
    #[serde(default = "new_quest_id")]
    pub id: String,
    #[serde(default)]
    pub urgency: bool,
    #[serde(default)]
    pub failure_count: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Quest {
    /// Create a pending quest for `skill` due on `deadline`.
    pub fn new(
        title: impl Into<String>,
        skill: Skill,
        difficulty: Difficulty,
        estimated_effort: impl Into<String>,
        xp_reward: u64,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            tree: skill.tree(),
            skill: skill.name().to_string(),
            difficulty,
            estimated_effort: estimated_effort.into(),
            xp_reward,
            streak_impact: 1,
            deadline,
            status: QuestStatus::Pending,
            id: new_quest_id(),
            urgency: false,
            failure_count: 0,
            notes: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == QuestStatus::Pending
    }

    /// Mark the quest done. Clears urgency and the running failure count.
    pub fn mark_completed(&mut self) {
        self.status = QuestStatus::Completed;
        self.urgency = false;
        self.failure_count = 0;
    }

    /// Mark the quest failed and apply escalation.
    pub fn mark_failed(&mut self) {
        self.status = QuestStatus::Failed;
        self.escalate_failure();
    }

    /// Apply the doubling rule after a failure.
    pub fn escalate_failure(&mut self) {
        self.failure_count += 1;
        self.urgency = true;
        self.difficulty = self.difficulty.escalate();
        self.xp_reward = self.xp_reward.saturating_mul(2);
        let entry = format!("Failure streak: {}", self.failure_count);
        self.notes = Some(match self.notes.take() {
            Some(existing) if !existing.is_empty() => format!("{existing} | {entry}"),
            _ => entry,
        });
    }

    /// Re-open the quest with a fresh deadline.
    pub fn reset_for_new_day(&mut self, new_deadline: NaiveDate) {
        self.status = QuestStatus::Pending;
        self.deadline = new_deadline;
    }

    /// First six characters of the id, as shown in listings.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(6)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}
