//! Built-in quest blueprints and the starter set used when a new save is
//! bootstrapped.

use chrono::NaiveDate;
use serde::Serialize;

use crate::quest::{Difficulty, Quest, Skill, SkillTree};

/// A quest blueprint. Instantiating one yields a fresh pending quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestTemplate {
    pub title: &'static str,
    #[serde(serialize_with = "serialize_skill")]
    pub skill: Skill,
    pub difficulty: Difficulty,
    pub estimated_effort: &'static str,
    pub xp_reward: u64,
}

fn serialize_skill<S: serde::Serializer>(skill: &Skill, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(skill.name())
}

impl QuestTemplate {
    pub fn tree(&self) -> SkillTree {
        self.skill.tree()
    }

    pub fn instantiate(&self, deadline: NaiveDate) -> Quest {
        Quest::new(
            self.title,
            self.skill,
            self.difficulty,
            self.estimated_effort,
            self.xp_reward,
            deadline,
        )
    }
}

const QUEST_TEMPLATES: &[QuestTemplate] = &[
    QuestTemplate {
        title: "Shadow Coding Drill — solve a timed array problem",
        skill: Skill::Algorithms,
        difficulty: Difficulty::Standard,
        estimated_effort: "35 minutes",
        xp_reward: 95,
    },
    QuestTemplate {
        title: "Midnight Tafsir Reflection",
        skill: Skill::QuranUnderstanding,
        difficulty: Difficulty::Standard,
        estimated_effort: "25 minutes",
        xp_reward: 70,
    },
    QuestTemplate {
        title: "Hunter's Conditioning Circuit",
        skill: Skill::Strength,
        difficulty: Difficulty::Demanding,
        estimated_effort: "30 minutes",
        xp_reward: 110,
    },
    QuestTemplate {
        title: "Calm the Mind — pre-dawn breathing + du'a",
        skill: Skill::BehaviorDiscipline,
        difficulty: Difficulty::Easy,
        estimated_effort: "15 minutes",
        xp_reward: 45,
    },
    QuestTemplate {
        title: "Architect the Day — plan tomorrow's code session",
        skill: Skill::ProblemSolving,
        difficulty: Difficulty::Standard,
        estimated_effort: "20 minutes",
        xp_reward: 65,
    },
];

const STARTER_QUESTS: &[QuestTemplate] = &[
    QuestTemplate {
        title: "Pray all 5 obligatory prayers",
        skill: Skill::PrayerConsistency,
        difficulty: Difficulty::Tutorial,
        estimated_effort: "5 checkpoints",
        xp_reward: 40,
    },
    QuestTemplate {
        title: "Recite Qur'an for 5 minutes",
        skill: Skill::QuranRecitation,
        difficulty: Difficulty::Tutorial,
        estimated_effort: "5 minutes",
        xp_reward: 25,
    },
    QuestTemplate {
        title: "Perform 3 sets of 2 push-ups",
        skill: Skill::Strength,
        difficulty: Difficulty::Tutorial,
        estimated_effort: "3 sets",
        xp_reward: 30,
    },
    QuestTemplate {
        title: "Walk outdoors for 5 minutes",
        skill: Skill::Endurance,
        difficulty: Difficulty::Tutorial,
        estimated_effort: "5 minutes",
        xp_reward: 20,
    },
    QuestTemplate {
        title: "Count 1→20 and log it",
        skill: Skill::MathFundamentals,
        difficulty: Difficulty::Tutorial,
        estimated_effort: "10 minutes",
        xp_reward: 25,
    },
    QuestTemplate {
        title: "Watch 10 min programming basics + craft 3 examples",
        skill: Skill::ProgrammingBasics,
        difficulty: Difficulty::Standard,
        estimated_effort: "25 minutes",
        xp_reward: 60,
    },
];

/// The ordered planning catalog. Indices are stable and user-facing.
pub fn quest_templates() -> &'static [QuestTemplate] {
    QUEST_TEMPLATES
}

/// The starter quests for a brand-new save, all due on `today`.
pub fn starter_quests(today: NaiveDate) -> Vec<Quest> {
    STARTER_QUESTS
        .iter()
        .map(|template| template.instantiate(today))
        .collect()
}
