//! Quest loop commands: briefing, planning, completion and rollover.

use clap::Subcommand;

use super::open_engine;
use ascension_core::Config;

#[derive(Subcommand)]
pub enum QuestAction {
    /// Show the dawn mission briefing
    Morning,
    /// Display current progression state
    Status {
        /// Dump the raw game state as JSON
        #[arg(long)]
        json: bool,
    },
    /// List quest blueprints, or schedule one by index
    Plan {
        /// Template index to schedule
        index: Option<usize>,
        /// Days from now for the deadline
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        due: i64,
    },
    /// List the quest blueprint catalog
    Templates,
    /// Mark a quest as complete
    Complete {
        /// Quest identifier (prefix ok)
        quest_id: String,
    },
    /// Mark a quest as failed
    Fail {
        /// Quest identifier (prefix ok)
        quest_id: String,
    },
    /// Trigger midnight rollover
    Advance,
}

pub fn run(action: QuestAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = open_engine(config)?;

    match action {
        QuestAction::Morning => println!("{}", engine.morning_briefing()),
        QuestAction::Status { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(engine.state())?);
            } else {
                println!("{}", engine.status_overview());
            }
        }
        QuestAction::Plan { index: None, .. } | QuestAction::Templates => {
            println!("{}", engine.list_templates())
        }
        QuestAction::Plan {
            index: Some(index),
            due,
        } => println!("{}", engine.schedule_quest(index, due)?),
        QuestAction::Complete { quest_id } => println!("{}", engine.complete_quest(&quest_id)?),
        QuestAction::Fail { quest_id } => println!("{}", engine.fail_quest(&quest_id)?),
        QuestAction::Advance => println!("{}", engine.advance_day()?),
    }
    Ok(())
}
