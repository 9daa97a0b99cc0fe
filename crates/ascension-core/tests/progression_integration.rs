//! Integration tests for the full quest loop against an on-disk save.

use ascension_core::{
    Difficulty, GameEngine, JsonSaveFile, QuestStatus, Rank, Rejection, SaveStore,
};
use chrono::NaiveDate;
use tempfile::TempDir;

fn start_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

fn open(dir: &TempDir) -> GameEngine<JsonSaveFile> {
    let store = JsonSaveFile::new(dir.path().join("game_state.json"));
    GameEngine::open(store, "Houssam", start_day()).unwrap()
}

#[test]
fn test_first_run_bootstraps_starter_quests() {
    let dir = TempDir::new().unwrap();
    let engine = open(&dir);

    let state = engine.state();
    assert_eq!(state.current_day, start_day());
    assert_eq!(state.quests.len(), 6);
    assert!(state.quests.iter().all(|q| q.status == QuestStatus::Pending));

    let briefing = engine.morning_briefing();
    assert!(briefing.contains("TODAY'S ACTIVE MISSIONS"));
    assert!(briefing.contains("Pray all 5 obligatory prayers"));
}

#[test]
fn test_state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let mut engine = open(&dir);

    let prayer_id = engine.state().quests[0].id.clone();
    let pushups_id = engine.state().quests[2].id.clone();
    engine.complete_quest(&prayer_id[..8]).unwrap();
    engine.fail_quest(&pushups_id).unwrap();
    engine.schedule_quest(1, 2).unwrap();
    let (before, _) = engine.into_parts();

    let reopened = open(&dir);
    assert_eq!(reopened.state(), &before);
    assert_eq!(reopened.state().quests.len(), 7);
    assert_eq!(reopened.state().player.xp, 40);
}

#[test]
fn test_day_cycle_escalates_ignored_habits() {
    let dir = TempDir::new().unwrap();
    let mut engine = open(&dir);

    // Complete everything except the walk, then close the day.
    let ids: Vec<String> = engine.state().quests.iter().map(|q| q.id.clone()).collect();
    for (i, id) in ids.iter().enumerate() {
        if i != 3 {
            assert!(engine.complete_quest(id).unwrap().is_applied());
        }
    }
    // 40 + 25 + 30 + 25 + 60 = 180 XP: one level, 60 left over.
    assert_eq!(engine.state().player.level, 2);
    assert_eq!(engine.state().player.xp, 60);

    let rollover = engine.advance_day().unwrap();
    assert_eq!(rollover.rearmed.len(), 1);
    assert_eq!(rollover.rearmed[0].id, ids[3]);
    assert!(rollover.to_string().contains("returned angrier"));

    let walk = &engine.state().quests[3];
    assert_eq!(walk.status, QuestStatus::Pending);
    assert_eq!(walk.deadline, start_day().succ_opt().unwrap());
    assert_eq!(walk.difficulty, Difficulty::Easy);
    assert_eq!(walk.xp_reward, 40);
    assert!(walk.urgency);

    // Completed quests stay completed across the rollover.
    assert_eq!(engine.state().quests[0].status, QuestStatus::Completed);

    let briefing = engine.morning_briefing();
    assert!(briefing.contains("Walk outdoors for 5 minutes"));
    assert!(briefing.contains("!!"));

    let saved = JsonSaveFile::new(dir.path().join("game_state.json"))
        .load()
        .unwrap()
        .unwrap();
    assert_eq!(&saved, engine.state());
}

#[test]
fn test_big_award_unlocks_titles_and_rank() {
    let dir = TempDir::new().unwrap();
    let mut engine = open(&dir);

    // Let the programming quest rot for a while: 60 XP doubles each day.
    let id = engine.state().quests[5].id.clone();
    for _ in 0..8 {
        engine.advance_day().unwrap();
    }
    assert_eq!(engine.state().quests[5].xp_reward, 60 * 256);
    assert_eq!(engine.state().quests[5].difficulty, Difficulty::Brutal);

    let outcome = engine.complete_quest(&id).unwrap();
    let completion = outcome.applied().unwrap();
    // 15360 XP clears levels 1 through 10 (10780 XP in total).
    assert_eq!(completion.award.levels_gained, 10);
    assert_eq!(completion.new_level, 11);
    assert!(completion
        .award
        .unlocked_titles
        .contains(&"Beginner Seeker".to_string()));
    assert!(outcome.to_string().contains("Unlocked titles: Beginner Seeker"));
    assert_eq!(
        completion.award.unlocked_titles,
        vec!["Beginner Seeker".to_string(), "First Ember".to_string()]
    );
    assert_eq!(engine.state().player.rank, Rank::D);
    assert_eq!(engine.state().player.xp, 15360 - 10780);
}

#[test]
fn test_refusals_leave_save_untouched() {
    let dir = TempDir::new().unwrap();
    let mut engine = open(&dir);
    let path = dir.path().join("game_state.json");
    let before = std::fs::read_to_string(&path).unwrap();

    let missing = engine.complete_quest("not-an-id").unwrap();
    assert!(matches!(missing.rejection(), Some(Rejection::NotFound { .. })));
    let invalid = engine.schedule_quest(99, 1).unwrap();
    assert!(matches!(
        invalid.rejection(),
        Some(Rejection::InvalidSelection { .. })
    ));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}
