//! JSON save storage for [`GameState`].
//!
//! Saves are whole-document overwrites. A crash in the middle of a write can
//! leave a truncated file behind; the next load then fails loudly instead of
//! silently starting over.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{CoreError, Result};
use crate::quest::Skill;
use crate::state::GameState;

/// Where the engine reads and writes the game state.
pub trait SaveStore {
    /// Read the saved state. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<GameState>>;

    /// Replace the saved state with `state`.
    fn save(&mut self, state: &GameState) -> Result<()>;
}

/// Load the saved state, or bootstrap and immediately save a new one.
pub fn load_or_bootstrap<S: SaveStore>(
    store: &mut S,
    player_name: &str,
    today: NaiveDate,
) -> Result<GameState> {
    if let Some(state) = store.load()? {
        return Ok(state);
    }
    info!(%today, player = player_name, "no save found, bootstrapping starter quests");
    let state = GameState::bootstrap(player_name, today);
    store.save(&state)?;
    Ok(state)
}

/// Pretty-printed JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonSaveFile {
    path: PathBuf,
}

impl JsonSaveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn validate(state: &GameState) -> Result<()> {
    if state.player.level == 0 {
        return Err(CoreError::Validation("player level must be at least 1".into()));
    }
    for quest in &state.quests {
        if quest.id.is_empty() {
            return Err(CoreError::Validation(format!(
                "quest '{}' has an empty id",
                quest.title
            )));
        }
        if Skill::from_name(&quest.skill).map(|skill| skill.tree()) != Some(quest.tree) {
            return Err(CoreError::Validation(format!(
                "quest '{}': skill '{}' is not part of the {} tree",
                quest.title, quest.skill, quest.tree
            )));
        }
    }
    Ok(())
}

impl SaveStore for JsonSaveFile {
    fn load(&self) -> Result<Option<GameState>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::LoadFailed {
                    path: self.path.clone(),
                    message: e.to_string(),
                })
            }
        };
        let state: GameState =
            serde_json::from_str(&content).map_err(|e| CoreError::LoadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        validate(&state)?;
        debug!(path = %self.path.display(), quests = state.quests.len(), "save loaded");
        Ok(Some(state))
    }

    fn save(&mut self, state: &GameState) -> Result<()> {
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content).map_err(|source| CoreError::SaveFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), day = %state.current_day, "save written");
        Ok(())
    }
}

/// In-memory store for tests and dry runs. Counts saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Option<GameState>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: GameState) -> Self {
        Self {
            state: Some(state),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<Option<GameState>> {
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &GameState) -> Result<()> {
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }
}
