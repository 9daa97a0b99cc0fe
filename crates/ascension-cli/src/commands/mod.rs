pub mod config;
pub mod quest;

use ascension_core::{data_dir, Config, GameEngine, JsonSaveFile};
use chrono::Local;

/// Open the engine on the configured save file, bootstrapping on first run.
pub fn open_engine(config: &Config) -> Result<GameEngine<JsonSaveFile>, Box<dyn std::error::Error>> {
    let path = config.save_path_in(&data_dir()?);
    tracing::debug!(path = %path.display(), "opening save file");
    let store = JsonSaveFile::new(path);
    let today = Local::now().date_naive();
    Ok(GameEngine::open(store, &config.player.name, today)?)
}
