use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    anki::api::DEFAULT_ENDPOINT,
    core::ReigoError,
    mining::{
        default_sources,
        pipeline::DEFAULT_EXAMPLE_FIELD,
        CharacterFeed,
        ExampleSource,
        RunOptions,
        DEFAULT_QUOTA,
    },
    persistence,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub quota: usize,
    pub write_back: bool,
    pub example_field: String,
    pub feed_deck: String,
    pub feed_field: String,
    pub use_static_list: bool,
    pub sources: Vec<ExampleSource>, // Consulted in this order
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            quota: DEFAULT_QUOTA,
            write_back: false,
            example_field: DEFAULT_EXAMPLE_FIELD.to_string(),
            feed_deck: "RTK".to_string(),
            feed_field: "Character".to_string(),
            use_static_list: false,
            sources: default_sources(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        persistence::get_data_file_path(SETTINGS_FILE)
    }

    pub fn load(path: &Path) -> Result<Self, ReigoError> {
        persistence::load_json(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), ReigoError> {
        persistence::save_json(self, path)
    }

    pub fn validate(&self) -> Result<(), ReigoError> {
        if self.quota == 0 {
            return Err(ReigoError::Config("quota must be at least 1".to_string()));
        }
        if self.sources.is_empty() {
            return Err(ReigoError::Config("at least one example source is required".to_string()));
        }
        if self.example_field.trim().is_empty() {
            return Err(ReigoError::Config("example_field must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn feed(&self) -> CharacterFeed {
        if self.use_static_list {
            CharacterFeed::bundled()
        } else {
            CharacterFeed::deck(&self.feed_deck, &self.feed_field)
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            quota: self.quota,
            write_back: self.write_back,
            example_field: self.example_field.clone(),
        }
    }
}
