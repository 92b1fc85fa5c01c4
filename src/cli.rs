use std::path::PathBuf;

use clap::Parser;

use crate::{
    mining::CharacterFeed,
    settings::Settings,
};

/// Fill kanji study cards with redacted example words from your other Anki decks.
#[derive(Debug, Parser)]
#[command(name = "reigo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// AnkiConnect endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Maximum examples per character
    #[arg(short, long)]
    pub quota: Option<usize>,

    /// Write the examples back to each character's note
    #[arg(short, long)]
    pub write: bool,

    /// Use the bundled character list instead of the study deck
    #[arg(long, conflicts_with = "chars")]
    pub static_list: bool,

    /// Only process these characters (never written back)
    #[arg(long)]
    pub chars: Option<String>,

    /// Settings file to use instead of the one in the app data directory
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Persist the effective settings before running
    #[arg(long)]
    pub save_settings: bool,
}

impl Cli {
    pub fn settings_path(&self) -> PathBuf {
        self.settings.clone().unwrap_or_else(Settings::default_path)
    }

    /// Flags take precedence over the settings file.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(quota) = self.quota {
            settings.quota = quota;
        }
        if self.write {
            settings.write_back = true;
        }
        if self.static_list {
            settings.use_static_list = true;
        }
    }

    pub fn feed(&self, settings: &Settings) -> CharacterFeed {
        match &self.chars {
            Some(chars) => CharacterFeed::from_text(chars),
            None => settings.feed(),
        }
    }
}
