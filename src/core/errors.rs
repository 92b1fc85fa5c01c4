use thiserror::Error;

use super::NoteId;

#[derive(Error, Debug)]
pub enum ReigoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from AnkiConnect during '{action}'")]
    HttpStatus { status: u16, action: String },

    #[error("AnkiConnect returned an error for '{action}': {message}")]
    Api { action: String, message: String },

    #[error("AnkiConnect returned no result for '{action}'")]
    MissingResult { action: String },

    #[error("Note {note_id} has no field '{field}'")]
    MissingField { note_id: NoteId, field: String },

    #[error("Note {note_id} is not a single character: '{value}'")]
    NotSingleCharacter { note_id: NoteId, value: String },

    #[error("Invalid settings: {0}")]
    Config(String),
}

impl From<std::io::Error> for ReigoError {
    fn from(error: std::io::Error) -> Self {
        ReigoError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for ReigoError {
    fn from(error: reqwest::Error) -> Self {
        ReigoError::Reqwest(Box::new(error))
    }
}
