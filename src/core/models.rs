use super::reading::{
    normalize_reading,
    redact,
};

/// AnkiConnect note identifier.
pub type NoteId = i64;

/// A kanji under study. `id` is `None` when it came from the bundled static list
/// and so has no note to write back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: Option<NoteId>,
    pub glyph: char,
}

impl Character {
    pub fn from_note(id: NoteId, glyph: char) -> Self {
        Self { id: Some(id), glyph }
    }

    pub fn unlinked(glyph: char) -> Self {
        Self { id: None, glyph }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub owner_id: NoteId,   // Note the example was pulled from
    pub character: char,    // Kanji being practised
    pub word: String,       // Always contains `character` for bracket-parsed examples
    pub reading: String,    // Already cut at the first ';'
}

impl Example {
    pub fn new(owner_id: NoteId, character: char, word: &str, reading: &str) -> Self {
        Self {
            owner_id,
            character,
            word: word.to_string(),
            reading: normalize_reading(reading).to_string(),
        }
    }

    /// Redacted form stored on the study card, e.g. `勉■[べんきょう]`.
    pub fn display_text(&self) -> String {
        redact(self.character, &self.word, &self.reading)
    }
}
