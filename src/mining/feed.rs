use wana_kana::IsJapaneseChar;

use crate::{
    anki::StoreClient,
    core::{
        Character,
        ReigoError,
    },
};

/// Remembering the Kanji ordering, bundled for runs without a study deck.
pub const BUNDLED_CHARACTERS: &str = include_str!("../../data/rtk.txt");

/// Where the characters to process come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterFeed {
    /// A fixed list. These characters have no note, so nothing is written back.
    Static(Vec<char>),
    /// Every note in `deck`, each holding one character in `field`.
    Deck { deck: String, field: String },
}

impl CharacterFeed {
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED_CHARACTERS)
    }

    /// Whitespace is ignored so lists can be wrapped or space separated.
    pub fn from_text(text: &str) -> Self {
        Self::Static(text.chars().filter(|c| !c.is_whitespace()).collect())
    }

    pub fn deck(deck: &str, field: &str) -> Self {
        Self::Deck { deck: deck.to_string(), field: field.to_string() }
    }

    pub fn load<S: StoreClient + ?Sized>(&self, store: &S) -> Result<Vec<Character>, ReigoError> {
        match self {
            CharacterFeed::Static(glyphs) => {
                Ok(glyphs.iter().map(|&glyph| Character::unlinked(glyph)).collect())
            }
            CharacterFeed::Deck { deck, field } => load_deck(store, deck, field),
        }
    }
}

fn load_deck<S: StoreClient + ?Sized>(
    store: &S,
    deck: &str,
    field: &str,
) -> Result<Vec<Character>, ReigoError> {
    let query = format!("\"deck:{}\"", deck.replace('"', "\\\""));
    let note_ids = store.find_notes(&query)?;
    if note_ids.is_empty() {
        log::warn!("No notes found for {}", query);
        return Ok(Vec::new());
    }

    let notes = store.notes_info(&note_ids)?;
    let mut characters = Vec::with_capacity(notes.len());
    for note in &notes {
        let value = note.field(field)?;
        let mut chars = value.chars();
        let glyph = match (chars.next(), chars.next()) {
            (Some(glyph), None) => glyph,
            _ => {
                return Err(ReigoError::NotSingleCharacter {
                    note_id: note.note_id,
                    value: value.to_string(),
                })
            }
        };
        if !glyph.is_kanji() {
            log::warn!("Note {} holds '{}', which is not a kanji", note.note_id, glyph);
        }
        characters.push(Character::from_note(note.note_id, glyph));
    }

    log::info!("Loaded {} characters from {}", characters.len(), deck);
    Ok(characters)
}
