use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    anki::{
        Note,
        StoreClient,
    },
    core::{
        Example,
        ReadingPattern,
        ReigoError,
    },
};

/// How a matched note is turned into a `(word, reading)` example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionRule {
    /// Parse `word[reading]` out of the searched field.
    RegexBracket,
    /// Take the searched field as the headword and the start of `definition_field`,
    /// up to its first space, as the reading.
    DictionaryPrefix { definition_field: String },
}

/// One deck/field pair consulted while looking for examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSource {
    pub name: String,
    pub bucket: String, // Coverage bucket; sources may share one
    pub deck: String,
    pub search_field: String,
    pub rule: ExtractionRule,
}

impl ExampleSource {
    pub fn new(
        name: &str,
        bucket: &str,
        deck: &str,
        search_field: &str,
        rule: ExtractionRule,
    ) -> Self {
        Self {
            name: name.to_string(),
            bucket: bucket.to_string(),
            deck: deck.to_string(),
            search_field: search_field.to_string(),
            rule,
        }
    }

    /// `"deck:Sentence Cards" Sentence:*強*`
    pub fn query(&self, character: char) -> String {
        format!(
            "\"deck:{}\" {}:*{}*",
            self.deck.replace('"', "\\\""),
            self.search_field,
            character
        )
    }

    /// Up to `quota` examples for the pattern's character. A zero quota returns
    /// immediately without touching the store.
    pub fn find_examples<S: StoreClient + ?Sized>(
        &self,
        store: &S,
        pattern: &ReadingPattern,
        quota: usize,
    ) -> Result<Vec<Example>, ReigoError> {
        if quota == 0 {
            return Ok(Vec::new());
        }

        let note_ids = store.find_notes(&self.query(pattern.character()))?;
        if note_ids.is_empty() {
            return Ok(Vec::new());
        }

        let selected: Vec<_> = note_ids.into_iter().take(quota).collect();
        let notes = store.notes_info(&selected)?;

        let mut examples = Vec::with_capacity(notes.len());
        for note in &notes {
            match self.extract(note, pattern)? {
                Some(example) => examples.push(example),
                None => log::warn!(
                    "{}: no example for {} in note {}",
                    self.name,
                    pattern.character(),
                    note.note_id
                ),
            }
        }
        Ok(examples)
    }

    fn extract(
        &self,
        note: &Note,
        pattern: &ReadingPattern,
    ) -> Result<Option<Example>, ReigoError> {
        let character = pattern.character();
        let searched = note.field(&self.search_field)?;

        let example = match &self.rule {
            ExtractionRule::RegexBracket => pattern
                .find(searched)
                .map(|(word, reading)| Example::new(note.note_id, character, word, reading)),
            ExtractionRule::DictionaryPrefix { definition_field } => {
                let definition = note.field(definition_field)?;
                match definition.split_once(' ') {
                    Some((reading, _)) if searched.contains(character) => {
                        Some(Example::new(note.note_id, character, searched, reading))
                    }
                    _ => None,
                }
            }
        };
        Ok(example)
    }
}

/// The fallback chain in priority order: curated vocabulary, then the two sentence
/// deck fields, then the monolingual dictionary.
pub fn default_sources() -> Vec<ExampleSource> {
    vec![
        ExampleSource::new(
            "vocabulary",
            "vocabulary",
            "JLPT Tango N5 (abandoned)",
            "Reading",
            ExtractionRule::RegexBracket,
        ),
        ExampleSource::new(
            "sentence",
            "sentence",
            "Sentence Cards",
            "Sentence",
            ExtractionRule::RegexBracket,
        ),
        ExampleSource::new(
            "expression",
            "sentence",
            "Sentence Cards",
            "Expression",
            ExtractionRule::RegexBracket,
        ),
        ExampleSource::new(
            "dictionary",
            "dictionary",
            "Shinmeikai Definitions",
            "Word",
            ExtractionRule::DictionaryPrefix { definition_field: "Full Definition".to_string() },
        ),
    ]
}
