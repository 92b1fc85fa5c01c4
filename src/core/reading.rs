use regex::Regex;

use super::ReigoError;

/// Characters that end a word in the `word[reading]` format. Keeping them out of the
/// word lets several annotated words share one field.
pub const WORD_DELIMITERS: &[char] =
    &['[', ']', '「', '」', '(', ')', '、', '\u{3000}', ';', ' ', ',', '.'];

pub const REDACTION_GLYPH: char = '■';

/// Finds `word[reading]` annotations whose word contains one particular kanji.
#[derive(Debug, Clone)]
pub struct ReadingPattern {
    character: char,
    regex: Regex,
}

impl ReadingPattern {
    pub fn new(character: char) -> Result<Self, ReigoError> {
        let word_char = format!(
            "[^{}]",
            WORD_DELIMITERS.iter().map(|c| regex::escape(&c.to_string())).collect::<String>()
        );
        let pattern = format!(
            r"({word_char}*{target}{word_char}*)\[([^\]]+)\]",
            target = regex::escape(&character.to_string()),
        );
        Ok(Self { character, regex: Regex::new(&pattern)? })
    }

    pub fn character(&self) -> char {
        self.character
    }

    /// First annotated word in `text` that contains the character, as `(word, reading)`.
    /// The reading is returned as written; see [`normalize_reading`].
    pub fn find<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str)> {
        let captures = self.regex.captures(text)?;
        Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
    }
}

/// Keeps only the first of several `;`-separated alternate readings.
pub fn normalize_reading(reading: &str) -> &str {
    reading.split_once(';').map_or(reading, |(first, _)| first)
}

/// `勉強` + `べんきょう` for `強` -> `勉■[べんきょう]`
pub fn redact(character: char, word: &str, reading: &str) -> String {
    let mut redacted: String =
        word.chars().map(|c| if c == character { REDACTION_GLYPH } else { c }).collect();
    redacted.push('[');
    redacted.push_str(reading);
    redacted.push(']');
    redacted
}
