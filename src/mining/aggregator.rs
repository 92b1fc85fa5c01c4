use std::collections::HashSet;

use super::source::ExampleSource;
use crate::{
    anki::StoreClient,
    core::{
        ReadingPattern,
        ReigoError,
    },
};

pub const DEFAULT_QUOTA: usize = 5;
pub const EXAMPLE_SEPARATOR: &str = " 、 ";

/// Rendered examples in insertion order, deduplicated by exact text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleSet {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl ExampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the text was already present.
    pub fn insert(&mut self, text: String) -> bool {
        if self.seen.contains(&text) {
            return false;
        }
        self.seen.insert(text.clone());
        self.entries.push(text);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn joined(&self) -> String {
        self.entries.join(EXAMPLE_SEPARATOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub source: String,
    pub bucket: String,
    pub found: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    pub character: char,
    pub examples: ExampleSet,
    pub contributors: Vec<Contribution>,
}

impl AggregationResult {
    pub fn is_missing(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn contributing_sources(&self) -> Vec<&str> {
        self.contributors.iter().map(|c| c.source.as_str()).collect()
    }
}

/// Walks the fallback chain for one character at a time, filling the quota greedily
/// from the front of the chain.
pub struct ExampleAggregator<'a, S: StoreClient + ?Sized> {
    store: &'a S,
    sources: &'a [ExampleSource],
    quota: usize,
}

impl<'a, S: StoreClient + ?Sized> ExampleAggregator<'a, S> {
    pub fn new(store: &'a S, sources: &'a [ExampleSource], quota: usize) -> Self {
        Self { store, sources, quota }
    }

    pub fn aggregate(&self, character: char) -> Result<AggregationResult, ReigoError> {
        let pattern = ReadingPattern::new(character)?;
        let mut examples = ExampleSet::new();
        let mut contributors = Vec::new();

        // Every source is consulted; once the quota is met the remaining ones see a zero
        // budget and return without a store round trip.
        for source in self.sources {
            let remaining = self.quota.saturating_sub(examples.len());
            let found = source.find_examples(self.store, &pattern, remaining)?;
            if found.is_empty() {
                continue;
            }

            log::debug!("{}: {} example(s) for {}", source.name, found.len(), character);
            for example in &found {
                examples.insert(example.display_text());
            }
            contributors.push(Contribution {
                source: source.name.clone(),
                bucket: source.bucket.clone(),
                found: found.len(),
            });
        }

        Ok(AggregationResult { character, examples, contributors })
    }
}
