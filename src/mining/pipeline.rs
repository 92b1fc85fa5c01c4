use std::{
    io::Write,
    time::Instant,
};

use super::{
    aggregator::ExampleAggregator,
    coverage::{
        CoverageReport,
        CoverageTracker,
    },
    source::ExampleSource,
};
use crate::{
    anki::StoreClient,
    core::{
        Character,
        ReigoError,
    },
};

pub const DEFAULT_EXAMPLE_FIELD: &str = "Example Word";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub quota: usize,
    pub write_back: bool,
    pub example_field: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            quota: super::aggregator::DEFAULT_QUOTA,
            write_back: false,
            example_field: DEFAULT_EXAMPLE_FIELD.to_string(),
        }
    }
}

/// Processes `characters` in order, printing `<char> -> <examples>` for each and the
/// coverage report at the end. Any store error stops the run; notes already written
/// keep their new examples.
pub fn run<S: StoreClient + ?Sized, W: Write>(
    store: &S,
    characters: &[Character],
    sources: &[ExampleSource],
    options: &RunOptions,
    out: &mut W,
) -> Result<CoverageReport, ReigoError> {
    let start = Instant::now();
    let aggregator = ExampleAggregator::new(store, sources, options.quota);
    let mut tracker = CoverageTracker::with_buckets(sources.iter().map(|s| s.bucket.as_str()));

    log::info!(
        "Collecting up to {} example(s) for {} characters from {} sources",
        options.quota,
        characters.len(),
        sources.len()
    );

    let mut written = 0;
    for character in characters {
        let result = aggregator.aggregate(character.glyph)?;
        tracker.record(&result);

        let joined = result.examples.joined();
        writeln!(out, "{} -> {}", character.glyph, joined)?;

        if !options.write_back || result.is_missing() {
            continue;
        }
        if let Some(note_id) = character.id {
            store.update_note_field(note_id, &options.example_field, &joined)?;
            written += 1;
            log::info!("Updated note {} ({})", note_id, character.glyph);
        }
    }

    let report = tracker.report();
    write!(out, "{}", report)?;
    log::info!(
        "Processed {} characters, updated {} notes ({:.1}s)",
        report.total,
        written,
        start.elapsed().as_secs_f32()
    );
    Ok(report)
}
