pub mod aggregator;
pub mod coverage;
pub mod feed;
pub mod pipeline;
pub mod source;

#[cfg(test)]
mod testing;

pub use aggregator::{
    AggregationResult,
    ExampleAggregator,
    ExampleSet,
    DEFAULT_QUOTA,
};
pub use coverage::{
    CoverageReport,
    CoverageTracker,
};
pub use feed::CharacterFeed;
pub use pipeline::{
    run,
    RunOptions,
};
pub use source::{
    default_sources,
    ExampleSource,
    ExtractionRule,
};
