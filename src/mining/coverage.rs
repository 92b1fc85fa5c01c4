use std::fmt;

use super::aggregator::AggregationResult;

pub const MISSING_BUCKET: &str = "missing";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub name: String,
    pub characters: Vec<char>,
}

/// Which characters each bucket satisfied over a whole run.
///
/// Buckets are unions: a character found by two sources that share a bucket is listed
/// twice, so bucket sizes need not add up to `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageTracker {
    total: usize,
    buckets: Vec<Bucket>,
    missing: Vec<char>,
}

impl CoverageTracker {
    /// Registers buckets up front so empty ones still show in the report, in this order.
    pub fn with_buckets<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tracker = Self::default();
        for name in names {
            tracker.bucket_mut(name);
        }
        tracker
    }

    pub fn record(&mut self, result: &AggregationResult) {
        self.total += 1;
        if result.contributors.is_empty() {
            self.missing.push(result.character);
            return;
        }
        for contribution in &result.contributors {
            self.bucket_mut(&contribution.bucket).characters.push(result.character);
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn bucket(&self, name: &str) -> Option<&[char]> {
        self.buckets.iter().find(|b| b.name == name).map(|b| b.characters.as_slice())
    }

    pub fn missing(&self) -> &[char] {
        &self.missing
    }

    pub fn report(&self) -> CoverageReport {
        CoverageReport {
            total: self.total,
            buckets: self.buckets.clone(),
            missing: self.missing.clone(),
        }
    }

    fn bucket_mut(&mut self, name: &str) -> &mut Bucket {
        let index = match self.buckets.iter().position(|b| b.name == name) {
            Some(index) => index,
            None => {
                self.buckets.push(Bucket { name: name.to_string(), characters: Vec::new() });
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[index]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub total: usize,
    pub buckets: Vec<Bucket>,
    pub missing: Vec<char>,
}

fn write_bucket(f: &mut fmt::Formatter<'_>, name: &str, characters: &[char]) -> fmt::Result {
    let listed: Vec<String> = characters.iter().map(char::to_string).collect();
    writeln!(f, "{} ({}): {}", name, characters.len(), listed.join(" "))
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total: {}", self.total)?;
        for bucket in &self.buckets {
            write_bucket(f, &bucket.name, &bucket.characters)?;
        }
        write_bucket(f, MISSING_BUCKET, &self.missing)
    }
}
