//! The classification pipeline.
//!
//! Stages run in a fixed order, each seeing only the survivors of the
//! previous one: ignore rules, sensitive scan, stack detection and whitelist
//! resolution over what is left, then the whitelist split.

use crate::candidate::CandidateFile;
use crate::ignore::IgnoreSpec;
use crate::sensitive::SensitivePatterns;
use crate::tech::{self, Tech};
use crate::whitelist::Whitelist;
use std::collections::HashSet;
use std::path::Path;

/// Immutable rule tables shared by every batch of a session.
#[derive(Debug, Clone)]
pub struct Rules {
    pub ignore: IgnoreSpec,
    pub sensitive: SensitivePatterns,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            ignore: IgnoreSpec::compile(crate::ignore::DEFAULT_IGNORE_PATTERNS),
            sensitive: SensitivePatterns::default(),
        }
    }
}

impl Rules {
    /// Default rules plus the user's and the project's ignore files.
    pub fn load(root: &Path) -> Self {
        Rules {
            ignore: IgnoreSpec::load(root),
            sensitive: SensitivePatterns::default(),
        }
    }
}

/// Outcome of running one batch through the pipeline, before it is merged
/// into a session.
#[derive(Debug)]
pub struct BatchOutcome {
    pub total: usize,
    pub ignored: usize,
    pub included: Vec<CandidateFile>,
    pub excluded: Vec<CandidateFile>,
    pub sensitive: Vec<CandidateFile>,
    pub techs: Vec<Tech>,
    pub whitelist: Whitelist,
}

/// Runs one batch. Duplicate paths inside the batch keep their first entry.
pub fn classify(rules: &Rules, batch: Vec<CandidateFile>) -> BatchOutcome {
    let mut seen = HashSet::new();
    let batch: Vec<CandidateFile> = batch
        .into_iter()
        .filter(|f| seen.insert(f.path.clone()))
        .collect();
    let total = batch.len();

    let visible: Vec<CandidateFile> = batch
        .into_iter()
        .filter(|f| {
            let ignored = rules.ignore.is_ignored(&f.path);
            if ignored {
                log::debug!("{}: ignored", f.path);
            }
            !ignored
        })
        .collect();
    let ignored = total - visible.len();

    let (sensitive, remaining): (Vec<_>, Vec<_>) = visible
        .into_iter()
        .partition(|f| rules.sensitive.is_sensitive(f));

    let (_, techs) = tech::detect(&remaining);
    let whitelist = Whitelist::resolve(&techs);

    let (included, excluded): (Vec<_>, Vec<_>) =
        remaining.into_iter().partition(|f| whitelist.matches(&f.path));

    log::debug!(
        "Batch of {}: {} ignored, {} sensitive, {} included, {} excluded",
        total,
        ignored,
        sensitive.len(),
        included.len(),
        excluded.len()
    );

    BatchOutcome {
        total,
        ignored,
        included,
        excluded,
        sensitive,
        techs,
        whitelist,
    }
}

/// The three disjoint buckets, each sorted by path.
#[derive(Debug, Default, Clone)]
pub struct ClassificationResult {
    pub included: Vec<CandidateFile>,
    pub excluded: Vec<CandidateFile>,
    pub sensitive: Vec<CandidateFile>,
}

impl ClassificationResult {
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty() && self.sensitive.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.buckets().any(|f| f.path == path)
    }

    pub fn included_paths(&self) -> Vec<&str> {
        self.included.iter().map(|f| f.path.as_str()).collect()
    }

    pub fn included_size(&self) -> u64 {
        self.included.iter().map(|f| f.size).sum()
    }

    fn buckets(&self) -> impl Iterator<Item = &CandidateFile> {
        self.included
            .iter()
            .chain(self.excluded.iter())
            .chain(self.sensitive.iter())
    }

    /// Adds files whose path is not yet in any bucket.
    pub(crate) fn merge(&mut self, outcome: &BatchOutcome) {
        let mut known: HashSet<String> = self.buckets().map(|f| f.path.clone()).collect();

        for (bucket, incoming) in [
            (&mut self.included, &outcome.included),
            (&mut self.excluded, &outcome.excluded),
            (&mut self.sensitive, &outcome.sensitive),
        ] {
            for file in incoming {
                if known.insert(file.path.clone()) {
                    bucket.push(file.clone());
                }
            }
        }

        self.sort();
    }

    pub(crate) fn sort(&mut self) {
        for bucket in [&mut self.included, &mut self.excluded, &mut self.sensitive] {
            bucket.sort_by(|a, b| a.path.cmp(&b.path));
        }
    }
}
