pub mod assemble;
pub mod candidate;
pub mod classify;
pub mod config;
pub mod error;
pub mod ignore;
pub mod output;
pub mod sensitive;
pub mod session;
pub mod status;
pub mod tech;
pub mod tokens;
pub mod tree;
pub mod walk;
pub mod whitelist;

pub use candidate::{CandidateFile, ContentSource};
pub use classify::{classify, BatchOutcome, ClassificationResult, Rules};
pub use error::{Error, Result};
pub use ignore::IgnoreSpec;
pub use output::{combine, Artifact, AssembledFile, Bundle, OutputFormat};
pub use sensitive::SensitivePatterns;
pub use session::{Session, SessionOptions, PREVIEW_SIZE_LIMIT};
pub use status::Status;
pub use tech::{Scoreboard, Tech};
pub use whitelist::Whitelist;

use std::path::Path;

/// Walks `root` and classifies everything under it as a single batch.
pub fn classify_dir(root: &Path, rules: &Rules) -> Result<ClassificationResult> {
    let files = walk::collect(root, &rules.ignore)?;
    let mut session = Session::new(rules);
    Ok(session.submit(files).clone())
}
