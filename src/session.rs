use crate::assemble;
use crate::candidate::CandidateFile;
use crate::classify::{classify, ClassificationResult, Rules};
use crate::error::Result;
use crate::output::{self, Artifact, AssembledFile, Bundle, OutputFormat};
use crate::status::{Status, StatusLog};
use crate::tech::Tech;
use crate::tokens;
use crate::tree;

/// Aggregate included size above which the automatic preview is skipped.
pub const PREVIEW_SIZE_LIMIT: u64 = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub preview_limit: u64,
    pub count_tokens: bool,
    /// Reader threads for the preview; 0 means one per CPU.
    pub jobs: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            preview_limit: PREVIEW_SIZE_LIMIT,
            count_tokens: false,
            jobs: 0,
        }
    }
}

/// Accumulated classification state for one user selection.
///
/// Every mutation goes through `&mut self`, so batches are applied one at a
/// time in the order the caller submits them.
pub struct Session<'r> {
    rules: &'r Rules,
    options: SessionOptions,
    result: ClassificationResult,
    project_name: String,
    techs: Vec<Tech>,
    log: StatusLog,
}

impl<'r> Session<'r> {
    pub fn new(rules: &'r Rules) -> Self {
        Self::with_options(rules, SessionOptions::default())
    }

    pub fn with_options(rules: &'r Rules, options: SessionOptions) -> Self {
        Session {
            rules,
            options,
            result: ClassificationResult::default(),
            project_name: String::new(),
            techs: Vec::new(),
            log: StatusLog::default(),
        }
    }

    pub fn result(&self) -> &ClassificationResult {
        &self.result
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Stack detected by the most recent batch.
    pub fn techs(&self) -> &[Tech] {
        &self.techs
    }

    pub fn log(&self) -> &[String] {
        self.log.entries()
    }

    /// Records a line produced outside the session, e.g. after saving.
    pub fn record(&mut self, status: Status) {
        self.log.push(status);
    }

    pub fn submit(&mut self, batch: Vec<CandidateFile>) -> &ClassificationResult {
        self.log.push(Status::ReadingFiles);

        if self.result.is_empty() && self.project_name.is_empty() {
            if let Some(first) = batch.first() {
                self.project_name = project_name_from(&first.path);
            }
        }

        let outcome = classify(self.rules, batch);

        self.log.push(Status::FilesRead {
            kept: outcome.total - outcome.ignored,
            total: outcome.total,
        });
        self.log.push(Status::CheckingSensitive);
        if !outcome.sensitive.is_empty() {
            self.log.push(Status::SensitiveFound(outcome.sensitive.len()));
        }

        let techs: Vec<&str> = outcome.techs.iter().map(|t| t.name()).collect();
        self.log.push(Status::TechDetected(techs.join(", ")));
        self.log
            .push(Status::ExtensionsIncluded(outcome.whitelist.extensions().join(", ")));
        self.log.push(Status::FilterCounts {
            ignored: outcome.ignored,
            excluded: outcome.excluded.len(),
        });
        self.log.push(Status::FinalFileCount(outcome.included.len()));

        self.result.merge(&outcome);
        self.techs = outcome.techs;
        &self.result
    }

    /// Drops a file from the included bucket.
    pub fn remove(&mut self, path: &str) -> bool {
        let before = self.result.included.len();
        self.result.included.retain(|f| f.path != path);
        let removed = self.result.included.len() != before;
        if removed {
            self.log.push(Status::FileRemoved(path.to_string()));
        }
        removed
    }

    /// Moves a whitelist-excluded file into the included bucket.
    pub fn include_excluded(&mut self, path: &str) -> bool {
        match take(&mut self.result.excluded, path) {
            Some(file) => self.reinclude(file),
            None => false,
        }
    }

    /// Moves a withheld sensitive file into the included bucket.
    pub fn include_sensitive(&mut self, path: &str) -> bool {
        match take(&mut self.result.sensitive, path) {
            Some(file) => self.reinclude(file),
            None => false,
        }
    }

    fn reinclude(&mut self, file: CandidateFile) -> bool {
        self.log.push(Status::FileReincluded(file.path.clone()));
        self.result.included.push(file);
        self.result.sort();
        true
    }

    pub fn clear(&mut self) {
        self.result = ClassificationResult::default();
        self.project_name.clear();
        self.techs.clear();
        self.log.clear();
        self.log.push(Status::Cleared);
    }

    pub fn is_large(&self) -> bool {
        self.result.included_size() >= self.options.preview_limit
    }

    pub fn tree(&self) -> String {
        tree::render(&self.result.included_paths())
    }

    /// Parallel assembly for on-screen preview. Skipped when nothing is
    /// included or the selection is over the preview limit.
    pub fn preview(&mut self, format: OutputFormat) -> Result<Option<Artifact>> {
        if self.result.included.is_empty() {
            return Ok(None);
        }
        if self.is_large() {
            self.log
                .push(Status::PreviewSkipped(self.result.included_size()));
            return Ok(None);
        }

        self.log.push(Status::GeneratingTree);
        let tree = self.tree();
        self.log.push(Status::CombiningContent);
        let files = assemble::read_parallel(&self.result.included, self.options.jobs);

        let artifact = self.finish(format, &tree, &files)?;
        self.log.push(Status::CombinationComplete);
        Ok(Some(artifact))
    }

    /// Full assembly regardless of size, reading files one at a time.
    pub fn export(&mut self, format: OutputFormat) -> Result<Option<Artifact>> {
        if self.result.included.is_empty() {
            return Ok(None);
        }

        self.log.push(Status::SavingStarted);
        self.log.push(Status::GeneratingTree);
        let tree = self.tree();
        self.log.push(Status::CombiningContent);

        let log = &mut self.log;
        let files = assemble::read_sequential(&self.result.included, |f| {
            log.push(Status::SavingFile(f.path.clone()))
        });

        let artifact = self.finish(format, &tree, &files)?;
        self.log.push(Status::CombinationComplete);
        Ok(Some(artifact))
    }

    fn finish(
        &mut self,
        format: OutputFormat,
        tree: &str,
        files: &[AssembledFile],
    ) -> Result<Artifact> {
        let bundle = Bundle {
            project_name: &self.project_name,
            tree,
            files,
            exported_at: chrono::Utc::now(),
        };
        let content = output::combine(format, &bundle)?;

        let tokens = if self.options.count_tokens {
            Some(tokens::count_tokens(&content))
        } else {
            None
        };
        self.log.push(Status::Stats {
            files: files.len(),
            bytes: content.len() as u64,
            lines: content.split('\n').count(),
            tokens,
        });

        Ok(Artifact::new(format, &self.project_name, content))
    }
}

fn take(bucket: &mut Vec<CandidateFile>, path: &str) -> Option<CandidateFile> {
    let pos = bucket.iter().position(|f| f.path == path)?;
    Some(bucket.remove(pos))
}

fn project_name_from(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() > 1 {
        parts[0].to_string()
    } else {
        "project".to_string()
    }
}
