use std::fmt;

/// Human-readable progress lines recorded by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    ReadingFiles,
    FilesRead { kept: usize, total: usize },
    CheckingSensitive,
    SensitiveFound(usize),
    TechDetected(String),
    ExtensionsIncluded(String),
    FilterCounts { ignored: usize, excluded: usize },
    FinalFileCount(usize),
    FileRemoved(String),
    FileReincluded(String),
    Cleared,
    GeneratingTree,
    CombiningContent,
    CombinationComplete,
    PreviewSkipped(u64),
    Stats {
        files: usize,
        bytes: u64,
        lines: usize,
        tokens: Option<usize>,
    },
    SavingStarted,
    SavingFile(String),
    Saved(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::ReadingFiles => write!(f, "Reading files..."),
            Status::FilesRead { kept, total } => {
                write!(f, "Read {} files, kept {} after ignore rules", total, kept)
            }
            Status::CheckingSensitive => write!(f, "Checking for sensitive files..."),
            Status::SensitiveFound(n) => {
                write!(f, "Warning: {} possibly sensitive file(s) withheld", n)
            }
            Status::TechDetected(techs) => write!(f, "Detected stack: {}", techs),
            Status::ExtensionsIncluded(exts) => write!(f, "Included extensions: {}", exts),
            Status::FilterCounts { ignored, excluded } => write!(
                f,
                "Filtered {} ignored and {} non-whitelisted file(s)",
                ignored, excluded
            ),
            Status::FinalFileCount(n) => write!(f, "{} file(s) selected", n),
            Status::FileRemoved(path) => write!(f, "Removed {}", path),
            Status::FileReincluded(path) => write!(f, "Re-included {}", path),
            Status::Cleared => write!(f, "Cleared"),
            Status::GeneratingTree => write!(f, "Generating directory tree..."),
            Status::CombiningContent => write!(f, "Combining file contents..."),
            Status::CombinationComplete => write!(f, "Combination complete"),
            Status::PreviewSkipped(bytes) => write!(
                f,
                "Preview skipped: {} selected exceeds the preview limit",
                format_bytes(*bytes)
            ),
            Status::Stats {
                files,
                bytes,
                lines,
                tokens,
            } => {
                write!(
                    f,
                    "{} file(s), {}, {} lines",
                    files,
                    format_bytes(*bytes),
                    lines
                )?;
                if let Some(tokens) = tokens {
                    write!(f, ", ~{} tokens", tokens)?;
                }
                Ok(())
            }
            Status::SavingStarted => write!(f, "Saving..."),
            Status::SavingFile(path) => write!(f, "Saving {}", path),
            Status::Saved(name) => write!(f, "Saved {}", name),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct StatusLog {
    entries: Vec<String>,
}

impl StatusLog {
    pub fn push(&mut self, status: Status) {
        log::info!("{}", status);
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.entries.push(format!("[{}] {}", stamp, status));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(50 * 1024 * 1024), "50 MB");
        assert_eq!(format_bytes(1_288_490_189), "1.2 GB");
        // GB is the largest unit
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_log_is_append_only_and_stamped() {
        let mut log = StatusLog::default();
        log.push(Status::ReadingFiles);
        log.push(Status::FinalFileCount(3));
        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].starts_with('['));
        assert!(entries[0].ends_with("] Reading files..."));
        assert!(entries[1].ends_with("3 file(s) selected"));
    }

    #[test]
    fn test_stats_with_tokens() {
        let s = Status::Stats {
            files: 2,
            bytes: 2048,
            lines: 10,
            tokens: Some(42),
        };
        assert_eq!(s.to_string(), "2 file(s), 2 KB, 10 lines, ~42 tokens");
    }
}
