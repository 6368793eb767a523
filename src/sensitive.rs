use crate::candidate::CandidateFile;
use std::collections::HashSet;

/// Files at or above this size are never content-scanned.
pub const CONTENT_SCAN_LIMIT: u64 = 1024 * 1024;

const SENSITIVE_FILE_NAMES: &[&str] = &[
    ".env",
    ".env.local",
    "credentials.json",
    "id_rsa",
    "id_dsa",
    "settings.json",
    "secret_token.txt",
];

const SENSITIVE_KEYWORDS: &[&str] = &[
    "API_KEY",
    "SECRET_KEY",
    "ACCESS_TOKEN",
    "PRIVATE_KEY",
    "PASSWORD",
    "client_secret",
    "api_key",
    "secret_key",
];

#[derive(Debug, Clone)]
pub struct SensitivePatterns {
    file_names: HashSet<String>,
    keywords: Vec<String>,
}

impl Default for SensitivePatterns {
    fn default() -> Self {
        SensitivePatterns::new(SENSITIVE_FILE_NAMES, SENSITIVE_KEYWORDS)
    }
}

impl SensitivePatterns {
    pub fn new(file_names: &[&str], keywords: &[&str]) -> Self {
        SensitivePatterns {
            file_names: file_names.iter().map(|n| n.to_lowercase()).collect(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Name match first; content is only read for files under 1 MiB and
    /// undecodable content counts as clean.
    pub fn is_sensitive(&self, file: &CandidateFile) -> bool {
        if self.file_names.contains(&file.basename()) {
            log::debug!("{}: sensitive file name", file.path);
            return true;
        }

        if file.size >= CONTENT_SCAN_LIMIT {
            return false;
        }

        match file.read_text() {
            Ok(content) => match self.keywords.iter().find(|k| content.contains(k.as_str())) {
                Some(keyword) => {
                    log::debug!("{}: contains {}", file.path, keyword);
                    true
                }
                None => false,
            },
            Err(e) => {
                log::debug!("{}: skipping content scan ({})", file.path, e);
                false
            }
        }
    }
}
