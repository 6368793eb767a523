use crate::candidate::basename;
use crate::tech::Tech;
use std::collections::BTreeSet;

const COMMON: &[&str] = &[
    ".md",
    ".txt",
    ".json",
    ".yml",
    ".yaml",
    ".toml",
    ".xml",
    ".html",
    "license",
    "dockerfile",
    "readme",
];

const NODE_AUXILIARY: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".css", ".scss", ".less", ".mjs", ".cjs", ".npmrc",
];

fn tech_entries(tech: Tech) -> &'static [&'static str] {
    match tech {
        Tech::NodeJs => NODE_AUXILIARY,
        Tech::React => &[".js", ".jsx", ".ts", ".tsx"],
        Tech::Vue => &[".vue", ".js", ".ts"],
        Tech::Svelte => &[".svelte", ".js", ".ts"],
        Tech::Angular => &[".ts", ".html", ".css", ".scss"],
        Tech::TypeScript => &[".ts", ".tsx"],
        Tech::JavaScript => &[".js", ".jsx", ".mjs", ".cjs"],
        Tech::Python => &[".py", ".ipynb", "requirements.txt", "pipfile"],
        Tech::Java => &[".java", ".properties", ".gradle", ".xml"],
        Tech::Go => &[".go"],
        Tech::Rust => &[".rs"],
        Tech::Ruby => &[".rb"],
        Tech::Terraform => &[".tf", ".tf.json"],
        Tech::Unknown => &[
            ".js", ".jsx", ".ts", ".tsx", ".py", ".java", ".go", ".rs", ".rb", ".css", ".scss",
            ".html",
        ],
    }
}

/// Allowed dot-prefixed extensions and bare file names for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    entries: BTreeSet<String>,
}

impl Whitelist {
    pub fn resolve(ranked: &[Tech]) -> Self {
        let mut entries: BTreeSet<String> = COMMON.iter().map(|e| e.to_string()).collect();

        let detected: Vec<Tech> = if ranked.is_empty() || ranked.contains(&Tech::Unknown) {
            vec![Tech::Unknown]
        } else {
            ranked.to_vec()
        };

        for tech in &detected {
            entries.extend(tech_entries(*tech).iter().map(|e| e.to_string()));
        }

        if detected.iter().any(|t| t.is_script_adjacent()) {
            entries.extend(NODE_AUXILIARY.iter().map(|e| e.to_string()));
        }

        Whitelist { entries }
    }

    /// Bare entries must equal the file name; extensions are tested against
    /// the whole lowercased path.
    pub fn matches(&self, path: &str) -> bool {
        let lower_path = path.to_lowercase();
        let base = basename(&lower_path);

        if self.entries.contains(base) {
            return true;
        }

        self.entries
            .iter()
            .any(|e| e.starts_with('.') && lower_path.ends_with(e.as_str()))
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    /// Sorted dot-prefixed entries, for the status log.
    pub fn extensions(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.starts_with('.'))
            .map(String::as_str)
            .collect()
    }
}
