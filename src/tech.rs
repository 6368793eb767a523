use crate::candidate::CandidateFile;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

pub const MANIFEST_WEIGHT: u32 = 5;
pub const MARKER_WEIGHT: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tech {
    React,
    Vue,
    Svelte,
    Angular,
    TypeScript,
    JavaScript,
    Python,
    Java,
    Go,
    Rust,
    Ruby,
    Terraform,
    NodeJs,
    Unknown,
}

impl Tech {
    pub const DETECTABLE: [Tech; 13] = [
        Tech::React,
        Tech::Vue,
        Tech::Svelte,
        Tech::Angular,
        Tech::TypeScript,
        Tech::JavaScript,
        Tech::Python,
        Tech::Java,
        Tech::Go,
        Tech::Rust,
        Tech::Ruby,
        Tech::Terraform,
        Tech::NodeJs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tech::React => "React",
            Tech::Vue => "Vue",
            Tech::Svelte => "Svelte",
            Tech::Angular => "Angular",
            Tech::TypeScript => "TypeScript",
            Tech::JavaScript => "JavaScript",
            Tech::Python => "Python",
            Tech::Java => "Java",
            Tech::Go => "Go",
            Tech::Rust => "Rust",
            Tech::Ruby => "Ruby",
            Tech::Terraform => "Terraform",
            Tech::NodeJs => "Node.js",
            Tech::Unknown => "Unknown",
        }
    }

    pub fn is_frontend_framework(self) -> bool {
        matches!(self, Tech::React | Tech::Vue | Tech::Svelte | Tech::Angular)
    }

    /// Stacks whose own extension sets under-cover plain script and style files.
    pub fn is_script_adjacent(self) -> bool {
        self.is_frontend_framework()
            || matches!(self, Tech::JavaScript | Tech::TypeScript | Tech::NodeJs)
    }
}

impl fmt::Display for Tech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    /// Lowercase substrings of the full path that hint at a stack.
    static ref TECH_MARKERS: HashMap<Tech, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert(Tech::React, vec!["next.config.js", ".jsx", ".tsx", "react-dom"]);
        m.insert(Tech::Vue, vec!["vue.config.js", "nuxt.config.js", ".vue"]);
        m.insert(Tech::Svelte, vec!["svelte.config.js", ".svelte"]);
        m.insert(Tech::Angular, vec!["angular.json"]);
        m.insert(Tech::TypeScript, vec!["tsconfig.json", ".ts", ".tsx"]);
        m.insert(Tech::JavaScript, vec![".js", ".jsx", ".mjs", ".cjs"]);
        m.insert(
            Tech::Python,
            vec!["requirements.txt", "pyproject.toml", "pipfile", "setup.py", ".py"],
        );
        m.insert(
            Tech::Java,
            vec!["pom.xml", "build.gradle", "settings.gradle", ".java"],
        );
        m.insert(Tech::Go, vec!["go.mod", "go.sum", ".go"]);
        m.insert(Tech::Rust, vec!["cargo.toml", ".rs"]);
        m.insert(Tech::Ruby, vec!["gemfile", ".rb"]);
        m.insert(Tech::Terraform, vec![".tf", ".tf.json"]);
        m.insert(
            Tech::NodeJs,
            vec!["package.json", "vite.config.ts", "tailwind.config.js"],
        );
        m
    };

    /// Dependency keys in a package manifest and the stack each one proves.
    static ref MANIFEST_DEPENDENCIES: HashMap<&'static str, Tech> = {
        let mut m = HashMap::new();
        m.insert("react", Tech::React);
        m.insert("vue", Tech::Vue);
        m.insert("svelte", Tech::Svelte);
        m.insert("angular", Tech::Angular);
        m.insert("@angular/core", Tech::Angular);
        m.insert("typescript", Tech::TypeScript);
        m
    };
}

pub const MANIFEST_FILE_NAMES: &[&str] = &["package.json"];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    #[serde(default)]
    dependencies: Option<serde_json::Value>,
    #[serde(default)]
    dev_dependencies: Option<serde_json::Value>,
}

impl PackageManifest {
    /// Keys of both dependency blocks. A block that is null or not an
    /// object counts as empty.
    fn dependency_names(&self) -> impl Iterator<Item = &str> {
        [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .filter_map(|block| block.as_ref().and_then(serde_json::Value::as_object))
            .flat_map(|deps| deps.keys().map(String::as_str))
    }
}

#[derive(Debug, Default, Clone)]
pub struct Scoreboard {
    scores: HashMap<Tech, u32>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tech: Tech, weight: u32) {
        *self.scores.entry(tech).or_insert(0) += weight;
    }

    pub fn get(&self, tech: Tech) -> u32 {
        self.scores.get(&tech).copied().unwrap_or(0)
    }

    /// Positive scores, highest first, ties by name. A front-end framework
    /// hides the generic Node.js entry; nothing detected yields `Unknown`.
    pub fn rank(&self) -> Vec<Tech> {
        let mut ranked: Vec<(Tech, u32)> = self
            .scores
            .iter()
            .filter(|(_, score)| **score > 0)
            .map(|(&tech, &score)| (tech, score))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.name().cmp(b.0.name())));

        let mut techs: Vec<Tech> = ranked.into_iter().map(|(tech, _)| tech).collect();
        if techs.iter().any(|t| t.is_frontend_framework()) {
            techs.retain(|&t| t != Tech::NodeJs);
        }
        if techs.is_empty() {
            techs.push(Tech::Unknown);
        }
        techs
    }
}

/// Adds one file's evidence to the scoreboard.
pub fn score_file(file: &CandidateFile, scoreboard: &mut Scoreboard) {
    if MANIFEST_FILE_NAMES.contains(&file.basename().as_str()) {
        score_manifest(file, scoreboard);
    }

    let lower_path = file.path.to_lowercase();
    for tech in Tech::DETECTABLE {
        let markers = match TECH_MARKERS.get(&tech) {
            Some(markers) => markers,
            None => continue,
        };
        if markers.iter().any(|m| lower_path.contains(m)) {
            scoreboard.add(tech, MARKER_WEIGHT);
        }
    }
}

fn score_manifest(file: &CandidateFile, scoreboard: &mut Scoreboard) {
    let manifest = file
        .read_text()
        .map_err(|e| e.to_string())
        .and_then(|text| {
            serde_json::from_str::<PackageManifest>(&text).map_err(|e| e.to_string())
        });

    let manifest = match manifest {
        Ok(manifest) => manifest,
        Err(e) => {
            log::warn!("Ignoring unreadable manifest {}: {}", file.path, e);
            return;
        }
    };

    let found: BTreeSet<Tech> = manifest
        .dependency_names()
        .filter_map(|name| MANIFEST_DEPENDENCIES.get(name).copied())
        .collect();

    for tech in found {
        log::debug!("{}: declares {}", file.path, tech);
        scoreboard.add(tech, MANIFEST_WEIGHT);
    }
}

pub fn detect<'a>(files: impl IntoIterator<Item = &'a CandidateFile>) -> (Scoreboard, Vec<Tech>) {
    let mut scoreboard = Scoreboard::new();
    for file in files {
        score_file(file, &mut scoreboard);
    }
    let ranked = scoreboard.rank();
    (scoreboard, ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, content: &str) -> CandidateFile {
        CandidateFile::in_memory(path, content)
    }

    #[test]
    fn test_markers_add_one_per_tech() {
        let mut board = Scoreboard::new();
        score_file(&file("proj/src/App.tsx", ""), &mut board);
        assert_eq!(board.get(Tech::React), 1);
        assert_eq!(board.get(Tech::TypeScript), 1);
        assert_eq!(board.get(Tech::JavaScript), 0);
    }

    #[test]
    fn test_markers_match_lowercased_path() {
        let mut board = Scoreboard::new();
        score_file(&file("proj/Cargo.toml", "[package]"), &mut board);
        score_file(&file("proj/Gemfile", ""), &mut board);
        assert_eq!(board.get(Tech::Rust), 1);
        assert_eq!(board.get(Tech::Ruby), 1);
    }

    #[test]
    fn test_manifest_dependencies_weigh_five() {
        let mut board = Scoreboard::new();
        let pkg = r#"{"dependencies": {"react": "^18"}, "devDependencies": {"typescript": "^5"}}"#;
        score_file(&file("proj/package.json", pkg), &mut board);
        assert_eq!(board.get(Tech::React), 5);
        assert_eq!(board.get(Tech::TypeScript), 5);
        // the file name itself is a Node.js marker
        assert_eq!(board.get(Tech::NodeJs), 1);
    }

    #[test]
    fn test_manifest_counts_each_tech_once() {
        let mut board = Scoreboard::new();
        let pkg = r#"{"dependencies": {"angular": "1", "@angular/core": "17"}}"#;
        score_file(&file("proj/package.json", pkg), &mut board);
        assert_eq!(board.get(Tech::Angular), 5);
    }

    #[test]
    fn test_malformed_manifest_is_ignored() {
        let mut board = Scoreboard::new();
        score_file(&file("proj/package.json", "{ not json"), &mut board);
        assert_eq!(board.get(Tech::React), 0);
        assert_eq!(board.get(Tech::NodeJs), 1);

        let mut board = Scoreboard::new();
        let f = CandidateFile::in_memory("proj/package.json", vec![0xff, 0xfe]);
        score_file(&f, &mut board);
        assert_eq!(board.get(Tech::NodeJs), 1);
    }

    #[test]
    fn test_null_dependency_block_keeps_the_other() {
        let mut board = Scoreboard::new();
        let pkg = r#"{"dependencies": null, "devDependencies": {"react": "18"}}"#;
        score_file(&file("p/package.json", pkg), &mut board);
        assert_eq!(board.get(Tech::React), 5);

        let mut board = Scoreboard::new();
        let pkg = r#"{"dependencies": ["vue"], "devDependencies": {"typescript": "5"}}"#;
        score_file(&file("p/package.json", pkg), &mut board);
        assert_eq!(board.get(Tech::Vue), 0);
        assert_eq!(board.get(Tech::TypeScript), 5);
    }

    #[test]
    fn test_rank_orders_by_score_then_name() {
        let mut board = Scoreboard::new();
        board.add(Tech::Rust, 3);
        board.add(Tech::Go, 3);
        board.add(Tech::Python, 7);
        board.add(Tech::Ruby, 0);
        assert_eq!(board.rank(), vec![Tech::Python, Tech::Go, Tech::Rust]);
    }

    #[test]
    fn test_rank_drops_node_with_framework() {
        let mut board = Scoreboard::new();
        board.add(Tech::NodeJs, 9);
        board.add(Tech::Vue, 1);
        assert_eq!(board.rank(), vec![Tech::Vue]);

        let mut board = Scoreboard::new();
        board.add(Tech::NodeJs, 2);
        board.add(Tech::JavaScript, 1);
        assert_eq!(board.rank(), vec![Tech::NodeJs, Tech::JavaScript]);
    }

    #[test]
    fn test_rank_empty_is_unknown() {
        assert_eq!(Scoreboard::new().rank(), vec![Tech::Unknown]);
    }

    #[test]
    fn test_detect_react_project() {
        let files = vec![
            file("proj/package.json", r#"{"dependencies": {"react": "18"}}"#),
            file("proj/src/App.tsx", ""),
            file("proj/src/index.tsx", ""),
        ];
        let (board, ranked) = detect(&files);
        assert_eq!(board.get(Tech::React), 7);
        assert_eq!(ranked[0], Tech::React);
        assert!(!ranked.contains(&Tech::NodeJs));
    }
}
