use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const IGNORE_FILE_NAME: &str = ".srcdumpignore";

/// Built-in structural noise. `*.ext` lines match the file name suffix,
/// `name/` lines match any path segment, anything else is an exact file name.
pub const DEFAULT_IGNORE_PATTERNS: &str = r#"# Dependencies & environments
node_modules/
vendor/
venv/
env/
.venv/
__pycache__/
.cache/
.mypy_cache/
.ruff_cache/
.pytest_cache/
pip-wheel-metadata/
site-packages/
deps/
packages/
.tox/

# Build artifacts
dist/
build/
target/
out/
bin/
obj/
.eggs/
lib64/
generated/

# Framework build folders
.next/
.nuxt/
.angular/
coverage/
.turbo/
.vercel/
.expo/
.parcel-cache/

# Version control, IDE & CI/CD
.git/
.svn/
.hg/
.idea/
.vscode/
.vscode-test/
.vs/
.history/
.github/
.gitlab/
.circleci/

# Docker & containers
.docker/
docker/
containers/

# Temp & OS
temp/
tmp/
.tmp/
.DS_Store
__MACOSX/
Thumbs.db
desktop.ini
ehthumbs.db
System Volume Information/

# Logs
logs/
log/
*.log
*.log.*
*.out

# Lock files
package-lock.json
yarn.lock
pnpm-lock.yaml
composer.lock
poetry.lock
Cargo.lock

# Compiled/intermediate
*.pyc
*.pyo
*.pyd
*.class
*.o
*.so
*.dll
*.exe
*.dylib
*.a

# Media
*.jpg
*.jpeg
*.png
*.gif
*.svg
*.ico
*.webp
*.mp3
*.wav
*.flac
*.ogg
*.mp4
*.avi
*.mov
*.mkv

# Fonts
*.ttf
*.otf
*.woff
*.woff2

# Archives
*.zip
*.tar
*.gz
*.rar
*.7z
*.bz2
*.xz
*.lz
*.lzma

# Documents
*.pdf
*.docx
*.doc
*.ppt
*.pptx
*.xls
*.xlsx
*.csv

# Databases & sessions
db/
database/
sqlite/
sessions/
flask_session/
instance/

# Misc
source_dump.txt
*.bak
*.swp
*.swo
"#;

#[derive(Debug, Clone, Default)]
pub struct IgnoreSpec {
    dir_names: HashSet<String>,
    exact_names: HashSet<String>,
    suffixes: Vec<String>,
}

impl IgnoreSpec {
    pub fn compile(pattern_text: &str) -> Self {
        let mut spec = IgnoreSpec::default();

        for line in pattern_text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let lower = line.to_lowercase();
            if let Some(dir) = lower.strip_suffix('/') {
                spec.dir_names.insert(dir.to_string());
            } else if lower.starts_with("*.") {
                spec.suffixes.push(lower[1..].to_string());
            } else {
                spec.exact_names.insert(lower);
            }
        }

        spec
    }

    /// The built-in patterns, then `~/.srcdumpignore`, then `<root>/.srcdumpignore`.
    pub fn load(root: &Path) -> Self {
        let mut text = String::from(DEFAULT_IGNORE_PATTERNS);

        if let Some(home) = dirs::home_dir() {
            if let Ok(extra) = fs::read_to_string(home.join(IGNORE_FILE_NAME)) {
                log::debug!("Loaded global ignore file from {}", home.display());
                text.push('\n');
                text.push_str(&extra);
            }
        }

        if let Ok(extra) = fs::read_to_string(root.join(IGNORE_FILE_NAME)) {
            log::debug!("Loaded project ignore file from {}", root.display());
            text.push('\n');
            text.push_str(&extra);
        }

        Self::compile(&text)
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        let normalized = path.replace('\\', "/").to_lowercase();
        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
        let base = segments.last().copied().unwrap_or("");

        if segments.iter().any(|seg| self.dir_names.contains(*seg)) {
            return true;
        }
        if self.exact_names.contains(base) {
            return true;
        }
        self.suffixes.iter().any(|suffix| base.ends_with(suffix.as_str()))
    }

    /// Whether a directory with this name is pruned wholesale.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.dir_names.contains(&name.to_lowercase())
    }
}
