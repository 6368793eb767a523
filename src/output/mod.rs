pub mod json;
pub mod markdown;
pub mod text;
pub mod xml;

use crate::candidate::basename;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
    Xml,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => ".txt",
            OutputFormat::Markdown => ".md",
            OutputFormat::Json => ".json",
            OutputFormat::Xml => ".xml",
        }
    }

    pub fn media_type(self) -> String {
        let mime = mime_guess::from_ext(&self.extension()[1..]).first_or_text_plain();
        format!("{};charset=utf-8", mime.essence_str())
    }
}

/// One included file with its content already read (or the read error text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledFile {
    pub path: String,
    pub size: u64,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct Bundle<'a> {
    pub project_name: &'a str,
    pub tree: &'a str,
    pub files: &'a [AssembledFile],
    pub exported_at: DateTime<Utc>,
}

/// Combined artifact plus what a caller needs to persist it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub content: String,
    pub file_name: String,
    pub extension: &'static str,
    pub media_type: String,
}

impl Artifact {
    pub fn new(format: OutputFormat, project_name: &str, content: String) -> Self {
        let stem = if project_name.is_empty() {
            "all"
        } else {
            project_name
        };
        Artifact {
            content,
            file_name: format!("{}{}", stem, format.extension()),
            extension: format.extension(),
            media_type: format.media_type(),
        }
    }
}

pub fn combine(format: OutputFormat, bundle: &Bundle<'_>) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::format(bundle)),
        OutputFormat::Markdown => Ok(markdown::format(bundle)),
        OutputFormat::Json => json::format(bundle),
        OutputFormat::Xml => xml::format(bundle),
    }
}

/// Placeholder written in place of content that could not be read.
pub fn read_error_text(path: &str, err: &std::io::Error) -> String {
    format!("Error reading {}: {}", path, err)
}

lazy_static! {
    static ref LANGUAGES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("ts", "typescript");
        m.insert("tsx", "tsx");
        m.insert("js", "javascript");
        m.insert("jsx", "jsx");
        m.insert("py", "python");
        m.insert("java", "java");
        m.insert("go", "go");
        m.insert("rs", "rust");
        m.insert("cpp", "cpp");
        m.insert("c", "c");
        m.insert("cs", "csharp");
        m.insert("rb", "ruby");
        m.insert("php", "php");
        m.insert("swift", "swift");
        m.insert("kt", "kotlin");
        m.insert("scala", "scala");
        m.insert("html", "html");
        m.insert("css", "css");
        m.insert("scss", "scss");
        m.insert("less", "less");
        m.insert("json", "json");
        m.insert("yaml", "yaml");
        m.insert("yml", "yaml");
        m.insert("xml", "xml");
        m.insert("md", "markdown");
        m.insert("sql", "sql");
        m.insert("sh", "bash");
        m.insert("bash", "bash");
        m.insert("zsh", "bash");
        m.insert("dockerfile", "dockerfile");
        m.insert("vue", "vue");
        m.insert("svelte", "svelte");
        m
    };
}

/// Fence tag for a path; empty when the extension is unknown.
pub fn language_for(path: &str) -> &'static str {
    let base = basename(path).to_lowercase();
    let ext = base.rsplit('.').next().unwrap_or("");
    LANGUAGES.get(ext).copied().unwrap_or("")
}
