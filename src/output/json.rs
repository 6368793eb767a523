use super::Bundle;
use crate::error::Result;
use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    project_name: &'a str,
    exported_at: String,
    tree: &'a str,
    total_files: usize,
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize, Debug)]
struct JsonFile<'a> {
    path: &'a str,
    size: u64,
    content: &'a str,
}

pub fn format(bundle: &Bundle<'_>) -> Result<String> {
    let export = JsonExport {
        project_name: bundle.project_name,
        exported_at: bundle
            .exported_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        tree: bundle.tree,
        total_files: bundle.files.len(),
        files: bundle
            .files
            .iter()
            .map(|f| JsonFile {
                path: &f.path,
                size: f.size,
                content: &f.content,
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&export)?)
}
