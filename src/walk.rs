use crate::candidate::CandidateFile;
use crate::error::{Error, Result};
use crate::ignore::IgnoreSpec;
use std::path::Path;
use walkdir::WalkDir;

/// Lists the files under `root` as candidates named `<root name>/<relative path>`.
///
/// Directories matching an ignore directory rule are not descended into;
/// everything else is left to the classifier.
pub fn collect(root: &Path, ignore: &IgnoreSpec) -> Result<Vec<CandidateFile>> {
    let root = root
        .canonicalize()
        .map_err(|source| Error::FileRead {
            path: root.to_path_buf(),
            source,
        })?;
    if !root.is_dir() {
        return Err(Error::NotADirectory(root));
    }

    let root_name = root
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("project")
        .to_string();
    log::info!("Walking {}", root.display());

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !entry
                    .file_name()
                    .to_str()
                    .map(|name| ignore.is_ignored_dir(name))
                    .unwrap_or(false)
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = match entry.path().strip_prefix(&root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);

        files.push(CandidateFile::from_fs(
            format!("{}/{}", root_name, relative),
            size,
            entry.path(),
        ));
    }

    log::debug!("Collected {} candidate files", files.len());
    Ok(files)
}
