pub mod combine;
pub mod init;
pub mod scan;
pub mod tree;

use srcdump::walk;
use srcdump::{Rules, Session};
use std::error::Error;
use std::path::PathBuf;

pub fn project_paths(paths: &[String]) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.iter().map(PathBuf::from).collect()
    }
}

/// Ignore rules come from the first directory; every directory is walked
/// and submitted as its own batch.
pub fn load_rules(paths: &[PathBuf]) -> Rules {
    match paths.first() {
        Some(root) => Rules::load(root),
        None => Rules::default(),
    }
}

pub fn submit_all(
    session: &mut Session<'_>,
    rules: &Rules,
    paths: &[PathBuf],
) -> Result<(), Box<dyn Error>> {
    for path in paths {
        let files = walk::collect(path, &rules.ignore)?;
        session.submit(files);
    }
    Ok(())
}
