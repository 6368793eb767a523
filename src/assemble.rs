use crate::candidate::CandidateFile;
use crate::output::{read_error_text, AssembledFile};
use rayon::prelude::*;

fn read_one(file: &CandidateFile) -> AssembledFile {
    let content = match file.read_text() {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Could not read {}: {}", file.path, e);
            read_error_text(&file.path, &e)
        }
    };

    AssembledFile {
        path: file.path.clone(),
        size: file.size,
        content,
    }
}

/// Reads every file at once and waits for all of them. Output order
/// matches input order.
pub fn read_parallel(files: &[CandidateFile], jobs: usize) -> Vec<AssembledFile> {
    let threads = if jobs == 0 { num_cpus::get() } else { jobs };

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(|| files.par_iter().map(read_one).collect()),
        Err(e) => {
            log::warn!("Falling back to the global thread pool: {}", e);
            files.par_iter().map(read_one).collect()
        }
    }
}

/// Reads one file at a time, calling `on_file` before each read.
pub fn read_sequential<F>(files: &[CandidateFile], mut on_file: F) -> Vec<AssembledFile>
where
    F: FnMut(&CandidateFile),
{
    files
        .iter()
        .map(|f| {
            on_file(f);
            read_one(f)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<CandidateFile> {
        vec![
            CandidateFile::in_memory("p/a.txt", "alpha"),
            CandidateFile::in_memory("p/b.bin", vec![0xff, 0xfe]),
            CandidateFile::in_memory("p/c.txt", "gamma"),
        ]
    }

    #[test]
    fn test_read_failure_is_substituted() {
        let out = read_parallel(&files(), 2);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].content, "alpha");
        assert!(out[1].content.starts_with("Error reading p/b.bin: "));
        assert_eq!(out[2].content, "gamma");
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let files = files();
        let mut seen = Vec::new();
        let sequential = read_sequential(&files, |f| seen.push(f.path.clone()));
        assert_eq!(seen, vec!["p/a.txt", "p/b.bin", "p/c.txt"]);
        assert_eq!(sequential, read_parallel(&files, 0));
    }
}
