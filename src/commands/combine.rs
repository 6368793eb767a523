use crate::cli::CombineArgs;
use srcdump::config;
use srcdump::status::format_bytes;
use srcdump::{Error, OutputFormat, Session, SessionOptions, Status, PREVIEW_SIZE_LIMIT};
use std::fs;
use std::path::PathBuf;

pub fn run(args: CombineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config();

    let format = match args.format.as_ref().or(config.format.as_ref()) {
        Some(fmt) => fmt.parse::<OutputFormat>()?,
        None => OutputFormat::Text,
    };

    let options = SessionOptions {
        preview_limit: config.preview_limit_bytes().unwrap_or(PREVIEW_SIZE_LIMIT),
        count_tokens: args.tokens || config.tokens.unwrap_or(false),
        jobs: args.jobs.or(config.jobs).unwrap_or(0),
    };

    let paths = super::project_paths(&args.paths);
    let rules = super::load_rules(&paths);
    let mut session = Session::with_options(&rules, options);
    super::submit_all(&mut session, &rules, &paths)?;

    for path in &args.include {
        if !session.include_excluded(path) {
            log::warn!("{} is not in the excluded list", path);
        }
    }
    for path in &args.include_sensitive {
        if !session.include_sensitive(path) {
            log::warn!("{} is not in the sensitive list", path);
        }
    }
    for path in &args.remove {
        if !session.remove(path) {
            log::warn!("{} is not in the included list", path);
        }
    }

    let artifact = if args.preview {
        session.preview(format)?
    } else {
        session.export(format)?
    };

    let artifact = match artifact {
        Some(artifact) => artifact,
        None => {
            if session.result().included.is_empty() {
                eprintln!("No files selected");
            } else {
                eprintln!(
                    "Selection ({}) is over the preview limit; run without --preview",
                    format_bytes(session.result().included_size())
                );
            }
            print_log(&session, args.log);
            return Ok(());
        }
    };

    if args.stdout {
        print!("{}", artifact.content);
    } else {
        let dir = args
            .output
            .map(PathBuf::from)
            .or(config.output_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let target = dir.join(&artifact.file_name);
        fs::write(&target, &artifact.content).map_err(|source| Error::FileWrite {
            path: target.clone(),
            source,
        })?;

        session.record(Status::Saved(target.display().to_string()));
        println!(
            "Wrote {} ({}, {})",
            target.display(),
            format_bytes(artifact.content.len() as u64),
            artifact.media_type
        );
    }

    print_log(&session, args.log);
    Ok(())
}

fn print_log(session: &Session<'_>, enabled: bool) {
    if enabled {
        for line in session.log() {
            eprintln!("{}", line);
        }
    }
}
