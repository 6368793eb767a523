use crate::cli::InitArgs;
use srcdump::ignore::{DEFAULT_IGNORE_PATTERNS, IGNORE_FILE_NAME};
use std::fs;
use std::path::PathBuf;

pub fn run(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = if args.global {
        let home = dirs::home_dir().ok_or("Could not determine home directory")?;
        home.join(IGNORE_FILE_NAME)
    } else {
        PathBuf::from(IGNORE_FILE_NAME)
    };

    if path.exists() && !args.force {
        return Err(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )
        .into());
    }

    fs::write(&path, DEFAULT_IGNORE_PATTERNS)?;

    let location = if args.global { "global" } else { "local" };
    println!("Created {} {} at {}", location, IGNORE_FILE_NAME, path.display());

    Ok(())
}
