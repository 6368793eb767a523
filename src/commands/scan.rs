use crate::cli::ScanArgs;
use colored::*;
use srcdump::config;
use srcdump::status::format_bytes;
use srcdump::{CandidateFile, Session};

pub fn run(args: ScanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config();
    if args.no_color || config.no_color.unwrap_or(false) {
        colored::control::set_override(false);
    }

    let paths = super::project_paths(&args.paths);
    let rules = super::load_rules(&paths);
    let mut session = Session::new(&rules);
    super::submit_all(&mut session, &rules, &paths)?;

    let techs: Vec<&str> = session.techs().iter().map(|t| t.name()).collect();
    println!("{} {}", "Project:".bold(), session.project_name());
    println!("{} {}", "Stack:".bold(), techs.join(", "));

    let result = session.result();
    print_bucket("Included", &result.included, Color::Green);
    print_bucket("Excluded by whitelist", &result.excluded, Color::Yellow);
    print_bucket("Sensitive", &result.sensitive, Color::Red);

    if session.is_large() {
        println!(
            "{}",
            "Selection exceeds the preview limit; use `combine` without --preview".yellow()
        );
    }

    if args.log {
        println!();
        for line in session.log() {
            println!("{}", line.dimmed());
        }
    }

    Ok(())
}

fn print_bucket(title: &str, files: &[CandidateFile], color: Color) {
    let total: u64 = files.iter().map(|f| f.size).sum();
    println!(
        "\n{} ({}, {})",
        title.color(color).bold(),
        files.len(),
        format_bytes(total)
    );
    for file in files {
        println!("  {:>10}  {}", format_bytes(file.size), file.path);
    }
}
