use crate::cli::TreeArgs;
use srcdump::Session;

pub fn run(args: TreeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let paths = super::project_paths(&args.paths);
    let rules = super::load_rules(&paths);
    let mut session = Session::new(&rules);
    super::submit_all(&mut session, &rules, &paths)?;

    print!("{}", session.tree());
    Ok(())
}
