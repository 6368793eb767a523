use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "srcdump")]
#[command(
    about = "Combine a project's tree and relevant sources into one file, hiding build noise and secrets",
    long_about = None
)]
pub struct Cli {
    #[arg(short, long, action = ArgAction::Count, global = true, help = "More log output (-v, -vv)")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Only log errors")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Classify files into included, excluded and sensitive")]
    Scan(ScanArgs),

    #[command(about = "Show the tree of included files")]
    Tree(TreeArgs),

    #[command(about = "Write the combined artifact")]
    Combine(CombineArgs),

    #[command(about = "Create a .srcdumpignore with the default patterns")]
    Init(InitArgs),
}

#[derive(Parser)]
pub struct ScanArgs {
    #[arg(help = "Project directories, each added as one batch (default: current directory)")]
    pub paths: Vec<String>,

    #[arg(long, help = "Disable colors")]
    pub no_color: bool,

    #[arg(long, help = "Print the status log")]
    pub log: bool,
}

#[derive(Parser)]
pub struct TreeArgs {
    #[arg(help = "Project directories (default: current directory)")]
    pub paths: Vec<String>,
}

#[derive(Parser)]
pub struct CombineArgs {
    #[arg(help = "Project directories, each added as one batch (default: current directory)")]
    pub paths: Vec<String>,

    #[arg(short, long, help = "Output format: txt, md, json, xml (default: txt)")]
    pub format: Option<String>,

    #[arg(short, long, help = "Directory to write the artifact into (default: .)")]
    pub output: Option<String>,

    #[arg(long, help = "Print the artifact instead of writing a file")]
    pub stdout: bool,

    #[arg(long, help = "Use the size-limited preview path")]
    pub preview: bool,

    #[arg(long = "include", value_name = "PATH", help = "Re-include a whitelist-excluded file")]
    pub include: Vec<String>,

    #[arg(
        long = "include-sensitive",
        value_name = "PATH",
        help = "Re-include a file withheld as sensitive"
    )]
    pub include_sensitive: Vec<String>,

    #[arg(long = "remove", value_name = "PATH", help = "Drop an included file")]
    pub remove: Vec<String>,

    #[arg(short, long, help = "Report token counts")]
    pub tokens: bool,

    #[arg(short = 'j', long, help = "Reader threads for --preview (0 = auto)")]
    pub jobs: Option<usize>,

    #[arg(long, help = "Print the status log to stderr")]
    pub log: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    #[arg(long, help = "Write ~/.srcdumpignore instead of ./.srcdumpignore")]
    pub global: bool,

    #[arg(long, help = "Overwrite an existing file")]
    pub force: bool,
}
