use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dfs",
    author,
    version,
    about,
    long_about = "Work with a remote filesystem from the command line.\n\
    `dfs` is a suite of small subcommand tools. Each tool captures its own\n\
    argument vector and resolves it in two phases: a help check first, then\n\
    the path operation. A tool either prints its usage text or performs its\n\
    operation on exactly one path; the operation's success decides the exit\n\
    status.\n\
    \n\
    Example: remove a directory tree:\n\
        $ dfs rm -R /tmp/scratch"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "generate more verbose output (may be specified multiple times)")]
    pub verbose: u8,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "generate less verbose output (may be specified multiple times)")]
    pub quiet: u8,

    #[arg(long, global = true, help = "print status with colors")]
    pub color: bool,

    #[arg(long, global = true, help = "print status without colors")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "remove a path from the filesystem")]
    Rm(RmArgs),
}

// The tool resolves its own argument vector, so clap's help flag is disabled
// here and every token is captured raw.
#[derive(Args)]
#[command(disable_help_flag = true)]
pub struct RmArgs {
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "tool arguments: [-h] [-R] <path>"
    )]
    pub args: Vec<String>,
}
