use clap::Parser;
use gitbar_core::ToolbarCommand;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "gitbar")]
#[command(about = "Launch TortoiseGit-style VCS dialogs and a Git shell for the repository you are working in")]
pub struct CliArgs {
    /// Toolbar command to run (commit, stash-list, file-blame, open-shell, ...)
    #[arg(required_unless_present = "list")]
    pub command: Option<ToolbarCommand>,

    /// Workspace base directory (defaults to the current directory)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// File open in the editor, used by the file commands
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Caret line in the open file
    #[arg(long)]
    pub line: Option<u32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the VCS tool (overrides config)
    #[arg(long)]
    pub vcs_tool: Option<PathBuf>,

    /// Path to the shell (overrides config)
    #[arg(long)]
    pub shell: Option<PathBuf>,

    /// Print the invocation instead of launching it
    #[arg(long)]
    pub dry_run: bool,

    /// List all commands and exit
    #[arg(long)]
    pub list: bool,
}
