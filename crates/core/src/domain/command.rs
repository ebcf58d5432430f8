use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseCommandError;

/// Actions exposed on the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolbarCommand {
    // Shell commands
    OpenShell,
    ContinueRebase,

    // Repository commands
    Commit,
    Log,
    Pull,
    Push,
    Fetch,
    Switch,
    Cleanup,
    Revert,
    Sync,
    Merge,
    Resolve,
    StashSave,
    StashPop,
    StashList,
    Rebase,

    // File commands
    FileLog,
    FileDiff,
    FileBlame,
}

/// Which tool and which piece of context a command operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Runs in the interactive shell
    Shell,
    /// Runs the VCS tool against the repository root
    Repository,
    /// Runs the VCS tool against the open file
    File,
}

impl ToolbarCommand {
    /// Every command, in declaration order
    pub const ALL: [ToolbarCommand; 20] = [
        ToolbarCommand::OpenShell,
        ToolbarCommand::ContinueRebase,
        ToolbarCommand::Commit,
        ToolbarCommand::Log,
        ToolbarCommand::Pull,
        ToolbarCommand::Push,
        ToolbarCommand::Fetch,
        ToolbarCommand::Switch,
        ToolbarCommand::Cleanup,
        ToolbarCommand::Revert,
        ToolbarCommand::Sync,
        ToolbarCommand::Merge,
        ToolbarCommand::Resolve,
        ToolbarCommand::StashSave,
        ToolbarCommand::StashPop,
        ToolbarCommand::StashList,
        ToolbarCommand::Rebase,
        ToolbarCommand::FileLog,
        ToolbarCommand::FileDiff,
        ToolbarCommand::FileBlame,
    ];

    /// The PascalCase identifier of the command, e.g. `StashSave`
    pub fn identifier(self) -> &'static str {
        match self {
            ToolbarCommand::OpenShell => "OpenShell",
            ToolbarCommand::ContinueRebase => "ContinueRebase",
            ToolbarCommand::Commit => "Commit",
            ToolbarCommand::Log => "Log",
            ToolbarCommand::Pull => "Pull",
            ToolbarCommand::Push => "Push",
            ToolbarCommand::Fetch => "Fetch",
            ToolbarCommand::Switch => "Switch",
            ToolbarCommand::Cleanup => "Cleanup",
            ToolbarCommand::Revert => "Revert",
            ToolbarCommand::Sync => "Sync",
            ToolbarCommand::Merge => "Merge",
            ToolbarCommand::Resolve => "Resolve",
            ToolbarCommand::StashSave => "StashSave",
            ToolbarCommand::StashPop => "StashPop",
            ToolbarCommand::StashList => "StashList",
            ToolbarCommand::Rebase => "Rebase",
            ToolbarCommand::FileLog => "FileLog",
            ToolbarCommand::FileDiff => "FileDiff",
            ToolbarCommand::FileBlame => "FileBlame",
        }
    }

    pub fn kind(self) -> CommandKind {
        match self {
            ToolbarCommand::OpenShell | ToolbarCommand::ContinueRebase => CommandKind::Shell,
            ToolbarCommand::FileLog | ToolbarCommand::FileDiff | ToolbarCommand::FileBlame => {
                CommandKind::File
            }
            _ => CommandKind::Repository,
        }
    }

    /// The `/command:` value passed to the VCS tool.
    ///
    /// File commands drop their `File` prefix (`FileDiff` -> `diff`) and
    /// `StashList` opens the reflog viewer. Shell commands have none.
    pub fn vcs_subcommand(self) -> Option<String> {
        match self.kind() {
            CommandKind::Shell => None,
            CommandKind::File => Some(self.identifier().replace("File", "").to_lowercase()),
            CommandKind::Repository if self == ToolbarCommand::StashList => {
                Some("reflog".to_string())
            }
            CommandKind::Repository => Some(self.identifier().to_lowercase()),
        }
    }
}

impl std::fmt::Display for ToolbarCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for ToolbarCommand {
    type Err = ParseCommandError;

    /// Accepts `StashSave`, `stashsave`, `stash-save` and `stash_save`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();

        ToolbarCommand::ALL
            .into_iter()
            .find(|command| command.identifier().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseCommandError {
                input: s.to_string(),
            })
    }
}
