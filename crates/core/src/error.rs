use thiserror::Error;

use crate::domain::Notification;

/// Reasons a dispatch stops before anything is launched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Could not find Git Bash in the standard install path.")]
    ShellNotFound,

    #[error("Could not find a git repository for the open workspace.")]
    RepositoryNotFound,

    #[error("Could not find TortoiseGit in the standard install path.")]
    VcsToolNotFound,
}

impl DispatchError {
    pub fn title(&self) -> &'static str {
        match self {
            DispatchError::ShellNotFound => "Git Bash not found",
            DispatchError::RepositoryNotFound => "Git repository not found",
            DispatchError::VcsToolNotFound => "TortoiseGit not found",
        }
    }

    /// The user-facing notification for this error
    pub fn notification(&self) -> Notification {
        Notification::warning(self.title(), self.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown toolbar command: {input}")]
pub struct ParseCommandError {
    pub input: String,
}
