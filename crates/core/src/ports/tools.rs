use std::path::{Path, PathBuf};

/// Where the external tools are installed
pub trait ToolLocator: Send + Sync {
    /// Path to the VCS GUI tool (TortoiseGitProc or compatible)
    fn vcs_tool_path(&self) -> Option<PathBuf>;

    /// Path to the interactive shell
    fn shell_path(&self) -> Option<PathBuf>;
}

/// Checks a directory for the repository marker
pub trait MarkerLookup: Send + Sync {
    /// True if `dir` holds an entry (file or directory) named `marker`
    fn contains_marker(&self, dir: &Path, marker: &str) -> bool;
}

impl<F> MarkerLookup for F
where
    F: Fn(&Path, &str) -> bool + Send + Sync,
{
    fn contains_marker(&self, dir: &Path, marker: &str) -> bool {
        self(dir, marker)
    }
}
