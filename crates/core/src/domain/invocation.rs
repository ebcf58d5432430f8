use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A fully resolved process launch: executable, argument string and
/// optional working directory.
///
/// The argument string is kept as one string because the VCS tool parses
/// its own `/key:"value"` syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub executable: PathBuf,
    pub arguments: String,
    pub working_directory: Option<PathBuf>,
}

impl Invocation {
    pub fn new(executable: PathBuf, arguments: impl Into<String>) -> Self {
        Self {
            executable,
            arguments: arguments.into(),
            working_directory: None,
        }
    }

    /// False when there is nothing to run, e.g. the shell was not found
    pub fn has_executable(&self) -> bool {
        !self.executable.as_os_str().is_empty()
    }

    pub fn in_directory(mut self, working_directory: Option<PathBuf>) -> Self {
        self.working_directory = working_directory;
        self
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" {}", self.executable.display(), self.arguments)?;
        if let Some(dir) = &self.working_directory {
            write!(f, " (in {})", dir.display())?;
        }
        Ok(())
    }
}
