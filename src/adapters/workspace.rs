use anyhow::{Context, Result};
use gitbar_core::ports::Workspace;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::cli::CliArgs;

/// Workspace described on the command line: a base directory, optionally
/// an open file and a caret line in it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionWorkspace {
    base_dir: Option<PathBuf>,
    document: Option<PathBuf>,
    line: Option<u32>,
}

impl SessionWorkspace {
    /// A workspace rooted at `base_dir`.
    ///
    /// Relative paths are made absolute against the current directory. A
    /// base directory that doesn't exist leaves the workspace closed.
    pub fn new(base_dir: &Path, document: Option<&Path>, line: Option<u32>) -> Result<Self> {
        let base_dir = absolute(base_dir)?;
        let base_dir = if base_dir.is_dir() {
            Some(base_dir)
        } else {
            warn!("Workspace directory {} does not exist", base_dir.display());
            None
        };

        let document = document.map(absolute).transpose()?;
        // A caret only makes sense inside an open document; line 0 means none
        let line = document.as_ref().and(line).filter(|line| *line > 0);

        Ok(Self {
            base_dir,
            document,
            line,
        })
    }

    pub fn from_cli(cli_args: &CliArgs) -> Result<Self> {
        let base_dir = match &cli_args.base_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        Self::new(&base_dir, cli_args.file.as_deref(), cli_args.line)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("Failed to make {} absolute", path.display()))
}

impl Workspace for SessionWorkspace {
    fn is_open(&self) -> bool {
        self.base_dir.is_some()
    }

    fn active_document_path(&self) -> Option<PathBuf> {
        self.document.clone()
    }

    fn active_caret_line(&self) -> Option<u32> {
        self.line
    }

    fn base_directory(&self) -> Option<PathBuf> {
        self.base_dir.clone()
    }
}
