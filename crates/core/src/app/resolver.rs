use crate::ports::{MarkerLookup, ToolLocator, Workspace};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Marker used when none is configured
pub const DEFAULT_REPOSITORY_MARKER: &str = ".git";

/// Answers "where am I" questions for the dispatcher.
///
/// Nothing is cached: each call reads the workspace and the tool locator
/// afresh, and every lookup that cannot be answered comes back empty.
pub struct ContextResolver {
    workspace: Arc<dyn Workspace>,
    locator: Arc<dyn ToolLocator>,
    lookup: Arc<dyn MarkerLookup>,
    marker: String,
}

impl ContextResolver {
    pub fn new(
        workspace: Arc<dyn Workspace>,
        locator: Arc<dyn ToolLocator>,
        lookup: Arc<dyn MarkerLookup>,
    ) -> Self {
        Self {
            workspace,
            locator,
            lookup,
            marker: DEFAULT_REPOSITORY_MARKER.to_string(),
        }
    }

    /// Use a different repository marker than `.git`
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn opened_file_path(&self) -> Option<PathBuf> {
        self.workspace.active_document_path()
    }

    /// Walks up from the workspace base directory to the first directory
    /// holding the repository marker.
    pub fn repository_root_path(&self) -> Option<PathBuf> {
        if !self.workspace.is_open() {
            return None;
        }
        let base = self.workspace.base_directory()?;

        let mut current = Some(base.as_path());
        while let Some(dir) = current {
            if self.lookup.contains_marker(dir, &self.marker) {
                debug!("Repository root for {} is {}", base.display(), dir.display());
                return Some(dir.to_path_buf());
            }
            // parent() is None once we reach the filesystem root
            current = dir.parent();
        }

        debug!("No {} found above {}", self.marker, base.display());
        None
    }

    /// 1-based caret line, or 0 when there is no workspace, document or
    /// selection.
    pub fn current_line(&self) -> u32 {
        if !self.workspace.is_open() {
            return 0;
        }
        self.workspace.active_caret_line().unwrap_or(0)
    }

    pub fn vcs_tool_path(&self) -> Option<PathBuf> {
        self.locator.vcs_tool_path()
    }

    pub fn shell_path(&self) -> Option<PathBuf> {
        self.locator.shell_path()
    }
}
