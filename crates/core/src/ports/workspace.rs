use std::path::PathBuf;

/// Read-only view of the host's workspace and editor state.
///
/// Every accessor may come back empty; nothing here fails.
pub trait Workspace: Send + Sync {
    /// Whether a project or solution is open at all
    fn is_open(&self) -> bool;

    /// Path of the active document, if any
    fn active_document_path(&self) -> Option<PathBuf>;

    /// 1-based caret line of the active selection, if there is one
    fn active_caret_line(&self) -> Option<u32>;

    /// Directory the open project or solution lives in
    fn base_directory(&self) -> Option<PathBuf>;
}
