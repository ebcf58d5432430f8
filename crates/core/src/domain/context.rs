use std::path::PathBuf;

/// Everything a dispatch needs to know about the workspace and the tools.
///
/// Rebuilt on every dispatch; the workspace may change between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedContext {
    pub opened_file_path: Option<PathBuf>,
    pub repository_root_path: Option<PathBuf>,
    /// 1-based caret line, 0 when unknown
    pub current_line: u32,
    pub vcs_tool_path: Option<PathBuf>,
    pub shell_path: Option<PathBuf>,
}
