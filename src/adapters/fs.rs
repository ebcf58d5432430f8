use gitbar_core::ports::MarkerLookup;
use std::path::Path;

/// Looks for the repository marker on the real filesystem.
///
/// The marker may be a directory (a normal clone) or a file (worktrees and
/// submodules keep a `.git` file pointing elsewhere).
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMarkerLookup;

impl MarkerLookup for FsMarkerLookup {
    fn contains_marker(&self, dir: &Path, marker: &str) -> bool {
        let candidate = dir.join(marker);
        candidate.is_dir() || candidate.is_file()
    }
}
