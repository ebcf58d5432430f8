use gitbar_core::ports::ToolLocator;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::ToolsConfig;

/// Executable searched for on `PATH` when nothing else matches
pub const VCS_TOOL_PROGRAM: &str = "TortoiseGitProc";
pub const SHELL_PROGRAM: &str = "bash";

/// One tool's lookup order: explicit path, known install locations, `PATH`
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSearch {
    pub explicit: Option<PathBuf>,
    pub candidates: Vec<PathBuf>,
    pub program: String,
}

impl ToolSearch {
    pub fn find(&self) -> Option<PathBuf> {
        if let Some(path) = &self.explicit {
            if path.is_file() {
                return Some(path.clone());
            }
            warn!("Configured {} path {} does not exist", self.program, path.display());
        }

        if let Some(path) = self.candidates.iter().find(|p| p.is_file()) {
            debug!("Found {} at {}", self.program, path.display());
            return Some(path.clone());
        }

        match which::which(&self.program) {
            Ok(path) => {
                debug!("Found {} on PATH at {}", self.program, path.display());
                Some(path)
            }
            Err(_) => None,
        }
    }
}

/// Finds the VCS tool and shell in the usual install locations
#[derive(Debug, Clone, PartialEq)]
pub struct InstallLocator {
    vcs_tool: ToolSearch,
    shell: ToolSearch,
}

impl InstallLocator {
    pub fn new(vcs_tool: ToolSearch, shell: ToolSearch) -> Self {
        Self { vcs_tool, shell }
    }

    pub fn from_config(tools: &ToolsConfig) -> Self {
        Self::new(
            ToolSearch {
                explicit: tools.vcs_tool.clone(),
                candidates: default_vcs_candidates(),
                program: VCS_TOOL_PROGRAM.to_string(),
            },
            ToolSearch {
                explicit: tools.shell.clone(),
                candidates: default_shell_candidates(),
                program: SHELL_PROGRAM.to_string(),
            },
        )
    }
}

impl ToolLocator for InstallLocator {
    fn vcs_tool_path(&self) -> Option<PathBuf> {
        self.vcs_tool.find()
    }

    fn shell_path(&self) -> Option<PathBuf> {
        self.shell.find()
    }
}

/// Program Files style directories from the environment, 64-bit first
fn program_dirs() -> Vec<PathBuf> {
    ["ProgramW6432", "ProgramFiles", "ProgramFiles(x86)"]
        .iter()
        .filter_map(|var| std::env::var_os(var))
        .map(PathBuf::from)
        .collect()
}

pub fn default_vcs_candidates() -> Vec<PathBuf> {
    if !cfg!(windows) {
        return Vec::new();
    }
    program_dirs()
        .into_iter()
        .map(|dir| dir.join("TortoiseGit").join("bin").join("TortoiseGitProc.exe"))
        .collect()
}

pub fn default_shell_candidates() -> Vec<PathBuf> {
    if !cfg!(windows) {
        return vec![PathBuf::from("/usr/bin/bash"), PathBuf::from("/bin/bash")];
    }

    let mut git_dirs = program_dirs()
        .into_iter()
        .map(|dir| dir.join("Git"))
        .collect::<Vec<_>>();
    if let Some(local) = std::env::var_os("LOCALAPPDATA") {
        git_dirs.push(Path::new(&local).join("Programs").join("Git"));
    }

    git_dirs
        .iter()
        .flat_map(|dir| [dir.join("git-bash.exe"), dir.join("bin").join("bash.exe")])
        .collect()
}
