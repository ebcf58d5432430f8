use crate::domain::Invocation;
use anyhow::Result;

/// Handle returned for a launched process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnedProcess {
    /// OS process id; `None` when nothing was actually started (dry runs)
    pub pid: Option<u32>,
}

/// Port for starting external processes.
///
/// Launches are fire-and-forget: implementations must not wait on the
/// child or hand back its output.
pub trait ProcessSpawner: Send + Sync {
    fn spawn(&self, invocation: Invocation) -> Result<SpawnedProcess>;
}
