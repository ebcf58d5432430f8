use crate::app::resolver::ContextResolver;
use crate::domain::{CommandKind, Invocation, ResolvedContext, ToolbarCommand};
use crate::error::DispatchError;
use crate::ports::{Notifier, ProcessSpawner, SpawnedProcess};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Arguments for an interactive login shell
pub const SHELL_ARGUMENTS: &str = "--login -i";

/// Runs `git rebase --continue` in the shell and keeps the window open
/// until the user presses enter.
pub const CONTINUE_REBASE_ARGUMENTS: &str = r#"--login -i -c 'echo; echo "Running git rebase --continue"; echo; git rebase --continue; echo; echo "Please review the output above and press enter to continue."; read'"#;

/// What a dispatch ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The invocation was handed to the spawner and it started
    Launched(SpawnedProcess),
    /// A precondition failed; the user was notified and nothing ran
    Aborted(DispatchError),
    /// The spawner could not start the process
    SpawnFailed,
}

/// Turns toolbar commands into process launches
pub struct Dispatcher {
    resolver: ContextResolver,
    spawner: Arc<dyn ProcessSpawner>,
    notifier: Arc<dyn Notifier>,
}

impl Dispatcher {
    pub fn new(
        resolver: ContextResolver,
        spawner: Arc<dyn ProcessSpawner>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            resolver,
            spawner,
            notifier,
        }
    }

    /// Resolve context, check preconditions and launch.
    ///
    /// Never fails: precondition failures are reported through the
    /// notifier and spawn failures are only logged.
    pub fn dispatch(&self, command: ToolbarCommand) -> Outcome {
        info!("Dispatching {}", command);

        let context = match self.resolve_checked(command) {
            Ok(context) => context,
            Err(err) => return self.abort(command, err),
        };

        let invocation = match plan(command, &context) {
            Ok(invocation) => invocation,
            Err(err) => return self.abort(command, err),
        };

        if !invocation.has_executable() {
            warn!("Failed to launch {}: no executable to run", command);
            return Outcome::SpawnFailed;
        }

        debug!("Launching {}", invocation);
        match self.spawner.spawn(invocation) {
            Ok(process) => Outcome::Launched(process),
            Err(err) => {
                warn!("Failed to launch {}: {:#}", command, err);
                Outcome::SpawnFailed
            }
        }
    }

    /// Looks things up in precondition order so a failing check stops
    /// before later lookups run.
    fn resolve_checked(&self, command: ToolbarCommand) -> Result<ResolvedContext, DispatchError> {
        let shell_path = self.resolver.shell_path();
        if command == ToolbarCommand::OpenShell && shell_path.is_none() {
            return Err(DispatchError::ShellNotFound);
        }

        let repository_root_path = self.resolver.repository_root_path();
        if command != ToolbarCommand::OpenShell && repository_root_path.is_none() {
            return Err(DispatchError::RepositoryNotFound);
        }

        let vcs_tool_path = if command == ToolbarCommand::OpenShell {
            None
        } else {
            Some(
                self.resolver
                    .vcs_tool_path()
                    .ok_or(DispatchError::VcsToolNotFound)?,
            )
        };

        Ok(ResolvedContext {
            opened_file_path: self.resolver.opened_file_path(),
            repository_root_path,
            current_line: self.resolver.current_line(),
            vcs_tool_path,
            shell_path,
        })
    }

    fn abort(&self, command: ToolbarCommand, err: DispatchError) -> Outcome {
        warn!("Not running {}: {}", command, err);
        self.notifier.notify(&err.notification());
        Outcome::Aborted(err)
    }
}

/// Checks preconditions against an already resolved context and builds
/// the invocation for `command`.
///
/// Only the three ordered checks can fail. A missing open file becomes an
/// empty `/path:""` and a missing shell for `ContinueRebase` an empty
/// executable, which the dispatcher treats as a failed launch.
pub fn plan(command: ToolbarCommand, context: &ResolvedContext) -> Result<Invocation, DispatchError> {
    if command == ToolbarCommand::OpenShell {
        let shell = context.shell_path.clone().ok_or(DispatchError::ShellNotFound)?;
        return Ok(Invocation::new(shell, SHELL_ARGUMENTS)
            .in_directory(context.repository_root_path.clone()));
    }

    let repo_root = context
        .repository_root_path
        .as_deref()
        .ok_or(DispatchError::RepositoryNotFound)?;
    let vcs_tool = context
        .vcs_tool_path
        .clone()
        .ok_or(DispatchError::VcsToolNotFound)?;

    let invocation = match command.kind() {
        CommandKind::Shell => {
            let shell = context.shell_path.clone().unwrap_or_default();
            Invocation::new(shell, CONTINUE_REBASE_ARGUMENTS)
                .in_directory(Some(repo_root.to_path_buf()))
        }
        CommandKind::File => {
            let file = context.opened_file_path.as_deref().unwrap_or(Path::new(""));
            let mut arguments = vcs_arguments(command, file);
            if command == ToolbarCommand::FileBlame {
                arguments.push_str(&format!(" /line:{}", context.current_line));
            }
            Invocation::new(vcs_tool, arguments)
        }
        CommandKind::Repository => {
            let mut arguments = vcs_arguments(command, repo_root);
            if command == ToolbarCommand::StashList {
                arguments.push_str(r#" /ref:"refs/stash""#);
            }
            Invocation::new(vcs_tool, arguments)
        }
    };

    Ok(invocation)
}

fn vcs_arguments(command: ToolbarCommand, path: &Path) -> String {
    format!(
        r#"/command:{} /path:"{}""#,
        command.vcs_subcommand().unwrap_or_default(),
        path.display()
    )
}
