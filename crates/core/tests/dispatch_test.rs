//! Dispatcher behaviour against in-memory ports

use anyhow::Result;
use gitbar_core::app::{CONTINUE_REBASE_ARGUMENTS, ContextResolver, Dispatcher, Outcome};
use gitbar_core::domain::{CommandKind, Invocation, Notification, ToolbarCommand};
use gitbar_core::error::DispatchError;
use gitbar_core::ports::{Notifier, ProcessSpawner, SpawnedProcess, ToolLocator, Workspace};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const REPO_ROOT: &str = "/work/repo";
const VCS_TOOL: &str = "/opt/tortoisegit/bin/TortoiseGitProc";
const SHELL: &str = "/usr/bin/bash";
const TEST_FILE: &str = "test.txt";
const CURRENT_LINE: u32 = 42;

struct FakeWorkspace {
    open: bool,
    has_document: bool,
    base: Option<PathBuf>,
}

impl Workspace for FakeWorkspace {
    fn is_open(&self) -> bool {
        self.open
    }

    fn active_document_path(&self) -> Option<PathBuf> {
        (self.open && self.has_document).then(|| PathBuf::from(TEST_FILE))
    }

    fn active_caret_line(&self) -> Option<u32> {
        (self.open && self.has_document).then_some(CURRENT_LINE)
    }

    fn base_directory(&self) -> Option<PathBuf> {
        self.base.clone()
    }
}

/// Tool locator that counts how often each tool was looked up
struct FakeTools {
    vcs_tool: Option<PathBuf>,
    shell: Option<PathBuf>,
    vcs_lookups: AtomicUsize,
}

impl ToolLocator for FakeTools {
    fn vcs_tool_path(&self) -> Option<PathBuf> {
        self.vcs_lookups.fetch_add(1, Ordering::SeqCst);
        self.vcs_tool.clone()
    }

    fn shell_path(&self) -> Option<PathBuf> {
        self.shell.clone()
    }
}

#[derive(Default)]
struct RecordingSpawner {
    invocations: Mutex<Vec<Invocation>>,
    fail: bool,
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, invocation: Invocation) -> Result<SpawnedProcess> {
        self.invocations.lock().unwrap().push(invocation);
        if self.fail {
            anyhow::bail!("executable is not valid");
        }
        Ok(SpawnedProcess { pid: Some(4242) })
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.notifications.lock().unwrap().push(notification.clone());
    }
}

struct Harness {
    dispatcher: Dispatcher,
    tools: Arc<FakeTools>,
    spawner: Arc<RecordingSpawner>,
    notifier: Arc<RecordingNotifier>,
}

impl Harness {
    fn new(workspace: FakeWorkspace, vcs_tool: Option<&str>, shell: Option<&str>) -> Self {
        Self::with_spawner(workspace, vcs_tool, shell, RecordingSpawner::default())
    }

    fn with_spawner(
        workspace: FakeWorkspace,
        vcs_tool: Option<&str>,
        shell: Option<&str>,
        spawner: RecordingSpawner,
    ) -> Self {
        let tools = Arc::new(FakeTools {
            vcs_tool: vcs_tool.map(PathBuf::from),
            shell: shell.map(PathBuf::from),
            vcs_lookups: AtomicUsize::new(0),
        });
        let lookup = |dir: &Path, marker: &str| dir == Path::new(REPO_ROOT) && marker == ".git";
        let resolver = ContextResolver::new(Arc::new(workspace), tools.clone(), Arc::new(lookup));

        let spawner = Arc::new(spawner);
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher = Dispatcher::new(resolver, spawner.clone(), notifier.clone());

        Self {
            dispatcher,
            tools,
            spawner,
            notifier,
        }
    }

    fn invocations(&self) -> Vec<Invocation> {
        self.spawner.invocations.lock().unwrap().clone()
    }

    fn notifications(&self) -> Vec<Notification> {
        self.notifier.notifications.lock().unwrap().clone()
    }
}

fn open_workspace() -> FakeWorkspace {
    FakeWorkspace {
        open: true,
        has_document: true,
        base: Some(PathBuf::from("/work/repo/project")),
    }
}

fn closed_workspace() -> FakeWorkspace {
    FakeWorkspace {
        open: false,
        has_document: false,
        base: None,
    }
}

fn ready() -> Harness {
    Harness::new(open_workspace(), Some(VCS_TOOL), Some(SHELL))
}

#[test]
fn test_repository_commands_launch_vcs_tool_with_repo_root() {
    let repository_commands = ToolbarCommand::ALL
        .into_iter()
        .filter(|c| c.kind() == CommandKind::Repository && *c != ToolbarCommand::StashList);

    for command in repository_commands {
        let harness = ready();
        let outcome = harness.dispatcher.dispatch(command);

        assert_eq!(outcome, Outcome::Launched(SpawnedProcess { pid: Some(4242) }));
        let invocations = harness.invocations();
        assert_eq!(invocations.len(), 1, "{command} should launch exactly once");
        assert_eq!(invocations[0].executable, PathBuf::from(VCS_TOOL));
        assert_eq!(
            invocations[0].arguments,
            format!(
                r#"/command:{} /path:"{}""#,
                command.identifier().to_lowercase(),
                REPO_ROOT
            )
        );
        assert_eq!(invocations[0].working_directory, None);
        assert!(harness.notifications().is_empty());
    }
}

#[test]
fn test_stash_list_opens_stash_reflog() {
    let harness = ready();
    harness.dispatcher.dispatch(ToolbarCommand::StashList);

    let invocations = harness.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(
        invocations[0].arguments,
        r#"/command:reflog /path:"/work/repo" /ref:"refs/stash""#
    );
}

#[test]
fn test_file_blame_passes_file_and_line() {
    let harness = ready();
    harness.dispatcher.dispatch(ToolbarCommand::FileBlame);

    let invocations = harness.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].executable, PathBuf::from(VCS_TOOL));
    assert_eq!(
        invocations[0].arguments,
        r#"/command:blame /path:"test.txt" /line:42"#
    );
}

#[test]
fn test_file_log_and_diff_pass_open_file() {
    let harness = ready();
    harness.dispatcher.dispatch(ToolbarCommand::FileLog);
    harness.dispatcher.dispatch(ToolbarCommand::FileDiff);

    let arguments: Vec<_> = harness.invocations().into_iter().map(|i| i.arguments).collect();
    assert_eq!(
        arguments,
        vec![
            r#"/command:log /path:"test.txt""#.to_string(),
            r#"/command:diff /path:"test.txt""#.to_string(),
        ]
    );
}

#[test]
fn test_open_shell_without_shell_notifies() {
    let harness = Harness::new(open_workspace(), Some(VCS_TOOL), None);
    let outcome = harness.dispatcher.dispatch(ToolbarCommand::OpenShell);

    assert_eq!(outcome, Outcome::Aborted(DispatchError::ShellNotFound));
    assert!(harness.invocations().is_empty());
    let notifications = harness.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Git Bash not found");
}

#[test]
fn test_open_shell_with_closed_workspace() {
    let harness = Harness::new(closed_workspace(), None, Some(SHELL));
    harness.dispatcher.dispatch(ToolbarCommand::OpenShell);

    let invocations = harness.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].executable, PathBuf::from(SHELL));
    assert_eq!(invocations[0].arguments, "--login -i");
    assert_eq!(invocations[0].working_directory, None);
    assert!(harness.notifications().is_empty());
}

#[test]
fn test_commit_without_repository_skips_tool_lookup() {
    let harness = Harness::new(closed_workspace(), Some(VCS_TOOL), Some(SHELL));
    let outcome = harness.dispatcher.dispatch(ToolbarCommand::Commit);

    assert_eq!(outcome, Outcome::Aborted(DispatchError::RepositoryNotFound));
    assert!(harness.invocations().is_empty());
    assert_eq!(harness.notifications().len(), 1);
    assert_eq!(harness.tools.vcs_lookups.load(Ordering::SeqCst), 0);
}

#[test]
fn test_missing_vcs_tool_notifies() {
    let harness = Harness::new(open_workspace(), None, Some(SHELL));
    let outcome = harness.dispatcher.dispatch(ToolbarCommand::Pull);

    assert_eq!(outcome, Outcome::Aborted(DispatchError::VcsToolNotFound));
    assert!(harness.invocations().is_empty());
    let notifications = harness.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0], DispatchError::VcsToolNotFound.notification());
}

#[test]
fn test_continue_rebase_runs_script_in_repo_root() {
    let harness = ready();
    harness.dispatcher.dispatch(ToolbarCommand::ContinueRebase);

    let invocations = harness.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].executable, PathBuf::from(SHELL));
    assert_eq!(invocations[0].working_directory, Some(PathBuf::from(REPO_ROOT)));
    assert_eq!(
        invocations[0].arguments,
        r#"--login -i -c 'echo; echo "Running git rebase --continue"; echo; git rebase --continue; echo; echo "Please review the output above and press enter to continue."; read'"#
    );
    assert_eq!(invocations[0].arguments, CONTINUE_REBASE_ARGUMENTS);
}

#[test]
fn test_file_commands_without_document_launch_with_empty_path() {
    let workspace = FakeWorkspace {
        has_document: false,
        ..open_workspace()
    };
    let harness = Harness::new(workspace, Some(VCS_TOOL), Some(SHELL));

    let log = harness.dispatcher.dispatch(ToolbarCommand::FileLog);
    let blame = harness.dispatcher.dispatch(ToolbarCommand::FileBlame);

    assert!(matches!(log, Outcome::Launched(_)));
    assert!(matches!(blame, Outcome::Launched(_)));
    let arguments: Vec<_> = harness.invocations().into_iter().map(|i| i.arguments).collect();
    assert_eq!(
        arguments,
        vec![
            r#"/command:log /path:"""#.to_string(),
            r#"/command:blame /path:"" /line:0"#.to_string(),
        ]
    );
    assert!(harness.notifications().is_empty());
}

#[test]
fn test_continue_rebase_without_shell_fails_silently() {
    let harness = Harness::new(open_workspace(), Some(VCS_TOOL), None);
    let outcome = harness.dispatcher.dispatch(ToolbarCommand::ContinueRebase);

    assert_eq!(outcome, Outcome::SpawnFailed);
    assert!(harness.invocations().is_empty());
    assert!(harness.notifications().is_empty());
}

#[test]
fn test_spawn_failure_is_silent() {
    let spawner = RecordingSpawner {
        fail: true,
        ..Default::default()
    };
    let harness = Harness::with_spawner(open_workspace(), Some(VCS_TOOL), Some(SHELL), spawner);
    let outcome = harness.dispatcher.dispatch(ToolbarCommand::Fetch);

    assert_eq!(outcome, Outcome::SpawnFailed);
    assert_eq!(harness.invocations().len(), 1);
    assert!(harness.notifications().is_empty());
}

#[test]
fn test_dispatch_twice_yields_identical_invocations() {
    let harness = ready();
    harness.dispatcher.dispatch(ToolbarCommand::FileBlame);
    harness.dispatcher.dispatch(ToolbarCommand::FileBlame);

    let invocations = harness.invocations();
    assert_eq!(invocations.len(), 2);
    assert_eq!(invocations[0], invocations[1]);
}

#[test]
fn test_repository_root_three_levels_up_on_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo_root = temp_dir.path().join("repo");
    let base = repo_root.join("a").join("b").join("c");
    std::fs::create_dir_all(&base)?;
    std::fs::create_dir_all(repo_root.join(".git"))?;

    let workspace = FakeWorkspace {
        open: true,
        has_document: false,
        base: Some(base),
    };
    let tools = FakeTools {
        vcs_tool: None,
        shell: None,
        vcs_lookups: AtomicUsize::new(0),
    };
    let lookup = |dir: &Path, marker: &str| dir.join(marker).exists();
    let resolver = ContextResolver::new(Arc::new(workspace), Arc::new(tools), Arc::new(lookup));

    assert_eq!(resolver.repository_root_path(), Some(repo_root));
    Ok(())
}
