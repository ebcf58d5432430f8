use anyhow::{Context, Result};
use gitbar_core::domain::Invocation;
use gitbar_core::ports::{ProcessSpawner, SpawnedProcess};
use std::io::Write;
use std::process::Command;
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentSplitError {
    #[error("argument string ends with an unfinished escape (\\)")]
    UnfinishedEscape,

    #[error("argument string has an unmatched quote")]
    UnmatchedQuote,
}

/// Splits an argument string into argv entries.
///
/// Whitespace separates words, single quotes are literal, double quotes
/// group words and honour backslash escapes. `/path:"a b"` becomes the
/// single word `/path:a b`.
pub fn split_arguments(arguments: &str) -> Result<Vec<String>, ArgumentSplitError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut escaping = false;

    for ch in arguments.chars() {
        if escaping {
            current.push(ch);
            escaping = false;
            continue;
        }

        if ch == '\\' && !in_single_quote {
            escaping = true;
            in_word = true;
            continue;
        }

        if ch == '\'' && !in_double_quote {
            in_single_quote = !in_single_quote;
            in_word = true;
            continue;
        }

        if ch == '"' && !in_single_quote {
            in_double_quote = !in_double_quote;
            in_word = true;
            continue;
        }

        if ch.is_whitespace() && !in_single_quote && !in_double_quote {
            if in_word {
                words.push(std::mem::take(&mut current));
                in_word = false;
            }
            continue;
        }

        current.push(ch);
        in_word = true;
    }

    if escaping {
        return Err(ArgumentSplitError::UnfinishedEscape);
    }
    if in_single_quote || in_double_quote {
        return Err(ArgumentSplitError::UnmatchedQuote);
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Builds the `Command` for an invocation without starting it
pub fn build_command(invocation: &Invocation) -> Result<Command> {
    let mut command = Command::new(&invocation.executable);

    #[cfg(windows)]
    {
        // TortoiseGitProc parses its own quoting, so hand the string over as is
        use std::os::windows::process::CommandExt;
        command.raw_arg(&invocation.arguments);
    }
    #[cfg(not(windows))]
    {
        let args = split_arguments(&invocation.arguments)
            .with_context(|| format!("Failed to split arguments: {}", invocation.arguments))?;
        command.args(args);
    }

    if let Some(dir) = &invocation.working_directory {
        command.current_dir(dir);
    }

    Ok(command)
}

/// Starts real processes and lets them run on their own
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl ProcessSpawner for ProcessLauncher {
    fn spawn(&self, invocation: Invocation) -> Result<SpawnedProcess> {
        let mut command = build_command(&invocation)?;
        let child = command
            .spawn()
            .with_context(|| format!("Failed to start {}", invocation.executable.display()))?;

        let pid = child.id();
        info!("Started {} (pid {})", invocation.executable.display(), pid);
        // Dropping the handle does not stop the child
        drop(child);

        Ok(SpawnedProcess { pid: Some(pid) })
    }
}

/// Writes invocations out instead of running them
pub struct DryRunSpawner<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> DryRunSpawner<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DryRunSpawner<Vec<u8>> {
    /// Everything written so far
    pub fn output(&self) -> String {
        let out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl<W: Write + Send> ProcessSpawner for DryRunSpawner<W> {
    fn spawn(&self, invocation: Invocation) -> Result<SpawnedProcess> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow::anyhow!("dry run output lock poisoned"))?;
        writeln!(out, "{}", invocation).context("Failed to write invocation")?;
        Ok(SpawnedProcess { pid: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_split_vcs_arguments() {
        let words = split_arguments(r#"/command:blame /path:"/work/my repo/a.rs" /line:42"#).unwrap();
        assert_eq!(words, vec!["/command:blame", "/path:/work/my repo/a.rs", "/line:42"]);
    }

    #[test]
    fn test_split_continue_rebase_script() {
        let words = split_arguments(gitbar_core::app::CONTINUE_REBASE_ARGUMENTS).unwrap();
        assert_eq!(words.len(), 4);
        assert_eq!(&words[..3], ["--login", "-i", "-c"]);
        assert!(words[3].starts_with("echo; echo \"Running git rebase --continue\";"));
        assert!(words[3].ends_with("; read"));
    }

    #[test]
    fn test_split_empty_quotes_and_whitespace() {
        assert_eq!(split_arguments("  ").unwrap(), Vec::<String>::new());
        assert_eq!(split_arguments(r#"a "" b"#).unwrap(), vec!["a", "", "b"]);
        assert_eq!(split_arguments(r#"a\ b"#).unwrap(), vec!["a b"]);
    }

    #[test]
    fn test_split_errors() {
        assert_eq!(split_arguments(r#"/path:"open"#), Err(ArgumentSplitError::UnmatchedQuote));
        assert_eq!(split_arguments("it's"), Err(ArgumentSplitError::UnmatchedQuote));
        assert_eq!(split_arguments("trailing\\"), Err(ArgumentSplitError::UnfinishedEscape));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_build_command() {
        let invocation = Invocation::new(PathBuf::from("/usr/bin/bash"), "--login -i")
            .in_directory(Some(PathBuf::from("/work/repo")));
        let command = build_command(&invocation).unwrap();

        assert_eq!(command.get_program(), "/usr/bin/bash");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["--login", "-i"]);
        assert_eq!(command.get_current_dir(), Some(std::path::Path::new("/work/repo")));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_launcher_reports_missing_executable() {
        let invocation = Invocation::new(PathBuf::from("/nonexistent/gitbar-tool"), "/command:log");
        assert!(ProcessLauncher.spawn(invocation).is_err());

        let invocation = Invocation::new(PathBuf::from("/usr/bin/bash"), r#"/path:"open"#);
        assert!(ProcessLauncher.spawn(invocation).is_err());
    }

    #[test]
    fn test_dry_run_writes_invocation() {
        let spawner = DryRunSpawner::new(Vec::new());
        let process = spawner
            .spawn(Invocation::new(PathBuf::from("/opt/tgit/TortoiseGitProc"), "/command:log"))
            .unwrap();

        assert_eq!(process.pid, None);
        let written = String::from_utf8(spawner.into_inner()).unwrap();
        assert_eq!(written, "\"/opt/tgit/TortoiseGitProc\" /command:log\n");
    }
}
