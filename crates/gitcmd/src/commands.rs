//! Git command execution wrappers.
//!
//! Provides a thin wrapper around `git` subprocess invocation. Every call
//! runs with `log.showSignature=false` so that signed commits do not leak
//! signature blocks into log output the callers parse.

use std::collections::HashMap;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Error returned when a git command fails.
///
/// The display form is the literal stderr text captured from the subprocess,
/// with no prefix and no exit code. A failure that produced no stderr (for
/// example, the binary could not be spawned) carries an empty message, so
/// callers must not assume the message is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GitError {
    message: String,
}

impl GitError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The captured stderr text, verbatim.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A specialized `Result` type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Check whether the current working directory is inside a git work tree.
///
/// Runs `git rev-parse --is-inside-work-tree` and returns `true` only if the
/// command succeeds and its trimmed output is exactly `"true"`. Every
/// failure mode (not a repository, git missing from PATH, bad permissions)
/// collapses to `false`; this function never reports an error.
pub fn is_inside_work_tree() -> bool {
    match run(&["rev-parse", "--is-inside-work-tree"]) {
        Ok(output) => output.trim() == "true",
        Err(_) => false,
    }
}

/// Execute a `git` command with an optional environment override.
///
/// The effective argument list is `-c log.showSignature=false` followed by
/// `args`. When `env` is `Some`, the subprocess environment is exactly the
/// given mapping: the ambient environment is replaced, not merged, so
/// inherited variables such as `PATH` are gone unless the caller puts them
/// back. When `env` is `None` the subprocess inherits the caller's
/// environment unchanged.
///
/// Returns captured stdout verbatim, trailing newline included. There are
/// no retries; a failure of any kind is terminal for the call.
///
/// # Errors
///
/// Returns [`GitError`] if the command exits with a non-zero status or
/// cannot be spawned. The error message is the captured stderr text.
///
/// # Examples
///
/// ```no_run
/// use gitcmd::commands::run_with_env;
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("GIT_PAGER".to_string(), "cat".to_string())]);
/// let head = run_with_env(Some(&env), &["rev-parse", "HEAD"]).unwrap();
/// println!("HEAD is {head}");
/// ```
pub fn run_with_env(env: Option<&HashMap<String, String>>, args: &[&str]) -> Result<String> {
    let mut argv = vec!["-c", "log.showSignature=false"];
    argv.extend_from_slice(args);

    let mut command = Command::new("git");
    command.args(&argv);

    if let Some(vars) = env {
        command.env_clear();
        command.envs(vars);
    }

    // A spawn failure captured no stderr, so its message is empty.
    let output = command.output().map_err(|_| GitError::new(""))?;

    if !output.status.success() {
        return Err(GitError::new(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    debug!(args = ?argv, "running git");
    debug!(stdout = %stdout, stderr = %stderr, "git result");
    Ok(stdout)
}

/// Execute a `git` command in the ambient environment.
///
/// Equivalent to [`run_with_env`] with no override.
///
/// # Errors
///
/// Returns [`GitError`] if the command exits with a non-zero status or
/// cannot be spawned.
///
/// # Examples
///
/// ```no_run
/// use gitcmd::commands::run;
///
/// let branch = run(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap();
/// println!("Current branch: {branch}");
/// ```
pub fn run(args: &[&str]) -> Result<String> {
    run_with_env(None, args)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
