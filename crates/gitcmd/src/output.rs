//! Output sanitization.
//!
//! Git answers single-valued questions (`describe`, `rev-parse`, log
//! formats) with a trailing newline and sometimes shell-style quoting.
//! [`clean`] reduces such output to the bare first-line value.

use crate::commands::{GitError, Result};

/// Clean a runner result for single-line consumption.
///
/// On success, keeps only the first line of the output and removes every
/// single-quote character from it. A single unquoted line passes through
/// unchanged. On failure, rebuilds the error with exactly one trailing
/// newline stripped from its message; any further trailing whitespace is
/// kept as-is.
///
/// # Errors
///
/// Returns the (rewritten) incoming error; `clean` never fails on its own.
///
/// # Examples
///
/// ```no_run
/// use gitcmd::commands::run;
/// use gitcmd::output::clean;
///
/// let tag = clean(run(&["describe", "--tags", "--abbrev=0"])).unwrap();
/// println!("latest tag: {tag}");
/// ```
pub fn clean(result: Result<String>) -> Result<String> {
    match result {
        Ok(output) => {
            let first = output.split('\n').next().unwrap_or("");
            Ok(first.replace('\'', ""))
        }
        Err(err) => {
            let message = err.message();
            let message = message.strip_suffix('\n').unwrap_or(message);
            Err(GitError::new(message))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clean_keeps_first_line() {
        assert_eq!(clean(Ok("line1\nline2\n".into())), Ok("line1".into()));
    }

    #[test]
    fn test_clean_strips_single_quotes() {
        assert_eq!(clean(Ok("it's a test\n".into())), Ok("its a test".into()));
    }

    #[test]
    fn test_clean_is_identity_on_plain_line() {
        assert_eq!(clean(Ok("v1.2.3".into())), Ok("v1.2.3".into()));
    }

    #[test]
    fn test_clean_empty_output() {
        assert_eq!(clean(Ok(String::new())), Ok(String::new()));
    }

    #[test]
    fn test_clean_strips_one_trailing_newline_from_error() {
        let cleaned = clean(Err(GitError::new("boom\n")));
        assert_eq!(cleaned, Err(GitError::new("boom")));
    }

    #[test]
    fn test_clean_strips_only_one_trailing_newline() {
        let cleaned = clean(Err(GitError::new("boom\n\n")));
        assert_eq!(cleaned, Err(GitError::new("boom\n")));
    }

    #[test]
    fn test_clean_leaves_error_without_newline_alone() {
        let cleaned = clean(Err(GitError::new("boom")));
        assert_eq!(cleaned, Err(GitError::new("boom")));
    }
}
