//! Last-modified timestamps from version control.
//!
//! Each catalog record is stamped with the author date of the most
//! recent commit touching its tool directory. The lookup sits behind a
//! trait so the pipeline can run against a canned source in tests.

use std::path::Path;
use std::process::Command;

use chrono::{SecondsFormat, Utc};

/// Outcome of a last-modified query for one directory.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampOutcome {
    /// ISO-8601 author date of the latest commit touching the path.
    Found(String),

    /// The query ran cleanly but the path has no history.
    NoHistory,

    /// The query itself failed (git missing, not a repository, bad path).
    Failed(String),
}

/// Source of last-modified timestamps for tool directories.
pub trait TimestampSource {
    fn last_modified(&self, path: &Path) -> TimestampOutcome;
}

/// Queries git history via `git log -1 --format=%aI`.
#[derive(Debug, Default)]
pub struct GitTimestamps;

impl TimestampSource for GitTimestamps {
    fn last_modified(&self, path: &Path) -> TimestampOutcome {
        let output = match Command::new("git")
            .args(["log", "-1", "--format=%aI", "--", "."])
            .current_dir(path)
            .output()
        {
            Ok(output) => output,
            Err(e) => return TimestampOutcome::Failed(format!("failed to execute git: {}", e)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return TimestampOutcome::Failed(stderr.trim().to_string());
        }

        // %aI prints strict ISO-8601 already; no reformatting needed.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let date = stdout.trim();
        if date.is_empty() {
            TimestampOutcome::NoHistory
        } else {
            TimestampOutcome::Found(date.to_string())
        }
    }
}

/// Fixed-answer source for tests and dry runs.
#[derive(Debug, Clone)]
pub struct StaticTimestamps(pub String);

impl TimestampSource for StaticTimestamps {
    fn last_modified(&self, _path: &Path) -> TimestampOutcome {
        TimestampOutcome::Found(self.0.clone())
    }
}

/// Current UTC time as an ISO-8601 string.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup_test_repo() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let repo_path = temp.path().join("repo");
        std::fs::create_dir(&repo_path).unwrap();

        Command::new("git")
            .args(["init"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        Command::new("git")
            .args(["config", "user.email", "test@test.com"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        Command::new("git")
            .args(["config", "user.name", "Test"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        std::fs::write(repo_path.join("README.md"), "# Test").unwrap();
        Command::new("git")
            .args(["add", "."])
            .current_dir(&repo_path)
            .output()
            .unwrap();
        Command::new("git")
            .args(["commit", "-m", "Initial commit"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        (temp, repo_path)
    }

    #[test]
    fn test_git_found_in_committed_dir() {
        let (_temp, repo_path) = setup_test_repo();

        match GitTimestamps.last_modified(&repo_path) {
            TimestampOutcome::Found(ts) => {
                // Must be a parseable ISO-8601 date
                chrono::DateTime::parse_from_rfc3339(&ts).unwrap();
            }
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_git_no_history_for_untracked_dir() {
        let (_temp, repo_path) = setup_test_repo();
        let untracked = repo_path.join("untracked");
        std::fs::create_dir(&untracked).unwrap();

        assert_eq!(GitTimestamps.last_modified(&untracked), TimestampOutcome::NoHistory);
    }

    #[test]
    fn test_git_failed_outside_repo() {
        let temp = TempDir::new().unwrap();
        let result = GitTimestamps.last_modified(temp.path());
        assert!(matches!(result, TimestampOutcome::Failed(_)));
    }

    #[test]
    fn test_git_failed_for_missing_path() {
        let result = GitTimestamps.last_modified(Path::new("/nonexistent/toolshed-test"));
        assert!(matches!(result, TimestampOutcome::Failed(_)));
    }

    #[test]
    fn test_static_source_always_answers() {
        let source = StaticTimestamps("2024-01-15T10:00:00Z".to_string());
        assert_eq!(
            source.last_modified(Path::new("/anywhere")),
            TimestampOutcome::Found("2024-01-15T10:00:00Z".to_string())
        );
    }

    #[test]
    fn test_now_iso_is_parseable() {
        let ts = now_iso();
        let parsed = chrono::DateTime::parse_from_rfc3339(&ts).unwrap();
        let delta = (Utc::now() - parsed.with_timezone(&Utc)).num_seconds().abs();
        assert!(delta < 5, "now_iso should be close to the current time");
    }
}
