//! Search adapter for the Tracker 3 indexer.
//!
//! `tracker3 search` speaks a plain-text protocol: a human-readable header
//! line, one `file://` URI per hit, and a bare `...` line when the tool
//! truncated its own output. Everything version-specific about that format
//! is isolated here so the router never sees raw indexer output.

use std::io::Read;
use std::process::{Command, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

use nook_core::SearchError;

/// Result cap passed to `tracker3 -l`. The router displays fewer.
const RESULT_LIMIT: &str = "20";

/// How long one search may run before the child is killed.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Search provider seam.
///
/// The router is written against this trait so it can be tested without a
/// Tracker installation.
#[cfg_attr(test, mockall::automock)]
pub trait FolderSearch {
    /// Search folders matching `query`, in indexer order.
    ///
    /// `query` must be non-empty; length policy lives in the caller.
    fn search(&self, query: &str) -> Result<Vec<String>, SearchError>;
}

/// Adapter that shells out to `tracker3`.
#[derive(Debug, Default)]
pub struct TrackerSearch;

impl FolderSearch for TrackerSearch {
    fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let mut child = Command::new("tracker3")
            .args(["search", "--folders", "--disable-color", "-l", RESULT_LIMIT, query])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let status = match child.wait_timeout(SEARCH_TIMEOUT)? {
            Some(status) => status,
            None => {
                // Timeout expired - kill the process and reap it
                let _ = child.kill();
                let _ = child.wait();
                return Err(SearchError::Timeout {
                    duration: SEARCH_TIMEOUT,
                });
            }
        };

        if !status.success() {
            let mut stderr = String::new();
            if let Some(mut err) = child.stderr.take() {
                let _ = err.read_to_string(&mut stderr);
            }
            return Err(SearchError::Failed {
                code: status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        let mut stdout = String::new();
        if let Some(mut out) = child.stdout.take() {
            let _ = out.read_to_string(&mut stdout);
        }

        Ok(parse_output(&stdout))
    }
}

/// Convert raw `tracker3 search` stdout into folder paths.
///
/// Drops the header line, trims each remaining line, strips a `file://`
/// prefix, and skips blank lines and the `...` truncation sentinel. Order
/// is preserved.
pub fn parse_output(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|line| {
            let line = line.trim();
            let line = line.strip_prefix("file://").unwrap_or(line);
            if line.is_empty() || line == "..." {
                None
            } else {
                Some(line.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_header_line() {
        let out = "Results:\nfile:///home/u/Music\n";
        assert_eq!(parse_output(out), vec!["/home/u/Music"]);
    }

    #[test]
    fn test_parse_skips_blanks_and_sentinel() {
        let out = "Results:\n\n  file:///a\n  ...\nfile:///b\n   \n";
        assert_eq!(parse_output(out), vec!["/a", "/b"]);
    }

    #[test]
    fn test_parse_keeps_indexer_order() {
        let out = "Results:\nfile:///z\nfile:///a\nfile:///m\n";
        assert_eq!(parse_output(out), vec!["/z", "/a", "/m"]);
    }

    #[test]
    fn test_parse_passes_plain_paths_through() {
        let out = "Results:\n/no/scheme/here\n";
        assert_eq!(parse_output(out), vec!["/no/scheme/here"]);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_output("Results:\n").is_empty());
        assert!(parse_output("").is_empty());
    }
}
