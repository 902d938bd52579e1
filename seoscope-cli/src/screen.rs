//! Terminal display regions
//!
//! The backend reports progress as a growing list of log lines plus a
//! final result string. `Screen` is the seam between the poll driver and
//! whatever renders those two regions, which keeps the rendering side
//! deterministic under test.

use std::sync::Mutex;

use colored::*;

/// Render target for the log and result regions
pub trait Screen: Send + Sync {
    /// Clear both regions ahead of a new submission
    fn reset(&self);

    /// Replace the log region with a full snapshot of the progress log
    ///
    /// Snapshots are complete: each call carries the entire log so far,
    /// not an increment.
    fn show_log(&self, text: &str);

    /// Show the final result
    fn show_result(&self, text: &str);
}

/// Screen that renders to the terminal
///
/// The progress log is append-only, so replacing the log region with each
/// snapshot reduces to printing the lines that have not been printed yet.
/// A snapshot that does not extend the previous one is rendered from
/// scratch.
pub struct TermScreen {
    last: Mutex<String>,
}

impl TermScreen {
    pub fn new() -> Self {
        Self {
            last: Mutex::new(String::new()),
        }
    }
}

impl Default for TermScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TermScreen {
    fn reset(&self) {
        self.last.lock().unwrap().clear();
    }

    fn show_log(&self, text: &str) {
        let mut last = self.last.lock().unwrap();
        let fresh = remainder_after(&last, text).unwrap_or(text);
        for line in fresh.lines() {
            println!("{line}");
        }
        *last = text.to_string();
    }

    fn show_result(&self, text: &str) {
        println!();
        println!("{}", "Result".bold());
        println!("{text}");
    }
}

/// Lines of `next` beyond `prev`, when `next` extends `prev` at a line
/// boundary
///
/// Returns `None` when `next` is not an extension of `prev`, in which case
/// the caller should render `next` in full.
fn remainder_after<'a>(prev: &str, next: &'a str) -> Option<&'a str> {
    if prev.is_empty() {
        return Some(next);
    }
    let rest = next.strip_prefix(prev)?;
    if rest.is_empty() {
        Some("")
    } else {
        rest.strip_prefix('\n')
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::Screen;

    /// In-memory screen recording what the poll driver rendered
    #[derive(Default)]
    pub(crate) struct MemoryScreen {
        log: Mutex<String>,
        results: Mutex<Vec<String>>,
    }

    impl MemoryScreen {
        pub(crate) fn log_text(&self) -> String {
            self.log.lock().unwrap().clone()
        }

        pub(crate) fn results(&self) -> Vec<String> {
            self.results.lock().unwrap().clone()
        }
    }

    impl Screen for MemoryScreen {
        fn reset(&self) {
            self.log.lock().unwrap().clear();
            self.results.lock().unwrap().clear();
        }

        fn show_log(&self, text: &str) {
            *self.log.lock().unwrap() = text.to_string();
        }

        fn show_result(&self, text: &str) {
            self.results.lock().unwrap().push(text.to_string());
        }
    }
}
