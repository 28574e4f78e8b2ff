//! Script result memoization
//!
//! A test is identified by its invocation signature, the (script, argument
//! string) pair. Within one run a signature is executed at most once when
//! caching is enabled; later occurrences reuse the first exit code. Entries
//! live for the duration of the run only.

use std::collections::HashMap;

/// Maps invocation signatures to observed exit codes
///
/// Not thread safe. Execution is strictly sequential, so no locking is
/// needed; a parallel executor would have to add per key mutual exclusion
/// before relaxing that.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<(String, String), i32>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the exit code recorded for a signature
    pub fn lookup(&self, script: &str, args: &str) -> Option<i32> {
        self.entries
            .get(&(script.to_string(), args.to_string()))
            .copied()
    }

    /// Record the exit code for a signature
    ///
    /// Write once per key: the first recorded value is kept.
    pub fn store(&mut self, script: &str, args: &str, exit_code: i32) {
        self.entries
            .entry((script.to_string(), args.to_string()))
            .or_insert(exit_code);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
