//! Recursive suite execution
//!
//! Walks a resolved category in strict declaration order, runs its local
//! tests through the result cache, recurses into subcategories and folds
//! everything into a tri-state verdict plus a depth-bounded list of report
//! lines. The executor returns lines instead of printing them, so the
//! ordering guarantees live in one place and are testable in isolation.

use std::path::PathBuf;

use colored::Colorize;

use crate::common::paths;
use crate::suite::cache::ResultCache;
use crate::suite::model::{Category, Test};
use crate::suite::runner::{self, FAILURE_EXIT_CODE};

/// Column at which the status marker starts on every report line
const RESULT_COLUMN: usize = 60;

/// Tri-state category outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Ko,
    Partial,
}

impl Verdict {
    /// Verdict as a boolean for aggregation: only OK counts as success
    pub fn as_bool(self) -> bool {
        matches!(self, Verdict::Ok)
    }

    /// Fold local and child results into the category verdict
    ///
    /// PARTIAL requires locally defined tests that all passed plus a failing
    /// child. A category owning no tests goes straight to KO when a child
    /// fails.
    fn from_parts(local_ok: bool, has_local_tests: bool, children_ok: bool) -> Self {
        match (local_ok, children_ok) {
            (false, _) => Verdict::Ko,
            (true, true) => Verdict::Ok,
            (true, false) if has_local_tests => Verdict::Partial,
            (true, false) => Verdict::Ko,
        }
    }

    /// Colored status marker appended to a report line
    fn marker(self) -> String {
        match self {
            Verdict::Ok => format!("[{}]", " OK ".green().bold()),
            Verdict::Ko => format!("[{}]", " KO ".red().bold()),
            Verdict::Partial => format!("[{}]", " Partial ".yellow().bold()),
        }
    }
}

/// Result of executing one category subtree
#[derive(Debug)]
pub struct CategoryReport {
    pub verdict: Verdict,
    pub lines: Vec<String>,
}

/// Recursive executor for resolved categories
///
/// Owns all run-scoped mutable state: the result cache and the fail-fast
/// halt flag. The suite tree itself is never mutated.
pub struct Executor {
    library_root: PathBuf,
    aggregation_level: Option<u32>,
    cache: Option<ResultCache>,
    fail_fast: bool,
    halted: bool,
}

impl Executor {
    pub fn new(
        library_root: PathBuf,
        aggregation_level: Option<u32>,
        use_cache: bool,
        fail_fast: bool,
    ) -> Self {
        Self {
            library_root,
            aggregation_level,
            cache: use_cache.then(ResultCache::new),
            fail_fast,
            halted: false,
        }
    }

    /// Whether a fail-fast halt has been triggered
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Execute a category subtree, returning its verdict and report lines
    ///
    /// The category summary line heads the block, local test lines follow,
    /// then each child block in declaration order. Lines at depths at or
    /// beyond the aggregation level are dropped; verdict computation always
    /// covers the full subtree.
    pub fn execute(&mut self, category: &Category, depth: usize) -> CategoryReport {
        let mut lines = Vec::new();
        let mut local_ok = true;

        if !category.has_local_tests() {
            tracing::debug!("No test defined in category {}", category.name);
        }

        for test in &category.tests {
            if self.halted {
                break;
            }
            let passed = self.run_test(test, depth, &mut lines);
            local_ok &= passed;
            if !passed && self.fail_fast {
                tracing::debug!("Fail fast active, halting after {}", test.script);
                self.halted = true;
            }
        }

        let mut children_ok = true;
        for child in category.children.as_deref().unwrap_or_default() {
            if self.halted {
                break;
            }
            let report = self.execute(child, depth + 1);
            children_ok &= report.verdict.as_bool();
            lines.extend(report.lines);
        }

        let verdict = Verdict::from_parts(local_ok, category.has_local_tests(), children_ok);
        if self.retains(depth) {
            let label = format!("{} - Testing {}", indent(depth), category.name);
            lines.insert(0, format!("{}{}", pad(&label), verdict.marker()));
        }

        CategoryReport { verdict, lines }
    }

    /// Run one leaf test and append its report line
    fn run_test(&mut self, test: &Test, depth: usize, lines: &mut Vec<String>) -> bool {
        let exit_code = self.test_exit_code(test);
        let passed = exit_code == 0;

        if self.retains(depth) {
            let label = match &test.description {
                Some(description) => format!("{}   - {}", indent(depth), description),
                None => format!("{}   - Running : {}", indent(depth), test.script),
            };
            let marker = if passed { Verdict::Ok } else { Verdict::Ko };
            lines.push(format!("{}{}", pad(&label), marker.marker()));
        }

        passed
    }

    /// Exit code for a test, going through the cache when enabled
    fn test_exit_code(&mut self, test: &Test) -> i32 {
        let (script, args) = test.signature();

        if let Some(cache) = &self.cache {
            if let Some(exit_code) = cache.lookup(script, args) {
                tracing::debug!(
                    "Cache hit for {} {}: reusing exit code {}",
                    script,
                    args,
                    exit_code
                );
                return exit_code;
            }
        }

        let exit_code = self.invoke(test);

        if let Some(cache) = &mut self.cache {
            cache.store(script, args, exit_code);
        }

        exit_code
    }

    /// Invoke the script behind a test, absorbing every failure into an exit code
    fn invoke(&self, test: &Test) -> i32 {
        let script_path = self.library_root.join(&test.script);

        if !paths::is_executable_file(&script_path) {
            tracing::error!(
                "Script {} does not exist or is not executable. Marking test as failed.",
                script_path.display()
            );
            return FAILURE_EXIT_CODE;
        }

        let mut command_line = script_path.display().to_string();
        if let Some(args) = &test.args {
            command_line.push(' ');
            command_line.push_str(args);
        }

        match runner::run_shell(&command_line) {
            Ok(outcome) => {
                if !outcome.success() {
                    tracing::debug!("Return code : {}", outcome.exit_code);
                    tracing::debug!("Stdout      : {}", outcome.stdout);
                    tracing::debug!("Stderr      : {}", outcome.stderr);
                }
                outcome.exit_code
            }
            Err(e) => {
                tracing::error!("Failed to execute {}: {}", command_line, e);
                FAILURE_EXIT_CODE
            }
        }
    }

    /// Whether lines produced at this depth are kept in the output
    fn retains(&self, depth: usize) -> bool {
        match self.aggregation_level {
            None => true,
            Some(level) => depth < level as usize,
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn pad(label: &str) -> String {
    format!("{:<width$}", label, width = RESULT_COLUMN)
}
