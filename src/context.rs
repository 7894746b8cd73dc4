//! The test tree context: root segment, scope stack and recording entry points.
//!
//! A [`TestTree`] owns everything it records. Entering a named scope pushes a
//! new child segment onto the scope stack and hands back a [`ScopeGuard`];
//! assertions always attach to the segment on top of the stack.
//!
//! ```
//! use testkit::{SourceLocation, TestTree};
//!
//! let mut tree = TestTree::default();
//! {
//!     let mut math = tree.enter("Math");
//!     math.require("2 + 2 == 4", SourceLocation::caller(), || 2 + 2 == 4);
//!     math.require("1 == 2", SourceLocation::caller(), || 1 == 2);
//!     // not evaluated: the segment already failed
//!     math.require("3 == 3", SourceLocation::caller(), || 3 == 3);
//! }
//! assert!(tree.outcome().is_failed());
//! ```

use std::ops::{Deref, DerefMut};

use crate::location::SourceLocation;
use crate::options::Options;
use crate::outcome::Outcome;
use crate::report;
use crate::summary::TestSummary;
use crate::tree::{Node, Segment, Task};

/// How a false assertion affects the segment it was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A false result marks the segment failed, so later assertions in it are
    /// recorded as not run.
    Strict,
    /// A false result is recorded as failed but evaluation carries on.
    Soft,
}

/// Root segment plus the stack of currently active segments.
#[derive(Debug, Clone)]
pub struct TestTree {
    root: Segment,
    /// Child indices leading from the root to the active segment. The root
    /// itself is the implicit bottom of the stack.
    stack: Vec<usize>,
    options: Options,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl TestTree {
    pub fn new(options: Options) -> Self {
        Self {
            root: Segment::new(""),
            stack: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    pub fn root(&self) -> &Segment {
        &self.root
    }

    /// Number of active segments, the root included.
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// The segment new tasks and segments attach to.
    pub fn current(&self) -> &Segment {
        let mut segment = &self.root;
        for &index in &self.stack {
            segment = match &segment.children()[index] {
                Node::Segment(child) => child,
                Node::Task(_) => {
                    panic!("scope stack points at a task (index {index})")
                }
            };
        }
        segment
    }

    fn current_mut(&mut self) -> &mut Segment {
        let mut segment = &mut self.root;
        for &index in &self.stack {
            segment = match segment.segment_at_mut(index) {
                Some(child) => child,
                None => panic!("scope stack points at a task (index {index})"),
            };
        }
        segment
    }

    // -------------------------------------------------------------------------
    // Scopes
    // -------------------------------------------------------------------------

    /// Attaches a new segment named `name` under the current one and makes it
    /// current until the returned guard is dropped.
    pub fn enter(&mut self, name: impl Into<String>) -> ScopeGuard<'_> {
        self.push(name.into());
        let depth = self.depth();
        ScopeGuard { tree: self, depth }
    }

    /// Runs `body` inside a new segment named `name`.
    pub fn section<R>(
        &mut self,
        name: impl Into<String>,
        body: impl FnOnce(&mut TestTree) -> R,
    ) -> R {
        let mut scope = self.enter(name);
        body(&mut scope)
    }

    fn push(&mut self, name: String) {
        let parent = self.current_mut();
        let index = parent.children().len();
        let segment = parent.add_segment(Segment::new(name));
        tracing::debug!(
            segment = segment.name(),
            inherited_failure = segment.did_fail(),
            "entering scope"
        );
        self.stack.push(index);
    }

    fn pop(&mut self) {
        assert!(
            !self.stack.is_empty(),
            "scope stack underflow: the root segment cannot be popped"
        );
        tracing::debug!(segment = self.current().name(), "leaving scope");
        self.stack.pop();
    }

    // -------------------------------------------------------------------------
    // Assertions
    // -------------------------------------------------------------------------

    /// Records an assertion in the current segment.
    ///
    /// `result` is `None` for an assertion that was not evaluated. If the
    /// segment already failed, the result is discarded and the task is
    /// recorded as not run.
    pub fn record(
        &mut self,
        label: impl Into<String>,
        location: SourceLocation,
        result: Option<bool>,
        mode: Mode,
    ) {
        let segment = self.current_mut();
        let label = label.into();

        let task = match result {
            Some(result) if !segment.did_fail() => {
                if !result {
                    tracing::debug!(%label, %location, ?mode, "assertion failed");
                    if mode == Mode::Strict {
                        segment.mark_failed();
                    }
                }
                Task::with_result(label, location, result)
            }
            _ => {
                tracing::trace!(%label, "assertion not run");
                Task::not_run(label, location)
            }
        };
        segment.add_task(task);
    }

    /// Strict assertion. `condition` only runs if the segment has not failed.
    pub fn require(
        &mut self,
        label: impl Into<String>,
        location: SourceLocation,
        condition: impl FnOnce() -> bool,
    ) {
        self.evaluate(label, location, condition, Mode::Strict);
    }

    /// Soft assertion. `condition` only runs if the segment has not failed.
    pub fn check(
        &mut self,
        label: impl Into<String>,
        location: SourceLocation,
        condition: impl FnOnce() -> bool,
    ) {
        self.evaluate(label, location, condition, Mode::Soft);
    }

    fn evaluate(
        &mut self,
        label: impl Into<String>,
        location: SourceLocation,
        condition: impl FnOnce() -> bool,
        mode: Mode,
    ) {
        let result = if self.current().did_fail() {
            None
        } else {
            Some(condition())
        };
        self.record(label, location, result, mode);
    }

    // -------------------------------------------------------------------------
    // Results
    // -------------------------------------------------------------------------

    pub fn outcome(&self) -> Outcome {
        self.root.check()
    }

    pub fn summary(&self) -> TestSummary {
        TestSummary::of(&self.root)
    }

    /// Renders the tree with this tree's options.
    pub fn report(&self) -> String {
        report::generate(&self.root, &self.options)
    }

    /// Discards everything recorded and returns to the root scope.
    ///
    /// Only valid at the root scope. A [`ScopeGuard`] dereferences to the
    /// tree, so `reset` can be reached from inside a scope; that is a contract
    /// violation and panics here rather than when the guard is dropped.
    pub fn reset(&mut self) {
        assert!(
            self.stack.is_empty(),
            "reset called inside an open scope (depth {})",
            self.depth()
        );
        tracing::debug!(tasks = self.root.tasks().count(), "resetting test tree");
        self.root.clear();
        self.stack.clear();
    }
}

/// A live scope. Leaving it (on any path, unwinding included) pops exactly
/// one segment off the stack.
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    tree: &'a mut TestTree,
    /// Stack depth right after this scope was entered.
    depth: usize,
}

impl Deref for ScopeGuard<'_> {
    type Target = TestTree;

    fn deref(&self) -> &TestTree {
        self.tree
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut TestTree {
        self.tree
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            assert_eq!(
                self.tree.depth(),
                self.depth,
                "scope left at the wrong stack depth"
            );
        }
        self.tree.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> SourceLocation {
        SourceLocation::new("context.rs", 0)
    }

    #[test]
    fn guard_pushes_and_pops() {
        let mut tree = TestTree::new(Options::plain());
        assert_eq!(tree.depth(), 1);
        {
            let mut outer = tree.enter("outer");
            assert_eq!(outer.depth(), 2);
            assert_eq!(outer.current().name(), "outer");
            {
                let inner = outer.enter("inner");
                assert_eq!(inner.depth(), 3);
                assert_eq!(inner.current().name(), "inner");
            }
            assert_eq!(outer.current().name(), "outer");
        }
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.current().name(), "");
    }

    #[test]
    fn scope_pops_on_early_return() {
        fn bail() -> Result<(), &'static str> {
            Err("bail")
        }

        fn body(tree: &mut TestTree) -> Result<(), &'static str> {
            let mut scope = tree.enter("early");
            scope.require("ran", at(), || true);
            bail()?;
            scope.require("unreachable", at(), || true);
            Ok(())
        }

        let mut tree = TestTree::new(Options::plain());
        assert!(body(&mut tree).is_err());
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.summary().total_tests(), 1);
    }

    #[test]
    fn strict_failure_short_circuits() {
        let mut tree = TestTree::new(Options::plain());
        let mut evaluated = false;
        tree.section("s", |tree| {
            tree.require("fails", at(), || false);
            tree.require("skipped", at(), || {
                evaluated = true;
                true
            });
        });
        assert!(!evaluated);
        let summary = tree.summary();
        assert_eq!((summary.failed, summary.not_run), (1, 1));
    }

    #[test]
    fn soft_failure_keeps_evaluating() {
        let mut tree = TestTree::new(Options::plain());
        tree.check("soft", at(), || false);
        tree.require("still runs", at(), || true);
        assert!(!tree.current().did_fail());
        assert_eq!(tree.summary().passed, 1);
        assert_eq!(tree.outcome(), Outcome::Failed);
    }

    #[test]
    fn record_ignores_result_after_failure() {
        let mut tree = TestTree::new(Options::plain());
        tree.record("first", at(), Some(false), Mode::Strict);
        tree.record("second", at(), Some(true), Mode::Strict);
        tree.record("third", at(), None, Mode::Soft);

        let outcomes: Vec<Outcome> = tree.root().children().iter().map(Node::check).collect();
        assert_eq!(outcomes, [Outcome::Failed, Outcome::NotRun, Outcome::NotRun]);
    }

    #[test]
    fn scope_opened_after_failure_starts_failed() {
        let mut tree = TestTree::new(Options::plain());
        tree.require("fails", at(), || false);
        let mut scope = tree.enter("late");
        assert!(scope.current().did_fail());
        scope.require("skipped", at(), || true);
        drop(scope);
        assert_eq!(tree.summary().not_run, 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tree = TestTree::new(Options::plain());
        tree.require("fails", at(), || false);
        tree.section("s", |tree| tree.require("x", at(), || true));
        tree.reset();

        assert!(tree.root().is_empty());
        assert!(!tree.root().did_fail());
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.report(), TestTree::new(Options::plain()).report());
    }

    #[test]
    #[should_panic(expected = "reset called inside an open scope")]
    fn reset_inside_a_section_panics() {
        let mut tree = TestTree::new(Options::plain());
        tree.section("s", |tree| {
            tree.require("x", at(), || true);
            tree.reset();
        });
    }

    #[test]
    #[should_panic(expected = "reset called inside an open scope")]
    fn reset_through_a_guard_panics() {
        let mut tree = TestTree::new(Options::plain());
        let mut scope = tree.enter("s");
        scope.reset();
    }

    #[test]
    #[should_panic(expected = "scope stack underflow")]
    fn popping_the_root_panics() {
        let mut tree = TestTree::new(Options::plain());
        tree.pop();
    }
}
