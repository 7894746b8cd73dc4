//! Pass, fail and not-run counts over a subtree.

use serde::Serialize;

use crate::outcome::Outcome;
use crate::tree::Segment;

/// Task tallies for a subtree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
    pub not_run: usize,
}

impl TestSummary {
    pub fn of(segment: &Segment) -> Self {
        segment
            .tasks()
            .fold(Self::default(), |mut summary, task| {
                match task.check() {
                    Outcome::Passed => summary.passed += 1,
                    Outcome::Failed => summary.failed += 1,
                    Outcome::NotRun => summary.not_run += 1,
                }
                summary
            })
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn total_tests(&self) -> usize {
        self.passed + self.failed + self.not_run
    }

    /// Percentage of evaluated tasks that passed. Not-run tasks are left out.
    pub fn success_rate(&self) -> f64 {
        let evaluated = self.passed + self.failed;
        if evaluated == 0 {
            return 0.0;
        }
        (self.passed as f64 / evaluated as f64) * 100.0
    }
}
