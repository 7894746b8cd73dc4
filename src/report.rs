//! Renders a test tree as indented, colorized text.
//!
//! Rendering is a pure walk over the tree; nothing here writes to a terminal.
//!
//! Layout, two spaces of indent per depth:
//! ```text
//! Math: [some tests failed]
//!   ✓ 2 + 2 == 4
//!   ✘ 1 == 2 ( at file: tests/math.rs, line: 12 )
//!   ○ 3 == 3
//! ```
//! A segment expands its children when its depth is within the configured
//! [`DetailDepth`](crate::options::DetailDepth) or when it failed. Segments
//! that never ran show their name only.

use serde::Serialize;

use crate::errors::Result;
use crate::options::Options;
use crate::outcome::Outcome;
use crate::summary::TestSummary;
use crate::tree::{Node, Segment, Task};

pub mod palette;

pub use palette::{Palette, CHECK_MARK, CIRCLE_SYM, CROSS_MARK};

const INDENT: &str = "  ";

/// Renders the whole tree below `root`. The root's own line is suppressed and
/// leading blank lines are trimmed.
pub fn generate(root: &Segment, options: &Options) -> String {
    let palette = Palette::new(options.use_colors);
    let report = Renderer {
        options,
        palette: &palette,
    }
    .segment(root, -1);
    tracing::trace!(bytes = report.len(), "generated report");
    report.trim_start_matches('\n').to_string()
}

/// Renders a single node at `depth`. Negative depths suppress the node's own line.
pub fn render(node: &Node, depth: i32, options: &Options) -> String {
    let palette = Palette::new(options.use_colors);
    let renderer = Renderer {
        options,
        palette: &palette,
    };
    match node {
        Node::Task(task) => renderer.task(task, depth),
        Node::Segment(segment) => renderer.segment(segment, depth),
    }
}

struct Renderer<'a> {
    options: &'a Options,
    palette: &'a Palette,
}

impl Renderer<'_> {
    fn task(&self, task: &Task, depth: i32) -> String {
        if depth < 0 {
            return String::new();
        }

        let outcome = task.check();
        let (style, glyph) = self.palette.task_marker(outcome);

        let mut out = indent(depth);
        out.push_str(style);
        out.push_str(glyph);
        out.push(' ');
        out.push_str(task.label());
        if outcome.is_failed() {
            let location = task.location();
            out.push_str(&format!(
                " ( at file: {}, line: {} )",
                location.file, location.line
            ));
        }
        out.push_str(&self.palette.reset);
        out
    }

    fn segment(&self, segment: &Segment, depth: i32) -> String {
        let outcome = segment.check();
        let mut out = indent(depth);

        let annotation = match outcome {
            Outcome::NotRun => {
                out.push_str(&self.palette.muted);
                out.push_str(segment.name());
                out.push_str(&self.palette.reset);
                return out;
            }
            Outcome::Passed => (&self.palette.all_passed, " [all tests passed]"),
            Outcome::Failed => (&self.palette.some_failed, " [some tests failed]"),
        };

        out.push_str(segment.name());
        out.push(':');
        out.push_str(annotation.0);
        out.push_str(annotation.1);
        out.push_str(&self.palette.reset);

        // the root pass only renders children
        if depth < 0 {
            out.clear();
        }

        if self.options.detail_depth.expands(depth) || outcome.is_failed() {
            for child in segment.children() {
                match child {
                    Node::Segment(sub) => {
                        if !out.ends_with('\n') {
                            out.push('\n');
                        }
                        out.push('\n');
                        out.push_str(&self.segment(sub, depth + 1));
                        out.push('\n');
                    }
                    Node::Task(task) => {
                        out.push('\n');
                        out.push_str(&self.task(task, depth + 1));
                    }
                }
            }
        }

        out.push_str(&self.palette.reset);
        out
    }
}

fn indent(depth: i32) -> String {
    INDENT.repeat(usize::try_from(depth).unwrap_or(0))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    outcome: Outcome,
    summary: TestSummary,
    tree: &'a Segment,
}

/// Serializes the tree, its outcome and its tallies as pretty-printed JSON.
pub fn to_json(root: &Segment) -> Result<String> {
    let report = JsonReport {
        outcome: root.check(),
        summary: TestSummary::of(root),
        tree: root,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::SourceLocation;
    use crate::options::DetailDepth;

    fn at(line: u32) -> SourceLocation {
        SourceLocation::new("math.rs", line)
    }

    #[test]
    fn task_lines() {
        let options = Options::plain();
        let passed = Node::Task(Task::with_result("ok", at(1), true));
        let failed = Node::Task(Task::with_result("bad", at(2), false));
        let skipped = Node::Task(Task::not_run("later", at(3)));

        assert_eq!(render(&passed, 1, &options), "  ✓ ok");
        assert_eq!(
            render(&failed, 0, &options),
            "✘ bad ( at file: math.rs, line: 2 )"
        );
        assert_eq!(render(&skipped, 2, &options), "    ○ later");
        assert_eq!(render(&passed, -1, &options), "");
    }

    #[test]
    fn not_run_segment_renders_name_only() {
        let mut segment = Segment::new("Empty");
        segment.add_segment(Segment::new("Inner"));
        let node = Node::Segment(segment);
        assert_eq!(render(&node, 1, &Options::plain()), "  Empty");
    }

    #[test]
    fn colored_task_line() {
        let options = Options::plain().with_colors(true);
        let passed = Node::Task(Task::with_result("ok", at(1), true));
        assert_eq!(render(&passed, 0, &options), "\x1b[38;5;42m✓ ok\x1b[0m");
    }

    #[test]
    fn collapsed_below_depth_budget() {
        let mut root = Segment::new("");
        let group = root.add_segment(Segment::new("Group"));
        group.add_task(Task::with_result("inner", at(1), true));

        let options = Options::plain().with_detail_depth(DetailDepth::Levels(0));
        assert_eq!(generate(&root, &options), "Group: [all tests passed]\n");

        let options = Options::plain().with_detail_depth(DetailDepth::Levels(1));
        assert_eq!(
            generate(&root, &options),
            "Group: [all tests passed]\n  ✓ inner\n"
        );
    }

    #[test]
    fn json_includes_outcome_and_summary() {
        let mut root = Segment::new("");
        root.add_task(Task::with_result("a", at(1), false));
        let json = to_json(&root).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["outcome"], "failed");
        assert_eq!(value["summary"]["failed"], 1);
        assert_eq!(value["tree"]["children"][0]["kind"], "task");
        assert_eq!(value["tree"]["children"][0]["location"]["line"], 1);
    }
}
