//! The test tree: segments holding tasks and nested segments.
//!
//! Nodes are a closed set ([`Node::Task`] and [`Node::Segment`]), so every walk
//! over the tree is an exhaustive `match`.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::location::SourceLocation;
use crate::outcome::Outcome;

// =============================================================================
// TASK
// =============================================================================

/// One recorded assertion. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Task {
    label: String,
    location: SourceLocation,
    outcome: Outcome,
}

impl Task {
    /// A task that was never evaluated.
    pub fn not_run(label: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            label: label.into(),
            location,
            outcome: Outcome::NotRun,
        }
    }

    /// A task whose condition evaluated to `result`.
    pub fn with_result(label: impl Into<String>, location: SourceLocation, result: bool) -> Self {
        Self {
            outcome: Outcome::from_result(result),
            ..Self::not_run(label, location)
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn check(&self) -> Outcome {
        self.outcome
    }
}

// =============================================================================
// SEGMENT
// =============================================================================

/// A named, ordered group of tasks and sub-segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    name: String,
    children: Vec<Node>,
    failed: bool,
}

impl Segment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            failed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Has a strict assertion in this segment failed (or was the parent
    /// already failed when this segment was attached)?
    pub fn did_fail(&self) -> bool {
        self.failed
    }

    /// Marks this segment failed. Later assertions in it are recorded as not run.
    pub fn mark_failed(&mut self) {
        self.failed = true;
    }

    /// Attaches `segment` as the last child. The child inherits this segment's
    /// failed state as it is right now.
    pub fn add_segment(&mut self, mut segment: Segment) -> &mut Segment {
        segment.failed = self.failed;
        self.children.push(Node::Segment(segment));
        match self.children.last_mut() {
            Some(Node::Segment(segment)) => segment,
            _ => unreachable!("a segment was just pushed"),
        }
    }

    /// Appends `task` as the last child.
    pub fn add_task(&mut self, task: Task) -> &Task {
        self.children.push(Node::Task(task));
        match self.children.last() {
            Some(Node::Task(task)) => task,
            _ => unreachable!("a task was just pushed"),
        }
    }

    /// Aggregate outcome of all children. Recomputed on every call.
    pub fn check(&self) -> Outcome {
        Outcome::aggregate(self.children.iter().map(Node::check))
    }

    /// The child segment at `index`, if that child is a segment.
    pub(crate) fn segment_at_mut(&mut self, index: usize) -> Option<&mut Segment> {
        match self.children.get_mut(index) {
            Some(Node::Segment(segment)) => Some(segment),
            _ => None,
        }
    }

    /// Drops every child and clears the failed flag.
    pub(crate) fn clear(&mut self) {
        self.children.clear();
        self.failed = false;
    }

    /// Depth-first iterator over every task below this segment.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        let mut pending: Vec<&Node> = self.children.iter().rev().collect();
        std::iter::from_fn(move || {
            while let Some(node) = pending.pop() {
                match node {
                    Node::Task(task) => return Some(task),
                    Node::Segment(segment) => pending.extend(segment.children.iter().rev()),
                }
            }
            None
        })
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Segment", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("outcome", &self.check())?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

// =============================================================================
// NODE
// =============================================================================

/// A child of a segment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Task(Task),
    Segment(Segment),
}

impl Node {
    pub fn check(&self) -> Outcome {
        match self {
            Node::Task(task) => task.check(),
            Node::Segment(segment) => segment.check(),
        }
    }
}

impl From<Task> for Node {
    fn from(task: Task) -> Self {
        Node::Task(task)
    }
}

impl From<Segment> for Node {
    fn from(segment: Segment) -> Self {
        Node::Segment(segment)
    }
}
