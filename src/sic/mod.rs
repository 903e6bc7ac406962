// src/sic/mod.rs
//! SIC classification tree and its flattened form.
//!
//! A scraped page becomes a [`Node`] tree (Major Group → Industry Group →
//! SIC4). [`flatten`] turns it into [`Record`]s pairing each node's label
//! with the label of its direct parent, in document order.

mod flatten;
pub mod label;

pub use flatten::flatten;
pub use label::{Heading, classify};

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Division,
    Major,
    IndustryGroup,
    Sic4,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    pub level: Level,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(label: impl Into<String>, level: Level) -> Self {
        Self { label: label.into(), level, children: Vec::new() }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes below this one (the node itself excluded).
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = vec![self];
        while let Some(node) = stack.pop() {
            count += node.children.len();
            stack.extend(node.children.iter());
        }
        count
    }
}

/// One flattened row: a node's own label and its direct parent's label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    pub full_desc: String,
    pub parent_desc: String,
}

impl Record {
    pub fn new(full_desc: impl Into<String>, parent_desc: impl Into<String>) -> Self {
        Self { full_desc: full_desc.into(), parent_desc: parent_desc.into() }
    }
}

pub const RECORD_HEADERS: [&str; 2] = ["full_desc", "parent_desc"];
