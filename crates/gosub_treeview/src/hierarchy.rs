//! Headless construction of the parent/child structure from flat records.
//!
//! Children of a parent are found by a linear scan over all records, which keeps the input order
//! of siblings. Records that can never be reached from the start of the build are not dropped
//! silently but collected in a [`BuildReport`].
use crate::errors::TreeViewError;
use crate::record::{ItemId, Record, ROOT_PARENT_ID};
use log::warn;
use std::collections::{HashMap, HashSet};
use std::mem;

/// Finds children of records by scanning the complete record list
pub struct HierarchyBuilder<'a> {
    records: &'a [Record],
}

impl<'a> HierarchyBuilder<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self { records }
    }

    /// Returns all records whose parent is the given id, in input order
    pub fn children_of(&self, parent_id: ItemId) -> Vec<&'a Record> {
        self.records
            .iter()
            .filter(|record| record.parent_id == parent_id)
            .collect()
    }

    /// Positions of the children of `parent_id` in the record list
    fn child_positions(&self, parent_id: ItemId) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.parent_id == parent_id)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Builds the hierarchy starting at the implicit root
    pub fn build(&self) -> Hierarchy {
        self.build_from(ROOT_PARENT_ID)
    }

    /// Builds the hierarchy of all descendants of `parent_id`. Unreachable records are only
    /// reported when building from the root, as a subtree never reaches its ancestors.
    pub fn build_from(&self, parent_id: ItemId) -> Hierarchy {
        let mut visited = vec![false; self.records.len()];
        let mut report = BuildReport::default();
        let roots = self.build_level(parent_id, &mut visited, &mut report);

        if parent_id == ROOT_PARENT_ID {
            for (record, _) in self.records.iter().zip(&visited).filter(|(_, seen)| !**seen) {
                if record.id == record.parent_id {
                    report.cycles.push(record.clone());
                } else {
                    report.orphans.push(record.clone());
                }
            }
        }

        Hierarchy { roots, report }
    }

    /// Builds the levels below `parent_id` with an explicit stack, so deep chains of records
    /// do not exhaust the call stack
    fn build_level(&self, parent_id: ItemId, visited: &mut [bool], report: &mut BuildReport) -> Vec<HierarchyNode> {
        let mut ancestors = HashSet::from([parent_id]);
        let mut stack = vec![Level::new(None, self.child_positions(parent_id))];

        loop {
            let Some(level) = stack.last_mut() else {
                return Vec::new();
            };

            if let Some(pos) = level.positions.next() {
                visited[pos] = true;
                let record = &self.records[pos];

                // a record that is its own ancestor would recurse forever
                if !ancestors.insert(record.id) {
                    report.cycles.push(record.clone());
                    continue;
                }

                stack.push(Level::new(Some(pos), self.child_positions(record.id)));
                continue;
            }

            let finished = mem::take(&mut level.nodes);
            let owner = level.owner;
            stack.pop();

            match (owner, stack.last_mut()) {
                (Some(pos), Some(parent)) => {
                    let record = &self.records[pos];
                    ancestors.remove(&record.id);
                    parent.insert(
                        HierarchyNode {
                            record: record.clone(),
                            children: finished,
                        },
                        report,
                    );
                }
                _ => return finished,
            }
        }
    }
}

/// A level under construction: the children of the record at `owner` (or of the start of the
/// build when `None`)
struct Level {
    owner: Option<usize>,
    positions: std::vec::IntoIter<usize>,
    nodes: Vec<HierarchyNode>,
    index: HashMap<ItemId, usize>,
}

impl Level {
    fn new(owner: Option<usize>, positions: Vec<usize>) -> Self {
        Self {
            owner,
            positions: positions.into_iter(),
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds a finished node. A sibling with the same id is replaced in place.
    fn insert(&mut self, node: HierarchyNode, report: &mut BuildReport) {
        match self.index.get(&node.id()) {
            Some(&existing) => {
                report.duplicates.push(self.nodes[existing].record.clone());
                self.nodes[existing] = node;
            }
            None => {
                self.index.insert(node.id(), self.nodes.len());
                self.nodes.push(node);
            }
        }
    }
}

/// A record together with its children
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    record: Record,
    children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn id(&self) -> ItemId {
        self.record.id
    }

    pub fn children(&self) -> &[HierarchyNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this node
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::node_count).sum::<usize>()
    }
}

/// Result of a build: the top-level nodes and everything that could not be placed
#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchy {
    roots: Vec<HierarchyNode>,
    report: BuildReport,
}

impl Hierarchy {
    pub fn roots(&self) -> &[HierarchyNode] {
        &self.roots
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Total number of nodes in the hierarchy
    pub fn len(&self) -> usize {
        self.roots.iter().map(HierarchyNode::node_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first search for the first node with the given id
    pub fn find(&self, id: ItemId) -> Option<&HierarchyNode> {
        let mut stack: Vec<&HierarchyNode> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.id() == id {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }
}

/// Records that did not end up in the hierarchy (or replaced another record)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Records whose parent is never reached
    pub orphans: Vec<Record>,
    /// Records that would become their own ancestor
    pub cycles: Vec<Record>,
    /// Records that were replaced by a later sibling with the same id
    pub duplicates: Vec<Record>,
}

impl BuildReport {
    /// Returns true when every record was placed exactly once
    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty() && self.cycles.is_empty() && self.duplicates.is_empty()
    }

    /// Logs every problem found during the build as a warning
    pub fn log(&self, report_orphans: bool) {
        if report_orphans {
            for record in &self.orphans {
                warn!(
                    "record {} ({}) is unreachable: parent {} is never part of the tree",
                    record.id, record.name, record.parent_id
                );
            }
        }
        for record in &self.cycles {
            warn!(
                "record {} ({}) is skipped: it would become its own ancestor",
                record.id, record.name
            );
        }
        for record in &self.duplicates {
            warn!(
                "record {} ({}) is replaced by a later sibling with the same id",
                record.id, record.name
            );
        }
    }

    /// Converts the report into an error when it is not clean
    pub fn check(&self) -> Result<(), TreeViewError> {
        if self.is_clean() {
            return Ok(());
        }

        Err(TreeViewError::InvalidRecords {
            orphans: self.orphans.len(),
            cycles: self.cycles.len(),
            duplicates: self.duplicates.len(),
        })
    }
}
