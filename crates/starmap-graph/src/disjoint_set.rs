//! Union-find over vertices.
//!
//! Groups are merged by size with path compression on `find`. When two
//! groups of equal size merge, the root that was added first stays the
//! representative. Which element represents a group is an implementation
//! detail: callers should compare groups with [`DisjointSet::same_set`] or
//! by comparing two `find` results, never by expecting a given vertex.

use starmap_core::{GraphError, Result, Vertex, VertexId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Vertex id to slot, slots numbered in insertion order.
    slots: HashMap<VertexId, usize>,
    elements: Vec<Vertex>,
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// Creates a new empty set collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks `v` in a new singleton group.
    ///
    /// Returns false if `v` is already tracked.
    pub fn make_set(&mut self, v: &Vertex) -> bool {
        if self.slots.contains_key(&v.id()) {
            return false;
        }
        let slot = self.elements.len();
        self.slots.insert(v.id(), slot);
        self.elements.push(v.clone());
        self.parent.push(slot);
        self.size.push(1);
        self.sets += 1;
        true
    }

    /// Returns the representative of the group containing `v`.
    pub fn find(&mut self, v: &Vertex) -> Result<&Vertex> {
        let slot = self.slot(v)?;
        let root = self.root(slot);
        Ok(&self.elements[root])
    }

    /// Merges the groups containing `a` and `b`.
    ///
    /// Returns true if two distinct groups were merged, false if they were
    /// already one group.
    pub fn union(&mut self, a: &Vertex, b: &Vertex) -> Result<bool> {
        let a = self.slot(a)?;
        let b = self.slot(b)?;
        let mut keep = self.root(a);
        let mut absorb = self.root(b);
        if keep == absorb {
            return Ok(false);
        }

        if self.size[keep] < self.size[absorb]
            || (self.size[keep] == self.size[absorb] && absorb < keep)
        {
            std::mem::swap(&mut keep, &mut absorb);
        }
        self.parent[absorb] = keep;
        self.size[keep] += self.size[absorb];
        self.sets -= 1;
        Ok(true)
    }

    /// Returns true if `a` and `b` are in the same group.
    pub fn same_set(&mut self, a: &Vertex, b: &Vertex) -> Result<bool> {
        let a = self.slot(a)?;
        let b = self.slot(b)?;
        Ok(self.root(a) == self.root(b))
    }

    /// Number of tracked vertices.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of distinct groups.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn slot(&self, v: &Vertex) -> Result<usize> {
        self.slots
            .get(&v.id())
            .copied()
            .ok_or(GraphError::VertexNotFound(v.id()))
    }

    fn root(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[slot] != slot {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }

        root
    }
}

impl<'a> FromIterator<&'a Vertex> for DisjointSet {
    fn from_iter<I: IntoIterator<Item = &'a Vertex>>(iter: I) -> Self {
        let mut set = Self::new();
        for v in iter {
            set.make_set(v);
        }
        set
    }
}
