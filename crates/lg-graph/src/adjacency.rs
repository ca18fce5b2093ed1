//! Vertex-centric representation: each vertex owns its outgoing edges.

use std::collections::{HashMap, HashSet};
use std::fmt;

use lg_core::{Label, Weight};

use crate::graph::Graph;
use crate::validate;

/// A vertex and the outgoing edges it owns.
///
/// The label is fixed for the vertex's lifetime; the edge map holds only
/// strictly positive weights (setting a weight of zero removes the entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<L: Label> {
    label: L,
    outgoing: HashMap<L, Weight>,
}

impl<L: Label> Vertex<L> {
    fn new(label: L) -> Self {
        Self {
            label,
            outgoing: HashMap::new(),
        }
    }

    /// The vertex's label.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Owned copy of the outgoing-edge map (target label -> weight).
    pub fn outgoing(&self) -> HashMap<L, Weight> {
        self.outgoing.clone()
    }

    /// Weight of the edge to `target`, if one exists.
    pub fn edge_to(&self, target: &L) -> Option<Weight> {
        self.outgoing.get(target).copied()
    }

    /// Set, overwrite, or (weight 0) delete the edge to `target`.
    /// Returns the previous weight, 0 if there was no edge.
    fn set_edge(&mut self, target: L, weight: Weight) -> Weight {
        let previous = self.outgoing.get(&target).copied().unwrap_or(0);
        if weight == 0 {
            self.outgoing.remove(&target);
        } else {
            self.outgoing.insert(target, weight);
        }
        previous
    }

    fn remove_edge(&mut self, target: &L) {
        self.outgoing.remove(target);
    }

    pub(crate) fn edge_map(&self) -> &HashMap<L, Weight> {
        &self.outgoing
    }

    #[cfg(test)]
    pub(crate) fn from_parts(label: L, outgoing: HashMap<L, Weight>) -> Self {
        Self { label, outgoing }
    }
}

impl<L: Label> fmt::Display for Vertex<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted by target so diagnostic output is deterministic.
        let mut edges: Vec<(&L, Weight)> = self.outgoing.iter().map(|(t, &w)| (t, w)).collect();
        edges.sort_by(|a, b| a.0.cmp(b.0));

        write!(f, "{} -> {{", self.label)?;
        for (i, (target, weight)) in edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{target}: {weight}")?;
        }
        write!(f, "}}")
    }
}

/// Graph stored as a list of vertices, each owning its outgoing-edge map.
///
/// Vertices are kept in insertion order. Edge mutation is local to the
/// source vertex; deleting a vertex walks every remaining vertex to strip
/// edges pointing at the deleted label. `targets` is a single lookup plus a
/// map copy, while `sources` must scan every vertex's edge map — that
/// asymmetry is intrinsic to this layout.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<L: Label> {
    vertices: Vec<Vertex<L>>,
    rep_checks: bool,
}

impl<L: Label> AdjacencyGraph<L> {
    /// New empty graph. Rep checks are on in debug builds, off in release.
    pub fn new() -> Self {
        Self::with_rep_checks(cfg!(debug_assertions))
    }

    /// New empty graph with rep checking explicitly enabled or disabled.
    pub fn with_rep_checks(enabled: bool) -> Self {
        Self {
            vertices: Vec::new(),
            rep_checks: enabled,
        }
    }

    fn position(&self, label: &L) -> Option<usize> {
        self.vertices.iter().position(|v| v.label() == label)
    }

    /// Index of the vertex with `label`, appending a fresh vertex if absent.
    fn ensure(&mut self, label: L) -> usize {
        match self.position(&label) {
            Some(index) => index,
            None => {
                self.vertices.push(Vertex::new(label));
                self.vertices.len() - 1
            }
        }
    }

    fn check_rep(&self) {
        if !self.rep_checks {
            return;
        }
        if let Err(err) = validate::check_adjacency_rep(&self.vertices) {
            panic!("representation invariant violated: {err}");
        }
    }
}

impl<L: Label> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Graph<L> for AdjacencyGraph<L> {
    fn add(&mut self, label: L) -> bool {
        if self.position(&label).is_some() {
            return false;
        }
        self.vertices.push(Vertex::new(label));
        self.check_rep();
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Weight {
        let src = self.ensure(source);
        // For a self-loop this finds the vertex just created above.
        self.ensure(target.clone());
        let previous = self.vertices[src].set_edge(target, weight);
        self.check_rep();
        previous
    }

    fn remove(&mut self, label: &L) -> bool {
        let Some(index) = self.position(label) else {
            return false;
        };
        self.vertices.remove(index);
        for vertex in &mut self.vertices {
            vertex.remove_edge(label);
        }
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().map(|v| v.label().clone()).collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        let mut sources = HashMap::new();
        for vertex in &self.vertices {
            if let Some(weight) = vertex.edge_to(target) {
                sources.insert(vertex.label().clone(), weight);
            }
        }
        sources
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        match self.position(source) {
            Some(index) => self.vertices[index].outgoing(),
            None => HashMap::new(),
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<L: Label> fmt::Display for AdjacencyGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AdjacencyGraph with {} vertices:", self.vertices.len())?;
        for vertex in &self.vertices {
            writeln!(f, "  {vertex}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn vertex_set_edge_returns_previous_weight() {
        let mut vertex = Vertex::new(s("A"));
        assert_eq!(vertex.set_edge(s("B"), 5), 0);
        assert_eq!(vertex.set_edge(s("B"), 7), 5);
        assert_eq!(vertex.edge_to(&s("B")), Some(7));
    }

    #[test]
    fn vertex_zero_weight_removes_entry() {
        let mut vertex = Vertex::new(s("A"));
        vertex.set_edge(s("B"), 3);
        assert_eq!(vertex.set_edge(s("B"), 0), 3);
        assert_eq!(vertex.edge_to(&s("B")), None);
        assert!(vertex.outgoing().is_empty());
    }

    #[test]
    fn vertex_outgoing_is_a_copy() {
        let mut vertex = Vertex::new(s("A"));
        vertex.set_edge(s("B"), 2);
        let mut snapshot = vertex.outgoing();
        snapshot.insert(s("C"), 9);
        assert_eq!(vertex.edge_to(&s("C")), None);
    }

    #[test]
    fn vertex_display_sorts_targets() {
        let mut vertex = Vertex::new(s("A"));
        vertex.set_edge(s("C"), 2);
        vertex.set_edge(s("B"), 1);
        assert_eq!(vertex.to_string(), "A -> {B: 1, C: 2}");
    }

    #[test]
    fn insertion_order_is_preserved_in_describe() {
        let mut graph = AdjacencyGraph::new();
        graph.add(s("Z"));
        graph.add(s("A"));
        let text = graph.describe();
        let z = text.find("Z ->").unwrap();
        let a = text.find("A ->").unwrap();
        assert!(z < a);
    }

    #[test]
    fn remove_strips_incoming_edges_from_every_vertex() {
        let mut graph = AdjacencyGraph::new();
        graph.set(s("A"), s("X"), 1);
        graph.set(s("B"), s("X"), 2);
        graph.set(s("X"), s("A"), 3);
        assert!(graph.remove(&s("X")));
        assert!(graph.sources(&s("X")).is_empty());
        assert!(graph.targets(&s("A")).is_empty());
        assert!(graph.targets(&s("B")).is_empty());
    }

    #[test]
    fn self_loop_round_trip() {
        let mut graph = AdjacencyGraph::new();
        assert_eq!(graph.set(s("A"), s("A"), 4), 0);
        assert_eq!(graph.targets(&s("A"))[&s("A")], 4);
        assert_eq!(graph.sources(&s("A"))[&s("A")], 4);
        assert_eq!(graph.set(s("A"), s("A"), 0), 4);
        assert!(graph.targets(&s("A")).is_empty());
    }

    #[test]
    #[should_panic(expected = "representation invariant violated")]
    fn corrupt_rep_panics_when_checks_enabled() {
        let mut graph: AdjacencyGraph<String> = AdjacencyGraph::with_rep_checks(true);
        graph.vertices.push(Vertex::new(s("A")));
        graph.vertices.push(Vertex::new(s("A")));
        // Next mutating operation runs the check.
        graph.add(s("B"));
    }

    #[test]
    fn corrupt_rep_tolerated_when_checks_disabled() {
        let mut graph: AdjacencyGraph<String> = AdjacencyGraph::with_rep_checks(false);
        graph.vertices.push(Vertex::new(s("A")));
        graph.vertices.push(Vertex::new(s("A")));
        graph.add(s("B"));
    }
}
