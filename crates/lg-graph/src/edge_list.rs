//! Edge-list representation: a flat edge collection over a label set.

use std::collections::{HashMap, HashSet};
use std::fmt;

use lg_core::{Label, Weight};

use crate::graph::Graph;
use crate::validate;

/// A directed edge with fixed endpoints and a mutable weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<L: Label> {
    source: L,
    target: L,
    weight: Weight,
}

impl<L: Label> Edge<L> {
    pub(crate) fn new(source: L, target: L, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    pub fn source(&self) -> &L {
        &self.source
    }

    pub fn target(&self) -> &L {
        &self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    fn connects(&self, source: &L, target: &L) -> bool {
        &self.source == source && &self.target == target
    }
}

impl<L: Label> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

/// Graph stored as a vertex-label set plus a flat list of edges.
///
/// No per-endpoint index is maintained: every edge operation and both query
/// directions are a linear scan of the edge list. Simpler bookkeeping than
/// [`AdjacencyGraph`], symmetric O(edges) cost in exchange.
///
/// [`AdjacencyGraph`]: crate::adjacency::AdjacencyGraph
#[derive(Debug, Clone)]
pub struct EdgeListGraph<L: Label> {
    labels: HashSet<L>,
    edges: Vec<Edge<L>>,
    rep_checks: bool,
}

impl<L: Label> EdgeListGraph<L> {
    /// New empty graph. Rep checks are on in debug builds, off in release.
    pub fn new() -> Self {
        Self::with_rep_checks(cfg!(debug_assertions))
    }

    /// New empty graph with rep checking explicitly enabled or disabled.
    pub fn with_rep_checks(enabled: bool) -> Self {
        Self {
            labels: HashSet::new(),
            edges: Vec::new(),
            rep_checks: enabled,
        }
    }

    fn check_rep(&self) {
        if !self.rep_checks {
            return;
        }
        if let Err(err) = validate::check_edge_list_rep(&self.labels, &self.edges) {
            panic!("representation invariant violated: {err}");
        }
    }
}

impl<L: Label> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Graph<L> for EdgeListGraph<L> {
    fn add(&mut self, label: L) -> bool {
        let added = self.labels.insert(label);
        if added {
            self.check_rep();
        }
        added
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Weight {
        self.add(source.clone());
        self.add(target.clone());

        let previous = match self.edges.iter().position(|e| e.connects(&source, &target)) {
            Some(index) => {
                let old = self.edges[index].weight();
                if weight == 0 {
                    self.edges.remove(index);
                } else {
                    self.edges[index].set_weight(weight);
                }
                old
            }
            None => {
                if weight > 0 {
                    self.edges.push(Edge::new(source, target, weight));
                }
                0
            }
        };

        self.check_rep();
        previous
    }

    fn remove(&mut self, label: &L) -> bool {
        if !self.labels.remove(label) {
            return false;
        }
        self.edges
            .retain(|e| e.source() != label && e.target() != label);
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.labels.clone()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        let mut sources = HashMap::new();
        for edge in &self.edges {
            if edge.target() == target {
                sources.insert(edge.source().clone(), edge.weight());
            }
        }
        sources
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        let mut targets = HashMap::new();
        for edge in &self.edges {
            if edge.source() == source {
                targets.insert(edge.target().clone(), edge.weight());
            }
        }
        targets
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<L: Label> fmt::Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Labels sorted for determinism; edges in insertion order.
        let mut labels: Vec<&L> = self.labels.iter().collect();
        labels.sort();

        writeln!(
            f,
            "EdgeListGraph with {} vertices, {} edges:",
            self.labels.len(),
            self.edges.len()
        )?;
        write!(f, "  vertices:")?;
        for label in labels {
            write!(f, " {label}")?;
        }
        writeln!(f)?;
        for edge in &self.edges {
            writeln!(f, "  {edge}")?;
        }
        Ok(())
    }
}
