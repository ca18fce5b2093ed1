//! The shared graph contract.

use std::collections::{HashMap, HashSet};

use lg_core::{Label, Weight};

/// A mutable weighted directed graph with vertices of label type `L`.
///
/// Edge weights are strictly positive; a weight of zero passed to [`set`]
/// means "no edge" and deletes any existing edge. Self-loops are legal.
///
/// Every query returns an owned snapshot: mutating a returned collection, or
/// mutating the graph after the query, never changes a previously returned
/// result.
///
/// [`set`]: Graph::set
pub trait Graph<L: Label> {
    /// Add a vertex with no edges.
    ///
    /// Returns true if the vertex was inserted, false if `label` was already
    /// present (in which case nothing changes).
    fn add(&mut self, label: L) -> bool;

    /// Create, overwrite, or delete the edge `source -> target`.
    ///
    /// Both endpoints are added as vertices first if absent. A positive
    /// `weight` creates or overwrites the edge; a `weight` of zero deletes
    /// it if present. Returns the weight in effect immediately before this
    /// call, 0 if there was no edge.
    fn set(&mut self, source: L, target: L, weight: Weight) -> Weight;

    /// Delete the vertex `label` and every edge touching it, in either
    /// direction.
    ///
    /// Returns true if the vertex existed; a no-op returning false otherwise.
    fn remove(&mut self, label: &L) -> bool;

    /// All current vertex labels, as an owned unordered snapshot.
    fn vertices(&self) -> HashSet<L>;

    /// Every vertex with a direct edge into `target`, mapped to that edge's
    /// weight. Empty if `target` has no incoming edges or is not a vertex.
    fn sources(&self, target: &L) -> HashMap<L, Weight>;

    /// Every vertex with a direct edge out of `source`, mapped to that
    /// edge's weight. Empty if `source` has no outgoing edges or is not a
    /// vertex.
    fn targets(&self, source: &L) -> HashMap<L, Weight>;

    /// Human-readable rendering of the graph for diagnostics.
    ///
    /// The exact text is unspecified; collaborators must not depend on it.
    fn describe(&self) -> String;
}
