//! Representation-invariant checks.
//!
//! Run by both graph types after every mutating operation when rep checking
//! is enabled. A violation here is always an internal bug: the contract
//! operations are total over their input domains, so no caller input can
//! legitimately trip these.

use std::collections::HashSet;

use lg_core::Label;

use crate::adjacency::Vertex;
use crate::edge_list::Edge;
use crate::error::GraphError;

/// Check the vertex-centric rep: unique labels, positive stored weights.
pub(crate) fn check_adjacency_rep<L: Label>(vertices: &[Vertex<L>]) -> Result<(), GraphError> {
    let mut seen: HashSet<&L> = HashSet::new();
    for vertex in vertices {
        if !seen.insert(vertex.label()) {
            return Err(GraphError::DuplicateLabel {
                label: vertex.label().to_string(),
            });
        }
        for (target, &weight) in vertex.edge_map() {
            if weight == 0 {
                return Err(GraphError::ZeroWeight {
                    src: vertex.label().to_string(),
                    target: target.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Check the edge-list rep: positive weights, both endpoints in the label
/// set. Label uniqueness is structural here (the labels live in a set).
pub(crate) fn check_edge_list_rep<L: Label>(
    labels: &HashSet<L>,
    edges: &[Edge<L>],
) -> Result<(), GraphError> {
    for edge in edges {
        if edge.weight() == 0 {
            return Err(GraphError::ZeroWeight {
                src: edge.source().to_string(),
                target: edge.target().to_string(),
            });
        }
        for endpoint in [edge.source(), edge.target()] {
            if !labels.contains(endpoint) {
                return Err(GraphError::DanglingEndpoint {
                    src: edge.source().to_string(),
                    target: edge.target().to_string(),
                    missing: endpoint.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn empty_reps_are_valid() {
        assert!(check_adjacency_rep::<String>(&[]).is_ok());
        assert!(check_edge_list_rep::<String>(&HashSet::new(), &[]).is_ok());
    }

    #[test]
    fn duplicate_labels_rejected() {
        let vertices = vec![
            Vertex::from_parts(s("A"), HashMap::new()),
            Vertex::from_parts(s("A"), HashMap::new()),
        ];
        assert_eq!(
            check_adjacency_rep(&vertices),
            Err(GraphError::DuplicateLabel { label: s("A") })
        );
    }

    #[test]
    fn stored_zero_weight_rejected() {
        let vertices = vec![Vertex::from_parts(s("A"), HashMap::from([(s("B"), 0)]))];
        assert_eq!(
            check_adjacency_rep(&vertices),
            Err(GraphError::ZeroWeight {
                src: s("A"),
                target: s("B"),
            })
        );

        let labels = HashSet::from([s("A"), s("B")]);
        let edges = vec![Edge::new(s("A"), s("B"), 0)];
        assert_eq!(
            check_edge_list_rep(&labels, &edges),
            Err(GraphError::ZeroWeight {
                src: s("A"),
                target: s("B"),
            })
        );
    }

    #[test]
    fn dangling_endpoint_rejected() {
        let labels = HashSet::from([s("A")]);
        let edges = vec![Edge::new(s("A"), s("B"), 2)];
        assert_eq!(
            check_edge_list_rep(&labels, &edges),
            Err(GraphError::DanglingEndpoint {
                src: s("A"),
                target: s("B"),
                missing: s("B"),
            })
        );
    }

    #[test]
    fn valid_reps_pass() {
        let vertices = vec![
            Vertex::from_parts(s("A"), HashMap::from([(s("B"), 3), (s("A"), 1)])),
            Vertex::from_parts(s("B"), HashMap::new()),
        ];
        assert!(check_adjacency_rep(&vertices).is_ok());

        let labels = HashSet::from([s("A"), s("B")]);
        let edges = vec![Edge::new(s("A"), s("B"), 3), Edge::new(s("A"), s("A"), 1)];
        assert!(check_edge_list_rep(&labels, &edges).is_ok());
    }
}
