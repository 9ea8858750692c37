//! Error types for helm-nav public APIs
//!
//! Graph queries fail with [`GraphError`]; everything the navigation state
//! machine rejects is a [`HelmError`]. Both carry the offending edges,
//! fragments, or tags so callers (and the error log) can explain what went
//! wrong without re-deriving it.

use std::fmt::Debug;

use thiserror::Error;

use crate::graph::edge::DirectedEdge;

/// Failures of single-edge lookups on a [`DirectedGraph`](crate::graph::DirectedGraph).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError<N: Debug> {
    /// More than one edge leaves `node`.
    #[error("Graph error: ambiguous egress edges from {node:?}: {edges:?}")]
    AmbiguousEgressEdges {
        node: N,
        edges: Vec<DirectedEdge<N>>,
    },
    /// No edge leaves `node`.
    #[error("Graph error: no egress edges from {node:?}")]
    MissingEgressEdges { node: N },
    /// More than one edge enters `node`.
    #[error("Graph error: ambiguous ingress edges into {node:?}: {edges:?}")]
    AmbiguousIngressEdges {
        node: N,
        edges: Vec<DirectedEdge<N>>,
    },
    /// No edge enters `node`.
    #[error("Graph error: no ingress edges into {node:?}")]
    MissingIngressEdges { node: N },
}

/// Unified error type for navigation graph validation and path operations.
///
/// `N` is the fragment type, `T` the segue tag type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HelmError<N: Debug, T: Debug = ()> {
    /// The navigation graph has no segues.
    #[error("Navigation error: the navigation graph is empty")]
    EmptyNav,
    /// Every origin has incoming edges, so there is no entry fragment.
    #[error("Navigation error: no inlet segues (graph has no entry fragment)")]
    MissingInlets,
    /// Inlet segues start at more than one fragment.
    #[error("Navigation error: inlet segues start at different fragments: {inlets:?}")]
    AmbiguousInlets { inlets: Vec<DirectedEdge<N>> },
    /// Several segues with different metadata share an edge.
    #[error("Navigation error: multiple segues defined for edges {edges:?}")]
    DuplicateEdgeSegues { edges: Vec<DirectedEdge<N>> },
    /// The `auto` segues form a cycle.
    #[error("Navigation error: auto segues form a cycle: {cycle:?}")]
    AutoCycleDetected { cycle: Vec<DirectedEdge<N>> },
    /// Path edges that have no segue in the navigation graph.
    #[error("Navigation error: path edges missing from the navigation graph: {edges:?}")]
    PathMismatch { edges: Vec<DirectedEdge<N>> },
    #[error("Navigation error: no segue for edge {edge:?}")]
    MissingSegueForEdge { edge: DirectedEdge<N> },
    #[error("Navigation error: segue {edge:?} is not dismissable")]
    SegueNotDismissable { edge: DirectedEdge<N> },
    #[error("Navigation error: edge {edge:?} is not part of the path")]
    MissingPathEdge { edge: DirectedEdge<N> },
    #[error("Navigation error: no dismissable segue in the path leads to {fragment:?}")]
    FragmentMissingDismissableSegue { fragment: N },
    #[error("Navigation error: no segue tagged {tag:?} is reachable")]
    MissingTaggedSegue { tag: T },
    #[error("Navigation error: fragment {fragment:?} is not presented")]
    FragmentNotPresented { fragment: N },
    #[error("Navigation error: no presented fragment has a segue to {fragment:?}")]
    MissingSegueToFragment { fragment: N },
    /// `forward()` needs exactly one egress segue from the last presented fragment.
    #[error("Navigation error: cannot forward from {fragment:?}: {source_error}")]
    AmbiguousForwardFromFragment {
        fragment: N,
        source_error: GraphError<N>,
    },
    #[error("Navigation error: the path is empty")]
    EmptyPath,
    /// Presented fragments no longer match the replay of the path.
    #[error("Invariant error: presented fragments {found:?} differ from path replay {expected:?}")]
    StalePresentedFragments { expected: Vec<N>, found: Vec<N> },
    #[error("{0}")]
    Graph(GraphError<N>),
}

impl<N: Debug, T: Debug> From<GraphError<N>> for HelmError<N, T> {
    fn from(err: GraphError<N>) -> Self {
        HelmError::Graph(err)
    }
}
