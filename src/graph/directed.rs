//! Core trait for directed-edge collections.
//!
//! This module defines the [`DirectedGraph`] trait: a read-only query API over
//! any collection of [`DirectedEdge`]s. Implementors only supply
//! [`DirectedGraph::edges`]; adjacency, inlet/outlet, cycle, component and
//! depth-first queries are provided on top of it and may be overridden when an
//! implementor keeps precomputed adjacency.

use std::collections::{BTreeSet, HashSet};

use crate::graph::bounds::FragmentLike;
use crate::graph::edge::DirectedEdge;
use crate::graph::traversal::{self, Adjacency};
use crate::nav_error::GraphError;

/// Read-only query API over a set of directed edges.
///
/// # Provided Methods
/// - Adjacency (`egress_edges`, `ingress_edges` and their unique variants)
/// - Boundary queries (`inlets`, `outlets`, `nodes`)
/// - Structure (`has_cycle`, `first_cycle`, `disconnected_subgraphs`)
/// - Deterministic ordering (`dfs`, `dfs_from`)
///
/// Every set-valued query returns a `BTreeSet`, so iteration follows the
/// `(from, to)` edge order.
pub trait DirectedGraph {
    type Node: FragmentLike;

    /// All edges of the graph. Order is unspecified; duplicates are ignored.
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = &'a DirectedEdge<Self::Node>> + 'a>;

    /// Edges collected into an ordered set.
    fn edge_set(&self) -> BTreeSet<DirectedEdge<Self::Node>> {
        self.edges().cloned().collect()
    }

    /// `true` when the graph has no edges.
    fn is_empty(&self) -> bool {
        self.edges().next().is_none()
    }

    /// Edges whose origin is `node`.
    fn egress_edges(&self, node: &Self::Node) -> BTreeSet<DirectedEdge<Self::Node>> {
        self.edges().filter(|e| &e.from == node).cloned().collect()
    }

    /// Edges whose origin is any of `nodes`.
    fn egress_edges_of<'n, I>(&self, nodes: I) -> BTreeSet<DirectedEdge<Self::Node>>
    where
        I: IntoIterator<Item = &'n Self::Node>,
        Self::Node: 'n,
    {
        let query: HashSet<&Self::Node> = nodes.into_iter().collect();
        self.edges()
            .filter(|e| query.contains(&e.from))
            .cloned()
            .collect()
    }

    /// Edges whose target is `node`.
    fn ingress_edges(&self, node: &Self::Node) -> BTreeSet<DirectedEdge<Self::Node>> {
        self.edges().filter(|e| &e.to == node).cloned().collect()
    }

    /// Edges whose target is any of `nodes`.
    fn ingress_edges_of<'n, I>(&self, nodes: I) -> BTreeSet<DirectedEdge<Self::Node>>
    where
        I: IntoIterator<Item = &'n Self::Node>,
        Self::Node: 'n,
    {
        let query: HashSet<&Self::Node> = nodes.into_iter().collect();
        self.edges()
            .filter(|e| query.contains(&e.to))
            .cloned()
            .collect()
    }

    /// The single edge leaving `node`.
    ///
    /// # Errors
    /// [`GraphError::MissingEgressEdges`] when none leaves it,
    /// [`GraphError::AmbiguousEgressEdges`] when several do.
    fn unique_egress_edge(
        &self,
        node: &Self::Node,
    ) -> Result<DirectedEdge<Self::Node>, GraphError<Self::Node>> {
        let mut edges = self.egress_edges(node);
        match edges.len() {
            0 => Err(GraphError::MissingEgressEdges { node: node.clone() }),
            1 => edges
                .pop_first()
                .ok_or_else(|| GraphError::MissingEgressEdges { node: node.clone() }),
            _ => Err(GraphError::AmbiguousEgressEdges {
                node: node.clone(),
                edges: edges.into_iter().collect(),
            }),
        }
    }

    /// The single edge entering `node`.
    ///
    /// # Errors
    /// [`GraphError::MissingIngressEdges`] / [`GraphError::AmbiguousIngressEdges`].
    fn unique_ingress_edge(
        &self,
        node: &Self::Node,
    ) -> Result<DirectedEdge<Self::Node>, GraphError<Self::Node>> {
        let mut edges = self.ingress_edges(node);
        match edges.len() {
            0 => Err(GraphError::MissingIngressEdges { node: node.clone() }),
            1 => edges
                .pop_first()
                .ok_or_else(|| GraphError::MissingIngressEdges { node: node.clone() }),
            _ => Err(GraphError::AmbiguousIngressEdges {
                node: node.clone(),
                edges: edges.into_iter().collect(),
            }),
        }
    }

    /// Edges whose origin has no incoming edge anywhere in the graph.
    ///
    /// Empty for an empty or fully cyclic graph.
    fn inlets(&self) -> BTreeSet<DirectedEdge<Self::Node>> {
        let targets: HashSet<&Self::Node> = self.edges().map(|e| &e.to).collect();
        self.edges()
            .filter(|e| !targets.contains(&e.from))
            .cloned()
            .collect()
    }

    /// Edges whose target has no outgoing edge.
    fn outlets(&self) -> BTreeSet<DirectedEdge<Self::Node>> {
        let origins: HashSet<&Self::Node> = self.edges().map(|e| &e.from).collect();
        self.edges()
            .filter(|e| !origins.contains(&e.to))
            .cloned()
            .collect()
    }

    /// Every endpoint of every edge.
    fn nodes(&self) -> BTreeSet<Self::Node> {
        self.edges()
            .flat_map(|e| [e.from.clone(), e.to.clone()])
            .collect()
    }

    /// `true` if any directed cycle exists (self-loops included).
    fn has_cycle(&self) -> bool {
        !self.first_cycle().is_empty()
    }

    /// Edges of the first cycle found by a depth-first walk, in walk order.
    ///
    /// Roots are tried in node order and egress edges in edge order, so the
    /// result is stable. Empty if the graph is acyclic.
    fn first_cycle(&self) -> Vec<DirectedEdge<Self::Node>> {
        traversal::first_cycle(&Adjacency::new(self.edges()))
    }

    /// Weakly connected components, ordered by their smallest edge.
    fn disconnected_subgraphs(&self) -> Vec<BTreeSet<DirectedEdge<Self::Node>>> {
        traversal::weak_components(&Adjacency::new(self.edges()))
    }

    /// Pre-order edge walk from every inlet (or from the smallest edge when
    /// the graph has no inlets). Each edge appears at most once.
    fn dfs(&self) -> Vec<DirectedEdge<Self::Node>> {
        let adjacency = Adjacency::new(self.edges());
        let mut roots: Vec<DirectedEdge<Self::Node>> = self.inlets().into_iter().collect();
        if roots.is_empty() {
            roots.extend(adjacency.first_edge().cloned());
        }
        traversal::preorder_edges(&adjacency, roots)
    }

    /// Pre-order edge walk starting from the egress edges of `node`.
    fn dfs_from(&self, node: &Self::Node) -> Vec<DirectedEdge<Self::Node>> {
        let adjacency = Adjacency::new(self.edges());
        let roots = adjacency.egress(node).to_vec();
        traversal::preorder_edges(&adjacency, roots)
    }
}

impl<N: FragmentLike> DirectedGraph for BTreeSet<DirectedEdge<N>> {
    type Node = N;

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = &'a DirectedEdge<N>> + 'a> {
        Box::new(self.iter())
    }

    fn edge_set(&self) -> BTreeSet<DirectedEdge<N>> {
        self.clone()
    }
}

impl<N: FragmentLike> DirectedGraph for [DirectedEdge<N>] {
    type Node = N;

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = &'a DirectedEdge<N>> + 'a> {
        Box::new(self.iter())
    }
}

impl<N: FragmentLike> DirectedGraph for Vec<DirectedEdge<N>> {
    type Node = N;

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = &'a DirectedEdge<N>> + 'a> {
        Box::new(self.iter())
    }
}
