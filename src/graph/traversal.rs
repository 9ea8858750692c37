//! DFS helpers behind the [`DirectedGraph`](super::DirectedGraph) provided methods.
//!
//! All walks use explicit stacks and visit neighbours in edge order, so the
//! output depends only on the edge set, never on hash iteration order.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::graph::bounds::FragmentLike;
use crate::graph::edge::DirectedEdge;

/// Sorted egress adjacency plus an undirected incidence map.
#[derive(Clone, Debug)]
pub struct Adjacency<N: FragmentLike> {
    egress: BTreeMap<N, Vec<DirectedEdge<N>>>,
    incident: HashMap<N, Vec<DirectedEdge<N>>>,
    edges: BTreeSet<DirectedEdge<N>>,
}

impl<N: FragmentLike> Adjacency<N> {
    /// Build adjacency from any edge iterator; duplicates collapse.
    pub fn new<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a DirectedEdge<N>>,
        N: 'a,
    {
        let edges: BTreeSet<DirectedEdge<N>> = edges.into_iter().cloned().collect();
        let mut egress: BTreeMap<N, Vec<DirectedEdge<N>>> = BTreeMap::new();
        let mut incident: HashMap<N, Vec<DirectedEdge<N>>> = HashMap::new();
        for e in &edges {
            egress.entry(e.from.clone()).or_default().push(e.clone());
            egress.entry(e.to.clone()).or_default();
            incident.entry(e.from.clone()).or_default().push(e.clone());
            if !e.is_self_loop() {
                incident.entry(e.to.clone()).or_default().push(e.clone());
            }
        }
        // `edges` is sorted, so every egress list already is too.
        Self {
            egress,
            incident,
            edges,
        }
    }

    /// Egress edges of `node` in edge order.
    pub fn egress(&self, node: &N) -> &[DirectedEdge<N>] {
        self.egress.get(node).map_or(&[], Vec::as_slice)
    }

    /// All nodes in node order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.egress.keys()
    }

    /// The smallest edge, if any.
    pub fn first_edge(&self) -> Option<&DirectedEdge<N>> {
        self.edges.first()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    OnStack,
    Done,
}

/// First cycle found by a colour-marking DFS rooted at each unvisited node.
pub fn first_cycle<N: FragmentLike>(adj: &Adjacency<N>) -> Vec<DirectedEdge<N>> {
    let mut marks: HashMap<N, Mark> = HashMap::new();

    for root in adj.nodes() {
        if marks.contains_key(root) {
            continue;
        }
        marks.insert(root.clone(), Mark::OnStack);
        // stack[i] is a node on the recursion stack; trail[i] leads from stack[i] to stack[i + 1].
        let mut stack: Vec<(N, usize)> = vec![(root.clone(), 0)];
        let mut trail: Vec<DirectedEdge<N>> = Vec::new();

        while let Some((node, next)) = stack.last().cloned() {
            let out = adj.egress(&node);
            let Some(edge) = out.get(next) else {
                marks.insert(node, Mark::Done);
                stack.pop();
                trail.pop();
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }
            match marks.get(&edge.to) {
                Some(Mark::OnStack) => {
                    let start = stack
                        .iter()
                        .position(|(n, _)| n == &edge.to)
                        .unwrap_or(trail.len());
                    let mut cycle = trail.split_off(start);
                    cycle.push(edge.clone());
                    return cycle;
                }
                Some(Mark::Done) => {}
                None => {
                    marks.insert(edge.to.clone(), Mark::OnStack);
                    trail.push(edge.clone());
                    stack.push((edge.to.clone(), 0));
                }
            }
        }
    }
    Vec::new()
}

/// Weakly connected edge components, ordered by first-discovered edge.
pub fn weak_components<N: FragmentLike>(adj: &Adjacency<N>) -> Vec<BTreeSet<DirectedEdge<N>>> {
    let mut assigned: HashSet<&DirectedEdge<N>> = HashSet::new();
    let mut components = Vec::new();

    for seed in &adj.edges {
        if assigned.contains(seed) {
            continue;
        }
        let mut component = BTreeSet::new();
        let mut seen_nodes: HashSet<&N> = HashSet::new();
        let mut queue: VecDeque<&N> = VecDeque::from([&seed.from, &seed.to]);
        while let Some(node) = queue.pop_front() {
            if !seen_nodes.insert(node) {
                continue;
            }
            for e in adj.incident.get(node).into_iter().flatten() {
                if assigned.insert(e) {
                    component.insert(e.clone());
                    queue.push_back(&e.from);
                    queue.push_back(&e.to);
                }
            }
        }
        components.push(component);
    }
    components
}

/// Pre-order edge walk from `roots` (in the given order).
///
/// Edges are marked on visit, so every edge appears at most once even when
/// several roots reach it.
pub fn preorder_edges<N: FragmentLike>(
    adj: &Adjacency<N>,
    roots: Vec<DirectedEdge<N>>,
) -> Vec<DirectedEdge<N>> {
    let mut visited: HashSet<DirectedEdge<N>> = HashSet::new();
    let mut out = Vec::new();
    let mut stack: Vec<DirectedEdge<N>> = roots.into_iter().rev().collect();

    while let Some(edge) = stack.pop() {
        if visited.contains(&edge) {
            continue;
        }
        for next in adj.egress(&edge.to).iter().rev() {
            if !visited.contains(next) {
                stack.push(next.clone());
            }
        }
        visited.insert(edge.clone());
        out.push(edge);
    }
    out
}
