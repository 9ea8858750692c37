//! NavigationGraph: a validated, immutable set of segues.
//!
//! # Invariants
//! Checked by [`NavigationGraph::new`] in this order, failing on the first
//! violation:
//! 1. [`HelmError::EmptyNav`]: at least one segue.
//! 2. [`HelmError::MissingInlets`]: some edge starts at a fragment nothing
//!    leads to.
//! 3. [`HelmError::AmbiguousInlets`]: all such edges share one origin, the
//!    entry fragment.
//! 4. [`HelmError::DuplicateEdgeSegues`]: one segue per edge. Supplying the
//!    exact same segue twice is not a duplicate.
//! 5. [`HelmError::AutoCycleDetected`]: `auto` segues are acyclic, so auto
//!    chasing always terminates.

use std::collections::{BTreeMap, BTreeSet};

use crate::debug_invariants::DebugInvariants;
use crate::graph::{DirectedEdge, DirectedGraph, FragmentLike, TagLike};
use crate::nav_error::HelmError;
use crate::segue::Segue;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationGraph<N: FragmentLike, T: TagLike = ()> {
    segues: BTreeMap<DirectedEdge<N>, Segue<N, T>>,
    egress: BTreeMap<N, BTreeSet<DirectedEdge<N>>>,
    ingress: BTreeMap<N, BTreeSet<DirectedEdge<N>>>,
    entry: N,
}

impl<N: FragmentLike, T: TagLike> NavigationGraph<N, T> {
    /// Validate `segues` and build the graph.
    ///
    /// # Errors
    /// The first violated invariant, see the module docs.
    pub fn new<I>(segues: I) -> Result<Self, HelmError<N, T>>
    where
        I: IntoIterator<Item = Segue<N, T>>,
    {
        let mut by_edge: BTreeMap<DirectedEdge<N>, Vec<Segue<N, T>>> = BTreeMap::new();
        for segue in segues {
            let slot = by_edge.entry(segue.edge.clone()).or_default();
            if !slot.contains(&segue) {
                slot.push(segue);
            }
        }

        if by_edge.is_empty() {
            return Err(HelmError::EmptyNav);
        }

        let edges: BTreeSet<DirectedEdge<N>> = by_edge.keys().cloned().collect();
        let inlets = edges.inlets();
        let entry = match inlets.first() {
            Some(inlet) => inlet.from.clone(),
            None => return Err(HelmError::MissingInlets),
        };
        if inlets.iter().any(|e| e.from != entry) {
            return Err(HelmError::AmbiguousInlets {
                inlets: inlets.into_iter().collect(),
            });
        }

        let duplicates: Vec<DirectedEdge<N>> = by_edge
            .iter()
            .filter(|(_, segues)| segues.len() > 1)
            .map(|(edge, _)| edge.clone())
            .collect();
        if !duplicates.is_empty() {
            return Err(HelmError::DuplicateEdgeSegues { edges: duplicates });
        }

        let segues: BTreeMap<DirectedEdge<N>, Segue<N, T>> = by_edge
            .into_iter()
            .filter_map(|(edge, mut segues)| segues.pop().map(|s| (edge, s)))
            .collect();

        let auto_edges: BTreeSet<DirectedEdge<N>> = segues
            .values()
            .filter(|s| s.auto)
            .map(|s| s.edge.clone())
            .collect();
        let cycle = auto_edges.first_cycle();
        if !cycle.is_empty() {
            return Err(HelmError::AutoCycleDetected { cycle });
        }

        let mut egress: BTreeMap<N, BTreeSet<DirectedEdge<N>>> = BTreeMap::new();
        let mut ingress: BTreeMap<N, BTreeSet<DirectedEdge<N>>> = BTreeMap::new();
        for edge in segues.keys() {
            egress.entry(edge.from.clone()).or_default().insert(edge.clone());
            ingress.entry(edge.to.clone()).or_default().insert(edge.clone());
        }

        log::debug!(
            "navigation graph: {} segues, entry {:?}",
            segues.len(),
            entry
        );
        Ok(Self {
            segues,
            egress,
            ingress,
            entry,
        })
    }

    /// The unique starting fragment (origin of every inlet).
    #[inline]
    pub fn entry(&self) -> &N {
        &self.entry
    }

    /// Segue defined for `edge`, if any.
    #[inline]
    pub fn segue(&self, edge: &DirectedEdge<N>) -> Option<&Segue<N, T>> {
        self.segues.get(edge)
    }

    #[inline]
    pub fn contains_edge(&self, edge: &DirectedEdge<N>) -> bool {
        self.segues.contains_key(edge)
    }

    /// All segues in edge order.
    pub fn segues(&self) -> impl Iterator<Item = &Segue<N, T>> {
        self.segues.values()
    }

    pub fn len(&self) -> usize {
        self.segues.len()
    }

    /// The first `auto` segue leaving `node`, in edge order.
    pub fn auto_egress(&self, node: &N) -> Option<&Segue<N, T>> {
        self.egress
            .get(node)
            .into_iter()
            .flatten()
            .filter_map(|e| self.segues.get(e))
            .find(|s| s.auto)
    }

    /// Segues leaving `node`, in edge order.
    pub fn egress_segues<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a Segue<N, T>> + 'a {
        self.egress
            .get(node)
            .into_iter()
            .flatten()
            .filter_map(move |e| self.segues.get(e))
    }

    /// Segues entering `node`, in edge order.
    pub fn ingress_segues<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a Segue<N, T>> + 'a {
        self.ingress
            .get(node)
            .into_iter()
            .flatten()
            .filter_map(move |e| self.segues.get(e))
    }

    /// Build a new validated graph by rewriting every segue with `f`.
    ///
    /// The receiver is left untouched, whatever the outcome.
    pub fn edit<F>(&self, f: F) -> Result<Self, HelmError<N, T>>
    where
        F: FnMut(Segue<N, T>) -> Segue<N, T>,
    {
        Self::new(self.segues.values().cloned().map(f))
    }

    /// Build a new validated graph, rewriting only the segues over `edges`.
    pub fn edit_edges<F>(&self, edges: &[DirectedEdge<N>], mut f: F) -> Result<Self, HelmError<N, T>>
    where
        F: FnMut(Segue<N, T>) -> Segue<N, T>,
    {
        self.edit(|s| if edges.contains(&s.edge) { f(s) } else { s })
    }
}

impl<N: FragmentLike, T: TagLike> DirectedGraph for NavigationGraph<N, T> {
    type Node = N;

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = &'a DirectedEdge<N>> + 'a> {
        Box::new(self.segues.keys())
    }

    fn egress_edges(&self, node: &N) -> BTreeSet<DirectedEdge<N>> {
        self.egress.get(node).cloned().unwrap_or_default()
    }

    fn ingress_edges(&self, node: &N) -> BTreeSet<DirectedEdge<N>> {
        self.ingress.get(node).cloned().unwrap_or_default()
    }

    fn is_empty(&self) -> bool {
        self.segues.is_empty()
    }
}

impl<N: FragmentLike, T: TagLike> DebugInvariants for NavigationGraph<N, T> {
    type Error = HelmError<N, T>;

    const LABEL: &'static str = "NavigationGraph";

    fn validate_invariants(&self) -> Result<(), Self::Error> {
        let rebuilt = Self::new(self.segues.values().cloned())?;
        debug_assert_eq!(rebuilt.entry, self.entry);
        Ok(())
    }
}
