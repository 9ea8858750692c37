//! Path edges, presented fragments, and the replay that links them.
//!
//! A path is an ordered `Vec<PathEdge>`. The presented fragments are never
//! stored on their own terms: they are always [`replay`]ed from the entry
//! fragment, applying each segue's [`SegueRule`] in order.

use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::graph::{DirectedEdge, DirectedGraph, FragmentLike, TagLike};
use crate::helm::nav_graph::NavigationGraph;
use crate::segue::SegueRule;

/// Opaque identity of one presentation of a fragment.
///
/// Lets the same fragment be presented for different data (two detail
/// screens for two records). [`InstanceId::of`] derives one from any hashable
/// key; the value is stable within a process, not across builds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(u64);

impl InstanceId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        InstanceId(raw)
    }

    /// Hash `key` into an identity.
    pub fn of<K: Hash + ?Sized>(key: &K) -> Self {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        InstanceId(hasher.finish())
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for InstanceId {
    fn from(raw: u64) -> Self {
        InstanceId(raw)
    }
}

/// One traversed edge of the path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathEdge<N> {
    pub edge: DirectedEdge<N>,
    /// Identity of the presentation this step produced.
    pub id: Option<InstanceId>,
}

impl<N> PathEdge<N> {
    pub fn new(edge: DirectedEdge<N>) -> Self {
        PathEdge { edge, id: None }
    }

    pub fn with_id(mut self, id: impl Into<InstanceId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl<N> From<DirectedEdge<N>> for PathEdge<N> {
    fn from(edge: DirectedEdge<N>) -> Self {
        PathEdge::new(edge)
    }
}

impl<N> From<(N, N)> for PathEdge<N> {
    fn from(pair: (N, N)) -> Self {
        PathEdge::new(pair.into())
    }
}

/// A fragment currently visible, with the identity it was presented under.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresentedFragment<N> {
    pub fragment: N,
    pub id: Option<InstanceId>,
}

impl<N: FragmentLike> DirectedGraph for [PathEdge<N>] {
    type Node = N;

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = &'a DirectedEdge<N>> + 'a> {
        Box::new(self.iter().map(|p| &p.edge))
    }
}

impl<N: FragmentLike> DirectedGraph for Vec<PathEdge<N>> {
    type Node = N;

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = &'a DirectedEdge<N>> + 'a> {
        Box::new(self.iter().map(|p| &p.edge))
    }
}

/// Presented fragments for `path`, oldest first.
///
/// Starts from the entry fragment; `Hold` appends the target, `Pass` drops
/// the origin and appends the target. A fragment appears at most once:
/// re-presenting it moves it to the end.
pub fn replay<N: FragmentLike, T: TagLike>(
    nav: &NavigationGraph<N, T>,
    path: &[PathEdge<N>],
) -> Vec<PresentedFragment<N>> {
    let mut presented = vec![PresentedFragment {
        fragment: nav.entry().clone(),
        id: None,
    }];
    for step in path {
        let rule = nav
            .segue(&step.edge)
            .map_or(SegueRule::default(), |s| s.rule);
        if rule == SegueRule::Pass {
            presented.retain(|p| p.fragment != step.edge.from);
        }
        presented.retain(|p| p.fragment != step.edge.to);
        presented.push(PresentedFragment {
            fragment: step.edge.to.clone(),
            id: step.id,
        });
    }
    presented
}

/// Drop any step already targeting `step.edge.to`, then append `step`.
pub fn append_step<N: FragmentLike>(path: &mut Vec<PathEdge<N>>, step: PathEdge<N>) {
    path.retain(|p| p.edge.to != step.edge.to);
    path.push(step);
}

/// Follow `auto` segues from `from` until none applies; returns the chased edges.
///
/// Terminates because a [`NavigationGraph`] never contains an auto cycle.
pub fn chase_auto<N: FragmentLike, T: TagLike>(
    nav: &NavigationGraph<N, T>,
    path: &mut Vec<PathEdge<N>>,
    from: &N,
) -> Vec<DirectedEdge<N>> {
    let mut chased = Vec::new();
    let mut current = from.clone();
    while let Some(segue) = nav.auto_egress(&current) {
        let edge = segue.edge.clone();
        current = edge.to.clone();
        append_step(path, PathEdge::new(edge.clone()));
        chased.push(edge);
    }
    chased
}

/// Path edges with no segue in `nav`, deduplicated, in path order.
pub fn unknown_edges<N: FragmentLike, T: TagLike>(
    nav: &NavigationGraph<N, T>,
    path: &[PathEdge<N>],
) -> Vec<DirectedEdge<N>> {
    let mut seen = HashSet::new();
    path.iter()
        .map(|p| &p.edge)
        .filter(|e| !nav.contains_edge(e) && seen.insert(*e))
        .cloned()
        .collect()
}
