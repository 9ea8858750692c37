//! Exhaustive transition enumeration for navigation graphs.
//!
//! [`transitions`] walks a [`NavigationGraph`] depth-first and produces a
//! script of [`Transition`]s that presents every reachable segue exactly
//! once. The script is meant to be replayed through
//! [`Helm::navigate`](crate::helm::Helm::navigate) on a fresh helm built from
//! the same graph, for exhaustive tests or preview generation.
//!
//! Determinism: egress segues are explored in edge order, so the same graph
//! always yields the same script.

use std::collections::HashSet;

use crate::graph::{DirectedEdge, DirectedGraph, FragmentLike, TagLike};
use crate::helm::nav_graph::NavigationGraph;
use crate::helm::path::{InstanceId, PathEdge, PresentedFragment, append_step, chase_auto, replay};
use crate::helm::transition::Transition;

/// Maps an edge to the identity its presentation should carry.
pub type IdentityProvider<'a, N> = dyn Fn(&DirectedEdge<N>) -> Option<InstanceId> + 'a;

struct Frame<N> {
    edge: DirectedEdge<N>,
    /// Edge whose presentation discovered this one; `None` for roots.
    parent: Option<DirectedEdge<N>>,
    /// Path right after `parent` was appended, before any auto chase.
    base: Vec<PathEdge<N>>,
}

/// Enumerate every reachable transition starting from `from` (default: the
/// entry fragment), simulating auto chasing the way a default
/// [`Helm`](crate::helm::Helm) does.
///
/// Each reachable segue is emitted once as [`Transition::Present`]. Whenever
/// the next segue does not continue from the previous present, a
/// [`Transition::Replace`] restoring its branch point comes first.
///
/// The script starts from an empty path, so a `from` other than the entry is
/// only replayable on a helm whose empty path presents `from`.
pub fn transitions<N: FragmentLike, T: TagLike>(
    nav: &NavigationGraph<N, T>,
    from: Option<&N>,
    identity: Option<&IdentityProvider<'_, N>>,
) -> Vec<Transition<N>> {
    enumerate(nav, from, identity, true)
}

/// [`transitions`] with explicit control over auto chasing.
pub fn enumerate<N: FragmentLike, T: TagLike>(
    nav: &NavigationGraph<N, T>,
    from: Option<&N>,
    identity: Option<&IdentityProvider<'_, N>>,
    chase: bool,
) -> Vec<Transition<N>> {
    let start = from.unwrap_or_else(|| nav.entry()).clone();
    let step_for = |edge: &DirectedEdge<N>| PathEdge {
        edge: edge.clone(),
        id: identity.and_then(|provide| provide(edge)),
    };

    let mut out = Vec::new();
    let mut visited: HashSet<DirectedEdge<N>> = HashSet::new();
    let mut path: Vec<PathEdge<N>> = Vec::new();
    let mut presented: Vec<PresentedFragment<N>> = replay(nav, &path);
    let mut last: Option<DirectedEdge<N>> = None;
    let mut stack: Vec<Frame<N>> = nav
        .egress_edges(&start)
        .into_iter()
        .rev()
        .map(|edge| Frame {
            edge,
            parent: None,
            base: Vec::new(),
        })
        .collect();

    while let Some(frame) = stack.pop() {
        if visited.contains(&frame.edge) {
            continue;
        }
        let continues =
            frame.parent == last && presented.iter().any(|p| p.fragment == frame.edge.from);
        if !continues && path != frame.base {
            log::trace!("backtrack to {} path edges before {:?}", frame.base.len(), frame.edge);
            out.push(Transition::Replace(frame.base.clone()));
            path = frame.base;
        }

        let step = step_for(&frame.edge);
        out.push(Transition::Present(step.clone()));
        visited.insert(frame.edge.clone());
        append_step(&mut path, step);
        let base = path.clone();
        if chase {
            chase_auto(nav, &mut path, &frame.edge.to);
        }
        presented = replay(nav, &path);

        for next in nav.egress_edges(&frame.edge.to).into_iter().rev() {
            if !visited.contains(&next) {
                stack.push(Frame {
                    edge: next,
                    parent: Some(frame.edge.clone()),
                    base: base.clone(),
                });
            }
        }
        last = Some(frame.edge);
    }
    log::trace!("enumerated {} transitions from {:?}", out.len(), start);
    out
}
