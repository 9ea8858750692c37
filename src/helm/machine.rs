//! Helm: the presented-path state machine.
//!
//! A [`Helm`] owns a validated [`NavigationGraph`], the path walked through
//! it, the presented fragments derived from that path, and an append-only
//! error log.
//!
//! Two kinds of operations mutate it:
//! - **Fallible** (`present_edge`, `dismiss_edge`, `replace`, `navigate`)
//!   validate first and return `Err` without touching any state.
//! - **Recording** (`present_fragment`, `present_tag`, `forward`,
//!   `dismiss_fragment`, `dismiss_tag`, `dismiss`) never fail; on error they
//!   append to [`Helm::errors`] and leave the path as it was. UI event
//!   handlers can call them without per-call error handling.
//!
//! Presented fragments are recomputed after every successful mutation, and
//! subscribers are notified once state is consistent.

use std::collections::BTreeSet;

use crate::algs::transitions::{IdentityProvider, transitions};
use crate::debug_invariants::DebugInvariants;
use crate::graph::{DirectedEdge, DirectedGraph, FragmentLike, TagLike};
use crate::helm::nav_graph::NavigationGraph;
use crate::helm::observe::{HelmEvent, Observers, SubscriptionId};
use crate::helm::options::{FailureLogging, HelmOptions};
use crate::helm::path::{
    InstanceId, PathEdge, PresentedFragment, append_step, chase_auto, replay, unknown_edges,
};
use crate::helm::transition::Transition;
use crate::nav_error::HelmError;
use crate::segue::Segue;

#[derive(Debug)]
pub struct Helm<N: FragmentLike, T: TagLike = ()> {
    nav: NavigationGraph<N, T>,
    path: Vec<PathEdge<N>>,
    presented: Vec<PresentedFragment<N>>,
    errors: Vec<HelmError<N, T>>,
    options: HelmOptions,
    observers: Observers<N, T>,
}

impl<N: FragmentLike, T: TagLike> Helm<N, T> {
    /// Validate `segues` into a navigation graph and start at `path`.
    ///
    /// # Errors
    /// The first violated graph invariant (see [`NavigationGraph::new`]), or
    /// [`HelmError::PathMismatch`] if `path` uses edges the graph lacks.
    ///
    /// # Example
    /// ```rust
    /// use helm_nav::prelude::*;
    /// let mut helm: Helm<&str> = Helm::new(chain(["a", "b", "c"]), Vec::new()).unwrap();
    /// helm.forward();
    /// assert!(helm.is_presented(&"b"));
    /// assert!(helm.errors().is_empty());
    /// ```
    pub fn new<I>(segues: I, path: Vec<PathEdge<N>>) -> Result<Self, HelmError<N, T>>
    where
        I: IntoIterator<Item = Segue<N, T>>,
    {
        Self::with_graph(NavigationGraph::new(segues)?, path)
    }

    /// Start from an already validated graph.
    pub fn with_graph(
        nav: NavigationGraph<N, T>,
        path: Vec<PathEdge<N>>,
    ) -> Result<Self, HelmError<N, T>> {
        Self::with_options(nav, path, HelmOptions::default())
    }

    pub fn with_options(
        nav: NavigationGraph<N, T>,
        path: Vec<PathEdge<N>>,
        options: HelmOptions,
    ) -> Result<Self, HelmError<N, T>> {
        check_path(&nav, &path)?;
        let presented = replay(&nav, &path);
        let helm = Self {
            nav,
            path,
            presented,
            errors: Vec::new(),
            options,
            observers: Observers::new(),
        };
        helm.debug_assert_invariants();
        Ok(helm)
    }

    // --- read-only state -------------------------------------------------

    /// The graph's unique starting fragment.
    #[inline]
    pub fn entry(&self) -> &N {
        self.nav.entry()
    }

    #[inline]
    pub fn nav(&self) -> &NavigationGraph<N, T> {
        &self.nav
    }

    #[inline]
    pub fn path(&self) -> &[PathEdge<N>] {
        &self.path
    }

    /// Presented fragments, oldest first.
    #[inline]
    pub fn presented_fragments(&self) -> &[PresentedFragment<N>] {
        &self.presented
    }

    /// Failures recorded by the non-fallible operations, oldest first.
    #[inline]
    pub fn errors(&self) -> &[HelmError<N, T>] {
        &self.errors
    }

    #[inline]
    pub fn options(&self) -> &HelmOptions {
        &self.options
    }

    pub fn is_presented(&self, fragment: &N) -> bool {
        self.presented.iter().any(|p| &p.fragment == fragment)
    }

    /// `true` if `fragment` is presented under identity `id`.
    pub fn is_presented_with(&self, fragment: &N, id: InstanceId) -> bool {
        self.presented
            .iter()
            .any(|p| &p.fragment == fragment && p.id == Some(id))
    }

    // --- observation -----------------------------------------------------

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&HelmEvent<N, T>) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // --- fallible operations ---------------------------------------------

    /// Present along `step`, then chase `auto` segues from its target.
    ///
    /// # Errors
    /// [`HelmError::MissingSegueForEdge`] if the graph has no segue for the
    /// edge, [`HelmError::FragmentNotPresented`] if its origin is not
    /// presented.
    pub fn present_edge(&mut self, step: impl Into<PathEdge<N>>) -> Result<(), HelmError<N, T>> {
        let step = step.into();
        if !self.nav.contains_edge(&step.edge) {
            return Err(HelmError::MissingSegueForEdge { edge: step.edge });
        }
        if !self.is_presented(&step.edge.from) {
            return Err(HelmError::FragmentNotPresented {
                fragment: step.edge.from,
            });
        }

        let target = step.edge.to.clone();
        append_step(&mut self.path, step.clone());
        let chased = if self.options.chase_auto {
            chase_auto(&self.nav, &mut self.path, &target)
        } else {
            Vec::new()
        };
        self.refresh();
        log::debug!("presented {:?} (auto: {:?})", step.edge, chased);
        self.observers.notify(&HelmEvent::Presented { step, chased });
        Ok(())
    }

    /// Retract `edge` and everything that becomes unreachable without it.
    ///
    /// Path edges targeting `edge.to` are removed first; then every weakly
    /// connected part of the remaining path that does not contain
    /// `edge.from` is dropped.
    ///
    /// # Errors
    /// [`HelmError::MissingSegueForEdge`], [`HelmError::SegueNotDismissable`],
    /// [`HelmError::MissingPathEdge`].
    pub fn dismiss_edge(&mut self, edge: &DirectedEdge<N>) -> Result<(), HelmError<N, T>> {
        match self.nav.segue(edge) {
            None => {
                return Err(HelmError::MissingSegueForEdge { edge: edge.clone() });
            }
            Some(segue) if !segue.dismissable => {
                return Err(HelmError::SegueNotDismissable { edge: edge.clone() });
            }
            Some(_) => {}
        }
        if !self.path.iter().any(|p| &p.edge == edge) {
            return Err(HelmError::MissingPathEdge { edge: edge.clone() });
        }

        let (mut kept, mut removed): (Vec<_>, Vec<_>) =
            self.path.drain(..).partition(|p| p.edge.to != edge.to);
        let reachable: BTreeSet<DirectedEdge<N>> = kept
            .disconnected_subgraphs()
            .into_iter()
            .filter(|part| part.iter().any(|e| e.from == edge.from || e.to == edge.from))
            .flatten()
            .collect();
        let (still, pruned): (Vec<_>, Vec<_>) =
            kept.drain(..).partition(|p| reachable.contains(&p.edge));
        removed.extend(pruned);
        self.path = still;

        self.refresh();
        log::debug!("dismissed {:?} (removed {} path edges)", edge, removed.len());
        self.observers.notify(&HelmEvent::Dismissed {
            edge: edge.clone(),
            removed,
        });
        Ok(())
    }

    /// Substitute the whole path. No auto chasing happens.
    ///
    /// # Errors
    /// [`HelmError::PathMismatch`] naming every edge the graph lacks.
    pub fn replace(&mut self, path: Vec<PathEdge<N>>) -> Result<(), HelmError<N, T>> {
        check_path(&self.nav, &path)?;
        self.path = path;
        self.refresh();
        log::debug!("replaced path ({} edges)", self.path.len());
        self.observers.notify(&HelmEvent::Replaced {
            path: self.path.clone(),
        });
        Ok(())
    }

    /// Apply one [`Transition`].
    pub fn navigate(&mut self, transition: Transition<N>) -> Result<(), HelmError<N, T>> {
        match transition {
            Transition::Present(step) => self.present_edge(step),
            Transition::Dismiss(step) => self.dismiss_edge(&step.edge),
            Transition::Replace(path) => self.replace(path),
        }
    }

    // --- recording operations --------------------------------------------

    /// Present `fragment` from whichever presented fragment leads to it.
    ///
    /// With an empty path the segue must be the single inlet into
    /// `fragment`. Otherwise presented fragments are searched most recent
    /// first and the first one with a segue to `fragment` wins.
    pub fn present_fragment(&mut self, fragment: N) {
        let result = self
            .segue_to(&fragment)
            .and_then(|edge| self.present_edge(edge));
        self.record(result);
    }

    /// Like [`present_fragment`](Self::present_fragment), under identity `id`.
    pub fn present_fragment_with(&mut self, fragment: N, id: impl Into<InstanceId>) {
        let id = id.into();
        let result = self
            .segue_to(&fragment)
            .and_then(|edge| self.present_edge(PathEdge::new(edge).with_id(id)));
        self.record(result);
    }

    /// Present the segue tagged `tag` leaving a presented fragment.
    ///
    /// Presented fragments are searched most recent first and every tagged
    /// egress segue is collected; the last one collected is used.
    pub fn present_tag(&mut self, tag: &T) {
        let found = self
            .presented
            .iter()
            .rev()
            .flat_map(|p| self.nav.egress_segues(&p.fragment))
            .filter(|s| s.is_tagged(tag))
            .map(|s| s.edge.clone())
            .last();
        let result = match found {
            Some(edge) => self.present_edge(edge),
            None => Err(HelmError::MissingTaggedSegue { tag: tag.clone() }),
        };
        self.record(result);
    }

    /// Present the only segue leaving the most recently presented fragment.
    pub fn forward(&mut self) {
        let result = match self.presented.last().map(|p| p.fragment.clone()) {
            Some(fragment) => match self.nav.unique_egress_edge(&fragment) {
                Ok(edge) => self.present_edge(edge),
                Err(source_error) => Err(HelmError::AmbiguousForwardFromFragment {
                    fragment,
                    source_error,
                }),
            },
            None => Err(HelmError::EmptyPath),
        };
        self.record(result);
    }

    /// Dismiss the most recent dismissable path edge leading to `fragment`.
    pub fn dismiss_fragment(&mut self, fragment: &N) {
        let candidates: BTreeSet<DirectedEdge<N>> = self
            .nav
            .ingress_segues(fragment)
            .filter(|s| s.dismissable)
            .map(|s| s.edge.clone())
            .collect();
        let result = match self.last_path_edge_in(&candidates) {
            Some(edge) => self.dismiss_edge(&edge),
            None => Err(HelmError::FragmentMissingDismissableSegue {
                fragment: fragment.clone(),
            }),
        };
        self.record(result);
    }

    /// Dismiss the most recent path edge whose dismissable segue is tagged `tag`.
    pub fn dismiss_tag(&mut self, tag: &T) {
        let candidates: BTreeSet<DirectedEdge<N>> = self
            .nav
            .segues()
            .filter(|s| s.dismissable && s.is_tagged(tag))
            .map(|s| s.edge.clone())
            .collect();
        let result = match self.last_path_edge_in(&candidates) {
            Some(edge) => self.dismiss_edge(&edge),
            None => Err(HelmError::MissingTaggedSegue { tag: tag.clone() }),
        };
        self.record(result);
    }

    /// Dismiss the last path edge.
    pub fn dismiss(&mut self) {
        let result = match self.path.last().map(|p| p.edge.clone()) {
            None => Err(HelmError::EmptyPath),
            Some(edge) => self.dismiss_edge(&edge),
        };
        self.record(result);
    }

    /// Two-way toggle: present `fragment` when `presented` is true, dismiss it
    /// otherwise. Does nothing if it is already in the requested state.
    pub fn set_presented(&mut self, fragment: N, presented: bool) {
        match (presented, self.is_presented(&fragment)) {
            (true, false) => self.present_fragment(fragment),
            (false, true) => self.dismiss_fragment(&fragment),
            _ => {}
        }
    }

    // --- enumeration -----------------------------------------------------

    /// Every reachable transition from `from` (default: the entry), see
    /// [`transitions`](crate::algs::transitions::transitions).
    pub fn transitions(
        &self,
        from: Option<&N>,
        identity: Option<&IdentityProvider<'_, N>>,
    ) -> Vec<Transition<N>> {
        transitions(&self.nav, from, identity)
    }

    // --- internals -------------------------------------------------------

    fn segue_to(&self, fragment: &N) -> Result<DirectedEdge<N>, HelmError<N, T>> {
        let missing = || HelmError::MissingSegueToFragment {
            fragment: fragment.clone(),
        };
        if self.path.is_empty() {
            let inlets = self.nav.inlets();
            return inlets.unique_ingress_edge(fragment).map_err(|_| missing());
        }
        let ingress = self.nav.ingress_edges(fragment);
        self.presented
            .iter()
            .rev()
            .find_map(|p| {
                self.nav
                    .egress_edges(&p.fragment)
                    .intersection(&ingress)
                    .next()
                    .cloned()
            })
            .ok_or_else(missing)
    }

    fn last_path_edge_in(&self, candidates: &BTreeSet<DirectedEdge<N>>) -> Option<DirectedEdge<N>> {
        self.path
            .iter()
            .rev()
            .find(|p| candidates.contains(&p.edge))
            .map(|p| p.edge.clone())
    }

    fn refresh(&mut self) {
        self.presented = replay(&self.nav, &self.path);
        self.debug_assert_invariants();
    }

    fn record(&mut self, result: Result<(), HelmError<N, T>>) {
        let Err(err) = result else {
            return;
        };
        if self.options.failure_logging == FailureLogging::Warn {
            log::warn!("navigation failed: {err}");
        }
        self.errors.push(err.clone());
        self.observers.notify(&HelmEvent::ErrorRecorded(err));
    }
}

fn check_path<N: FragmentLike, T: TagLike>(
    nav: &NavigationGraph<N, T>,
    path: &[PathEdge<N>],
) -> Result<(), HelmError<N, T>> {
    let edges = unknown_edges(nav, path);
    if edges.is_empty() {
        Ok(())
    } else {
        Err(HelmError::PathMismatch { edges })
    }
}

impl<N: FragmentLike, T: TagLike> DebugInvariants for Helm<N, T> {
    type Error = HelmError<N, T>;

    const LABEL: &'static str = "Helm";

    fn validate_invariants(&self) -> Result<(), Self::Error> {
        check_path(&self.nav, &self.path)?;
        let expected = replay(&self.nav, &self.path);
        if expected != self.presented {
            return Err(HelmError::StalePresentedFragments {
                expected: expected.into_iter().map(|p| p.fragment).collect(),
                found: self.presented.iter().map(|p| p.fragment.clone()).collect(),
            });
        }
        Ok(())
    }
}
