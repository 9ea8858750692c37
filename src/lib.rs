#![cfg_attr(docsrs, feature(doc_cfg))]
//! # helm-nav
//!
//! helm-nav is a framework-agnostic navigation engine. An application's
//! screens (fragments) and the ways to move between them (segues) form a
//! directed graph; a [`Helm`](helm::Helm) tracks the path walked through that
//! graph and derives which fragments are currently on screen.
//!
//! ## Features
//! - Directed-graph queries over edge sets: inlets, outlets, unique
//!   ingress/egress, cycle detection, weakly connected components, and
//!   deterministic depth-first traversal
//! - Segues annotated with a presentation rule (`Hold` or `Pass`),
//!   dismissability, an optional tag, and `auto` chasing
//! - A validated [`NavigationGraph`](helm::NavigationGraph) with a single
//!   entry fragment and no auto cycles
//! - The [`Helm`](helm::Helm) state machine: fallible operations that return
//!   `Result`, and recording operations that log failures instead of failing
//! - Exhaustive transition enumeration for tests and previews
//!
//! ## Determinism
//!
//! Every traversal visits edges in `(from, to)` order, so the same graph
//! always produces the same cycles, components, and transition scripts.
//!
//! ## Usage
//! ```rust
//! use helm_nav::prelude::*;
//!
//! let segues: Vec<Segue<&str>> = vec![
//!     Segue::new("home", "list"),
//!     Segue::new("list", "detail")
//!         .with_rule(SegueRule::Hold)
//!         .make_dismissable(),
//! ];
//! let mut helm = Helm::new(segues, Vec::new()).unwrap();
//! helm.present_fragment("list");
//! helm.present_fragment("detail");
//! assert!(helm.is_presented(&"list") && helm.is_presented(&"detail"));
//!
//! helm.dismiss_fragment(&"detail");
//! assert!(!helm.is_presented(&"detail"));
//! assert!(helm.errors().is_empty());
//! ```
//!
//! ## Invariant checking
//! Graph and helm invariants are asserted after every mutation in debug
//! builds. Enable `strict-invariants` or `check-invariants` to keep the checks
//! in release builds.

pub mod algs;
pub mod debug_invariants;
pub mod graph;
pub mod helm;
pub mod nav_error;
pub mod segue;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::transitions::{IdentityProvider, transitions};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph::{DirectedEdge, DirectedGraph, FragmentLike, TagLike};
    pub use crate::helm::{
        FailureLogging, Helm, HelmEvent, HelmOptions, InstanceId, NavigationGraph, PathEdge,
        PresentedFragment, SubscriptionId, Transition,
    };
    pub use crate::nav_error::{GraphError, HelmError};
    pub use crate::segue::{
        Segue, SegueRule, SegueSetExt, chain, connect, connect_both, fan_in, fan_out,
    };
}
