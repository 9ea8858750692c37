//! Navigation state: the validated graph, the path through it, and the
//! state machine that moves along it.
//!
//! Most users build a [`Helm`] from a segue collection and drive it with the
//! `present_*`, `dismiss_*` and `forward` operations.

pub mod machine;
pub mod nav_graph;
pub mod observe;
pub mod options;
pub mod path;
pub mod transition;

pub use machine::Helm;
pub use nav_graph::NavigationGraph;
pub use observe::{HelmEvent, Observers, SubscriptionId};
pub use options::{FailureLogging, HelmOptions};
pub use path::{InstanceId, PathEdge, PresentedFragment, replay};
pub use transition::Transition;

#[cfg(test)]
mod tests;
