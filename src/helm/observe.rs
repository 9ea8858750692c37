//! Change notification for UI layers.
//!
//! [`Helm`](crate::helm::Helm) runs every subscribed callback synchronously,
//! in subscription order, once a mutation has fully completed. Callbacks only
//! see the event; they read fresh state from the helm afterwards.

use std::fmt;

use crate::graph::DirectedEdge;
use crate::helm::path::PathEdge;
use crate::nav_error::HelmError;

/// What just changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HelmEvent<N: fmt::Debug, T: fmt::Debug = ()> {
    /// `step` was presented; `chased` lists the auto segues followed after it.
    Presented {
        step: PathEdge<N>,
        chased: Vec<DirectedEdge<N>>,
    },
    /// `edge` was dismissed; `removed` lists every path edge it retracted.
    Dismissed {
        edge: DirectedEdge<N>,
        removed: Vec<PathEdge<N>>,
    },
    Replaced { path: Vec<PathEdge<N>> },
    /// A non-fallible operation failed and appended to the error log.
    ErrorRecorded(HelmError<N, T>),
}

/// Handle returned by [`Helm::subscribe`](crate::helm::Helm::subscribe).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<N, T> = Box<dyn FnMut(&HelmEvent<N, T>)>;

/// Ordered callback list.
pub struct Observers<N: fmt::Debug, T: fmt::Debug> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback<N, T>)>,
}

impl<N: fmt::Debug, T: fmt::Debug> Observers<N, T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&HelmEvent<N, T>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, event: &HelmEvent<N, T>) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<N: fmt::Debug, T: fmt::Debug> Default for Observers<N, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: fmt::Debug, T: fmt::Debug> fmt::Debug for Observers<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}
