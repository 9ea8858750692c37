//! DirectedEdge: the bare `(from, to)` pair underlying every segue.
//!
//! Edges compare and hash by both endpoints and order lexicographically by
//! `(from, to)`. That ordering is what every deterministic traversal in this
//! crate sorts by.

use serde::{Deserialize, Serialize};

/// A directed connection from `from` to `to`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectedEdge<N> {
    /// Origin fragment.
    pub from: N,
    /// Target fragment.
    pub to: N,
}

impl<N> DirectedEdge<N> {
    /// Construct a new edge `from` → `to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use helm_nav::graph::edge::DirectedEdge;
    /// let e = DirectedEdge::new("home", "settings");
    /// assert_eq!(e.from, "home");
    /// assert_eq!(e.to, "settings");
    /// ```
    #[inline]
    pub fn new(from: N, to: N) -> Self {
        DirectedEdge { from, to }
    }

    /// Returns the `(from, to)` endpoints by reference.
    #[inline]
    pub fn endpoints(&self) -> (&N, &N) {
        (&self.from, &self.to)
    }

    /// The same edge pointing the other way.
    pub fn reversed(self) -> Self {
        DirectedEdge::new(self.to, self.from)
    }

    /// Transform both endpoints with `f`.
    pub fn map<M>(self, mut f: impl FnMut(N) -> M) -> DirectedEdge<M> {
        let from = f(self.from);
        DirectedEdge::new(from, f(self.to))
    }

    /// `true` when both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.from == self.to
    }
}

impl<N> From<(N, N)> for DirectedEdge<N> {
    fn from((from, to): (N, N)) -> Self {
        DirectedEdge::new(from, to)
    }
}

//------------------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------------------
