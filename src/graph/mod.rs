//! Directed-graph abstractions underlying navigation graphs.
//!
//! This module provides:
//! - [`DirectedEdge`], the bare `(from, to)` pair
//! - the [`DirectedGraph`] query trait, implemented for edge sets, edge
//!   slices, navigation graphs, and paths
//! - bound aliases ([`FragmentLike`], [`TagLike`]) shared by the rest of the crate

pub mod bounds;
pub mod directed;
pub mod edge;
pub mod traversal;

pub use bounds::{FragmentLike, TagLike};
pub use directed::DirectedGraph;
pub use edge::DirectedEdge;
