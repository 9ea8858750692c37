//! Common bound aliases used across graph and navigation code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They are zero-cost and only
//! reduce duplication in `where` clauses.

/// Canonical bound set for fragment (node) identifiers.
///
/// - `Clone` so fragments can be owned by edges and presented lists
/// - `Eq + Hash` for set membership and lookups
/// - `Ord` for deterministic traversal (sorted egress, stable DFS roots)
/// - `Debug` for error messages and logging
pub trait FragmentLike: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> FragmentLike for T where T: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug {}

/// Minimal bound for segue tags.
pub trait TagLike: Clone + Eq + std::hash::Hash + std::fmt::Debug {}
impl<T> TagLike for T where T: Clone + Eq + std::hash::Hash + std::fmt::Debug {}
