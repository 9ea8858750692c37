//! Algorithms that walk whole navigation graphs.

pub mod transitions;

pub use transitions::{IdentityProvider, enumerate, transitions};
