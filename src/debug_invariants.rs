//! Structural self-checks for graphs and navigation state.
//!
//! [`NavigationGraph`](crate::helm::NavigationGraph) re-runs its construction
//! checks; [`Helm`](crate::helm::Helm) additionally verifies that its path
//! only uses known edges and that the presented fragments equal a fresh
//! replay of that path. The helm asserts these after every mutation.

/// Trait for validating navigation invariants.
pub trait DebugInvariants {
    type Error: std::fmt::Display;

    /// Name used in invariant panic messages.
    const LABEL: &'static str;

    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), Self::Error>;

    /// Panic on a violated invariant in debug builds or when invariant
    /// checking is enabled; a no-op otherwise.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), Self::LABEL);
    }
}

/// Run a fallible check and panic with `label` on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $label:expr) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!("[invariants] {}: {}", $label, e);
        }
    };
}
