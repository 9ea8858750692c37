//! Segue: a directed edge annotated with presentation metadata.

use serde::{Deserialize, Serialize};

use crate::graph::edge::DirectedEdge;

/// What happens to the origin fragment when a segue fires.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SegueRule {
    /// The origin stays presented alongside the target.
    Hold,
    /// The target replaces the origin.
    #[default]
    Pass,
}

/// A directed, annotated transition between two fragments.
///
/// # Type Parameters
/// - `N`: the fragment type.
/// - `T`: the tag type. Defaults to `()` for untagged graphs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segue<N, T = ()> {
    pub edge: DirectedEdge<N>,
    pub rule: SegueRule,
    /// Whether reverse navigation may retract this segue.
    pub dismissable: bool,
    /// Opaque label for looking the segue up by purpose.
    pub tag: Option<T>,
    /// Fires as soon as its origin becomes presented.
    pub auto: bool,
}

impl<N, T> Segue<N, T> {
    /// A `Pass` segue `from` → `to` with no tag, not dismissable, not auto.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use helm_nav::segue::{Segue, SegueRule};
    /// let s: Segue<&str> = Segue::new("list", "detail").with_rule(SegueRule::Hold).make_dismissable();
    /// assert_eq!(s.rule, SegueRule::Hold);
    /// assert!(s.dismissable && !s.auto);
    /// ```
    pub fn new(from: N, to: N) -> Self {
        Self::from_edge(DirectedEdge::new(from, to))
    }

    /// A default-annotated segue over an existing edge.
    pub fn from_edge(edge: DirectedEdge<N>) -> Self {
        Segue {
            edge,
            rule: SegueRule::default(),
            dismissable: false,
            tag: None,
            auto: false,
        }
    }

    pub fn with_rule(mut self, rule: SegueRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_tag(mut self, tag: T) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn make_dismissable(mut self) -> Self {
        self.dismissable = true;
        self
    }

    pub fn make_auto(mut self) -> Self {
        self.auto = true;
        self
    }

    #[inline]
    pub fn origin(&self) -> &N {
        &self.edge.from
    }

    #[inline]
    pub fn target(&self) -> &N {
        &self.edge.to
    }

    /// `true` if the segue carries `tag`.
    pub fn is_tagged(&self, tag: &T) -> bool
    where
        T: PartialEq,
    {
        self.tag.as_ref() == Some(tag)
    }
}

impl<N, T> From<DirectedEdge<N>> for Segue<N, T> {
    fn from(edge: DirectedEdge<N>) -> Self {
        Segue::from_edge(edge)
    }
}
