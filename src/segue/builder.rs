//! Builders for segue collections.
//!
//! Connector helpers produce plain `Vec<Segue>`s that can be concatenated and
//! handed to [`NavigationGraph::new`](crate::helm::NavigationGraph::new).
//! [`SegueSetExt`] annotates a whole collection at once.
//!
//! ```rust
//! use helm_nav::segue::{chain, fan_out, SegueSetExt};
//! let mut segues: Vec<helm_nav::segue::Segue<&str>> = chain(["splash", "login", "home"]).make_auto();
//! segues.extend(fan_out("home", ["profile", "settings"]).make_dismissable());
//! assert_eq!(segues.len(), 4);
//! ```

use itertools::Itertools;

use crate::segue::model::{Segue, SegueRule};

/// `a → b`.
pub fn connect<N, T>(from: N, to: N) -> Vec<Segue<N, T>> {
    vec![Segue::new(from, to)]
}

/// `a → b` and `b → a`.
pub fn connect_both<N: Clone, T>(a: N, b: N) -> Vec<Segue<N, T>> {
    vec![Segue::new(a.clone(), b.clone()), Segue::new(b, a)]
}

/// Consecutive pairs: `[a, b, c]` gives `a → b`, `b → c`.
pub fn chain<N, T, I>(nodes: I) -> Vec<Segue<N, T>>
where
    N: Clone,
    I: IntoIterator<Item = N>,
{
    nodes
        .into_iter()
        .tuple_windows()
        .map(|(from, to)| Segue::new(from, to))
        .collect()
}

/// One origin to many targets.
pub fn fan_out<N, T, I>(from: N, targets: I) -> Vec<Segue<N, T>>
where
    N: Clone,
    I: IntoIterator<Item = N>,
{
    targets
        .into_iter()
        .map(|to| Segue::new(from.clone(), to))
        .collect()
}

/// Many origins to one target.
pub fn fan_in<N, T, I>(origins: I, to: N) -> Vec<Segue<N, T>>
where
    N: Clone,
    I: IntoIterator<Item = N>,
{
    origins
        .into_iter()
        .map(|from| Segue::new(from, to.clone()))
        .collect()
}

/// Bulk annotation over any collection of segues.
pub trait SegueSetExt<N, T>: Sized {
    fn map_segues(self, f: impl FnMut(Segue<N, T>) -> Segue<N, T>) -> Vec<Segue<N, T>>;

    fn make_auto(self) -> Vec<Segue<N, T>> {
        self.map_segues(Segue::make_auto)
    }

    fn make_dismissable(self) -> Vec<Segue<N, T>> {
        self.map_segues(Segue::make_dismissable)
    }

    fn with_rule(self, rule: SegueRule) -> Vec<Segue<N, T>> {
        self.map_segues(|s| s.with_rule(rule))
    }

    fn with_tag(self, tag: T) -> Vec<Segue<N, T>>
    where
        T: Clone,
    {
        self.map_segues(|s| s.with_tag(tag.clone()))
    }
}

impl<N, T, I> SegueSetExt<N, T> for I
where
    I: IntoIterator<Item = Segue<N, T>>,
{
    fn map_segues(self, f: impl FnMut(Segue<N, T>) -> Segue<N, T>) -> Vec<Segue<N, T>> {
        self.into_iter().map(f).collect()
    }
}
