//! Transition: a replayable navigation step.

use serde::{Deserialize, Serialize};

use crate::helm::path::PathEdge;

/// One navigation step, as emitted by the enumerator and accepted by
/// [`Helm::navigate`](crate::helm::Helm::navigate).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition<N> {
    Present(PathEdge<N>),
    Dismiss(PathEdge<N>),
    Replace(Vec<PathEdge<N>>),
}

impl<N> Transition<N> {
    pub fn is_present(&self) -> bool {
        matches!(self, Transition::Present(_))
    }

    pub fn is_replace(&self) -> bool {
        matches!(self, Transition::Replace(_))
    }
}
