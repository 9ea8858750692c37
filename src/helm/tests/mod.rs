mod present_tests;

use crate::graph::DirectedEdge;
use crate::helm::path::PathEdge;

pub(super) fn e(from: char, to: char) -> DirectedEdge<char> {
    DirectedEdge::new(from, to)
}

pub(super) fn path(edges: &[(char, char)]) -> Vec<PathEdge<char>> {
    edges.iter().map(|&pair| PathEdge::from(pair)).collect()
}

pub(super) fn fragments<N: Clone>(presented: &[crate::helm::PresentedFragment<N>]) -> Vec<N> {
    presented.iter().map(|p| p.fragment.clone()).collect()
}
