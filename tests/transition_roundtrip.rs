use std::collections::{BTreeMap, BTreeSet};

use helm_nav::prelude::*;
use proptest::prelude::*;

/// Segues over nodes `0..8` with `0` as the entry: every used node gets an
/// edge from `0`, so there is exactly one inlet origin and every edge is
/// reachable. `auto` is only honoured on forward edges to keep the graph
/// free of auto cycles.
fn arb_segues() -> impl Strategy<Value = Vec<Segue<u8>>> {
    prop::collection::vec(
        (1u8..8, 1u8..8, any::<bool>(), any::<bool>(), any::<bool>()),
        0..24,
    )
    .prop_map(|raw| {
        let mut by_edge: BTreeMap<DirectedEdge<u8>, Segue<u8>> = BTreeMap::new();
        let mut nodes: BTreeSet<u8> = BTreeSet::from([1]);
        for (from, to, hold, dismissable, auto) in raw {
            if from == to {
                continue;
            }
            nodes.extend([from, to]);
            let mut segue = Segue::new(from, to);
            if hold {
                segue = segue.with_rule(SegueRule::Hold);
            }
            if dismissable {
                segue = segue.make_dismissable();
            }
            if auto && from < to {
                segue = segue.make_auto();
            }
            by_edge.entry(segue.edge.clone()).or_insert(segue);
        }
        by_edge
            .into_values()
            .chain(fan_out(0, nodes))
            .collect()
    })
}

proptest! {
    #[test]
    fn enumerated_script_replays_on_a_fresh_helm(segues in arb_segues()) {
        let nav = NavigationGraph::new(segues).unwrap();
        let script = transitions(&nav, None, None);

        let presented: Vec<DirectedEdge<u8>> = script
            .iter()
            .filter_map(|t| match t {
                Transition::Present(step) => Some(step.edge.clone()),
                _ => None,
            })
            .collect();
        let unique: BTreeSet<DirectedEdge<u8>> = presented.iter().cloned().collect();
        prop_assert_eq!(unique.len(), presented.len());
        prop_assert_eq!(unique, nav.edge_set());

        let mut helm = Helm::with_graph(nav, Vec::new()).unwrap();
        for transition in script {
            prop_assert!(helm.navigate(transition).is_ok());
            prop_assert!(helm.validate_invariants().is_ok());
        }
        prop_assert!(helm.errors().is_empty());
    }

    #[test]
    fn enumeration_is_deterministic(segues in arb_segues()) {
        let nav = NavigationGraph::new(segues.clone()).unwrap();
        let mut reversed = segues;
        reversed.reverse();
        let again = NavigationGraph::new(reversed).unwrap();
        prop_assert_eq!(transitions(&nav, None, None), transitions(&again, None, None));
    }
}
