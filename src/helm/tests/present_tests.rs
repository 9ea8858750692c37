use super::{e, fragments, path};
use crate::helm::{FailureLogging, Helm, HelmOptions, InstanceId, NavigationGraph};
use crate::nav_error::{GraphError, HelmError};
use crate::segue::{Segue, SegueRule, chain};

fn hold(from: char, to: char) -> Segue<char> {
    Segue::new(from, to).with_rule(SegueRule::Hold)
}

#[test]
fn forward_walks_a_chain() {
    let mut helm: Helm<char> = Helm::new(chain(['a', 'b', 'c', 'd']), Vec::new()).unwrap();
    assert_eq!(helm.entry(), &'a');
    assert_eq!(fragments(helm.presented_fragments()), vec!['a']);

    helm.forward();
    assert_eq!(fragments(helm.presented_fragments()), vec!['b']);
    helm.forward();
    assert_eq!(fragments(helm.presented_fragments()), vec!['c']);
    helm.forward();
    assert_eq!(fragments(helm.presented_fragments()), vec!['d']);
    assert!(helm.errors().is_empty());
    assert_eq!(helm.path(), path(&[('a', 'b'), ('b', 'c'), ('c', 'd')]).as_slice());
}

#[test]
fn forward_needs_a_unique_egress() {
    let mut helm: Helm<char> =
        Helm::new(vec![Segue::new('a', 'b'), Segue::new('a', 'c')], Vec::new()).unwrap();
    helm.forward();
    assert_eq!(
        helm.errors(),
        &[HelmError::AmbiguousForwardFromFragment {
            fragment: 'a',
            source_error: GraphError::AmbiguousEgressEdges {
                node: 'a',
                edges: vec![e('a', 'b'), e('a', 'c')],
            },
        }]
    );
    assert!(helm.path().is_empty());

    helm.present_fragment('b');
    helm.forward();
    assert!(matches!(
        helm.errors().last(),
        Some(HelmError::AmbiguousForwardFromFragment {
            fragment: 'b',
            source_error: GraphError::MissingEgressEdges { node: 'b' },
        })
    ));
    assert_eq!(helm.errors().len(), 2);
}

#[test]
fn present_edge_validates_before_mutating() {
    let mut helm: Helm<char> = Helm::new(chain(['a', 'b', 'c']), Vec::new()).unwrap();
    assert_eq!(
        helm.present_edge(e('a', 'c')),
        Err(HelmError::MissingSegueForEdge { edge: e('a', 'c') })
    );
    assert_eq!(
        helm.present_edge(e('b', 'c')),
        Err(HelmError::FragmentNotPresented { fragment: 'b' })
    );
    assert!(helm.path().is_empty());
    assert_eq!(fragments(helm.presented_fragments()), vec!['a']);
    // Fallible calls never touch the error log.
    assert!(helm.errors().is_empty());
}

#[test]
fn present_edge_replaces_the_previous_route_to_a_target() {
    let mut helm: Helm<char> = Helm::new(
        vec![hold('a', 'b'), hold('a', 'c'), hold('b', 'c')],
        path(&[('a', 'b'), ('a', 'c')]),
    )
    .unwrap();
    assert_eq!(fragments(helm.presented_fragments()), vec!['a', 'b', 'c']);
    helm.present_edge(e('b', 'c')).unwrap();
    assert_eq!(helm.path(), path(&[('a', 'b'), ('b', 'c')]).as_slice());
    assert_eq!(fragments(helm.presented_fragments()), vec!['a', 'b', 'c']);
}

#[test]
fn auto_segues_are_chased() {
    let segues = vec![
        Segue::new('a', 'b'),
        Segue::new('b', 'c').make_auto(),
        Segue::new('c', 'd').make_auto().with_rule(SegueRule::Hold),
        Segue::new('c', 'x'),
    ];
    let mut helm: Helm<char> = Helm::new(segues.clone(), Vec::new()).unwrap();
    helm.present_edge(e('a', 'b')).unwrap();
    assert_eq!(
        helm.path(),
        path(&[('a', 'b'), ('b', 'c'), ('c', 'd')]).as_slice()
    );
    assert_eq!(fragments(helm.presented_fragments()), vec!['c', 'd']);

    let nav = NavigationGraph::new(segues).unwrap();
    let options = HelmOptions {
        chase_auto: false,
        ..HelmOptions::default()
    };
    let mut manual = Helm::with_options(nav, Vec::new(), options).unwrap();
    manual.present_edge(e('a', 'b')).unwrap();
    assert_eq!(manual.path(), path(&[('a', 'b')]).as_slice());
}

#[test]
fn present_fragment_from_the_entry() {
    let mut helm: Helm<char> = Helm::new(
        vec![Segue::new('a', 'b'), Segue::new('a', 'c'), Segue::new('b', 'c')],
        Vec::new(),
    )
    .unwrap();
    helm.present_fragment('d');
    assert_eq!(
        helm.errors(),
        &[HelmError::MissingSegueToFragment { fragment: 'd' }]
    );
    helm.present_fragment('c');
    assert_eq!(helm.path(), path(&[('a', 'c')]).as_slice());
    assert!(helm.is_presented(&'c') && !helm.is_presented(&'a'));
    assert_eq!(helm.errors().len(), 1);
}

#[test]
fn present_fragment_prefers_the_most_recent_origin() {
    let mut helm: Helm<char> = Helm::new(
        vec![hold('a', 'b'), hold('a', 'c'), Segue::new('b', 'c')],
        path(&[('a', 'b')]),
    )
    .unwrap();
    helm.present_fragment('c');
    assert_eq!(helm.path(), path(&[('a', 'b'), ('b', 'c')]).as_slice());
    assert_eq!(fragments(helm.presented_fragments()), vec!['a', 'c']);
    assert!(helm.errors().is_empty());
}

#[test]
fn present_tag_takes_the_last_match() {
    let segues: Vec<Segue<char, &str>> = vec![
        Segue::new('a', 'b').with_rule(SegueRule::Hold),
        Segue::new('a', 'c').with_tag("more"),
        Segue::new('b', 'd').with_tag("more"),
    ];
    let mut helm = Helm::new(segues, path(&[('a', 'b')])).unwrap();
    assert_eq!(fragments(helm.presented_fragments()), vec!['a', 'b']);

    // b is the most recent, but the search keeps going and a→c is found last.
    helm.present_tag(&"more");
    assert_eq!(helm.path(), path(&[('a', 'b'), ('a', 'c')]).as_slice());
    assert_eq!(fragments(helm.presented_fragments()), vec!['b', 'c']);

    helm.present_tag(&"missing");
    assert_eq!(
        helm.errors(),
        &[HelmError::MissingTaggedSegue { tag: "missing" }]
    );
}

#[test]
fn instances_carry_their_identity() {
    let mut helm: Helm<char> = Helm::new(vec![hold('a', 'b')], Vec::new()).unwrap();
    helm.present_fragment_with('b', 5u64);
    assert!(helm.is_presented_with(&'b', InstanceId::new(5)));
    assert!(!helm.is_presented_with(&'b', InstanceId::new(6)));
    assert_eq!(helm.path()[0].id, Some(InstanceId::new(5)));

    // Re-presenting under another identity replaces the old instance.
    helm.present_edge(crate::helm::PathEdge::from(e('a', 'b')).with_id(6u64))
        .unwrap();
    assert!(helm.is_presented_with(&'b', InstanceId::new(6)));
    assert_eq!(helm.path().len(), 1);
}

#[test]
fn quiet_options_still_record() {
    let nav = NavigationGraph::<char>::new(chain(['a', 'b'])).unwrap();
    let mut helm = Helm::with_options(nav, Vec::new(), HelmOptions::quiet()).unwrap();
    assert_eq!(helm.options().failure_logging, FailureLogging::Ignore);
    helm.present_fragment('z');
    assert_eq!(helm.errors().len(), 1);
}

#[test]
fn presented_set_is_a_replay_of_the_path() {
    let mut helm: Helm<char> = Helm::new(
        vec![hold('a', 'b'), Segue::new('b', 'c'), hold('c', 'b')],
        Vec::new(),
    )
    .unwrap();
    helm.present_fragment('b');
    helm.present_fragment('c');
    helm.present_fragment('b');
    assert!(helm.errors().is_empty());
    assert_eq!(helm.path(), path(&[('b', 'c'), ('c', 'b')]).as_slice());
    assert_eq!(fragments(helm.presented_fragments()), vec!['a', 'c', 'b']);
    let replayed = crate::helm::replay(helm.nav(), helm.path());
    assert_eq!(helm.presented_fragments(), replayed.as_slice());
    assert_eq!(replayed, crate::helm::replay(helm.nav(), helm.path()));
}
