#![allow(dead_code)]
use helm_nav::prelude::*;

pub type Screen = &'static str;

/// A small app: splash auto-forwards to login, login leads home, and home
/// opens sheets and a record detail on top of itself.
pub fn app_segues() -> Vec<Segue<Screen, Screen>> {
    let mut segues = vec![
        Segue::new("splash", "login").make_auto(),
        Segue::new("login", "home"),
        Segue::new("profile", "edit")
            .with_rule(SegueRule::Hold)
            .make_dismissable()
            .with_tag("modal"),
        Segue::new("settings", "about"),
    ];
    segues.extend(
        fan_out("home", ["profile", "settings"])
            .with_rule(SegueRule::Hold)
            .make_dismissable()
            .with_tag("sheet"),
    );
    segues.extend(
        connect("home", "detail")
            .with_rule(SegueRule::Hold)
            .make_dismissable(),
    );
    segues
}

pub fn app() -> Helm<Screen, Screen> {
    Helm::new(app_segues(), Vec::new()).unwrap()
}

pub fn step(from: Screen, to: Screen) -> PathEdge<Screen> {
    PathEdge::from((from, to))
}

/// Presented fragments, oldest first, without identities.
pub fn shown<N: FragmentLike, T: TagLike>(helm: &Helm<N, T>) -> Vec<N> {
    helm.presented_fragments()
        .iter()
        .map(|p| p.fragment.clone())
        .collect()
}
