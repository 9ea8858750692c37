use std::cell::RefCell;
use std::rc::Rc;

use helm_nav::prelude::*;

mod util;
use util::{app, shown, step};

#[test]
fn login_flow_reaches_home() {
    let mut helm = app();
    assert_eq!(helm.entry(), &"splash");
    assert_eq!(shown(&helm), vec!["splash"]);

    helm.forward();
    helm.forward();
    assert_eq!(helm.path(), &[step("splash", "login"), step("login", "home")]);
    assert_eq!(shown(&helm), vec!["home"]);
    assert!(helm.errors().is_empty());
}

#[test]
fn sheets_stack_over_home_and_dismiss_by_tag() {
    let mut helm = app();
    helm.replace(vec![step("splash", "login"), step("login", "home")])
        .unwrap();

    helm.present_tag(&"sheet");
    assert_eq!(shown(&helm), vec!["home", "settings"]);

    helm.dismiss_tag(&"sheet");
    assert_eq!(shown(&helm), vec!["home"]);

    // Home has more than one way forward.
    helm.forward();
    assert!(matches!(
        helm.errors(),
        [HelmError::AmbiguousForwardFromFragment { fragment: "home", .. }]
    ));
}

#[test]
fn dismissing_a_sheet_closes_what_it_opened() {
    let mut helm = app();
    helm.replace(vec![step("splash", "login"), step("login", "home")])
        .unwrap();
    helm.present_fragment("profile");
    helm.present_tag(&"modal");
    assert_eq!(shown(&helm), vec!["home", "profile", "edit"]);

    helm.dismiss_fragment(&"profile");
    assert_eq!(shown(&helm), vec!["home"]);
    assert_eq!(helm.path().len(), 2);
}

#[test]
fn present_from_an_unreachable_place_is_recorded() {
    let mut helm = app();
    helm.present_fragment("home");
    assert_eq!(
        helm.errors(),
        &[HelmError::MissingSegueToFragment { fragment: "home" }]
    );
    assert_eq!(
        helm.present_edge(step("login", "home")),
        Err(HelmError::FragmentNotPresented { fragment: "login" })
    );
    assert!(helm.path().is_empty());
}

#[test]
fn details_are_told_apart_by_identity() {
    let mut helm = app();
    helm.replace(vec![step("splash", "login"), step("login", "home")])
        .unwrap();
    let first = InstanceId::of(&("record", 1));
    let second = InstanceId::of(&("record", 2));

    helm.present_fragment_with("detail", first);
    assert!(helm.is_presented_with(&"detail", first));

    helm.present_fragment_with("detail", second);
    assert!(helm.is_presented_with(&"detail", second));
    assert!(!helm.is_presented_with(&"detail", first));
    assert_eq!(shown(&helm), vec!["home", "detail"]);
}

#[test]
fn ui_layer_follows_events() {
    let screens: Rc<RefCell<Vec<Vec<&str>>>> = Rc::new(RefCell::new(Vec::new()));
    let mut helm = Helm::with_options(
        NavigationGraph::new(util::app_segues()).unwrap(),
        Vec::new(),
        HelmOptions::quiet(),
    )
    .unwrap();

    let sink = Rc::clone(&screens);
    helm.subscribe(move |event| {
        if let HelmEvent::Presented { step, chased } = event {
            let mut targets = vec![step.edge.to];
            targets.extend(chased.iter().map(|e| e.to));
            sink.borrow_mut().push(targets);
        }
    });

    helm.forward();
    helm.present_fragment("home");
    helm.present_fragment("settings");
    helm.present_fragment("about");
    assert_eq!(
        *screens.borrow(),
        vec![vec!["login"], vec!["home"], vec!["settings"], vec!["about"]]
    );
    assert_eq!(shown(&helm), vec!["home", "about"]);
}

#[test]
fn auto_segues_fire_after_present() {
    let mut helm: Helm<&str> = Helm::new(
        vec![
            Segue::new("launch", "splash"),
            Segue::new("splash", "onboarding").make_auto(),
            Segue::new("onboarding", "home").make_auto(),
        ],
        Vec::new(),
    )
    .unwrap();
    helm.present_fragment("splash");
    assert_eq!(shown(&helm), vec!["home"]);
    assert_eq!(helm.path().len(), 3);
}

#[test]
fn toggles_bind_to_presentation() {
    let mut helm = app();
    helm.replace(vec![step("splash", "login"), step("login", "home")])
        .unwrap();
    helm.set_presented("detail", true);
    assert!(helm.is_presented(&"detail"));
    helm.set_presented("detail", false);
    assert!(!helm.is_presented(&"detail"));
    assert!(helm.errors().is_empty());
}
