use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recording_sink() -> Rc<RefCell<Vec<(ToastLevel, String)>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink_seen = seen.clone();
    install_sink(move |level, message| sink_seen.borrow_mut().push((level, message)));
    seen
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Info, "a");
    let b = state.push(ToastLevel::Error, "b");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "b");
}

#[test]
fn push_evicts_oldest_past_cap() {
    let mut state = ToastState::default();
    for i in 0..(TOAST_CAP + 2) {
        state.push(ToastLevel::Info, format!("t{i}"));
    }
    assert_eq!(state.items.len(), TOAST_CAP);
    assert_eq!(state.items[0].message, "t2");
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Info, "a");
    state.push(ToastLevel::Info, "b");
    state.dismiss(a);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "b");
}

#[test]
fn notify_without_sink_reports_undelivered() {
    clear_sink();
    assert!(!error("nobody listening"));
}

#[test]
fn error_routes_to_installed_sink() {
    let seen = recording_sink();
    assert!(error("boom"));
    assert!(notify(ToastLevel::Success, "ok"));
    assert_eq!(
        *seen.borrow(),
        vec![(ToastLevel::Error, "boom".to_owned()), (ToastLevel::Success, "ok".to_owned())]
    );
    clear_sink();
}

#[test]
fn css_modifier_matches_level() {
    assert_eq!(ToastLevel::Error.css_modifier(), "toast--error");
    assert_eq!(ToastLevel::default().css_modifier(), "toast--info");
}
