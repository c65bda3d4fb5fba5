mod common;

use sign_popup_core::{Decision, RequestIndex, RequestStatus, SignError, SignMessage};

use common::Harness;

#[test]
fn back_button_only_for_in_app_requests() {
    let h = Harness::new();
    let index = h.enqueue_send();

    let mut in_app = h.mount(&index, false);
    assert!(in_app.view().show_back_button);
    assert!(in_app.go_back());
    assert_eq!(h.window.back_count().expect("back count"), 1);
    in_app.unmount();

    let mut external = h.mount(&index, true);
    assert!(!external.view().show_back_button);
    assert!(!external.go_back());
    assert_eq!(h.window.back_count().expect("back count"), 1);
    external.unmount();
}

#[test]
fn actions_disabled_until_an_actionable_message_is_loaded() {
    let h = Harness::new();

    // Index "0" is not queued yet, so the page starts out initializing.
    let mut page = h.mount(&RequestIndex::new("0"), false);
    let view = page.view();
    assert!(page.snapshot().initializing);
    assert!(!view.approve_enabled);
    assert!(!view.reject_enabled);
    assert!(matches!(page.approve(), Err(SignError::NotReady(_))));
    assert!(h.background.responses().expect("responses").is_empty());

    let index = h.enqueue(None);
    assert_eq!(index.as_str(), "0");
    page.refresh();
    assert!(!page.snapshot().initializing);
    assert!(!page.view().approve_enabled, "missing message keeps actions disabled");
    page.unmount();

    let empty = h.enqueue(Some(SignMessage::Text(String::new())));
    let page = h.mount(&empty, false);
    assert!(!page.view().approve_enabled, "empty message keeps actions disabled");
    page.unmount();

    let ready = h.enqueue_send();
    let page = h.mount(&ready, false);
    let view = page.view();
    assert!(view.approve_enabled);
    assert!(view.reject_enabled);
    assert!(!view.buttons_loading);
    page.unmount();
}

#[test]
fn external_approve_closes_window_exactly_once() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, true);

    let outcome = page.approve().expect("approve");
    assert_eq!(outcome.decision, Decision::Approve);
    assert!(outcome.window_closed);
    assert_eq!(h.close_count(), 1);

    // A second click has nothing left to decide and must not close again.
    assert!(page.approve().is_err());
    assert_eq!(h.close_count(), 1);
    assert_eq!(h.decisions(&index), vec![Decision::Approve]);

    let view = page.view();
    assert!(view.buttons_loading);
    assert_eq!(view.status, RequestStatus::Resolved(Decision::Approve));
    page.unmount();
}

#[test]
fn external_reject_closes_window() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, true);

    let outcome = page.reject().expect("reject");
    assert!(outcome.window_closed);
    assert_eq!(h.close_count(), 1);
    page.unmount();
    assert_eq!(h.decisions(&index), vec![Decision::Reject]);
}

#[test]
fn in_app_decision_keeps_window_open() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, false);

    let outcome = page.approve().expect("approve");
    assert!(!outcome.window_closed);
    assert_eq!(h.close_count(), 0);
    assert_eq!(page.view().info.as_deref(), Some("Request approved"));
    page.unmount();
}

#[test]
fn unmount_rejects_pending_external_request_once() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let page = h.mount(&index, true);
    page.unmount();
    assert_eq!(h.decisions(&index), vec![Decision::Reject]);
}

#[test]
fn dropping_the_page_runs_the_same_guard() {
    let h = Harness::new();
    let index = h.enqueue_send();
    {
        let _page = h.mount(&index, true);
    }
    assert_eq!(h.decisions(&index), vec![Decision::Reject]);
}

#[test]
fn unmount_never_rejects_a_request_the_user_decided() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, true);
    page.approve().expect("approve");
    page.unmount();
    assert_eq!(h.decisions(&index), vec![Decision::Approve]);
}

#[test]
fn unmount_in_app_leaves_request_pending() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let page = h.mount(&index, false);
    page.unmount();
    assert!(h.decisions(&index).is_empty());
    assert_eq!(h.background.pending().expect("pending").len(), 1);
}

#[test]
fn switching_request_rejects_the_prior_one_first() {
    let h = Harness::new();
    let first = h.enqueue_send();
    let second = h.enqueue(Some(SignMessage::Text("second".to_owned())));
    let mut page = h.mount(&first, true);

    page.switch_request(first.clone());
    assert!(h.decisions(&first).is_empty(), "same index is a no-op");

    page.switch_request(second.clone());
    assert_eq!(h.decisions(&first), vec![Decision::Reject]);
    assert!(h.decisions(&second).is_empty());
    assert_eq!(page.route().index, second);
    assert!(page.view().approve_enabled);

    page.approve().expect("approve second");
    page.unmount();
    assert_eq!(h.decisions(&first), vec![Decision::Reject]);
    assert_eq!(h.decisions(&second), vec![Decision::Approve]);
}

#[test]
fn switching_in_app_request_does_not_reject() {
    let h = Harness::new();
    let first = h.enqueue_send();
    let second = h.enqueue_send();
    let mut page = h.mount(&first, false);
    page.switch_request(second);
    assert!(h.decisions(&first).is_empty());
    page.unmount();
}

#[test]
fn unload_rejects_external_request_exactly_once() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, true);

    assert!(page.on_unload());
    assert!(!page.on_unload(), "guard is disarmed after firing");
    page.unmount();
    assert_eq!(h.decisions(&index), vec![Decision::Reject]);
}

#[test]
fn unload_in_app_does_not_reject() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, false);
    assert!(!page.on_unload());
    page.unmount();
    assert!(h.decisions(&index).is_empty());
}

#[test]
fn unload_after_user_decision_does_not_reject() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, true);
    page.reject().expect("reject");
    assert!(!page.on_unload());
    page.unmount();
    assert_eq!(h.decisions(&index), vec![Decision::Reject]);
}

#[test]
fn failed_decision_keeps_window_open_and_allows_retry() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, true);

    h.background.fail_next("background offline").expect("inject failure");
    let err = page.approve().expect_err("approve should fail");
    assert!(matches!(err, SignError::Port(_)));
    assert_eq!(h.close_count(), 0);

    let view = page.view();
    let error = view.error.expect("inline error");
    assert!(error.contains("background offline"));
    assert!(matches!(view.status, RequestStatus::Failed { .. }));
    assert!(view.approve_enabled, "retry stays available");

    page.approve().expect("retry approve");
    assert_eq!(h.close_count(), 1);
    assert!(page.view().error.is_none());
    page.unmount();
    assert_eq!(h.decisions(&index), vec![Decision::Approve]);
}

#[test]
fn unload_rejects_a_failed_external_request() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, true);
    h.background.fail_next("flaky").expect("inject failure");
    page.approve().expect_err("approve should fail");

    assert!(page.on_unload());
    page.unmount();
    assert_eq!(h.decisions(&index), vec![Decision::Reject]);
}
