mod common;

use sign_popup_core::{Decision, RequestIndex, SigningPort};

use common::Harness;

#[test]
fn indices_are_sequential_and_requests_loadable() {
    let h = Harness::new();
    let a = h.enqueue_send();
    let b = h.enqueue_send();
    assert_eq!(a.as_str(), "0");
    assert_eq!(b.as_str(), "1");

    let loaded = h
        .background
        .load_request(&b)
        .expect("load")
        .expect("request exists");
    assert_eq!(loaded.index, b);
    assert_eq!(loaded.chain_id.as_str(), "cosmoshub-4");
}

#[test]
fn request_is_answered_at_most_once() {
    let h = Harness::new();
    let index = h.enqueue_send();
    h.background.approve(&index).expect("approve");

    let err = h.background.reject(&index).expect_err("second answer");
    assert!(err.to_string().contains("already answered"));
    assert!(h.background.load_request(&index).expect("load").is_none());
    assert_eq!(h.decisions(&index), vec![Decision::Approve]);
}

#[test]
fn unknown_request_is_not_found() {
    let h = Harness::new();
    let err = h
        .background
        .reject(&RequestIndex::new("missing"))
        .expect_err("missing request");
    assert!(err.to_string().contains("not found"));
}

#[test]
fn injected_failure_is_consumed_once() {
    let h = Harness::new();
    let index = h.enqueue_send();
    h.background.fail_next("offline").expect("inject");
    let err = h.background.approve(&index).expect_err("injected failure");
    assert!(err.to_string().contains("offline"));
    h.background.approve(&index).expect("second attempt succeeds");
}

#[test]
fn responses_carry_clock_timestamps() {
    let h = Harness::new();
    let index = h.enqueue_send();
    h.background.reject(&index).expect("reject");
    let responses = h.background.responses().expect("responses");
    assert_eq!(responses.len(), 1);
    assert!(responses[0].responded_at_ms.0 >= 1_739_750_400_000);
}

#[test]
fn window_commands_drain_but_counts_persist() {
    use sign_popup_adapters::WindowCommand;
    use sign_popup_core::WindowPort;

    let h = Harness::new();
    h.window.close().expect("close");
    h.window.go_back().expect("back");
    assert_eq!(
        h.window.take_commands().expect("take"),
        vec![WindowCommand::Close, WindowCommand::GoBack]
    );
    assert!(h.window.take_commands().expect("take again").is_empty());
    assert_eq!(h.close_count(), 1);
}
