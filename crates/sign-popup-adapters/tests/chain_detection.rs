mod common;

use sign_popup_core::{ChainId, SignMessage};

use common::Harness;

#[test]
fn loading_a_request_selects_its_chain() {
    let h = Harness::new();
    let index = h.enqueue_on("osmosis-1", Some(SignMessage::Text("hi".to_owned())));
    let page = h.mount(&index, false);

    assert_eq!(
        h.chains.selected().expect("selected"),
        Some(ChainId::new("osmosis-1"))
    );
    assert_eq!(page.view().chain_name.as_deref(), Some("Osmosis"));
    page.unmount();
}

#[test]
fn chain_is_selected_once_per_request() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, false);
    page.refresh();
    page.refresh();
    assert_eq!(h.chains.selection_count().expect("count"), 1);
    page.unmount();
}

#[test]
fn unknown_chain_does_not_block_the_page() {
    let h = Harness::new();
    let index = h.enqueue_on("unknown-9", Some(SignMessage::Text("hi".to_owned())));
    let page = h.mount(&index, false);

    assert_eq!(h.chains.selected().expect("selected"), None);
    let view = page.view();
    assert!(view.chain_name.is_none());
    assert!(view.approve_enabled);
    page.unmount();
}
