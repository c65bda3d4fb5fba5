mod common;

use sign_popup_core::{render_data, DetailsBody, Tab, TabBody};

use common::{send_doc, Harness};

#[test]
fn page_opens_on_details_tab() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let page = h.mount(&index, false);
    assert_eq!(page.tab(), Tab::Details);
    let TabBody::Details(DetailsBody::SignDoc(details)) = page.view().body else {
        panic!("expected sign doc details");
    };
    assert_eq!(details.msgs[0].summary, "Send 42uatom to cosmos1to");
    assert_eq!(details.fee, "250uatom");
    page.unmount();
}

#[test]
fn switching_tabs_renders_the_same_message_two_ways() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, false);
    let before = page.snapshot().message;

    page.select_tab(Tab::Data);
    assert_eq!(page.tab(), Tab::Data);
    let TabBody::Data(raw) = page.view().body else {
        panic!("expected data body");
    };
    let expected = render_data(before.as_ref(), h.config.raw_data_max_bytes);
    assert_eq!(raw, expected);
    assert!(raw.contains("cosmos-sdk/MsgSend"));

    page.select_tab(Tab::Details);
    page.select_tab(Tab::Details);
    assert!(matches!(page.view().body, TabBody::Details(_)));

    assert_eq!(page.snapshot().message, before);
    assert!(h.background.responses().expect("responses").is_empty());
    page.unmount();
}

#[test]
fn data_tab_shows_pretty_json() {
    let h = Harness::new();
    let index = h.enqueue_send();
    let mut page = h.mount(&index, false);
    page.select_tab(Tab::Data);
    let TabBody::Data(raw) = page.view().body else {
        panic!("expected data body");
    };
    let reparsed: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(reparsed, send_doc());
    page.unmount();
}

#[test]
fn details_tab_tells_loading_apart_from_an_empty_message() {
    let h = Harness::new();
    let missing = sign_popup_core::RequestIndex::new("99");
    let page = h.mount(&missing, false);
    assert_eq!(page.view().body, TabBody::Details(DetailsBody::Loading));
    page.unmount();

    let empty = h.enqueue(None);
    let page = h.mount(&empty, false);
    assert!(!page.snapshot().initializing);
    assert_eq!(page.view().body, TabBody::Details(DetailsBody::Empty));
    page.unmount();
}
