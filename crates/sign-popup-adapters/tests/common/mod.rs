#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{json, Value};
use sign_popup_adapters::{BackgroundAdapter, ChainStoreAdapter, PopupConfig, WindowAdapter};
use sign_popup_core::{
    ChainId, ClockPort, Decision, PortError, RequestIndex, RequestOrigin, SignMessage, SignPage,
    SignRoute,
};

#[derive(Debug, Default)]
pub struct TestClock {
    now: AtomicU64,
}

impl ClockPort for TestClock {
    fn now_ms(&self) -> Result<u64, PortError> {
        Ok(self.now.fetch_add(1, Ordering::SeqCst) + 1_739_750_400_000)
    }
}

pub type TestPage = SignPage<BackgroundAdapter, ChainStoreAdapter, WindowAdapter>;

pub struct Harness {
    pub background: BackgroundAdapter,
    pub chains: ChainStoreAdapter,
    pub window: WindowAdapter,
    pub config: PopupConfig,
}

impl Harness {
    pub fn new() -> Self {
        let config = PopupConfig::default();
        Self {
            background: BackgroundAdapter::with_clock(TestClock::default()),
            chains: ChainStoreAdapter::with_chains(config.chain_infos()),
            window: WindowAdapter::default(),
            config,
        }
    }

    pub fn enqueue(&self, message: Option<SignMessage>) -> RequestIndex {
        self.enqueue_on("cosmoshub-4", message)
    }

    pub fn enqueue_on(&self, chain_id: &str, message: Option<SignMessage>) -> RequestIndex {
        self.background
            .enqueue(
                ChainId::new(chain_id),
                RequestOrigin::Provider {
                    url: "https://dapp.example.org".to_owned(),
                },
                message,
            )
            .expect("enqueue sign request")
    }

    pub fn enqueue_send(&self) -> RequestIndex {
        self.enqueue(Some(SignMessage::SignDoc(send_doc())))
    }

    pub fn mount(&self, index: &RequestIndex, external: bool) -> TestPage {
        SignPage::mount(
            SignRoute::new(index.clone(), external),
            self.background.clone(),
            self.chains.clone(),
            self.window.clone(),
            self.config.page_options(),
        )
    }

    pub fn decisions(&self, index: &RequestIndex) -> Vec<Decision> {
        self.background
            .responses_for(index)
            .expect("responses")
            .into_iter()
            .map(|r| r.decision)
            .collect()
    }

    pub fn close_count(&self) -> usize {
        self.window.close_count().expect("close count")
    }
}

pub fn send_doc() -> Value {
    json!({
        "chain_id": "cosmoshub-4",
        "account_number": "1",
        "sequence": "0",
        "fee": {"amount": [{"denom": "uatom", "amount": "250"}], "gas": "100000"},
        "msgs": [{
            "type": "cosmos-sdk/MsgSend",
            "value": {
                "from_address": "cosmos1from",
                "to_address": "cosmos1to",
                "amount": [{"denom": "uatom", "amount": "42"}]
            }
        }],
        "memo": ""
    })
}
