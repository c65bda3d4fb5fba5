use serde_json::json;
use sign_popup_adapters::BackgroundAdapter;
use sign_popup_core::{ChainId, PortError, RequestIndex, RequestOrigin, SignMessage};

/// Queues a provider-originated send and an in-app text message. Returns the
/// index of the send.
pub fn seed(background: &BackgroundAdapter) -> Result<RequestIndex, PortError> {
    let send = background.enqueue(
        ChainId::new("cosmoshub-4"),
        RequestOrigin::Provider {
            url: "https://app.example.org".to_owned(),
        },
        Some(SignMessage::SignDoc(json!({
            "chain_id": "cosmoshub-4",
            "account_number": "4821",
            "sequence": "17",
            "fee": {"amount": [{"denom": "uatom", "amount": "2500"}], "gas": "100000"},
            "msgs": [{
                "type": "cosmos-sdk/MsgSend",
                "value": {
                    "from_address": "cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu",
                    "to_address": "cosmos1zg69v7ys40x77y352eufp27daufrg4ncnjqz7q",
                    "amount": [{"denom": "uatom", "amount": "1500000"}]
                }
            }],
            "memo": "demo transfer"
        }))),
    )?;

    background.enqueue(
        ChainId::new("osmosis-1"),
        RequestOrigin::InApp,
        Some(SignMessage::Text(
            "Sign in to the wallet dashboard.\nNonce: 8f1c2e".to_owned(),
        )),
    )?;

    Ok(send)
}
