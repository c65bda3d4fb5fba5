//! Pure renderers for the two tab bodies of the sign page.
//!
//! Both take the same [`SignMessage`] by reference; neither can change it.

use serde::Deserialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::domain::SignMessage;

/// Formatted view of a message, shown under the Details tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsBody {
    /// The request has not been loaded from the background yet.
    Loading,
    Empty,
    Text { text: String, byte_len: usize },
    SignDoc(SignDocDetails),
    /// Structured payload that is not a well-formed sign doc.
    Unrecognized { reason: String, compact: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignDocDetails {
    pub chain_id: String,
    pub account_number: String,
    pub sequence: String,
    pub msgs: Vec<MsgSummary>,
    pub fee: String,
    pub gas: String,
    pub memo: String,
    /// Hex SHA-256 of the canonical sign bytes.
    pub digest: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgSummary {
    pub msg_type: String,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
struct StdSignDoc {
    chain_id: String,
    account_number: String,
    sequence: String,
    fee: StdFee,
    msgs: Vec<AminoMsg>,
    #[serde(default)]
    memo: String,
}

#[derive(Debug, Deserialize)]
struct StdFee {
    #[serde(default)]
    amount: Vec<Coin>,
    gas: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Coin {
    denom: String,
    amount: String,
}

#[derive(Debug, Deserialize)]
struct AminoMsg {
    #[serde(rename = "type")]
    msg_type: String,
    value: Value,
}

#[derive(Debug, Deserialize)]
struct MsgSend {
    to_address: String,
    amount: Vec<Coin>,
}

#[derive(Debug, Deserialize)]
struct MsgDelegate {
    validator_address: String,
    amount: Coin,
}

#[derive(Debug, Deserialize)]
struct MsgBeginRedelegate {
    validator_src_address: String,
    validator_dst_address: String,
    amount: Coin,
}

#[derive(Debug, Deserialize)]
struct MsgWithdrawDelegationReward {
    validator_address: String,
}

/// Canonical sign bytes: compact JSON with object keys sorted.
pub fn sign_bytes(doc: &Value) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&sorted(doc))
}

// Rebuilds objects in key order so the output holds even when
// `serde_json/preserve_order` is enabled somewhere in the graph.
fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sorted(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}

pub fn sign_doc_digest(doc: &Value) -> Result<String, serde_json::Error> {
    let bytes = sign_bytes(doc)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// Raw view of a message, shown under the Data tab.
pub fn render_data(message: Option<&SignMessage>, max_bytes: usize) -> String {
    let raw = match message {
        None => return String::new(),
        Some(SignMessage::Text(text)) => text.clone(),
        Some(SignMessage::SignDoc(doc)) => {
            serde_json::to_string_pretty(doc).unwrap_or_else(|_| doc.to_string())
        }
    };
    truncate(raw, max_bytes)
}

pub fn render_details(message: Option<&SignMessage>) -> DetailsBody {
    match message {
        None => DetailsBody::Empty,
        Some(m) if m.is_empty() => DetailsBody::Empty,
        Some(SignMessage::Text(text)) => DetailsBody::Text {
            text: text.clone(),
            byte_len: text.len(),
        },
        Some(SignMessage::SignDoc(doc)) => match sign_doc_details(doc) {
            Ok(details) => DetailsBody::SignDoc(details),
            Err(e) => DetailsBody::Unrecognized {
                reason: e.to_string(),
                compact: doc.to_string(),
            },
        },
    }
}

fn sign_doc_details(doc: &Value) -> Result<SignDocDetails, serde_json::Error> {
    let parsed: StdSignDoc = serde_json::from_value(doc.clone())?;
    let digest = sign_doc_digest(doc)?;
    Ok(SignDocDetails {
        chain_id: parsed.chain_id,
        account_number: parsed.account_number,
        sequence: parsed.sequence,
        msgs: parsed.msgs.iter().map(summarize_msg).collect(),
        fee: format_coins(&parsed.fee.amount),
        gas: parsed.fee.gas,
        memo: parsed.memo,
        digest,
    })
}

fn summarize_msg(msg: &AminoMsg) -> MsgSummary {
    let summary = match msg.msg_type.as_str() {
        "cosmos-sdk/MsgSend" => serde_json::from_value::<MsgSend>(msg.value.clone())
            .ok()
            .map(|m| format!("Send {} to {}", format_coins(&m.amount), m.to_address)),
        "cosmos-sdk/MsgDelegate" => serde_json::from_value::<MsgDelegate>(msg.value.clone())
            .ok()
            .map(|m| {
                format!(
                    "Delegate {} to {}",
                    format_coin(&m.amount),
                    m.validator_address
                )
            }),
        "cosmos-sdk/MsgUndelegate" => serde_json::from_value::<MsgDelegate>(msg.value.clone())
            .ok()
            .map(|m| {
                format!(
                    "Undelegate {} from {}",
                    format_coin(&m.amount),
                    m.validator_address
                )
            }),
        "cosmos-sdk/MsgBeginRedelegate" => {
            serde_json::from_value::<MsgBeginRedelegate>(msg.value.clone())
                .ok()
                .map(|m| {
                    format!(
                        "Redelegate {} from {} to {}",
                        format_coin(&m.amount),
                        m.validator_src_address,
                        m.validator_dst_address
                    )
                })
        }
        "cosmos-sdk/MsgWithdrawDelegationReward" => {
            serde_json::from_value::<MsgWithdrawDelegationReward>(msg.value.clone())
                .ok()
                .map(|m| format!("Claim rewards from {}", m.validator_address))
        }
        _ => None,
    };

    MsgSummary {
        msg_type: msg.msg_type.clone(),
        summary: summary.unwrap_or_else(|| msg.value.to_string()),
    }
}

fn format_coin(coin: &Coin) -> String {
    format!("{}{}", coin.amount, coin.denom)
}

fn format_coins(coins: &[Coin]) -> String {
    if coins.is_empty() {
        return "0".to_owned();
    }
    coins.iter().map(format_coin).collect::<Vec<_>>().join(", ")
}

fn truncate(mut raw: String, max_bytes: usize) -> String {
    if raw.len() <= max_bytes {
        return raw;
    }
    let mut cut = max_bytes;
    while !raw.is_char_boundary(cut) {
        cut -= 1;
    }
    let dropped = raw.len() - cut;
    raw.truncate(cut);
    raw.push_str(&format!("\n... ({dropped} bytes truncated)"));
    raw
}
