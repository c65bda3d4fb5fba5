use std::collections::BTreeMap;

use serde::Deserialize;
use sign_popup_core::{ChainId, ChainInfo, PageOptions};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub refresh_interval_ms: u64,
    pub close_on_external_decision: bool,
    pub raw_data_max_bytes: usize,
    pub window_width: f32,
    pub window_height: f32,
    /// Chain id -> display name.
    pub known_chains: BTreeMap<String, String>,
}

impl Default for PopupConfig {
    fn default() -> Self {
        let known_chains = [
            ("cosmoshub-4", "Cosmos Hub"),
            ("osmosis-1", "Osmosis"),
            ("juno-1", "Juno"),
        ]
        .into_iter()
        .map(|(id, name)| (id.to_owned(), name.to_owned()))
        .collect();

        Self {
            refresh_interval_ms: 250,
            close_on_external_decision: true,
            raw_data_max_bytes: 64 * 1024,
            window_width: 360.0,
            window_height: 600.0,
            known_chains,
        }
    }
}

impl PopupConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            raw_data_max_bytes: self.raw_data_max_bytes,
            close_on_external_decision: self.close_on_external_decision,
        }
    }

    pub fn chain_infos(&self) -> Vec<ChainInfo> {
        self.known_chains
            .iter()
            .map(|(id, name)| ChainInfo {
                chain_id: ChainId::new(id.clone()),
                chain_name: name.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::PopupConfig;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PopupConfig::from_json(r#"{"raw_data_max_bytes": 128}"#).expect("config");
        assert_eq!(config.raw_data_max_bytes, 128);
        assert_eq!(config.refresh_interval_ms, 250);
        assert!(config.close_on_external_decision);
        assert!(config.known_chains.contains_key("cosmoshub-4"));
    }

    #[test]
    fn page_options_follow_config() {
        let config = PopupConfig {
            close_on_external_decision: false,
            ..PopupConfig::default()
        };
        let options = config.page_options();
        assert!(!options.close_on_external_decision);
        assert_eq!(options.raw_data_max_bytes, 64 * 1024);
    }
}
