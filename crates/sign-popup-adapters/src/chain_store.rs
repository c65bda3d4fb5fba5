use std::sync::{Arc, Mutex, MutexGuard};

use sign_popup_core::{ChainId, ChainInfo, ChainStorePort, PortError};

/// Registry of known chains plus the currently selected one.
#[derive(Debug, Clone, Default)]
pub struct ChainStoreAdapter {
    inner: Arc<Mutex<ChainStoreState>>,
}

#[derive(Debug, Default)]
struct ChainStoreState {
    chains: Vec<ChainInfo>,
    selected: Option<ChainId>,
    selections: usize,
}

impl ChainStoreAdapter {
    pub fn with_chains(chains: impl IntoIterator<Item = ChainInfo>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ChainStoreState {
                chains: chains.into_iter().collect(),
                selected: None,
                selections: 0,
            })),
        }
    }

    pub fn selected(&self) -> Result<Option<ChainId>, PortError> {
        Ok(self.lock()?.selected.clone())
    }

    /// Number of successful `set_chain` calls.
    pub fn selection_count(&self) -> Result<usize, PortError> {
        Ok(self.lock()?.selections)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ChainStoreState>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("chain store lock poisoned: {e}")))
    }
}

impl ChainStorePort for ChainStoreAdapter {
    fn set_chain(&self, chain_id: &ChainId) -> Result<(), PortError> {
        let mut g = self.lock()?;
        if !g.chains.iter().any(|c| &c.chain_id == chain_id) {
            return Err(PortError::Validation(format!("unknown chain: {chain_id}")));
        }
        g.selected = Some(chain_id.clone());
        g.selections += 1;
        tracing::debug!(%chain_id, "chain selected");
        Ok(())
    }

    fn current_chain(&self) -> Result<Option<ChainInfo>, PortError> {
        let g = self.lock()?;
        let current = g
            .selected
            .as_ref()
            .and_then(|id| g.chains.iter().find(|c| &c.chain_id == id))
            .cloned();
        Ok(current)
    }
}
