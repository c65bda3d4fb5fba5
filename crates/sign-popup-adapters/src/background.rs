//! In-memory stand-in for the background process that owns pending sign
//! requests. Each request is answered at most once.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use sign_popup_core::{
    ChainId, ClockPort, Decision, PortError, RequestIndex, RequestOrigin, SignMessage,
    SignRequest, SigningPort, TimestampMs,
};

use crate::clock::SystemClockAdapter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignResponse {
    pub index: RequestIndex,
    pub decision: Decision,
    pub responded_at_ms: TimestampMs,
}

#[derive(Clone)]
pub struct BackgroundAdapter {
    inner: Arc<Mutex<BackgroundState>>,
    clock: Arc<dyn ClockPort + Send + Sync>,
}

// `responses` grows by one entry per answered request for the life of the
// adapter; it is what turns a second answer into `Conflict`.
#[derive(Debug, Default)]
struct BackgroundState {
    next_index: u64,
    pending: BTreeMap<RequestIndex, SignRequest>,
    responses: Vec<SignResponse>,
    injected_failures: VecDeque<String>,
}

impl Default for BackgroundAdapter {
    fn default() -> Self {
        Self::with_clock(SystemClockAdapter)
    }
}

impl BackgroundAdapter {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: impl ClockPort + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BackgroundState::default())),
            clock: Arc::new(clock),
        }
    }

    /// Queues a new request and returns the index the popup should open.
    pub fn enqueue(
        &self,
        chain_id: ChainId,
        origin: RequestOrigin,
        message: Option<SignMessage>,
    ) -> Result<RequestIndex, PortError> {
        let requested_at_ms = TimestampMs(self.clock.now_ms()?);
        let mut g = self.lock()?;
        let index = RequestIndex::new(g.next_index.to_string());
        g.next_index += 1;
        g.pending.insert(
            index.clone(),
            SignRequest {
                index: index.clone(),
                chain_id,
                origin,
                message,
                requested_at_ms,
            },
        );
        tracing::debug!(%index, "sign request queued");
        Ok(index)
    }

    /// Makes the next approve/reject fail with a transport error.
    pub fn fail_next(&self, reason: impl Into<String>) -> Result<(), PortError> {
        self.lock()?.injected_failures.push_back(reason.into());
        Ok(())
    }

    pub fn responses(&self) -> Result<Vec<SignResponse>, PortError> {
        Ok(self.lock()?.responses.clone())
    }

    pub fn responses_for(&self, index: &RequestIndex) -> Result<Vec<SignResponse>, PortError> {
        Ok(self
            .lock()?
            .responses
            .iter()
            .filter(|r| &r.index == index)
            .cloned()
            .collect())
    }

    pub fn pending(&self) -> Result<Vec<SignRequest>, PortError> {
        Ok(self.lock()?.pending.values().cloned().collect())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BackgroundState>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("background lock poisoned: {e}")))
    }

    fn respond(&self, index: &RequestIndex, decision: Decision) -> Result<(), PortError> {
        let now = TimestampMs(self.clock.now_ms()?);
        let mut g = self.lock()?;
        if let Some(reason) = g.injected_failures.pop_front() {
            return Err(PortError::Transport(reason));
        }
        if g.pending.remove(index).is_none() {
            if g.responses.iter().any(|r| &r.index == index) {
                return Err(PortError::Conflict(format!(
                    "sign request already answered: {index}"
                )));
            }
            return Err(PortError::NotFound(format!("sign request missing: {index}")));
        }
        g.responses.push(SignResponse {
            index: index.clone(),
            decision,
            responded_at_ms: now,
        });
        tracing::debug!(%index, %decision, "sign request answered");
        Ok(())
    }
}

impl SigningPort for BackgroundAdapter {
    fn load_request(&self, index: &RequestIndex) -> Result<Option<SignRequest>, PortError> {
        Ok(self.lock()?.pending.get(index).cloned())
    }

    fn approve(&self, index: &RequestIndex) -> Result<(), PortError> {
        self.respond(index, Decision::Approve)
    }

    fn reject(&self, index: &RequestIndex) -> Result<(), PortError> {
        self.respond(index, Decision::Reject)
    }
}
