//! Session over one pending sign request.
//!
//! A [`Signature`] is opened for a request index, polled with
//! [`Signature::refresh`] until the background reports the request, and closed
//! when the page lets go of it. Decisions go through the request state machine
//! so a resolved request cannot be decided twice.

use thiserror::Error;

use crate::domain::{ChainId, Decision, RequestIndex, SignMessage, SignRequest};
use crate::ports::{PortError, SigningPort};
use crate::state_machine::{request_transition, RequestAction, RequestStatus};

#[derive(Debug, Error)]
pub enum SignError {
    #[error("sign request {0} is not ready")]
    NotReady(RequestIndex),
    #[error("sign request {0} was already resolved")]
    AlreadyResolved(RequestIndex),
    #[error("sign request {0} is no longer observed")]
    Closed(RequestIndex),
    #[error(transparent)]
    Port(#[from] PortError),
}

/// Point-in-time view of a session, in the shape the page renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct SigningSnapshot {
    pub index: RequestIndex,
    pub message: Option<SignMessage>,
    /// A decision is in flight.
    pub loading: bool,
    /// The request has not been loaded from the background yet.
    pub initializing: bool,
    /// A decision has been dispatched, whether or not it finished.
    pub requested: bool,
    pub status: RequestStatus,
}

impl SigningSnapshot {
    pub fn has_actionable_message(&self) -> bool {
        self.message.as_ref().is_some_and(|m| !m.is_empty())
    }
}

type ChainDetected = Box<dyn FnMut(&ChainId)>;

pub struct Signature<P: SigningPort> {
    port: P,
    index: RequestIndex,
    request: Option<SignRequest>,
    status: RequestStatus,
    on_chain_detected: ChainDetected,
    closed: bool,
}

impl<P: SigningPort> Signature<P> {
    /// Opens a session and makes a first attempt at loading the request.
    pub fn open(
        port: P,
        index: RequestIndex,
        on_chain_detected: impl FnMut(&ChainId) + 'static,
    ) -> Self {
        let mut session = Self {
            port,
            index,
            request: None,
            status: RequestStatus::Initializing,
            on_chain_detected: Box::new(on_chain_detected),
            closed: false,
        };
        if let Err(e) = session.refresh() {
            tracing::warn!(index = %session.index, error = %e, "initial sign request load failed");
        }
        session
    }

    pub fn index(&self) -> &RequestIndex {
        &self.index
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn request(&self) -> Option<&SignRequest> {
        self.request.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Polls the background while the request is still initializing.
    pub fn refresh(&mut self) -> Result<(), PortError> {
        if self.closed || self.status != RequestStatus::Initializing {
            return Ok(());
        }
        let Some(request) = self.port.load_request(&self.index)? else {
            tracing::debug!(index = %self.index, "sign request not available yet");
            return Ok(());
        };
        let (status, transition) = request_transition(&self.status, RequestAction::Loaded)?;
        tracing::debug!(
            index = %self.index,
            from = %transition.from,
            to = %transition.to,
            "sign request loaded"
        );
        (self.on_chain_detected)(&request.chain_id);
        self.request = Some(request);
        self.status = status;
        Ok(())
    }

    pub fn snapshot(&self) -> SigningSnapshot {
        SigningSnapshot {
            index: self.index.clone(),
            message: self.request.as_ref().and_then(|r| r.message.clone()),
            loading: self.status.is_resolving(),
            initializing: self.status == RequestStatus::Initializing,
            requested: self.status.is_resolving() || self.status.is_resolved(),
            status: self.status.clone(),
        }
    }

    pub fn approve(&mut self) -> Result<(), SignError> {
        self.decide(Decision::Approve)
    }

    pub fn reject(&mut self) -> Result<(), SignError> {
        self.decide(Decision::Reject)
    }

    /// Stops observing the request. When `reject_pending` is set and the
    /// request can still be decided, it is rejected first.
    ///
    /// Returns `None` if no reject was attempted.
    pub fn close(&mut self, reject_pending: bool) -> Option<Result<(), SignError>> {
        if self.closed {
            return None;
        }
        let outcome = if reject_pending && self.status.is_decidable() {
            Some(self.reject())
        } else {
            None
        };
        self.closed = true;
        tracing::debug!(index = %self.index, status = %self.status, "sign session closed");
        outcome
    }

    fn decide(&mut self, decision: Decision) -> Result<(), SignError> {
        if self.closed {
            return Err(SignError::Closed(self.index.clone()));
        }
        match self.status {
            RequestStatus::Initializing => return Err(SignError::NotReady(self.index.clone())),
            RequestStatus::Resolving(_) | RequestStatus::Resolved(_) => {
                return Err(SignError::AlreadyResolved(self.index.clone()))
            }
            RequestStatus::Ready | RequestStatus::Failed { .. } => {}
        }

        let (resolving, _) = request_transition(&self.status, RequestAction::Dispatch(decision))?;
        self.status = resolving;

        let result = match decision {
            Decision::Approve => self.port.approve(&self.index),
            Decision::Reject => self.port.reject(&self.index),
        };

        match result {
            Ok(()) => {
                let (resolved, transition) =
                    request_transition(&self.status, RequestAction::Succeed)?;
                tracing::info!(
                    index = %self.index,
                    %decision,
                    from = %transition.from,
                    to = %transition.to,
                    "sign request resolved"
                );
                self.status = resolved;
                Ok(())
            }
            Err(e) => {
                let (failed, _) =
                    request_transition(&self.status, RequestAction::Fail(e.to_string()))?;
                tracing::warn!(index = %self.index, %decision, error = %e, "sign decision failed");
                self.status = failed;
                Err(SignError::Port(e))
            }
        }
    }
}
