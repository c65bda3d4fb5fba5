use std::fmt;

use crate::domain::Decision;
use crate::ports::PortError;

/// Lifecycle of one sign request as seen by the popup.
///
/// Decisions can only be dispatched from `Ready` or `Failed`, so once a
/// request is `Resolved` a second approve/reject has nowhere to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Initializing,
    Ready,
    Resolving(Decision),
    Resolved(Decision),
    Failed { decision: Decision, reason: String },
}

impl RequestStatus {
    pub fn is_decidable(&self) -> bool {
        matches!(self, RequestStatus::Ready | RequestStatus::Failed { .. })
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self, RequestStatus::Resolving(_))
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, RequestStatus::Resolved(_))
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Initializing => f.write_str("Initializing"),
            RequestStatus::Ready => f.write_str("Ready"),
            RequestStatus::Resolving(d) => write!(f, "Resolving({d})"),
            RequestStatus::Resolved(d) => write!(f, "Resolved({d})"),
            RequestStatus::Failed { decision, .. } => write!(f, "Failed({decision})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestAction {
    Loaded,
    Dispatch(Decision),
    Succeed,
    Fail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: String,
    pub to: String,
    pub reason: &'static str,
}

pub fn request_transition(
    status: &RequestStatus,
    action: RequestAction,
) -> Result<(RequestStatus, StateTransition), PortError> {
    let (next, reason) = match (status, &action) {
        (RequestStatus::Initializing, RequestAction::Loaded) => {
            (RequestStatus::Ready, "request_loaded")
        }
        (RequestStatus::Ready | RequestStatus::Failed { .. }, RequestAction::Dispatch(d)) => {
            (RequestStatus::Resolving(*d), "decision_dispatched")
        }
        (RequestStatus::Resolving(d), RequestAction::Succeed) => {
            (RequestStatus::Resolved(*d), "decision_succeeded")
        }
        (RequestStatus::Resolving(d), RequestAction::Fail(reason)) => (
            RequestStatus::Failed {
                decision: *d,
                reason: reason.clone(),
            },
            "decision_failed",
        ),
        _ => {
            return Err(PortError::Validation(format!(
                "illegal request transition: {status} --{action:?}-->"
            )))
        }
    };
    let transition = StateTransition {
        from: status.to_string(),
        to: next.to_string(),
        reason,
    };
    Ok((next, transition))
}
