use thiserror::Error;

use crate::domain::{ChainId, ChainInfo, RequestIndex, SignRequest};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("port not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("policy error: {0}")]
    Policy(String),
}

/// Background process that owns the queue of pending sign requests.
pub trait SigningPort {
    fn load_request(&self, index: &RequestIndex) -> Result<Option<SignRequest>, PortError>;
    fn approve(&self, index: &RequestIndex) -> Result<(), PortError>;
    fn reject(&self, index: &RequestIndex) -> Result<(), PortError>;
}

pub trait ChainStorePort {
    fn set_chain(&self, chain_id: &ChainId) -> Result<(), PortError>;
    fn current_chain(&self) -> Result<Option<ChainInfo>, PortError>;
}

/// The popup window hosting the page.
pub trait WindowPort {
    fn close(&self) -> Result<(), PortError>;
    fn go_back(&self) -> Result<(), PortError>;
}

pub trait ClockPort {
    fn now_ms(&self) -> Result<u64, PortError>;
}

impl<T: SigningPort + ?Sized> SigningPort for &T {
    fn load_request(&self, index: &RequestIndex) -> Result<Option<SignRequest>, PortError> {
        (**self).load_request(index)
    }

    fn approve(&self, index: &RequestIndex) -> Result<(), PortError> {
        (**self).approve(index)
    }

    fn reject(&self, index: &RequestIndex) -> Result<(), PortError> {
        (**self).reject(index)
    }
}

impl<T: ChainStorePort + ?Sized> ChainStorePort for &T {
    fn set_chain(&self, chain_id: &ChainId) -> Result<(), PortError> {
        (**self).set_chain(chain_id)
    }

    fn current_chain(&self) -> Result<Option<ChainInfo>, PortError> {
        (**self).current_chain()
    }
}

impl<T: WindowPort + ?Sized> WindowPort for &T {
    fn close(&self) -> Result<(), PortError> {
        (**self).close()
    }

    fn go_back(&self) -> Result<(), PortError> {
        (**self).go_back()
    }
}
