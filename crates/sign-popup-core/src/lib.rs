pub mod domain;
pub mod page;
pub mod ports;
pub mod render;
pub mod route;
pub mod signature;
pub mod state_machine;

pub use domain::{
    ChainId, ChainInfo, Decision, RequestIndex, RequestOrigin, SignMessage, SignRequest,
    TimestampMs,
};
pub use page::{DecisionOutcome, PageOptions, SignPage, SignPageView, Tab, TabBody};
pub use ports::{ChainStorePort, ClockPort, PortError, SigningPort, WindowPort};
pub use render::{
    render_data, render_details, sign_bytes, sign_doc_digest, DetailsBody, MsgSummary,
    SignDocDetails,
};
pub use route::{RouteError, SignRoute};
pub use signature::{SignError, Signature, SigningSnapshot};
pub use state_machine::{request_transition, RequestAction, RequestStatus, StateTransition};
