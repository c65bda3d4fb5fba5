//! Controller for the sign popup page.
//!
//! The page owns tab selection, forwards approve/reject to its [`Signature`]
//! session, and carries the two cleanup guards that keep an external caller
//! from waiting on an abandoned request:
//!
//! - the unload guard, armed while mounted, rejects when the window goes away;
//! - the identity guard rejects the prior request when the page switches to a
//!   new index or is torn down.
//!
//! Both only reject requests that are still decidable, so a request the user
//! already approved or rejected is never rejected again.

use crate::domain::{ChainId, Decision, RequestIndex, RequestOrigin};
use crate::ports::{ChainStorePort, SigningPort, WindowPort};
use crate::render::{render_data, render_details, DetailsBody};
use crate::route::SignRoute;
use crate::signature::{SignError, Signature, SigningSnapshot};
use crate::state_machine::RequestStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Details,
    Data,
}

#[derive(Debug, Clone)]
pub struct PageOptions {
    pub raw_data_max_bytes: usize,
    pub close_on_external_decision: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            raw_data_max_bytes: 64 * 1024,
            close_on_external_decision: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabBody {
    Details(DetailsBody),
    Data(String),
}

/// Everything the shell needs to draw one frame of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SignPageView {
    pub show_back_button: bool,
    pub chain_name: Option<String>,
    pub origin: Option<RequestOrigin>,
    pub tab: Tab,
    pub body: TabBody,
    pub approve_enabled: bool,
    pub reject_enabled: bool,
    pub buttons_loading: bool,
    pub status: RequestStatus,
    pub error: Option<String>,
    pub info: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionOutcome {
    pub decision: Decision,
    pub window_closed: bool,
}

pub struct SignPage<S, C, W>
where
    S: SigningPort + Clone + 'static,
    C: ChainStorePort + Clone + 'static,
    W: WindowPort,
{
    route: SignRoute,
    tab: Tab,
    signing: Signature<S>,
    signing_port: S,
    chain_store: C,
    window: W,
    options: PageOptions,
    unload_guard_armed: bool,
    mounted: bool,
    last_error: Option<String>,
    last_info: Option<String>,
}

impl<S, C, W> SignPage<S, C, W>
where
    S: SigningPort + Clone + 'static,
    C: ChainStorePort + Clone + 'static,
    W: WindowPort,
{
    pub fn mount(
        route: SignRoute,
        signing_port: S,
        chain_store: C,
        window: W,
        options: PageOptions,
    ) -> Self {
        tracing::info!(index = %route.index, external = route.external, "mounting sign page");
        let signing = open_session(&signing_port, &chain_store, route.index.clone());
        Self {
            route,
            tab: Tab::Details,
            signing,
            signing_port,
            chain_store,
            window,
            options,
            unload_guard_armed: true,
            mounted: true,
            last_error: None,
            last_info: None,
        }
    }

    pub fn route(&self) -> &SignRoute {
        &self.route
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn snapshot(&self) -> SigningSnapshot {
        self.signing.snapshot()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            tracing::debug!(?tab, "sign page tab switched");
            self.tab = tab;
        }
    }

    pub fn refresh(&mut self) {
        if let Err(e) = self.signing.refresh() {
            tracing::warn!(index = %self.route.index, error = %e, "sign request refresh failed");
            self.set_error(e.to_string());
        }
    }

    pub fn actions_enabled(&self) -> bool {
        let snapshot = self.signing.snapshot();
        snapshot.has_actionable_message()
            && !snapshot.initializing
            && snapshot.status.is_decidable()
    }

    pub fn approve(&mut self) -> Result<DecisionOutcome, SignError> {
        self.decide(Decision::Approve)
    }

    pub fn reject(&mut self) -> Result<DecisionOutcome, SignError> {
        self.decide(Decision::Reject)
    }

    /// Returns `false` when the page was opened by an injected provider; those
    /// popups have nowhere to go back to.
    pub fn go_back(&mut self) -> bool {
        if self.route.external {
            return false;
        }
        if let Err(e) = self.window.go_back() {
            tracing::warn!(error = %e, "back navigation failed");
            self.set_error(e.to_string());
        }
        true
    }

    /// Window unload hook. Returns whether a reject was dispatched.
    pub fn on_unload(&mut self) -> bool {
        if !self.unload_guard_armed {
            return false;
        }
        self.unload_guard_armed = false;
        let snapshot = self.signing.snapshot();
        let reject = self.route.external && !snapshot.loading;
        self.close_session(reject, "unload")
    }

    /// Moves the page to another request, rejecting the prior one first when
    /// the page is external and the prior request is still pending.
    pub fn switch_request(&mut self, index: RequestIndex) {
        if !self.mounted || self.signing.index() == &index {
            return;
        }
        self.close_session(self.route.external, "request switched");
        tracing::info!(from = %self.route.index, to = %index, "sign page switched request");
        self.route.index = index.clone();
        self.signing = open_session(&self.signing_port, &self.chain_store, index);
        self.unload_guard_armed = true;
        self.clear_notice();
    }

    pub fn unmount(mut self) {
        self.teardown();
    }

    pub fn view(&self) -> SignPageView {
        let snapshot = self.signing.snapshot();
        let message = snapshot.message.as_ref();
        let body = match self.tab {
            Tab::Details if snapshot.initializing => TabBody::Details(DetailsBody::Loading),
            Tab::Details => TabBody::Details(render_details(message)),
            Tab::Data => TabBody::Data(render_data(message, self.options.raw_data_max_bytes)),
        };
        let enabled = self.actions_enabled();
        let chain_name = match self.chain_store.current_chain() {
            Ok(chain) => chain.map(|c| c.chain_name),
            Err(e) => {
                tracing::debug!(error = %e, "chain store lookup failed");
                None
            }
        };
        SignPageView {
            show_back_button: !self.route.external,
            chain_name,
            origin: self.signing.request().map(|r| r.origin.clone()),
            tab: self.tab,
            body,
            approve_enabled: enabled,
            reject_enabled: enabled,
            buttons_loading: snapshot.requested,
            status: snapshot.status,
            error: self.last_error.clone(),
            info: self.last_info.clone(),
        }
    }

    fn decide(&mut self, decision: Decision) -> Result<DecisionOutcome, SignError> {
        if !self.actions_enabled() {
            return Err(SignError::NotReady(self.route.index.clone()));
        }
        let result = match decision {
            Decision::Approve => self.signing.approve(),
            Decision::Reject => self.signing.reject(),
        };
        if let Err(e) = result {
            self.set_error(format!("{decision} failed: {e}"));
            return Err(e);
        }
        self.clear_notice();

        let mut window_closed = false;
        if self.route.external && self.options.close_on_external_decision {
            match self.window.close() {
                Ok(()) => window_closed = true,
                Err(e) => {
                    tracing::warn!(error = %e, "closing popup window failed");
                    self.set_error(format!("could not close window: {e}"));
                }
            }
        }
        if !window_closed && self.last_error.is_none() {
            self.set_info(match decision {
                Decision::Approve => "Request approved",
                Decision::Reject => "Request rejected",
            });
        }
        Ok(DecisionOutcome {
            decision,
            window_closed,
        })
    }

    fn close_session(&mut self, reject_pending: bool, cause: &str) -> bool {
        match self.signing.close(reject_pending) {
            Some(Ok(())) => {
                tracing::info!(index = %self.signing.index(), cause, "pending sign request rejected");
                true
            }
            Some(Err(e)) => {
                tracing::warn!(
                    index = %self.signing.index(),
                    cause,
                    error = %e,
                    "rejecting pending sign request failed"
                );
                true
            }
            None => false,
        }
    }

    fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.unload_guard_armed = false;
        self.close_session(self.route.external, "unmount");
        tracing::debug!(index = %self.route.index, "sign page unmounted");
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.last_info = None;
        self.last_error = Some(message.into());
    }

    fn set_info(&mut self, message: impl Into<String>) {
        self.last_error = None;
        self.last_info = Some(message.into());
    }

    fn clear_notice(&mut self) {
        self.last_error = None;
        self.last_info = None;
    }
}

impl<S, C, W> Drop for SignPage<S, C, W>
where
    S: SigningPort + Clone + 'static,
    C: ChainStorePort + Clone + 'static,
    W: WindowPort,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

fn open_session<S, C>(signing_port: &S, chain_store: &C, index: RequestIndex) -> Signature<S>
where
    S: SigningPort + Clone + 'static,
    C: ChainStorePort + Clone + 'static,
{
    let chain_store = chain_store.clone();
    Signature::open(signing_port.clone(), index, move |chain_id: &ChainId| {
        if let Err(e) = chain_store.set_chain(chain_id) {
            tracing::warn!(%chain_id, error = %e, "chain store rejected detected chain");
        }
    })
}
