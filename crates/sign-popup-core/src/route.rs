use thiserror::Error;
use url::Url;

use crate::domain::RequestIndex;

const ROUTE_BASE: &str = "popup://popup/";

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid location: {0}")]
    InvalidLocation(#[from] url::ParseError),
    #[error("not a sign route: {0}")]
    NotSignRoute(String),
    #[error("sign route is missing a request index")]
    MissingIndex,
}

/// Parsed `/sign/{index}?external=…` location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRoute {
    pub index: RequestIndex,
    /// Set when an injected provider opened the popup rather than in-app
    /// navigation.
    pub external: bool,
}

impl SignRoute {
    pub fn new(index: RequestIndex, external: bool) -> Self {
        Self { index, external }
    }

    /// Accepts a path (`/sign/3?external=true`), a hash route
    /// (`popup.html#/sign/3`) or a full URL.
    pub fn parse(location: &str) -> Result<Self, RouteError> {
        // Only a fragment holding a path is a hash route; `#top` is an anchor.
        let location = match location.split_once('#') {
            Some((_, fragment)) if fragment.starts_with('/') => fragment,
            _ => location,
        };
        let url = Url::parse(ROUTE_BASE)?.join(location)?;

        let mut segments = url
            .path_segments()
            .ok_or_else(|| RouteError::NotSignRoute(location.to_owned()))?
            .filter(|s| !s.is_empty());
        if segments.next() != Some("sign") {
            return Err(RouteError::NotSignRoute(location.to_owned()));
        }
        let index = segments.next().ok_or(RouteError::MissingIndex)?;
        if segments.next().is_some() {
            return Err(RouteError::NotSignRoute(location.to_owned()));
        }

        let external = url
            .query_pairs()
            .find(|(key, _)| key == "external")
            .map(|(_, value)| is_truthy(&value))
            .unwrap_or(false);

        Ok(Self {
            index: RequestIndex::new(index),
            external,
        })
    }

    pub fn to_location(&self) -> String {
        if self.external {
            format!("/sign/{}?external=true", self.index)
        } else {
            format!("/sign/{}", self.index)
        }
    }
}

// A bare `?external` or `?external=` carries no value and reads as unset.
fn is_truthy(value: &str) -> bool {
    !matches!(
        value.to_ascii_lowercase().as_str(),
        "" | "false" | "0" | "no" | "off"
    )
}
