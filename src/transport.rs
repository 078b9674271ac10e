//! # Service Transport
//!
//! The [`Transport`] trait is the seam between the pagination core and the
//! network: it issues one request for one parameter mapping and hands back the
//! raw status and body. Everything above it (envelope decoding, error
//! translation, pagination) is pure, which keeps the core testable with a
//! scripted transport and no network.
//!
//! [`HttpTransport`] is the production implementation on reqwest. It appends the
//! configured API token as a query parameter and otherwise forwards the caller's
//! parameters verbatim. It does not retry, does not refresh tokens, and does not
//! interpret the response — failures below HTTP (DNS, TLS, timeouts) surface as
//! [`ClientError::Transport`] unchanged.

use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::params::RequestParameters;

/// Service endpoint the request is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Scalar time-series by device code (`scalardata/device`)
    ScalarByDevice,
    /// Scalar time-series by location and device category (`scalardata/location`)
    ScalarByLocation,
}

impl Route {
    /// Path of this route below the service base URL.
    pub fn path(self) -> &'static str {
        match self {
            Route::ScalarByDevice => "scalardata/device",
            Route::ScalarByLocation => "scalardata/location",
        }
    }
}

/// Raw response from one transport call: HTTP status plus unparsed body.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, undecoded
    pub body: String,
}

/// One request against the service for a given route and parameter mapping.
///
/// Implementations must not mutate the parameter mapping and must return the
/// body even for 4xx/5xx statuses — the envelope decoder needs the error body.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issue a single request and return the raw response.
    async fn send(
        &self,
        route: Route,
        params: &RequestParameters,
    ) -> Result<RawResponse, ClientError>;
}

/// Production transport over HTTPS.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpTransport {
    /// Build a transport from the endpoint configuration.
    ///
    /// The request timeout covers the whole exchange; the service can be slow on
    /// large `rowLimit` values, so the configured value should be generous.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url_for(&self, route: Route) -> String {
        format!("{}/{}", self.base_url, route.path())
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        route: Route,
        params: &RequestParameters,
    ) -> Result<RawResponse, ClientError> {
        let mut query = params.to_query();
        query.push(("token".to_string(), self.token.clone()));

        let response = self
            .client
            .get(self.url_for(route))
            .query(&query)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(Route::ScalarByDevice.path(), "scalardata/device");
        assert_eq!(Route::ScalarByLocation.path(), "scalardata/location");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let config = ApiConfig {
            base_url: "https://example.invalid/api/".to_string(),
            token: "TOKEN".to_string(),
            timeout_seconds: 10,
        };
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(
            transport.url_for(Route::ScalarByDevice),
            "https://example.invalid/api/scalardata/device"
        );
    }
}
