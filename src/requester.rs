//! # Requester Facade
//!
//! The public entry point of the client. A [`Requester`] owns a transport and an
//! optional pagination cap, and exposes one fetch operation per service route.
//! It orchestrates only: parameter validity is determined entirely server-side,
//! and every failure kind surfaces unchanged from the layers below.

use crate::config::ApiConfig;
use crate::envelope::SensorData;
use crate::error::ClientError;
use crate::paginator;
use crate::params::RequestParameters;
use crate::transport::{HttpTransport, Route, Transport};

/// Client facade over a [`Transport`].
///
/// Construction is cheap; a single instance can be shared by reference across
/// concurrent calls because all of its state is read-only after construction and
/// every call owns its own accumulator.
///
/// # Example
/// ```no_run
/// use ocean_sensor_lib::config::ApiConfig;
/// use ocean_sensor_lib::{Requester, RequestParameters};
///
/// # async fn run() -> Result<(), ocean_sensor_lib::ClientError> {
/// let config = ApiConfig {
///     base_url: "https://data.oceannetworks.ca/api".to_string(),
///     token: "YOUR_TOKEN".to_string(),
///     timeout_seconds: 60,
/// };
/// let requester = Requester::new(&config)?;
///
/// let params = RequestParameters::new()
///     .with("deviceCode", "BPR-Folger-59")
///     .with("dateFrom", "2019-11-23T00:00:00.000Z")
///     .with("dateTo", "2019-11-26T00:00:00.000Z")
///     .with("rowLimit", 100i64);
///
/// let data = requester.get_direct_by_device(&params, true).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Requester<T: Transport> {
    transport: T,
    max_pages: Option<u32>,
}

impl Requester<HttpTransport> {
    /// Build a requester over the production HTTP transport.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> Requester<T> {
    /// Build a requester over an arbitrary transport (used by tests to script
    /// responses without a network).
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            max_pages: None,
        }
    }

    /// Cap the number of pages an all-pages call may fetch.
    ///
    /// Off by default: the service is trusted to eventually return a null
    /// cursor. With a cap set, exceeding it fails the call with
    /// [`ClientError::PaginationLimitExceeded`] and no partial result.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Fetch scalar sensor data for a device code.
    ///
    /// With `all_pages == false`, returns the first page as-is (`next` tells the
    /// caller whether more data exists). With `all_pages == true`, walks every
    /// page and returns the merged result with `next == None`.
    pub async fn get_direct_by_device(
        &self,
        params: &RequestParameters,
        all_pages: bool,
    ) -> Result<SensorData, ClientError> {
        paginator::fetch(
            &self.transport,
            Route::ScalarByDevice,
            params,
            all_pages,
            self.max_pages,
        )
        .await
    }

    /// Fetch scalar sensor data for a location and device category.
    ///
    /// Same pagination and merge behavior as [`get_direct_by_device`], routed to
    /// the location endpoint (`locationCode` + `deviceCategoryCode` parameters).
    ///
    /// [`get_direct_by_device`]: Requester::get_direct_by_device
    pub async fn get_direct_by_location(
        &self,
        params: &RequestParameters,
        all_pages: bool,
    ) -> Result<SensorData, ClientError> {
        paginator::fetch(
            &self.transport,
            Route::ScalarByLocation,
            params,
            all_pages,
            self.max_pages,
        )
        .await
    }
}
