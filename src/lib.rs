//! # Ocean Sensor Client Core Library
//!
//! This library is a client for a remote oceanographic-sensor data service. Callers
//! request time-series readings for a specific instrument, identified by a device
//! code and a date range, and receive structured per-sensor data. Large result sets
//! are paginated by the service; the client fetches a single page or, on request,
//! walks every page and concatenates them into one logical result.
//!
//! ## Data Flow
//!
//! 1. **Request**: caller builds a [`RequestParameters`] map (`deviceCode`,
//!    `dateFrom`, `dateTo`, `rowLimit`, ...)
//! 2. **Fetch**: [`Requester`] issues the HTTP request through a [`Transport`]
//! 3. **Decode**: the response envelope is parsed into a [`SensorData`] page or a
//!    typed service error
//! 4. **Paginate**: while the page carries a `next` cursor and all pages were
//!    requested, follow-up requests are issued and merged per sensor
//! 5. **Return**: the merged result, with `next` fully resolved to `None`
//!
//! ## Error Handling
//!
//! All failure modes surface as [`ClientError`]. Service-reported errors keep their
//! original numeric code and message; parameter problems map to dedicated variants
//! callers can match on. The core never retries — a failure on any page fails the
//! whole call, and partial results are never returned as success.
//!
//! ## Concurrency
//!
//! A single call is strictly sequential (cursor N+1 is only known after page N
//! resolves) and owns all of its state. A [`Requester`] can be shared across
//! concurrent calls; its configuration is read-only after construction. Dropping
//! the returned future between page fetches aborts the pagination loop at the next
//! transport await point.

// Module declarations
pub mod config;
pub mod envelope;
pub mod error;
pub mod paginator;
pub mod params;
pub mod requester;
pub mod transport;

pub use envelope::{DataBlock, SensorData, SensorRecord};
pub use error::{ApiError, ClientError};
pub use params::{ParamValue, RequestParameters};
pub use requester::Requester;
pub use transport::{HttpTransport, RawResponse, Route, Transport};
