//! # Request Parameter Mapping
//!
//! Caller-supplied query parameters for the sensor-data service, kept as an
//! immutable name → value mapping. The service owns parameter semantics: every
//! entry is forwarded verbatim, and unknown keys pass through untouched. The only
//! parameter the client ever adds is the internal pagination cursor, and that is
//! injected on a clone — the caller's mapping is never mutated.
//!
//! Commonly used keys:
//! - `deviceCode` — target instrument (device-routed queries)
//! - `locationCode`, `deviceCategoryCode` — location-routed queries
//! - `dateFrom`, `dateTo` — ISO-8601 range, boundary semantics owned by the service
//! - `rowLimit` — maximum rows per page; the service decides the paging boundary

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// Query parameter the pagination loop injects on follow-up requests.
///
/// Internal only: it never appears in a caller-built [`RequestParameters`] and is
/// never echoed back in results.
pub(crate) const CURSOR_PARAM: &str = "cursor";

/// A single typed parameter value.
///
/// Values render to the wire format the service expects: strings verbatim, numbers
/// in their canonical decimal form, timestamps as UTC ISO-8601 with millisecond
/// precision (e.g. `2019-11-23T00:00:00.000Z`).
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// String parameter (device codes, opaque cursors, preformatted dates)
    Str(String),
    /// Integer parameter (e.g. `rowLimit`)
    Int(i64),
    /// Floating-point parameter
    Float(f64),
    /// Timestamp parameter, formatted as UTC ISO-8601 on the wire
    Date(DateTime<Utc>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Date(ts) => {
                f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        ParamValue::Date(value)
    }
}

/// Immutable mapping from parameter name to value.
///
/// Built once by the caller and shared by reference through the whole call. Keys
/// are kept sorted (BTreeMap) so the rendered query string is deterministic, which
/// makes repeated identical requests byte-identical on the wire.
///
/// # Example
/// ```
/// use ocean_sensor_lib::RequestParameters;
///
/// let params = RequestParameters::new()
///     .with("deviceCode", "BPR-Folger-59")
///     .with("dateFrom", "2019-11-23T00:00:00.000Z")
///     .with("dateTo", "2019-11-26T00:00:00.000Z")
///     .with("rowLimit", 100i64);
///
/// assert_eq!(params.len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestParameters {
    entries: BTreeMap<String, ParamValue>,
}

impl RequestParameters {
    /// Create an empty parameter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this mapping with one additional entry.
    ///
    /// Builder-style; the original is consumed, so chained `with` calls do not
    /// clone intermediate maps.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.get(name)
    }

    /// Number of entries in the mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no parameters have been set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the mapping as wire-format `(name, value)` pairs in key order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect()
    }

    /// Clone this mapping and inject the pagination cursor.
    ///
    /// Used by the paginator for follow-up requests; the caller's mapping is left
    /// untouched.
    pub(crate) fn with_cursor(&self, cursor: &str) -> Self {
        self.clone().with(CURSOR_PARAM, cursor)
    }
}
