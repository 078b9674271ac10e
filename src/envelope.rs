//! # Response Envelope Decoding
//!
//! Parses a raw service response (HTTP status + body) into either a
//! [`SensorData`] page or a typed failure. Decoding is pure: no I/O, no state.
//!
//! The service uses two envelope shapes:
//!
//! - Success: `{ "sensorData": [ ... ] | null, "next": "<cursor>" | null }`.
//!   A null `sensorData` means the query matched zero rows — not an empty first
//!   page with more to come.
//! - Error: `{ "errors": [ { "errorCode": <int>, "errorMessage": <string> } ] }`,
//!   carried on a 4xx/5xx status and classified via
//!   [`ApiError::classify`](crate::error::ApiError::classify).
//!
//! Anything that fits neither shape is a protocol violation and fails with
//! [`ClientError::MalformedResponse`].

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ClientError};

/// One decoded response page, and also the shape of the final merged result.
///
/// After pagination completes, `next` is always `None` and each sensor's
/// sequences hold the concatenation of that sensor's rows across all fetched
/// pages, in page-arrival order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorData {
    /// Per-sensor records; `None` when the query matched zero rows
    #[serde(rename = "sensorData")]
    pub sensor_data: Option<Vec<SensorRecord>>,
    /// Opaque cursor for the next page; `None` when no page follows
    pub next: Option<String>,
}

/// Time-series rows for a single sensor of the queried device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    /// Sensor identifier within the device
    #[serde(rename = "sensorId")]
    pub sensor_id: String,
    /// Ordered rows for this sensor
    pub data: DataBlock,
}

/// The ordered row data of one sensor: parallel sequences of sample timestamps,
/// readings, and (when the service provides them) QA/QC flags.
///
/// Row order within and across pages is owned entirely by the service; the client
/// never sorts or deduplicates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataBlock {
    /// ISO-8601 sample timestamps, one per row
    #[serde(rename = "sampleTimes")]
    pub sample_times: Vec<String>,
    /// Sensor readings, one per row
    pub values: Vec<f64>,
    /// QA/QC flags, one per row; omitted by some endpoints
    #[serde(rename = "qaqcFlags", default, skip_serializing_if = "Option::is_none")]
    pub qaqc_flags: Option<Vec<i64>>,
}

impl DataBlock {
    /// Append another block's rows after this block's rows.
    ///
    /// Used by the paginator: page N+1 rows land after page N rows, order
    /// preserved. Flags are concatenated when both blocks carry them; a block
    /// that first introduces flags keeps them as-is.
    pub(crate) fn extend(&mut self, other: DataBlock) {
        self.sample_times.extend(other.sample_times);
        self.values.extend(other.values);
        match (&mut self.qaqc_flags, other.qaqc_flags) {
            (Some(existing), Some(incoming)) => existing.extend(incoming),
            (slot @ None, Some(incoming)) => *slot = Some(incoming),
            (_, None) => {}
        }
    }

    /// Number of rows in this block.
    pub fn row_count(&self) -> usize {
        self.values.len()
    }
}

/// Wire shape of the service's error envelope.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(rename = "errorCode")]
    error_code: i64,
    #[serde(rename = "errorMessage")]
    error_message: String,
}

/// Decode a raw response into a sensor-data page or a typed failure.
///
/// - 4xx/5xx with a parseable error envelope → the classified [`ApiError`]
/// - 4xx/5xx with an unparseable body → [`ClientError::MalformedResponse`]
/// - 2xx with a parseable success envelope → `Ok(SensorData)`
/// - 2xx with missing or mistyped fields → [`ClientError::MalformedResponse`]
pub fn decode_envelope(status: u16, body: &str) -> Result<SensorData, ClientError> {
    if status >= 400 {
        let envelope: ErrorEnvelope = serde_json::from_str(body).map_err(|err| {
            ClientError::MalformedResponse(format!(
                "HTTP {} carried an undecodable error body: {}",
                status, err
            ))
        })?;
        let first = envelope.errors.into_iter().next().ok_or_else(|| {
            ClientError::MalformedResponse(format!(
                "HTTP {} carried an empty errors list",
                status
            ))
        })?;
        return Err(ApiError::new(first.error_code, first.error_message, status).classify());
    }

    serde_json::from_str(body).map_err(|err| {
        ClientError::MalformedResponse(format!("undecodable sensor-data envelope: {}", err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_page_with_cursor() {
        let body = r#"{
            "sensorData": [
                {
                    "sensorId": "pressure_sensor1",
                    "data": {
                        "sampleTimes": ["2019-11-23T00:00:00.000Z", "2019-11-23T00:00:01.000Z"],
                        "values": [655.186, 655.184],
                        "qaqcFlags": [1, 1]
                    }
                }
            ],
            "next": "opaque-page-2"
        }"#;

        let page = decode_envelope(200, body).unwrap();
        assert_eq!(page.next.as_deref(), Some("opaque-page-2"));
        let records = page.sensor_data.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sensor_id, "pressure_sensor1");
        assert_eq!(records[0].data.row_count(), 2);
        assert_eq!(records[0].data.qaqc_flags, Some(vec![1, 1]));
    }

    #[test]
    fn decodes_zero_row_page() {
        let page = decode_envelope(200, r#"{"sensorData": null, "next": null}"#).unwrap();
        assert!(page.sensor_data.is_none());
        assert!(page.next.is_none());
    }

    #[test]
    fn decodes_page_without_qaqc_flags() {
        let body = r#"{
            "sensorData": [
                {"sensorId": "temp1", "data": {"sampleTimes": ["2019-11-23T00:00:00.000Z"], "values": [4.2]}}
            ],
            "next": null
        }"#;
        let page = decode_envelope(200, body).unwrap();
        assert!(page.sensor_data.unwrap()[0].data.qaqc_flags.is_none());
    }

    #[test]
    fn error_envelope_is_classified() {
        let body = r#"{"errors": [{"errorCode": 127, "errorMessage": "unrecognized deviceCode"}]}"#;
        let err = decode_envelope(400, body).unwrap_err();
        assert!(matches!(err, ClientError::InvalidParameterValue(_)));
    }

    #[test]
    fn first_error_wins_when_several_are_reported() {
        let body = r#"{"errors": [
            {"errorCode": 129, "errorMessage": "unknown parameter deviceCodes"},
            {"errorCode": 127, "errorMessage": "unrecognized deviceCode"}
        ]}"#;
        let err = decode_envelope(400, body).unwrap_err();
        assert!(matches!(err, ClientError::InvalidParameterName(_)));
    }

    #[test]
    fn unparseable_error_body_is_malformed() {
        let err = decode_envelope(500, "<html>Service Unavailable</html>").unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn empty_errors_list_is_malformed() {
        let err = decode_envelope(400, r#"{"errors": []}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn mistyped_success_body_is_malformed() {
        // sensorData must be a list of records, not a bare number
        let err = decode_envelope(200, r#"{"sensorData": 42, "next": null}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn extend_appends_rows_in_order() {
        let mut first = DataBlock {
            sample_times: vec!["t0".into(), "t1".into()],
            values: vec![1.0, 2.0],
            qaqc_flags: Some(vec![1, 1]),
        };
        first.extend(DataBlock {
            sample_times: vec!["t2".into()],
            values: vec![3.0],
            qaqc_flags: Some(vec![4]),
        });

        assert_eq!(first.sample_times, vec!["t0", "t1", "t2"]);
        assert_eq!(first.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(first.qaqc_flags, Some(vec![1, 1, 4]));
    }
}
