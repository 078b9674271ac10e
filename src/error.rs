//! # Error Taxonomy and Service-Error Translation
//!
//! Every failure mode of the client surfaces through the [`ClientError`] enum so
//! callers can pattern-match on kind. Service-reported errors arrive as a numeric
//! code plus message ([`ApiError`]) and are translated into a dedicated variant:
//!
//! | service code | meaning                              | variant                  |
//! |--------------|--------------------------------------|--------------------------|
//! | 127          | parameter value rejected             | `InvalidParameterValue`  |
//! | 129          | parameter name not recognized        | `InvalidParameterName`   |
//! | other        | any other structured service error   | `ApiRequestRejected`     |
//!
//! Translation is a pure classification step: the original code, message, and HTTP
//! status are always preserved for diagnostics, and nothing is ever retried here.

use thiserror::Error;

/// Service code for a recognized parameter whose value was rejected
/// (e.g. an unknown device code).
pub const CODE_INVALID_PARAM_VALUE: i64 = 127;

/// Service code for a parameter name the service does not recognize.
pub const CODE_INVALID_PARAM_NAME: i64 = 129;

/// A structured error reported by the service.
///
/// Decoded from the error envelope of a failed response; immutable and terminal —
/// it is classified into a [`ClientError`] and surfaced to the caller unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// Numeric service error code (e.g. 127, 129)
    pub code: i64,
    /// Human-readable message from the service
    pub message: String,
    /// HTTP status that carried the error
    pub status: u16,
}

impl ApiError {
    /// Build a service error from its envelope fields.
    pub fn new(code: i64, message: impl Into<String>, status: u16) -> Self {
        Self {
            code,
            message: message.into(),
            status,
        }
    }

    /// Classify this service error into the caller-facing failure kind.
    pub fn classify(self) -> ClientError {
        match self.code {
            CODE_INVALID_PARAM_VALUE => ClientError::InvalidParameterValue(self),
            CODE_INVALID_PARAM_NAME => ClientError::InvalidParameterName(self),
            _ => ClientError::ApiRequestRejected(self),
        }
    }
}

/// Errors that can occur while fetching sensor data.
///
/// The first three variants are service-reported (classified by
/// [`ApiError::classify`]); the rest are protocol or transport failures originating
/// on the client side of the wire.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Recognized parameter, rejected value (API error 127, e.g. unknown device code)
    #[error("API error {}: invalid parameter value (HTTP {}): {}", .0.code, .0.status, .0.message)]
    InvalidParameterValue(ApiError),

    /// Parameter name not recognized by the service (API error 129)
    #[error("API error {}: invalid parameter name (HTTP {}): {}", .0.code, .0.status, .0.message)]
    InvalidParameterName(ApiError),

    /// Any other structured service error; carries the original code and message
    #[error("API error {}: request rejected (HTTP {}): {}", .0.code, .0.status, .0.message)]
    ApiRequestRejected(ApiError),

    /// Response body did not match the expected envelope shape.
    ///
    /// A protocol violation, not a service-reported error.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Network or HTTP-level failure, propagated unchanged from the transport
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Defensive pagination cap was hit before the service returned a null cursor
    #[error("pagination aborted: page limit of {0} exceeded")]
    PaginationLimitExceeded(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_127_maps_to_invalid_parameter_value() {
        let err = ApiError::new(127, "unrecognized deviceCode", 400).classify();
        match err {
            ClientError::InvalidParameterValue(api) => {
                assert_eq!(api.code, 127);
                assert_eq!(api.status, 400);
                assert_eq!(api.message, "unrecognized deviceCode");
            }
            other => panic!("expected InvalidParameterValue, got {:?}", other),
        }
    }

    #[test]
    fn code_129_maps_to_invalid_parameter_name() {
        let err = ApiError::new(129, "unknown parameter deviceCodes", 400).classify();
        assert!(matches!(err, ClientError::InvalidParameterName(_)));
    }

    #[test]
    fn other_codes_map_to_generic_rejection() {
        for code in [23, 71, 128, 130, 1000] {
            let err = ApiError::new(code, "rejected", 400).classify();
            match err {
                ClientError::ApiRequestRejected(api) => assert_eq!(api.code, code),
                other => panic!("expected ApiRequestRejected, got {:?}", other),
            }
        }
    }

    #[test]
    fn display_preserves_code_and_message() {
        let err = ApiError::new(127, "unrecognized deviceCode", 400).classify();
        let text = err.to_string();
        assert!(text.contains("API error 127"), "got: {}", text);
        assert!(text.contains("unrecognized deviceCode"), "got: {}", text);
    }
}
