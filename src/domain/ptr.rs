//! Helpers for filling optional fields of request types.
//!
//! Optional fields are `Option<T>`: `None` means "not set". These helpers turn
//! a plain value into the "set" state, which keeps struct literals short:
//!
//! ```rust
//! use voipbin::{CommonAddress, GetCallsParams, int_ptr, string_ptr};
//!
//! let source = CommonAddress {
//!     target: string_ptr("+1987654321"),
//!     ..Default::default()
//! };
//! let params = GetCallsParams {
//!     page_size: int_ptr(100),
//!     ..Default::default()
//! };
//! # let _ = (source, params);
//! ```

/// Wrap an owned copy of `value` as a set optional string field.
pub fn string_ptr(value: impl Into<String>) -> Option<String> {
    Some(value.into())
}

/// Wrap `value` as a set optional integer field.
pub fn int_ptr(value: i64) -> Option<i64> {
    Some(value)
}
