use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// VoIPBIN API access key.
///
/// Sent as the `accesskey` query parameter on every request. No validation is
/// performed; a bad key surfaces as whatever the server answers.
pub struct AccessKey(String);

impl AccessKey {
    /// Query parameter name used by VoIPBIN (`accesskey`).
    pub const FIELD: &'static str = "accesskey";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Username for HTTP Basic authentication.
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Password for HTTP Basic authentication.
///
/// Preserved byte-for-byte (whitespace included). `Debug` output is redacted.
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Kind of endpoint a [`CommonAddress`] points at.
pub enum AddressType {
    Agent,
    Conference,
    Email,
    Extension,
    Line,
    Sip,
    Tel,
    /// Any type this crate does not know about yet.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Source or destination of a call or message.
///
/// Every field is optional; unset fields are omitted from request bodies.
/// Use [`crate::string_ptr`] to fill them in struct-literal style:
///
/// ```rust
/// use voipbin::{CommonAddress, string_ptr};
///
/// let to = CommonAddress {
///     target: string_ptr("+1234567890"),
///     ..Default::default()
/// };
/// assert_eq!(to.target.as_deref(), Some("+1234567890"));
/// ```
pub struct CommonAddress {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CommonAddress {
    /// Field name used in validation errors for address targets.
    pub const TARGET_FIELD: &'static str = "target";

    /// Build a telephone address, normalising the number to E.164.
    ///
    /// The input must carry an explicit country prefix (`+` followed by the
    /// country code).
    pub fn tel(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::TARGET_FIELD,
            });
        }

        let parsed = phonenumber::parse(None, raw).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            }
        })?;
        if !phonenumber::is_valid(&parsed) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            });
        }

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self {
            address_type: Some(AddressType::Tel),
            target: Some(e164),
            ..Default::default()
        })
    }
}
