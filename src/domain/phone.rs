//! Kenyan phone number normalization.

use super::errors::{ValidationError, INVALID_PHONE_MESSAGE};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const COUNTRY_CODE: &str = "254";
const INTERNATIONAL_PREFIX: &str = "+254";

/// Canonical Kenyan mobile number: `+254`, a `7` or `1`, then 8 digits.
static CANONICAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+254[71]\d{8}$").expect("canonical phone regex is valid"));

/// A Kenyan phone number in canonical `+254XXXXXXXXX` form.
///
/// Values of this type always match `^\+254[71]\d{8}$`. The only way to
/// obtain one is through [`normalize`], [`NormalizedPhone::parse`] or
/// deserialization, all of which run the same normalization.
///
/// # Example
///
/// ```
/// use ke_phone::domain::NormalizedPhone;
///
/// let phone = NormalizedPhone::parse("0705 982 249").unwrap();
/// assert_eq!(phone.as_str(), "+254705982249");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    /// Normalize `raw`, reporting failure as a [`ValidationError`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnrecognizedFormat` when the input cannot be
    /// classified as a Kenyan mobile number.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        normalize(raw).ok_or_else(|| ValidationError::UnrecognizedFormat(raw.to_string()))
    }

    /// Get the canonical number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The 12 digits without the leading `+`, as used by `wa.me` links.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    /// The 9-digit subscriber number following the country code.
    pub fn subscriber(&self) -> &str {
        &self.0[INTERNATIONAL_PREFIX.len()..]
    }

    /// Grouped form for read-only display: `+254 XXX XXX XXX`.
    pub fn display_grouped(&self) -> String {
        let s = &self.0;
        format!("{} {} {} {}", &s[0..4], &s[4..7], &s[7..10], &s[10..13])
    }
}

/// Normalize a free-form phone number to `+254XXXXXXXXX`.
///
/// Accepts the common national and international spellings
/// (`0705982249`, `705982249`, `254705982249`, `+254705982249`) with any
/// separators in between. Returns `None` for anything else.
pub fn normalize(raw: &str) -> Option<NormalizedPhone> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let candidate = if cleaned.starts_with(INTERNATIONAL_PREFIX) {
        cleaned
    } else if cleaned.starts_with(COUNTRY_CODE) {
        format!("+{}", cleaned)
    } else if let Some(national) = cleaned.strip_prefix('0') {
        format!("{}{}", INTERNATIONAL_PREFIX, national)
    } else if cleaned.len() == 9 && (cleaned.starts_with('7') || cleaned.starts_with('1')) {
        // Bare subscriber number with neither trunk prefix nor country code.
        // The `1` range is kept even though no form in the portals feeds it.
        format!("{}{}", INTERNATIONAL_PREFIX, cleaned)
    } else {
        return None;
    };

    if CANONICAL_PATTERN.is_match(&candidate) {
        Some(NormalizedPhone(candidate))
    } else {
        None
    }
}

/// Check whether `raw` normalizes to a Kenyan mobile number.
pub fn is_valid(raw: &str) -> bool {
    normalize(raw).is_some()
}

/// Format `raw` for display, falling back to the input unchanged.
pub fn format_for_display(raw: &str) -> String {
    match normalize(raw) {
        Some(phone) => phone.display_grouped(),
        None => raw.to_string(),
    }
}

/// Outcome of validating a phone form field.
///
/// Serializes as `{"isValid": .., "message"?: .., "normalized"?: ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneInputValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<NormalizedPhone>,
}

/// Validate an optional phone form field.
///
/// Blank input is valid (the field was not provided); whether the field is
/// actually required is up to the caller.
pub fn validate_phone_input(raw: &str) -> PhoneInputValidation {
    if raw.trim().is_empty() {
        return PhoneInputValidation {
            is_valid: true,
            message: None,
            normalized: None,
        };
    }

    match normalize(raw) {
        Some(phone) => PhoneInputValidation {
            is_valid: true,
            message: None,
            normalized: Some(phone),
        },
        None => PhoneInputValidation {
            is_valid: false,
            message: Some(INVALID_PHONE_MESSAGE.to_string()),
            normalized: None,
        },
    }
}

impl FromStr for NormalizedPhone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for NormalizedPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for NormalizedPhone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from any accepted spelling, storing the canonical one
impl<'de> Deserialize<'de> for NormalizedPhone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NormalizedPhone::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
