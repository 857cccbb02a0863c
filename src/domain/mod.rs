//! Domain value objects and types.
//!
//! This module holds the Kenyan phone number normalizer and the deep links
//! derived from a canonical number. Everything here is pure: no I/O, no
//! shared state, and invalid input is reported through return values.

pub mod errors;
pub mod links;
pub mod phone;

pub use errors::{ValidationError, INVALID_PHONE_MESSAGE};
pub use links::{sms_link, whatsapp_link};
pub use phone::{
    format_for_display, is_valid, normalize, validate_phone_input, NormalizedPhone,
    PhoneInputValidation,
};
