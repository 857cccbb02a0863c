//! KE Phone - Kenyan phone number normalization for recruitment contact forms.
//!
//! Contact and booking forms collect phone numbers in whatever shape users
//! type them. This library turns them into one canonical `+254XXXXXXXXX`
//! form, validates form input, formats numbers for display and derives
//! WhatsApp/SMS deep links. A small MCP server exposes the same operations.
//!
//! # Architecture
//!
//! - **domain**: The normalizer, the `NormalizedPhone` newtype and deep links
//! - **models**: Contact inquiry and booking intake built on the normalizer
//! - **error**: Error types for configuration and intake
//! - **config**: Configuration management from environment variables
//! - **server**: MCP protocol server over stdio

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use domain::{
    format_for_display, is_valid, normalize, sms_link, validate_phone_input, whatsapp_link,
    NormalizedPhone, PhoneInputValidation, ValidationError,
};
pub use error::{ConfigError, IntakeError};
pub use models::{BookingRequest, ContactInquiry, ContactInquiryRequest};
pub use server::PhoneMcpServer;
