//! Intake records that carry a phone number.

pub mod booking;
pub mod inquiry;

pub use booking::BookingRequest;
pub use inquiry::{ContactInquiry, ContactInquiryRequest};
