//! Office visit booking requests, sent to the agency over WhatsApp.

use super::inquiry::require;
use crate::domain::NormalizedPhone;
use crate::error::IntakeResult;
use serde::{Deserialize, Serialize};

/// Booking form payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub purpose: String,
    pub company: Option<String>,
}

impl BookingRequest {
    /// Render the WhatsApp message body for this booking.
    ///
    /// # Errors
    ///
    /// - `IntakeError::MissingField` if name, phone, date, time or purpose is blank
    /// - `IntakeError::InvalidPhone` if the phone does not normalize
    pub fn compose_message(&self) -> IntakeResult<String> {
        require("name", &self.name)?;
        require("phone", &self.phone)?;
        require("date", &self.date)?;
        require("time", &self.time)?;
        require("purpose", &self.purpose)?;
        let phone = NormalizedPhone::parse(&self.phone)?;

        let company = self
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("N/A");

        Ok(format!(
            "Hello! I would like to book an appointment to visit your office.\n\
             \n\
             *Booking Details:*\n\
             • Name: {}\n\
             • Phone: {}\n\
             • Date: {}\n\
             • Time: {}\n\
             • Purpose: {}\n\
             • Company: {}\n\
             \n\
             I'm looking forward to meeting with your team. Please confirm if this time works for you.",
            self.name.trim(),
            phone,
            self.date.trim(),
            self.time.trim(),
            self.purpose.trim(),
            company,
        ))
    }

    /// WhatsApp link that opens a chat with `office` carrying the booking message.
    pub fn whatsapp_link(&self, office: &NormalizedPhone) -> IntakeResult<String> {
        let message = self.compose_message()?;
        tracing::debug!(office = %office, "Composed booking link");
        Ok(office.whatsapp_link(Some(&message)))
    }
}
