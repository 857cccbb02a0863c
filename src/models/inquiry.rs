//! Contact inquiry submitted through the public contact form.

use crate::domain::NormalizedPhone;
use crate::error::{IntakeError, IntakeResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name used to sign replies sent from the admin inquiry list.
pub const AGENCY_NAME: &str = "Skyways Global Recruitment";

/// Inbound contact form payload, phone still in whatever shape the user typed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactInquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// An accepted contact inquiry, ready to be stored.
///
/// The phone number, when present, is always canonical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<NormalizedPhone>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

impl ContactInquiry {
    /// Accept a contact form submission.
    ///
    /// A blank or missing phone is stored as `None`. A phone that is present
    /// but cannot be normalized rejects the whole inquiry.
    ///
    /// # Errors
    ///
    /// - `IntakeError::MissingField` if name, email or message is blank
    /// - `IntakeError::InvalidPhone` if the phone does not normalize
    pub fn from_request(request: ContactInquiryRequest) -> IntakeResult<Self> {
        require("name", &request.name)?;
        require("email", &request.email)?;
        require("message", &request.message)?;

        let phone = match request.phone.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(NormalizedPhone::parse(raw)?),
            _ => None,
        };

        tracing::debug!(has_phone = phone.is_some(), "Accepted contact inquiry");

        Ok(ContactInquiry {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone,
            subject: request.subject.trim().to_string(),
            message: request.message,
            created_at: Utc::now(),
            is_read: false,
        })
    }

    /// Phone rendered for the admin inquiry list, empty when none was given.
    pub fn display_phone(&self) -> String {
        self.phone
            .as_ref()
            .map(NormalizedPhone::display_grouped)
            .unwrap_or_default()
    }

    /// WhatsApp link to reply to this inquiry, if a phone was given.
    pub fn whatsapp_link(&self, message: Option<&str>) -> Option<String> {
        self.phone.as_ref().map(|p| p.whatsapp_link(message))
    }

    /// SMS link to reply to this inquiry, if a phone was given.
    pub fn sms_link(&self, message: Option<&str>) -> Option<String> {
        self.phone.as_ref().map(|p| p.sms_link(message))
    }

    /// Subject as shown to people: form values like `job_seeker` read `job seeker`.
    ///
    /// Only the first underscore is replaced, as the admin list has always done.
    pub fn subject_label(&self) -> String {
        self.subject.replacen('_', " ", 1)
    }

    /// WhatsApp reply acknowledging the inquiry and quoting its message.
    pub fn whatsapp_reply_message(&self) -> String {
        format!(
            "Hello {},\n\n\
             Thank you for contacting us regarding your {} inquiry.\n\n\
             We have received your message: \"{}\"\n\n\
             We will get back to you shortly with more information.\n\n\
             Best regards,\n\
             {} Team",
            self.name,
            self.subject_label(),
            self.message,
            AGENCY_NAME,
        )
    }

    /// One-line SMS reply acknowledging the inquiry.
    pub fn sms_reply_message(&self) -> String {
        format!(
            "Hello {}, thank you for contacting {}. We received your {} inquiry and will respond soon. Best regards, Skyways Team",
            self.name,
            AGENCY_NAME,
            self.subject_label(),
        )
    }

    /// Notification the contact form sends to the office WhatsApp line.
    pub fn office_notification_message(&self) -> String {
        let phone = self
            .phone
            .as_ref()
            .map(NormalizedPhone::as_str)
            .unwrap_or("Not provided");

        format!(
            "Hello! I have submitted a contact inquiry through your website.\n\n\
             *Contact Details:*\n\
             • Name: {}\n\
             • Email: {}\n\
             • Phone: {}\n\
             • Subject: {}\n\n\
             *Message:*\n\
             {}\n\n\
             Please respond when convenient. Thank you!",
            self.name, self.email, phone, self.subject, self.message,
        )
    }

    /// WhatsApp reply link carrying [`Self::whatsapp_reply_message`].
    pub fn whatsapp_reply_link(&self) -> Option<String> {
        self.whatsapp_link(Some(&self.whatsapp_reply_message()))
    }

    /// SMS reply link carrying [`Self::sms_reply_message`].
    pub fn sms_reply_link(&self) -> Option<String> {
        self.sms_link(Some(&self.sms_reply_message()))
    }

    /// Link that opens a chat with `office` pre-filled with the notification.
    pub fn office_notification_link(&self, office: &NormalizedPhone) -> String {
        office.whatsapp_link(Some(&self.office_notification_message()))
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> IntakeResult<()> {
    if value.trim().is_empty() {
        return Err(IntakeError::MissingField(field));
    }
    Ok(())
}
