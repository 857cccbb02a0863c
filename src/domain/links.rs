//! Messaging deep links derived from a canonical phone number.

use super::phone::{normalize, NormalizedPhone};

const WHATSAPP_BASE: &str = "https://wa.me/";

impl NormalizedPhone {
    /// Build a `https://wa.me/<digits>` link, optionally pre-filling a message.
    pub fn whatsapp_link(&self, message: Option<&str>) -> String {
        with_query(format!("{}{}", WHATSAPP_BASE, self.digits()), "text", message)
    }

    /// Build an `sms:+254...` link, optionally pre-filling the body.
    ///
    /// Unlike `wa.me`, the SMS scheme keeps the leading `+`.
    pub fn sms_link(&self, message: Option<&str>) -> String {
        with_query(format!("sms:{}", self.as_str()), "body", message)
    }
}

/// WhatsApp link for `raw`, or `None` if it does not normalize.
pub fn whatsapp_link(raw: &str, message: Option<&str>) -> Option<String> {
    normalize(raw).map(|phone| phone.whatsapp_link(message))
}

/// SMS link for `raw`, or `None` if it does not normalize.
pub fn sms_link(raw: &str, message: Option<&str>) -> Option<String> {
    normalize(raw).map(|phone| phone.sms_link(message))
}

fn with_query(base: String, key: &str, message: Option<&str>) -> String {
    match message.filter(|m| !m.is_empty()) {
        Some(m) => format!("{}?{}={}", base, key, urlencoding::encode(m)),
        None => base,
    }
}
