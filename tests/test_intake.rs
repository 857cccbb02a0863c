//! Tests for contact inquiry and booking intake.

use ke_phone::error::INTAKE_INVALID_PHONE_MESSAGE;
use ke_phone::{BookingRequest, Config, ContactInquiry, ContactInquiryRequest, IntakeError};

#[test]
fn test_inquiry_from_json_payload() {
    let request: ContactInquiryRequest = serde_json::from_str(
        r#"{
            "name": "Peter Kamau",
            "email": "peter@example.com",
            "phone": "0722 000 111",
            "subject": "Vacancies",
            "message": "Do you place drivers?"
        }"#,
    )
    .unwrap();

    let inquiry = ContactInquiry::from_request(request).unwrap();
    assert_eq!(inquiry.phone.unwrap().as_str(), "+254722000111");
}

#[test]
fn test_inquiry_invalid_phone_message() {
    let request = ContactInquiryRequest {
        name: "Peter".to_string(),
        email: "peter@example.com".to_string(),
        phone: Some("+44 20 7946 0958".to_string()),
        subject: String::new(),
        message: "Hello".to_string(),
    };

    let err = ContactInquiry::from_request(request).unwrap_err();
    assert!(matches!(err, IntakeError::InvalidPhone(_)));
    assert_eq!(err.to_string(), INTAKE_INVALID_PHONE_MESSAGE);
}

#[test]
fn test_stored_inquiry_round_trips_canonical_phone() {
    let request = ContactInquiryRequest {
        name: "Peter".to_string(),
        email: "peter@example.com".to_string(),
        phone: Some("722000111".to_string()),
        subject: String::new(),
        message: "Hello".to_string(),
    };
    let inquiry = ContactInquiry::from_request(request).unwrap();

    let json = serde_json::to_string(&inquiry).unwrap();
    let restored: ContactInquiry = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, inquiry);
}

#[test]
fn test_booking_link_targets_office() {
    let config = Config::default();
    let booking = BookingRequest {
        name: "Achieng".to_string(),
        phone: "0798 765 432".to_string(),
        date: "Monday".to_string(),
        time: "9:00 AM".to_string(),
        purpose: "Drop off CV".to_string(),
        company: Some("Savannah Foods".to_string()),
    };

    let link = booking.whatsapp_link(&config.office_whatsapp).unwrap();
    assert!(link.starts_with("https://wa.me/254723464058?text="));
    assert!(link.contains("Savannah%20Foods"));
}
