//! MCP tool handlers for the phone server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.
//! Each tool builds its JSON payload through a plain function so the payload shapes
//! can be tested without a transport.

use crate::config::Config;
use crate::domain::{format_for_display, normalize, validate_phone_input, NormalizedPhone};
use crate::error::IntakeError;
use crate::models::{BookingRequest, ContactInquiry, ContactInquiryRequest};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing Kenyan phone normalization tools.
#[derive(Clone)]
pub struct PhoneMcpServer {
    config: Arc<Config>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for PhoneMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "ke-phone-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for Kenyan phone numbers - normalizes, validates and formats numbers, builds WhatsApp/SMS links, and accepts contact inquiries and office bookings.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct PhoneParams {
    phone: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PhoneLinksParams {
    phone: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactInquiryParams {
    name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    message: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct BookingParams {
    name: String,
    phone: String,
    date: String,
    time: String,
    purpose: String,
    #[serde(default)]
    company: Option<String>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn intake_error(e: IntakeError) -> McpError {
    tracing::warn!("Rejected intake: {}", e);
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn text_result(value: &Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

pub(crate) fn normalize_payload(phone: &str) -> Value {
    let normalized = normalize(phone);
    json!({
        "input": phone,
        "normalized": normalized.as_ref().map(NormalizedPhone::as_str),
        "is_valid": normalized.is_some(),
    })
}

pub(crate) fn links_payload(phone: &str, message: Option<&str>) -> Value {
    let normalized = normalize(phone);
    json!({
        "input": phone,
        "normalized": normalized.as_ref().map(NormalizedPhone::as_str),
        "whatsapp": normalized.as_ref().map(|p| p.whatsapp_link(message)),
        "sms": normalized.as_ref().map(|p| p.sms_link(message)),
    })
}

pub(crate) fn inquiry_payload(inquiry: &ContactInquiry, office: &NormalizedPhone) -> Value {
    json!({
        "inquiry": inquiry,
        "display_phone": inquiry.display_phone(),
        "whatsapp_reply": inquiry.whatsapp_reply_link(),
        "sms_reply": inquiry.sms_reply_link(),
        "office_notification": inquiry.office_notification_link(office),
    })
}

// Tool router implementation
#[tool_router]
impl PhoneMcpServer {
    /// Create a new phone MCP server.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    /// Normalize a free-form Kenyan phone number.
    #[tool(
        description = "Normalize a Kenyan phone number (e.g. 0705982249, 705982249, 254705982249) to +254XXXXXXXXX. Returns null for unrecognized input."
    )]
    async fn normalize_phone(
        &self,
        params: Parameters<PhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::debug!("MCP Handler: normalize_phone called");
        text_result(&normalize_payload(&params.phone))
    }

    /// Validate a phone form field.
    #[tool(
        description = "Validate an optional phone form field. Blank input is valid; otherwise returns isValid with either the normalized number or a user-facing message."
    )]
    async fn validate_phone_input(
        &self,
        params: Parameters<PhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let validation = validate_phone_input(&params.phone);
        let value = serde_json::to_value(&validation).map_err(to_mcp_error)?;
        text_result(&value)
    }

    /// Format a phone number as +254 XXX XXX XXX.
    #[tool(
        description = "Format a phone number for display as +254 XXX XXX XXX. Unrecognized input is returned unchanged."
    )]
    async fn format_phone_for_display(
        &self,
        params: Parameters<PhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        text_result(&json!({
            "input": params.phone,
            "display": format_for_display(&params.phone),
        }))
    }

    /// Build WhatsApp and SMS deep links.
    #[tool(
        description = "Build WhatsApp (wa.me) and SMS deep links for a Kenyan phone number, optionally pre-filling a message. Links are null for unrecognized input."
    )]
    async fn phone_links(
        &self,
        params: Parameters<PhoneLinksParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let message = params
            .message
            .as_deref()
            .or(self.config.default_link_message.as_deref());
        text_result(&links_payload(&params.phone, message))
    }

    /// Accept a contact inquiry, normalizing its phone number.
    #[tool(
        description = "Accept a contact form inquiry. The optional phone is normalized; an unrecognized phone rejects the inquiry."
    )]
    async fn register_contact_inquiry(
        &self,
        params: Parameters<ContactInquiryParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: register_contact_inquiry called");

        let inquiry = ContactInquiry::from_request(ContactInquiryRequest {
            name: params.name,
            email: params.email,
            phone: params.phone,
            subject: params.subject.unwrap_or_default(),
            message: params.message,
        })
        .map_err(intake_error)?;

        text_result(&inquiry_payload(&inquiry, &self.config.office_whatsapp))
    }

    /// Compose the office booking WhatsApp link.
    #[tool(
        description = "Compose an office visit booking message and return the WhatsApp link that sends it to the agency's office number."
    )]
    async fn compose_booking_link(
        &self,
        params: Parameters<BookingParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: compose_booking_link called");

        let booking = BookingRequest {
            name: params.name,
            phone: params.phone,
            date: params.date,
            time: params.time,
            purpose: params.purpose,
            company: params.company,
        };
        let link = booking
            .whatsapp_link(&self.config.office_whatsapp)
            .map_err(intake_error)?;
        let message = booking.compose_message().map_err(intake_error)?;

        text_result(&json!({
            "office": self.config.office_whatsapp,
            "message": message,
            "whatsapp": link,
        }))
    }
}
