//! Wire records for the `/api/whoami` endpoint.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// One entry of the `Accept-Language` header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct LanguagePreference {
    /// Language tag as sent by the client (e.g. "en-US")
    pub code: String,
    /// Weight from the `q=` parameter, 1.0 when absent
    pub quality: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub struct BrowserInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Leading numeric segment of `version`
    pub major: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub struct OsInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Coarse device class derived from the User-Agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
            DeviceType::Desktop => "desktop",
        }
    }
}

/// Device description. `vendor` and `model` are never filled in by the
/// heuristic classifier but stay in the payload for client compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub struct DeviceInfo {
    #[serde(rename = "type")]
    pub device_type: Option<DeviceType>,
    pub vendor: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ParsedData {
    pub browser: BrowserInfo,
    pub os: OsInfo,
    pub device: DeviceInfo,
    pub languages: Vec<LanguagePreference>,
}

/// Response model for the whoami endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct HeaderParseResponse {
    /// Resolved client address
    pub ipaddress: String,
    /// Raw `Accept-Language` header
    pub language: Option<String>,
    /// Raw `User-Agent` header
    pub software: Option<String>,
    pub parsed: ParsedData,
    /// ISO-8601 time the response was assembled
    pub timestamp: String,
}

/// Body returned whenever the whoami endpoint fails internally
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn header_parse_failure() -> Self {
        Self {
            error: "Internal server error".to_string(),
            message: "Failed to parse request headers".to_string(),
        }
    }
}
