//! Whoami response assembly and validation.

use crate::{
    error::{Result, WhoamiError},
    models::{HeaderParseResponse, ParsedData},
    services::{accept_language::parse_accept_language, user_agent::parse_user_agent},
    utils::{extract_accept_language, extract_client_ip, extract_user_agent},
};
use actix_web::HttpRequest;
use chrono::{DateTime, SecondsFormat, Utc};

/// The request fields the whoami endpoint describes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientHeaders {
    pub client_ip: String,
    pub user_agent: Option<String>,
    pub accept_language: Option<String>,
}

impl ClientHeaders {
    pub fn from_request(req: &HttpRequest) -> Self {
        Self {
            client_ip: extract_client_ip(req),
            user_agent: extract_user_agent(req),
            accept_language: extract_accept_language(req),
        }
    }
}

/// Parse the client headers into a validated response stamped with `now`
pub fn assemble_response(
    headers: &ClientHeaders,
    now: DateTime<Utc>,
) -> Result<HeaderParseResponse> {
    let ua = parse_user_agent(headers.user_agent.as_deref());
    let languages = parse_accept_language(headers.accept_language.as_deref());

    // Empty headers are reported as null, like absent ones
    let response = HeaderParseResponse {
        ipaddress: headers.client_ip.clone(),
        language: headers.accept_language.clone().filter(|v| !v.is_empty()),
        software: headers.user_agent.clone().filter(|v| !v.is_empty()),
        parsed: ParsedData {
            browser: ua.browser,
            os: ua.os,
            device: ua.device,
            languages,
        },
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    response.validate()?;
    Ok(response)
}

/// Assemble, validate and encode the JSON body in one step
pub fn render_response(
    headers: &ClientHeaders,
    now: DateTime<Utc>,
) -> Result<(HeaderParseResponse, Vec<u8>)> {
    let response = assemble_response(headers, now)?;
    let body = serde_json::to_vec(&response)?;
    Ok((response, body))
}

impl HeaderParseResponse {
    /// Check the wire contract before the response leaves the process
    pub fn validate(&self) -> Result<()> {
        if self.ipaddress.is_empty() {
            return Err(WhoamiError::validation("ipaddress", "must not be empty"));
        }

        DateTime::parse_from_rfc3339(&self.timestamp).map_err(|e| {
            WhoamiError::validation("timestamp", format!("not RFC 3339 ({e})"))
        })?;

        let languages = &self.parsed.languages;
        if let Some(lang) = languages.iter().find(|l| !l.quality.is_finite()) {
            return Err(WhoamiError::validation(
                "parsed.languages",
                format!("quality of `{}` is not finite", lang.code),
            ));
        }
        if languages.windows(2).any(|w| w[0].quality < w[1].quality) {
            return Err(WhoamiError::validation(
                "parsed.languages",
                "not sorted by descending quality",
            ));
        }

        let browser = &self.parsed.browser;
        if let Some(major) = &browser.major {
            let leading = browser
                .version
                .as_deref()
                .and_then(|v| v.split('.').next());
            if leading != Some(major.as_str()) {
                return Err(WhoamiError::validation(
                    "parsed.browser.major",
                    "does not match the leading version segment",
                ));
            }
        }

        if self.software.is_none() {
            let os = &self.parsed.os;
            let device = &self.parsed.device;
            let any_identity = browser.name.is_some()
                || browser.version.is_some()
                || os.name.is_some()
                || os.version.is_some()
                || device.device_type.is_some()
                || device.vendor.is_some()
                || device.model.is_some();
            if any_identity {
                return Err(WhoamiError::validation(
                    "parsed",
                    "client identity present without a User-Agent",
                ));
            }
        }

        Ok(())
    }
}
