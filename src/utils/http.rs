//! HTTP utility functions for extracting request information.

use actix_web::{
    HttpRequest,
    http::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT},
};

/// Address reported when neither headers nor the transport yield one
pub const FALLBACK_CLIENT_IP: &str = "127.0.0.1";

/// How a forwarding header's value becomes a client address
#[derive(Clone, Copy)]
enum Selection {
    /// Comma-separated chain, the first hop is the client
    FirstOfList,
    Verbatim,
}

/// Proxy headers in order of precedence
const CLIENT_IP_HEADERS: [(&str, Selection); 3] = [
    ("X-Forwarded-For", Selection::FirstOfList),
    ("X-Real-IP", Selection::Verbatim),
    ("CF-Connecting-IP", Selection::Verbatim), // Cloudflare
];

/// Resolve the originating client address
///
/// Forwarding headers win over the transport peer address. Values are not
/// checked for IP syntax: upstream proxies are trusted as-is. Empty values are
/// skipped so the result is never an empty string.
pub fn resolve_client_ip(headers: &HeaderMap, peer_addr: Option<&str>) -> String {
    for (name, selection) in CLIENT_IP_HEADERS {
        let Some(value) = header_str(headers, name) else {
            continue;
        };

        let candidate = match selection {
            Selection::FirstOfList => value.split(',').next().unwrap_or(value).trim(),
            Selection::Verbatim => value,
        };

        if !candidate.trim().is_empty() {
            return candidate.to_string();
        }
    }

    peer_addr
        .filter(|addr| !addr.is_empty())
        .unwrap_or(FALLBACK_CLIENT_IP)
        .to_string()
}

/// Extract client IP address from an Actix request
pub fn extract_client_ip(req: &HttpRequest) -> String {
    let peer = req.peer_addr().map(|addr| addr.ip().to_string());
    resolve_client_ip(req.headers(), peer.as_deref())
}

/// Extract user agent from request headers
///
/// A repeated `User-Agent` line is ignored; the first one is reported.
pub fn extract_user_agent(req: &HttpRequest) -> Option<String> {
    req.headers().get(USER_AGENT).map(header_text)
}

/// Extract the raw Accept-Language header, joining repeated lines with `", "`
pub fn extract_accept_language(req: &HttpRequest) -> Option<String> {
    let lines: Vec<String> = req
        .headers()
        .get_all(ACCEPT_LANGUAGE)
        .map(header_text)
        .collect();

    (!lines.is_empty()).then(|| lines.join(", "))
}

/// Header value as text, decoding non-ASCII bytes lossily instead of dropping them
fn header_text(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

/// Header value as text; values that are not visible ASCII count as absent
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|h| h.to_str().ok())
}
