//! Route label extraction for metrics.

use actix_web::HttpRequest;

/// Label used for requests that did not match any registered resource
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Route pattern the request matched, or `unmatched`
///
/// Using the pattern rather than the raw path keeps label cardinality bounded
/// when clients probe arbitrary URLs.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}
