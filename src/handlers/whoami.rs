//! Whoami endpoint handler.

use crate::{
    error::Result,
    models::{ErrorResponse, HeaderParseResponse},
    services::{AppMetrics, ClientHeaders, render_response},
};
use actix_web::{HttpRequest, HttpResponse, http::header::ContentType, web};
use chrono::Utc;
use paperclip::actix::api_v2_operation;

/// Whoami endpoint
///
/// Describes the calling client: resolved IP address, raw and parsed
/// `Accept-Language`, and browser/OS/device identity from the `User-Agent`.
#[api_v2_operation(
    summary = "Request Header Parser Endpoint",
    description = "Returns the client's IP address, preferred languages and a browser/OS/device breakdown of its User-Agent. Honors X-Forwarded-For, X-Real-IP and CF-Connecting-IP in that order.",
    tags("Whoami"),
    responses(
        (status = 200, description = "Successful response", body = HeaderParseResponse),
        (status = 500, description = "Internal Server Error - Headers could not be described", body = ErrorResponse)
    )
)]
pub async fn whoami(req: HttpRequest) -> HttpResponse {
    let headers = ClientHeaders::from_request(&req);
    let metrics = req.app_data::<web::Data<AppMetrics>>();

    whoami_response(render_response(&headers, Utc::now()), metrics.map(|m| m.get_ref()))
}

/// Turn the outcome of response assembly into the HTTP answer
///
/// Any error becomes the fixed 500 body; the cause is only logged.
pub fn whoami_response(
    outcome: Result<(HeaderParseResponse, Vec<u8>)>,
    metrics: Option<&AppMetrics>,
) -> HttpResponse {
    match outcome {
        Ok((response, body)) => {
            if let Some(metrics) = metrics {
                metrics.record_client(&response.parsed);
            }
            tracing::debug!(
                ipaddress = %response.ipaddress,
                browser = ?response.parsed.browser.name,
                os = ?response.parsed.os.name,
                "Described client"
            );
            HttpResponse::Ok()
                .content_type(ContentType::json())
                .body(body)
        }
        Err(e) => {
            if let Some(metrics) = metrics {
                metrics.record_failure();
            }
            tracing::error!(error = %e, "Error parsing headers");
            HttpResponse::InternalServerError().json(ErrorResponse::header_parse_failure())
        }
    }
}
