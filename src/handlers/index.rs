//! Root welcome endpoint.

use actix_web::HttpResponse;
use paperclip::actix::api_v2_operation;

pub const WELCOME_MESSAGE: &str = "Request Header Parser Microservice is running 🚀";

#[api_v2_operation(
    summary = "Welcome Endpoint",
    description = "Plain-text liveness banner.",
    tags("Welcome"),
    responses(
        (status = 200, description = "Successful response")
    )
)]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME_MESSAGE)
}
