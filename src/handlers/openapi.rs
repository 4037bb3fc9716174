//! OpenAPI specification generation and app factory.

use crate::{
    config::{CorsConfig, MetricsConfig},
    handlers::{get_metrics, health, index, version, whoami},
    middleware::{Cors, MetricsMiddleware, RequestIdMiddleware},
    services::AppMetrics,
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the OpenAPI specification served at `/api/spec/v2`
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Request Header Parser API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Describes the calling client from its request headers.\n\n\
                ## Client address\n\
                The address is taken from the first of:\n\
                1. `X-Forwarded-For` (first entry)\n\
                2. `X-Real-IP`\n\
                3. `CF-Connecting-IP`\n\
                4. the TCP peer address\n\
                \n\
                Values are not validated; deploy behind proxies you trust.\n\
                \n\
                ## Parsing\n\
                `Accept-Language` entries are sorted by descending `q` weight (missing or malformed weights count as 1.0). \
                The `User-Agent` breakdown is a lightweight heuristic: device `vendor` and `model` are always null.\n\
                \n\
                ## CORS\n\
                All `/api` routes send `Access-Control-Allow-Origin` and answer `OPTIONS` preflights with an empty 200."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with its routes, middleware and shared state
///
/// `metrics` is shared by every worker so that all of them report into the
/// same registry. Used by the server and by the integration tests.
pub fn create_base_app(
    cors: CorsConfig,
    metrics_config: MetricsConfig,
    metrics: AppMetrics,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(MetricsMiddleware)
        .wrap(Cors::new(cors))
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(metrics_config))
        .app_data(web::Data::new(metrics))
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/api/whoami").route(web::get().to(whoami)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
