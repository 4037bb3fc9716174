//! CORS middleware implementation.

use crate::config::CorsConfig;
use actix_web::{
    Error, HttpResponse,
    body::{BoxBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::{
        Method,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, HeaderMap, HeaderValue,
        },
    },
};
use std::{
    future::{Ready, ready},
    pin::Pin,
};

/// CORS middleware factory
///
/// Adds the configured `Access-Control-Allow-*` headers to every response
/// under the policy's path prefix and answers `OPTIONS` preflights there with
/// an empty 200 without reaching the router.
pub struct Cors {
    config: CorsConfig,
}

impl Cors {
    pub fn new(config: CorsConfig) -> Self {
        Self { config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsMiddleware {
            service,
            config: self.config.clone(),
        }))
    }
}

pub struct CorsMiddleware<S> {
    service: S,
    config: CorsConfig,
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.config.applies_to(req.path()) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_boxed_body()) });
        }

        if req.method() == Method::OPTIONS {
            let mut preflight = HttpResponse::Ok().finish();
            apply_cors_headers(preflight.headers_mut(), &self.config);
            tracing::debug!(path = %req.path(), "Answered CORS preflight");
            let res = req.into_response(preflight);
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        let config = self.config.clone();

        Box::pin(async move {
            let mut res = fut.await?;
            apply_cors_headers(res.headers_mut(), &config);
            Ok(res.map_into_boxed_body())
        })
    }
}

fn apply_cors_headers(headers: &mut HeaderMap, config: &CorsConfig) {
    let policy = [
        (ACCESS_CONTROL_ALLOW_ORIGIN, &config.allow_origin),
        (ACCESS_CONTROL_ALLOW_METHODS, &config.allow_methods),
        (ACCESS_CONTROL_ALLOW_HEADERS, &config.allow_headers),
    ];

    for (name, value) in policy {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                headers.insert(name, value);
            }
            Err(_) => tracing::warn!(header = %name, "Skipping invalid CORS header value"),
        }
    }
}
