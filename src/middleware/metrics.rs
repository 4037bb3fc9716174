//! Per-request Prometheus accounting.

use crate::{services::AppMetrics, utils::route::extract_route_pattern};
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use std::{
    future::{Future, Ready, ready},
    pin::Pin,
    time::Instant,
};

/// Counts and times every request once routing has settled
///
/// The route label is read from the finished response, since the matched
/// pattern is only known after the inner service resolved the request.
/// Without an `AppMetrics` in app data the middleware is a pass-through.
pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsService { service }))
    }
}

pub struct MetricsService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MetricsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            observe(&res, started);
            Ok(res)
        })
    }
}

fn observe<B>(res: &ServiceResponse<B>, started: Instant) {
    let req = res.request();
    let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() else {
        return;
    };

    metrics.record_request(
        req.method().as_str(),
        &extract_route_pattern(req),
        res.status().as_u16(),
        started.elapsed(),
    );
    metrics.update_uptime();
}
