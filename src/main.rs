use whoami_api::{LoggingConfig, ServerConfig, build_server, init_tracing};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // RUST_LOG and LOG_FORMAT control the output, e.g. LOG_FORMAT=json
    let logging = LoggingConfig::from_env();
    if let Err(e) = init_tracing(&logging) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let config = ServerConfig::from_env();
    let server = build_server(config)?;

    let result = server.await;
    tracing::info!("Server stopped");
    result
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use whoami_api::{health, whoami};

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().route("/api/health", web::get().to(health))).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("healthy"));
    }

    #[actix_web::test]
    async fn test_whoami() {
        let app = test::init_service(App::new().route("/api/whoami", web::get().to(whoami))).await;

        let req = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header(("User-Agent", "curl/8.1.2"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("ipaddress"));
        assert!(body_str.contains("curl/8.1.2"));
    }
}
