//! HTTP tests for the download passthrough route.
//!
//! These tests stand up the actix app with a wiremock server playing
//! GitHub, asserting both the relayed responses and that invalid requests
//! never reach upstream.

#[cfg(test)]
mod http_tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::handlers::configure_download_routes;
    use crate::services::ArchiveService;
    use crate::{AppState, Config};

    fn test_state(api_base: &str) -> web::Data<AppState> {
        web::Data::new(AppState {
            config: Config {
                host: "127.0.0.1".to_string(),
                port: 0,
                github_api_base: api_base.to_string(),
            },
            archive: ArchiveService::new(api_base).expect("archive service should build"),
        })
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .service(web::scope("/api").configure(configure_download_routes)),
            )
            .await
        };
    }

    async fn upstream_call_count(server: &MockServer) -> usize {
        server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    #[actix_web::test]
    async fn missing_owner_fails_fast_with_400() {
        let server = MockServer::start().await;
        let app = test_app!(test_state(&server.uri()));

        let req = test::TestRequest::get()
            .uri("/api/download?repo=demo")
            .insert_header(("Authorization", "Bearer token-123"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "owner and repo are required");
        assert_eq!(upstream_call_count(&server).await, 0);
    }

    #[actix_web::test]
    async fn missing_repo_fails_fast_with_400() {
        let server = MockServer::start().await;
        let app = test_app!(test_state(&server.uri()));

        let req = test::TestRequest::get()
            .uri("/api/download?owner=acme")
            .insert_header(("Authorization", "Bearer token-123"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(upstream_call_count(&server).await, 0);
    }

    #[actix_web::test]
    async fn missing_credential_fails_fast_with_401() {
        let server = MockServer::start().await;
        let app = test_app!(test_state(&server.uri()));

        let req = test::TestRequest::get()
            .uri("/api/download?owner=acme&repo=demo")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authorization header is required");
        assert_eq!(upstream_call_count(&server).await, 0);
    }

    #[actix_web::test]
    async fn success_relays_bytes_with_download_headers() {
        let server = MockServer::start().await;
        let zip_bytes: &[u8] = b"PK\x03\x04fake-zip-payload";

        Mock::given(method("GET"))
            .and(path("/repos/acme/demo/zipball/main"))
            .and(header("Authorization", "Bearer token-123"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(zip_bytes))
            .expect(1)
            .mount(&server)
            .await;

        let app = test_app!(test_state(&server.uri()));

        let req = test::TestRequest::get()
            .uri("/api/download?owner=acme&repo=demo")
            .insert_header(("Authorization", "Bearer token-123"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("Content-Type")
                .and_then(|v| v.to_str().ok()),
            Some("application/zip")
        );
        assert_eq!(
            resp.headers()
                .get("Content-Disposition")
                .and_then(|v| v.to_str().ok()),
            Some(r#"attachment; filename="demo-main.zip""#)
        );
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), zip_bytes);
    }

    #[actix_web::test]
    async fn branch_lands_in_upstream_path_and_filename() {
        let server = MockServer::start().await;

        // The branch is one percent-encoded path segment upstream.
        Mock::given(method("GET"))
            .and(path("/repos/acme/demo/zipball/feature%2Fx"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK".as_slice()))
            .expect(1)
            .mount(&server)
            .await;

        let app = test_app!(test_state(&server.uri()));

        let req = test::TestRequest::get()
            .uri("/api/download?owner=acme&repo=demo&branch=feature%2Fx")
            .insert_header(("Authorization", "Bearer token-123"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("Content-Disposition")
                .and_then(|v| v.to_str().ok()),
            Some(r#"attachment; filename="demo-feature_x.zip""#)
        );
    }

    #[actix_web::test]
    async fn upstream_failure_relays_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/missing/zipball/main"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let app = test_app!(test_state(&server.uri()));

        let req = test::TestRequest::get()
            .uri("/api/download?owner=acme&repo=missing")
            .insert_header(("Authorization", "Bearer token-123"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let message = body["error"].as_str().expect("error should be a string");
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
    }
}
