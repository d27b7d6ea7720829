#[cfg(test)]
mod tests {
    use crate::routes::{admin_routes, routes};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use consultify_config::{AppConfig, DatabaseConfig, ServerConfig};
    use consultify_db::{ContactRepository, DbClient, SqlContactRepository};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tempfile::NamedTempFile;
    use tower::ServiceExt;

    fn test_config(use_contact: bool) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            use_bookings: false,
            use_contact,
            use_admin: false,
            database: Some(DatabaseConfig {
                url: "sqlite::memory:".to_string(),
            }),
            scheduling: None,
            admin: None,
        })
    }

    async fn test_app(use_contact: bool) -> (Router, NamedTempFile) {
        let db_file = NamedTempFile::new().expect("failed to create temp database file");
        let url = format!("sqlite:{}", db_file.path().display());
        let client = DbClient::from_url(&url).await.expect("failed to connect");
        let repository = SqlContactRepository::new(client);
        repository.init_schema().await.expect("schema init failed");

        let config = test_config(use_contact);
        let app = routes(config.clone(), repository.clone())
            .merge(admin_routes(config, repository));
        (app, db_file)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_contact(payload: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    fn get_contact() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/contact")
            .body(Body::empty())
            .unwrap()
    }

    fn valid_payload() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "Looking for help with a data warehouse",
            "phone": "5558675309",
            "contact_preference": "phone",
            "preferred_days": ["Mon", "Wed"]
        })
    }

    #[tokio::test]
    async fn create_and_list_roundtrip() {
        let (app, _db_file) = test_app(true).await;

        let (status, created) = send(&app, post_contact(&valid_payload())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(created["id"].as_i64().is_some());
        assert_eq!(created["phone"], "(555) 867-5309");

        let (status, listed) = send(&app, get_contact()).await;
        assert_eq!(status, StatusCode::OK);
        let submissions = listed.as_array().unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0]["preferred_days"], json!(["Mon", "Wed"]));
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let (app, _db_file) = test_app(true).await;

        for name in ["First", "Second"] {
            let mut payload = valid_payload();
            payload["name"] = json!(name);
            let (status, _) = send(&app, post_contact(&payload)).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, listed) = send(&app, get_contact()).await;
        let submissions = listed.as_array().unwrap();
        assert_eq!(submissions.len(), 2);
        // Both submissions land in the same second, so id order decides
        assert_eq!(submissions[0]["name"], "Second");
        assert_eq!(submissions[1]["name"], "First");
    }

    #[tokio::test]
    async fn blank_required_fields_are_rejected() {
        let (app, _db_file) = test_app(true).await;

        let payload = json!({ "name": "Jane Doe", "email": "jane@example.com" });
        let (status, _) = send(&app, post_contact(&payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn disabled_feature_answers_service_unavailable() {
        let (app, _db_file) = test_app(false).await;

        let (status, _) = send(&app, post_contact(&valid_payload())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, _) = send(&app, get_contact()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
