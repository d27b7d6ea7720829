// File: services/consultify_backend/src/main.rs
mod app_state;

use app_state::AppState;
use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use consultify_admin::{admin_auth_middleware, AdminAuthState};
use consultify_common::logging;
use consultify_config::load_config;
use consultify_db::{
    BookingRepository, ContactRepository, DbClient, SqlBookingRepository, SqlContactRepository,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: bool,
}

#[axum::debug_handler]
async fn health_handler(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let database = state.db_client.is_healthy().await;
    let status = if database { "ok" } else { "degraded" };
    (StatusCode::OK, Json(HealthResponse { status, database }))
}

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    logging::init();

    let db_client = DbClient::new(&config)
        .await
        .expect("Failed to connect to database");

    let booking_repository = SqlBookingRepository::new(db_client.clone());
    booking_repository
        .init_schema()
        .await
        .expect("Failed to initialize bookings schema");
    let contact_repository = SqlContactRepository::new(db_client.clone());
    contact_repository
        .init_schema()
        .await
        .expect("Failed to initialize contact submissions schema");

    let state = Arc::new(AppState {
        config: config.clone(),
        db_client,
    });

    let service_router = Router::new()
        .route("/", get(|| async { "Welcome to Consultify API!" }))
        .route("/health", get(health_handler))
        .with_state(state);

    let bookings_router = consultify_bookings::routes(config.clone(), booking_repository.clone());
    let contact_router = consultify_contact::routes(config.clone(), contact_repository.clone());
    let admin_login_router = consultify_admin::routes(config.clone());

    // Admin-gated routes from the feature crates, wrapped with the token check
    let auth_state = Arc::new(AdminAuthState {
        config: config.clone(),
    });
    let admin_router = Router::new()
        .merge(consultify_bookings::admin_routes(
            config.clone(),
            booking_repository,
        ))
        .merge(consultify_contact::admin_routes(
            config.clone(),
            contact_repository,
        ))
        .route_layer(middleware::from_fn_with_state(
            auth_state,
            admin_auth_middleware,
        ));

    let api_router = Router::new().nest(
        "/api",
        service_router
            .merge(bookings_router)
            .merge(contact_router)
            .merge(admin_login_router)
            .merge(admin_router),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = api_router.layer(cors);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use consultify_admin::doc::AdminApiDoc;
        use consultify_bookings::doc::BookingsApiDoc;
        use consultify_contact::doc::ContactApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Consultify API",
                version = "0.1.0",
                description = "Consultify Service API Docs"
            ),
            components(),
            tags( (name = "Consultify", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingsApiDoc::openapi());
        openapi_doc.merge(ContactApiDoc::openapi());
        openapi_doc.merge(AdminApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve static files in dev mode
    if cfg!(debug_assertions) {
        println!("Running in development mode, serving static files from ./static");
        app = app.fallback_service(ServeDir::new("static"));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
