// File: services/notifly_backend/src/main.rs
use axum::{routing::get, Router};
use notifly_config::load_config;
use notifly_fcm::bootstrap;
use notifly_fcm::routes as fcm_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    notifly_common::logging::init();

    let mut api_router = Router::new().route("/", get(|| async { "Welcome to Notifly API!" }));

    if config.use_fcm {
        let fcm_config = config
            .fcm
            .clone()
            .expect("use_fcm is set but the fcm config section is missing");

        // Credential problems are fatal: a backend that cannot send
        // notifications should not come up looking healthy.
        let client = bootstrap::init(fcm_config)
            .await
            .expect("Failed to initialize FCM client");

        api_router = api_router.merge(fcm_routes(client));
    }

    #[allow(unused_mut)] // mutable only when the openapi feature is enabled
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use notifly_fcm::doc::FcmApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Notifly API",
                version = "0.1.0",
                description = "Notifly push-notification service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Notifly", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(FcmApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
