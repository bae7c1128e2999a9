use axum::{Json, Router, routing::get};
use dotenvy::dotenv;
use hotel_reservation_api::{
    config::app_config::AppConfig,
    hotel_catalog::{
        build_hotel_catalog_router,
        interfaces::rest::resources::{
            create_hotel_request_resource::CreateHotelRequestResource,
            hotel_error_response_resource::HotelErrorResponseResource,
            hotel_resource::{
                HotelGradeResource, HotelPageResource, HotelResource, ThumbnailResource,
            },
            list_hotels_query_resource::ListHotelsQueryResource,
            update_hotel_request_resource::UpdateHotelRequestResource,
        },
    },
    shared::{app_context::AppContext, telemetry::init_tracing},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        hotel_reservation_api::hotel_catalog::interfaces::rest::controllers::hotel_rest_controller::create_hotel,
        hotel_reservation_api::hotel_catalog::interfaces::rest::controllers::hotel_rest_controller::update_hotel,
        hotel_reservation_api::hotel_catalog::interfaces::rest::controllers::hotel_rest_controller::get_hotel,
        hotel_reservation_api::hotel_catalog::interfaces::rest::controllers::hotel_rest_controller::list_hotels,
        hotel_reservation_api::hotel_catalog::interfaces::rest::controllers::hotel_rest_controller::delete_hotel
    ),
    components(
        schemas(
            CreateHotelRequestResource,
            UpdateHotelRequestResource,
            ListHotelsQueryResource,
            HotelResource,
            HotelPageResource,
            HotelGradeResource,
            ThumbnailResource,
            HotelErrorResponseResource
        )
    ),
    tags(
        (name = "hotels", description = "Tenant-scoped hotel catalog")
    )
)]
struct ApiDoc;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.log_filter);

    let context = AppContext::initialize(config.clone())
        .await
        .expect("failed to initialize application context");

    let app = Router::new()
        .route("/health", get(health))
        .merge(build_hotel_catalog_router(&context))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(port = config.port, "listening on http://localhost:{}", config.port);
    info!("Swagger UI available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("failed to start axum server");

    context.shutdown().await;
    info!("server stopped");
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %error, "failed to listen for shutdown signal");
    }
}
