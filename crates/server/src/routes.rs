pub mod media;
pub mod resources;
pub mod users;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, Message};
use configs::{MediaConfig, STATIC_MOUNT};
use models::{calculator_setting, catalog, lead, portfolio, project, service_category, story, user};

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(
    get, path = "/", tag = "health",
    responses((status = 200, description = "API banner", body = crate::openapi::MessageResponse))
)]
pub async fn root() -> Json<Message> {
    Json(Message::new("Telegram Web App API is running!"))
}

/// Build the full application router: resource kinds, users, media, static files and docs.
pub fn build_router(state: AppState, media: &MediaConfig, cors: CorsLayer) -> Router {
    let mut doc = ApiDoc::openapi();

    let mut api = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    // 每种资源都挂载 list / upsert / batch 三个端点
    api = resources::mount::<catalog::Entity>(api, &mut doc);
    api = resources::mount::<lead::Entity>(api, &mut doc);
    api = resources::mount::<project::Entity>(api, &mut doc);
    api = resources::mount::<portfolio::Entity>(api, &mut doc);
    api = resources::mount::<service_category::Entity>(api, &mut doc);
    api = resources::mount::<story::Entity>(api, &mut doc);
    api = resources::mount::<calculator_setting::Entity>(api, &mut doc);
    api = resources::mount::<user::Entity>(api, &mut doc);

    let api = api
        .route("/api/v1/users/register", post(users::register))
        .route("/api/v1/users/:telegram_id", get(users::get_user))
        .route("/api/v1/media/upload", post(media::upload))
        .route("/api/v1/media/upload-multiple", post(media::upload_multiple))
        .layer(DefaultBodyLimit::max(media.max_upload_bytes));

    api.with_state(state)
        .nest_service(STATIC_MOUNT, ServeDir::new(&media.static_dir))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", doc))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
