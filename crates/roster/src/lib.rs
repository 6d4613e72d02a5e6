pub mod csrf;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;

use std::path::Path;

use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;

use crate::{
    database::Database,
    handlers::{create_user, get_user, health_check, index, list_users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::pages::health_check,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::create_user,
    ),
    components(schemas(models::User, handlers::CreateUserRequest)),
    tags(
        (name = "users", description = "User directory endpoints"),
        (name = "system", description = "Liveness and diagnostics")
    )
)]
pub struct ApiDoc;

pub fn create_router(pool: PgPool, asset_dir: String) -> Router {
    let db = Database::new(pool);
    let assets = Path::new(&asset_dir);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        // User directory API (consumed by the client-side table component)
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        // Static asset bundles
        .nest_service("/css", ServeDir::new(assets.join("css")))
        .nest_service("/js", ServeDir::new(assets.join("js")))
        .layer(middleware::from_fn(csrf::csrf_middleware))
        .layer(Extension(db))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(pool: PgPool, asset_dir: String, port: u16) -> anyhow::Result<()> {
    let app = create_router(pool, asset_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    println!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
