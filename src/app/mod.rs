//! 应用层：路由装配

pub mod sku;

use axum::{middleware, response::Json, routing::get, Router};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::common::middleware::request_logging_middleware;
use sku::{handler, service::SkuService};

/// 构建完整的应用路由，包含中间件
pub fn build_router(sku_service: SkuService, timeout: Duration) -> Router {
    let state = handler::AppState { sku_service };

    Router::new()
        .route(
            "/api/skus",
            get(handler::list_skus).post(handler::upsert_sku),
        )
        // 空路径段等同于集合路由
        .route(
            "/api/skus/",
            get(handler::list_skus)
                .post(handler::upsert_sku)
                .delete(handler::delete_without_code),
        )
        .route(
            "/api/skus/:code",
            get(handler::get_sku).delete(handler::delete_sku),
        )
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// 健康检查
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
