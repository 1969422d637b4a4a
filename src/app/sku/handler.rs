//! SKU 处理器

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::debug;

use super::{
    model::{Sku, SkuRequest, UpsertQuery},
    service::SkuService,
};
use crate::common::error::{CoreError, INVALID_QUERY, MISSING_FIELDS, SKU_NOT_FOUND};

#[derive(Clone)]
pub struct AppState {
    pub sku_service: SkuService,
}

/// GET /api/skus
pub async fn list_skus(State(state): State<AppState>) -> Result<Json<Vec<Sku>>, CoreError> {
    let skus = state.sku_service.list_all().await?;
    Ok(Json(skus))
}

/// GET /api/skus/:code
pub async fn get_sku(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Sku>, CoreError> {
    state
        .sku_service
        .get_by_code(&code)
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::NotFound(SKU_NOT_FOUND.to_string()))
}

/// POST /api/skus[?target=code]
///
/// 没有 `target` 时创建（201），否则更新或改名（200）。
pub async fn upsert_sku(
    State(state): State<AppState>,
    query: Result<Query<UpsertQuery>, QueryRejection>,
    payload: Result<Json<SkuRequest>, JsonRejection>,
) -> Result<Response, CoreError> {
    let Query(query) = query.map_err(|rejection| {
        debug!("查询参数解析失败: {}", rejection);
        CoreError::Validation(INVALID_QUERY.to_string())
    })?;

    let input = match payload {
        Ok(Json(request)) => request.validated()?,
        Err(rejection) => {
            debug!("请求体解析失败: {}", rejection);
            return Err(CoreError::Validation(MISSING_FIELDS.to_string()));
        }
    };

    match query.target() {
        Some(target) => {
            let sku = state.sku_service.update(target, input).await?;
            Ok(Json(sku).into_response())
        }
        None => {
            let sku = state.sku_service.create(input).await?;
            Ok((StatusCode::CREATED, Json(sku)).into_response())
        }
    }
}

/// DELETE /api/skus/:code
pub async fn delete_sku(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, CoreError> {
    if state.sku_service.delete(&code).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::NotFound(SKU_NOT_FOUND.to_string()))
    }
}

/// DELETE /api/skus/，空路径段不对应任何 SKU
pub async fn delete_without_code() -> CoreError {
    CoreError::NotFound(SKU_NOT_FOUND.to_string())
}
