//! # 카테고리 API 라우트 핸들러
//!
//! - `GET /api/v1/categories` → `[Category, ...]`

use crate::{error::AppError, models::Category, routes::AppState};
use axum::{extract::State, Json};

/// 전체 카테고리 목록을 조회합니다.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.catalog.list_categories().await?;
    Ok(Json(categories))
}
