//! # 유지보수(Maintenance) 핸들러
//!
//! ## 엔드포인트
//! - `PATCH /api/v1/mon-moto-update` → `{ "status": "done" }`
//!
//! 모든 상품에서 예전 평점 필드(`individualRating`)를 한 번에 지우는 일회성 마이그레이션입니다.
//! 필터가 없고 트랜잭션도 쓰지 않으므로, 실행 도중의 조회 요청은
//! 갱신된 문서와 아직 갱신되지 않은 문서를 섞어서 볼 수 있습니다.

use crate::{error::AppError, models::LEGACY_RATING_FIELD, routes::AppState};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `PATCH /api/v1/mon-moto-update`
pub async fn remove_legacy_rating(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let modified = state
        .catalog
        .unset_product_field(LEGACY_RATING_FIELD)
        .await?;
    tracing::info!("{} documents updated", modified);

    Ok(Json(json!({ "status": "done" })))
}
