//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /` → `{ "success": true }`
//!
//! DB를 조회하지 않으므로 프로세스가 살아 있는지만 확인합니다.

use axum::Json;
use serde_json::{json, Value};

/// `GET /` — 서버 상태를 확인합니다.
///
/// `Result`를 사용하지 않으므로 이 핸들러는 실패하지 않습니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "success": true
    }))
}
