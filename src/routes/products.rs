//! # 상품(Product) 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/products | `list_products` | 전체 상품 목록 |
//! | GET | /api/v1/products/featured | `featured_products` | 무작위 추천 상품 6개 |
//! | GET | /api/v1/products/categories/{category} | `products_by_category` | 카테고리별 상품 |
//! | GET | /api/v1/products/{id} | `get_product` | 단일 상품 |
//!
//! 전체 목록을 제외한 모든 응답에는 리뷰로 계산한 `averageRating`이 붙습니다.

use crate::{
    error::AppError,
    models::Product,
    routes::AppState,
    services::{categories, reviews},
};
use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::oid::ObjectId;

/// 추천 상품 개수
pub const FEATURED_SAMPLE_SIZE: u32 = 6;

/// `GET /api/v1/products` → `[Product, ...]`
///
/// 저장된 문서를 그대로 반환합니다 (평점 집계 없음).
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.catalog.list_products().await?;
    Ok(Json(products))
}

/// `GET /api/v1/products/featured` — 무작위로 뽑은 상품 6개
///
/// 샘플링과 필드 투영(projection)은 저장소가 처리합니다.
pub async fn featured_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let mut products = state.catalog.sample_products(FEATURED_SAMPLE_SIZE).await?;
    reviews::apply_average_ratings(&mut products);
    Ok(Json(products))
}

/// `GET /api/v1/products/categories/{category}` — 카테고리 slug로 상품 조회
///
/// 카테고리 목록을 매 요청마다 새로 읽어 slug를 해석합니다.
/// 알 수 없는 slug는 에러가 아니라 빈 배열(200)로 응답합니다.
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Product>>, AppError> {
    let all_categories = state.catalog.list_categories().await?;

    // let-else: 해석에 실패하면 DB를 더 조회하지 않고 바로 빈 목록을 반환
    let Some(filter) = categories::resolve_category(&category, &all_categories) else {
        tracing::debug!("No category matches slug {:?}", category);
        return Ok(Json(Vec::new()));
    };

    let mut products = state.catalog.find_products(&filter).await?;
    reviews::apply_average_ratings(&mut products);
    Ok(Json(products))
}

/// `GET /api/v1/products/{id}` — 단일 상품 조회
///
/// - id가 ObjectId 형식(24자리 16진수)이 아니면 DB 조회 없이 400
/// - 상품이 없으면 404
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let object_id = ObjectId::parse_str(&id)
        .map_err(|_| AppError::BadRequest(format!("Invalid product id: {}", id)))?;

    let mut product = state
        .catalog
        .get_product(&object_id)
        .await?
        .ok_or(AppError::NotFound)?;

    reviews::apply_average_rating(&mut product);
    Ok(Json(product))
}
