//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 상품/카테고리 저장소와 직접 상호작용하는 코드를 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)는 `Catalog` 트레이트만 알고, 실제 저장소는 시작 시점에 주입됩니다.
//!
//! 각 하위 모듈:
//! - `mongo`: MongoDB 구현 (운영 환경)
//! - `memory`: 메모리 구현 (테스트 전용)

pub mod mongo;

#[cfg(test)]
pub mod memory;

pub use mongo::MongoCatalog;

use crate::{
    error::AppError,
    models::{Category, Product},
    services::categories::ProductFilter,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

/// 상품/카테고리 문서 저장소가 제공해야 하는 기능
///
/// 필터 조회, 무작위 샘플링, 필드 일괄 삭제는 모두 저장소 쪽 기능으로 보고
/// 이 계층에서 직접 구현하지 않습니다.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// 모든 상품을 조회합니다.
    async fn list_products(&self) -> Result<Vec<Product>, AppError>;

    /// 상품 `size`개를 무작위로 뽑아 `FEATURED_FIELDS`만 남겨 반환합니다.
    async fn sample_products(&self, size: u32) -> Result<Vec<Product>, AppError>;

    /// 조건에 맞는 상품을 조회합니다.
    async fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError>;

    /// ID로 상품 하나를 조회합니다. 없으면 `Ok(None)`.
    async fn get_product(&self, id: &ObjectId) -> Result<Option<Product>, AppError>;

    /// 모든 카테고리를 저장된 순서대로 조회합니다.
    async fn list_categories(&self) -> Result<Vec<Category>, AppError>;

    /// 모든 상품에서 `field`를 제거하고, 실제로 변경된 문서 수를 반환합니다.
    async fn unset_product_field(&self, field: &str) -> Result<u64, AppError>;
}
