//! # 상품 모델 정의
//!
//! `products` 컬렉션의 문서를 표현합니다.
//! 이 서비스가 실제로 읽는 필드(`_id`, `category`, `reviews`)만 타입을 정하고,
//! 상품명/가격/상태/이미지를 포함한 나머지는 저장된 그대로 전달합니다.

use super::Passthrough;
use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};

/// 예전에 상품마다 저장하던 평점 필드. 지금은 리뷰에서 `averageRating`을 계산합니다.
pub const LEGACY_RATING_FIELD: &str = "individualRating";

/// 추천 상품 응답에 포함되는 필드 (MongoDB `$project` 대상)
pub const FEATURED_FIELDS: [&str; 7] = [
    "_id",
    "image",
    "productName",
    "category",
    "price",
    "status",
    "reviews",
];

/// `products` 컬렉션의 문서 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// JSON 응답에서는 24자리 16진수 문자열로 직렬화됩니다
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    /// `Category.title`과 일치해야 하는 라벨. 없으면 "others"로 분류됩니다
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    /// 저장되지 않는 파생 필드. 응답 직전에 `services::reviews`가 채웁니다
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// productName, price, status, image 등
    #[serde(flatten)]
    pub extra: Passthrough,
}

/// 상품에 포함된 리뷰
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// 숫자가 아니면 역직렬화 단계에서 실패합니다 (NaN을 만들지 않음)
    pub rating: f64,
    #[serde(flatten)]
    pub extra: Passthrough,
}
