//! # 카테고리 모델 정의
//!
//! `categories` 컬렉션의 문서를 표현합니다.
//! 카테고리는 사람이 읽는 제목(`title`)과 URL에 쓰는 식별자(`slug`)를 함께 가집니다.
//! 상품은 `category` 필드에 제목을 저장하고, 클라이언트는 slug로 카테고리를 요청합니다.
//!
//! 문서는 이 서비스 밖에서 작성되므로 `title`과 `slug`도 저장된 BSON 값 그대로 받습니다.

use super::{serialize_plain, Passthrough};
use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string, Bson};
use serde::{Deserialize, Serialize};

/// 카테고리 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    /// 정식 라벨 (예: "Power Supply Unit"). `Product.category`와 비교됩니다
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_plain")]
    pub title: Option<Bson>,
    /// URL 식별자 (예: "power-supply-unit")
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_plain")]
    pub slug: Option<Bson>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

impl Category {
    /// 저장된 slug가 문자열이고 `param`과 정확히 같으면 true.
    /// slug가 없는 카테고리는 어떤 파라미터와도 일치하지 않습니다.
    pub fn has_slug(&self, param: &str) -> bool {
        self.slug.as_ref().and_then(Bson::as_str) == Some(param)
    }
}
