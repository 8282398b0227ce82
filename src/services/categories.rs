//! # 카테고리 해석(Category Resolution) 서비스
//!
//! URL의 카테고리 파라미터를 상품 조회 조건(`ProductFilter`)으로 바꿉니다.
//!
//! ## 규칙
//! - `"others"`: 알려진 카테고리 제목 어디에도 속하지 않는 상품 + `category`가 정확히 `"Others"`인 상품
//! - 그 밖의 값: slug가 일치하는 첫 번째 카테고리의 제목으로 조회
//! - 일치하는 slug가 없으면 `None` (핸들러는 빈 배열로 응답)
//!
//! 카테고리 목록은 요청마다 DB에서 새로 읽어 넘겨받습니다 (캐시 없음).

use crate::models::{Category, Product};
use mongodb::bson::Bson;

/// "분류되지 않은 상품" 묶음을 요청하는 예약어
pub const OTHERS_SLUG: &str = "others";

/// 상품에 직접 붙은 "Others" 라벨
pub const OTHERS_TITLE: &str = "Others";

/// 상품 조회 조건
///
/// 카테고리 제목은 저장된 BSON 값 그대로 비교합니다.
/// MongoDB 구현은 이 값을 쿼리 문서로 바꾸고,
/// 메모리 구현은 `matches()`로 직접 걸러냅니다.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    /// `category`가 이 제목과 정확히 같은 상품
    Title(Bson),
    /// `category`가 `known_titles`에 없거나(필드 자체가 없는 경우 포함) `"Others"`인 상품
    Uncategorized { known_titles: Vec<Bson> },
}

impl ProductFilter {
    /// 상품이 조건에 맞는지 검사합니다.
    pub fn matches(&self, product: &Product) -> bool {
        let category = product.category.as_deref();
        match self {
            ProductFilter::Title(title) => category.is_some() && title.as_str() == category,
            ProductFilter::Uncategorized { known_titles } => match category {
                Some(OTHERS_TITLE) => true,
                Some(label) => !known_titles.iter().any(|title| title.as_str() == Some(label)),
                None => true,
            },
        }
    }
}

/// 카테고리 파라미터를 조회 조건으로 해석합니다.
///
/// slug가 중복되면 목록 순서상 첫 번째 카테고리가 선택됩니다.
/// 선택된 카테고리에 제목이 없으면 일치하는 상품도 없으므로 `None`입니다.
pub fn resolve_category(param: &str, categories: &[Category]) -> Option<ProductFilter> {
    if param == OTHERS_SLUG {
        let known_titles = categories
            .iter()
            .filter_map(|category| category.title.clone())
            .collect();
        return Some(ProductFilter::Uncategorized { known_titles });
    }

    categories
        .iter()
        .find(|category| category.has_slug(param))
        .and_then(|category| category.title.clone())
        .map(ProductFilter::Title)
}
