//! # 리뷰 평점 집계 서비스
//!
//! 상품에 포함된 리뷰 목록으로 평균 평점(`averageRating`)을 계산합니다.
//! 평점은 DB에 저장하지 않고, 응답할 때마다 현재 리뷰 목록으로 다시 계산합니다.
//!
//! 이 모듈의 함수들:
//! - `average_rating()`: 리뷰 목록의 산술 평균 (없거나 비어 있으면 0)
//! - `apply_average_rating()`: 상품 하나에 평균 평점을 채움
//! - `apply_average_ratings()`: 상품 목록 전체에 평균 평점을 채움

use crate::models::{Product, Review};

/// 리뷰 평점의 산술 평균을 계산합니다.
///
/// `reviews`가 `None`이거나 비어 있으면 `0.0`을 반환합니다.
/// 반올림하지 않습니다.
pub fn average_rating(reviews: Option<&[Review]>) -> f64 {
    match reviews {
        Some(reviews) if !reviews.is_empty() => {
            let total: f64 = reviews.iter().map(|review| review.rating).sum();
            total / reviews.len() as f64
        }
        _ => 0.0,
    }
}

/// 상품 하나의 `average_rating`을 채웁니다 (제자리 수정).
pub fn apply_average_rating(product: &mut Product) {
    // .as_deref(): Option<Vec<Review>> → Option<&[Review]>
    product.average_rating = Some(average_rating(product.reviews.as_deref()));
}

/// 상품 목록 전체에 평균 평점을 채웁니다.
pub fn apply_average_ratings(products: &mut [Product]) {
    products.iter_mut().for_each(apply_average_rating);
}
