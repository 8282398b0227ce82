//! # 비즈니스 로직 모듈
//!
//! DB 접근이나 HTTP와 무관한 순수 로직을 모아둔 모듈입니다.
//! - `categories`: URL 카테고리 slug → 상품 조회 조건
//! - `reviews`: 리뷰 목록 → 평균 평점

pub mod categories;
pub mod reviews;
