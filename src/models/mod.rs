//! # 데이터 모델 모듈
//!
//! MongoDB 문서와 JSON 응답에 쓰이는 데이터 구조체(struct)들을 정의합니다.
//! - `product`: 상품(Product)과 리뷰(Review)
//! - `category`: 카테고리(Category)
//! - `passthrough`: 타입을 정하지 않은 필드를 그대로 전달하는 `Passthrough`
//!
//! `pub use X::*;`로 재공개하여 `crate::models::Product`처럼 짧게 접근합니다.

pub mod category;
pub mod passthrough;
pub mod product;

pub use category::*;
pub use passthrough::*;
pub use product::*;
