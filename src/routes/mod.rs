//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `categories`: 카테고리 목록
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `maintenance`: 일회성 데이터 정리 작업
//! - `products`: 상품 조회 (전체, 추천, 카테고리별, 단건)

pub mod categories;
pub mod health;
pub mod maintenance;
pub mod products;

pub use categories::*;
pub use health::*;
pub use maintenance::*;
pub use products::*;

use crate::db::Catalog;
use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 저장소는 시작 시점에 한 번 만들어 `Arc`로 공유합니다.
/// 테스트에서는 같은 자리에 메모리 저장소를 넣습니다.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
}

/// 전체 라우터를 구성합니다.
///
/// axum 0.8부터 경로 파라미터는 `{id}` 문법을 씁니다.
/// `/products/featured` 같은 고정 경로는 `/products/{id}`보다 먼저 매칭됩니다.
pub fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/products", get(list_products))
        .route("/products/featured", get(featured_products))
        .route("/products/categories/{category}", get(products_by_category))
        .route("/products/{id}", get(get_product))
        .route("/categories", get(list_categories))
        .route("/mon-moto-update", patch(remove_legacy_rating));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_check))
        .nest("/api/v1", api_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::memory::MemoryCatalog,
        models::{Category, Product, Review, LEGACY_RATING_FIELD},
    };
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use mongodb::bson::{self, doc, oid::ObjectId};
    use serde_json::Value;
    use std::collections::BTreeSet;
    use tower::ServiceExt; // oneshot()

    fn category(title: &str, slug: &str) -> Category {
        Category {
            id: ObjectId::new(),
            title: Some(title.into()),
            slug: Some(slug.into()),
            extra: Default::default(),
        }
    }

    fn product(name: &str, category: Option<&str>, ratings: &[f64]) -> Product {
        Product {
            id: ObjectId::new(),
            category: category.map(str::to_string),
            reviews: Some(
                ratings
                    .iter()
                    .map(|&rating| Review {
                        rating,
                        extra: doc! { "comment": "good" }.into(),
                    })
                    .collect(),
            ),
            average_rating: None,
            extra: doc! {
                "productName": name,
                "price": 100.0,
                "status": "In Stock",
                "image": format!("{}.png", name),
                LEGACY_RATING_FIELD: 4.5,
                "keyFeatures": "fast",
            }
            .into(),
        }
    }

    fn fixture_categories() -> Vec<Category> {
        vec![
            category("CPU / Processor", "cpu-processor"),
            category("Motherboard", "motherboard"),
            category("RAM", "ram"),
            category("Others", "others-misc"),
        ]
    }

    fn fixture() -> Arc<MemoryCatalog> {
        let categories = fixture_categories();
        let products = vec![
            product("ryzen-5", Some("CPU / Processor"), &[4.0, 2.0]),
            product("core-i7", Some("CPU / Processor"), &[5.0]),
            product("b650", Some("Motherboard"), &[]),
            product("ddr5-32", Some("RAM"), &[3.0, 4.0, 5.0]),
            product("mouse", Some("Mouse"), &[5.0]),
            product("cable", Some("Others"), &[]),
            product("mystery", None, &[1.0]),
        ];
        Arc::new(MemoryCatalog::new(products, categories))
    }

    async fn send(catalog: Arc<MemoryCatalog>, method: Method, uri: &str) -> (StatusCode, Value) {
        let catalog: Arc<dyn Catalog> = catalog;
        let response = app(AppState { catalog })
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        send(fixture(), Method::GET, uri).await
    }

    fn names(body: &Value) -> BTreeSet<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|p| p["productName"].as_str().unwrap().to_string())
            .collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "success": true }));
    }

    #[tokio::test]
    async fn list_products_returns_stored_documents_unchanged() {
        let (status, body) = get("/api/v1/products").await;
        assert_eq!(status, StatusCode::OK);

        let products = body.as_array().unwrap();
        assert_eq!(products.len(), 7);
        assert!(products.iter().all(|p| p.get("averageRating").is_none()));
        assert_eq!(products[0][LEGACY_RATING_FIELD], 4.5);
    }

    #[tokio::test]
    async fn featured_returns_six_projected_products() {
        let (status, body) = get("/api/v1/products/featured").await;
        assert_eq!(status, StatusCode::OK);

        let products = body.as_array().unwrap();
        assert_eq!(products.len(), 6);

        let expected = set(&[
            "_id",
            "image",
            "productName",
            "category",
            "price",
            "status",
            "reviews",
            "averageRating",
        ]);
        for product in products {
            let keys: BTreeSet<String> = product.as_object().unwrap().keys().cloned().collect();
            assert_eq!(keys, expected);
        }
        assert_eq!(products[0]["averageRating"].as_f64(), Some(3.0));
        assert_eq!(products[2]["averageRating"].as_f64(), Some(0.0));
    }

    #[tokio::test]
    async fn category_slug_returns_exactly_that_category() {
        let (status, body) = get("/api/v1/products/categories/cpu-processor").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), set(&["ryzen-5", "core-i7"]));

        let ryzen = body
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["productName"] == "ryzen-5")
            .unwrap();
        assert_eq!(ryzen["averageRating"].as_f64(), Some(3.0));
    }

    #[tokio::test]
    async fn others_bucket_is_unknown_missing_and_literal_others() {
        let (status, body) = get("/api/v1/products/categories/others").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), set(&["mouse", "cable", "mystery"]));
    }

    #[tokio::test]
    async fn unknown_slug_is_an_empty_list() {
        let (status, body) = get("/api/v1/products/categories/gaming-chairs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn single_product_carries_average_rating() {
        let catalog = fixture();
        let ddr5 = catalog
            .products()
            .into_iter()
            .find(|p| p.extra.get_str("productName").ok() == Some("ddr5-32"))
            .unwrap();

        let (status, body) =
            send(catalog, Method::GET, &format!("/api/v1/products/{}", ddr5.id.to_hex())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["_id"], ddr5.id.to_hex());
        assert_eq!(body["averageRating"].as_f64(), Some(4.0));
        assert_eq!(body["reviews"][0]["comment"], "good");
    }

    #[tokio::test]
    async fn missing_product_is_404() {
        let (status, body) = get(&format!("/api/v1/products/{}", ObjectId::new().to_hex())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn malformed_product_id_is_400() {
        let (status, body) = get("/api/v1/products/not-an-object-id").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "bad_request");
    }

    #[tokio::test]
    async fn list_categories_returns_all() {
        let (status, body) = get("/api/v1/categories").await;
        assert_eq!(status, StatusCode::OK);

        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["CPU / Processor", "Motherboard", "RAM", "Others"]);
        assert_eq!(body[1]["slug"], "motherboard");
    }

    #[tokio::test]
    async fn bulk_update_strips_only_the_legacy_field() {
        let catalog = fixture();
        let before = catalog.products();

        let (status, body) = send(catalog.clone(), Method::PATCH, "/api/v1/mon-moto-update").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "status": "done" }));

        let after = catalog.products();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.into_iter().zip(after) {
            assert!(!new.extra.contains_key(LEGACY_RATING_FIELD));

            let mut expected = old;
            expected.extra.remove(LEGACY_RATING_FIELD);
            assert_eq!(new, expected);
        }
    }

    #[tokio::test]
    async fn bulk_update_is_idempotent() {
        let catalog = fixture();
        send(catalog.clone(), Method::PATCH, "/api/v1/mon-moto-update").await;
        let (status, _) = send(catalog.clone(), Method::PATCH, "/api/v1/mon-moto-update").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(catalog.unset_product_field(LEGACY_RATING_FIELD).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn irregular_stored_documents_do_not_break_listings() {
        let mut products = fixture().products();
        // 이미지가 없고 가격이 문자열인 상품, 제목/slug가 없는 카테고리
        let fan: Product = bson::from_slice(
            &bson::to_vec(&doc! {
                "_id": ObjectId::new(),
                "productName": "case-fan",
                "category": "Cooling",
                "price": "$25",
                "reviews": [{ "rating": 4 }],
            })
            .unwrap(),
        )
        .unwrap();
        let untitled: Category = bson::from_document(doc! {
            "_id": ObjectId::new(),
            "icon": "misc.svg",
        })
        .unwrap();
        products.push(fan.clone());
        let mut categories = fixture_categories();
        categories.push(untitled);
        let catalog = Arc::new(MemoryCatalog::new(products, categories));

        let (status, body) = send(catalog.clone(), Method::GET, "/api/v1/products").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 8);
        assert_eq!(body[7]["price"], "$25");
        assert!(body[7].get("image").is_none());

        let (status, body) = send(catalog.clone(), Method::GET, "/api/v1/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[4]["icon"], "misc.svg");

        let (status, body) =
            send(catalog.clone(), Method::GET, "/api/v1/products/categories/others").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), set(&["mouse", "cable", "mystery", "case-fan"]));

        let uri = format!("/api/v1/products/{}", fan.id.to_hex());
        let (status, body) = send(catalog, Method::GET, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["averageRating"].as_f64(), Some(4.0));
    }
}
