//! # MongoDB 저장소
//!
//! `Catalog` 트레이트의 운영 구현입니다.
//! 모든 함수는 `Collection` 핸들을 통해 비동기로 실행됩니다.
//!
//! ## 컬렉션 구조
//! - `products`: 상품 문서 (리뷰 목록을 내장)
//! - `categories`: 카테고리 문서 (title, slug)

use crate::{
    config::Config,
    db::Catalog,
    error::AppError,
    models::{Category, Product, FEATURED_FIELDS},
    services::categories::{ProductFilter, OTHERS_TITLE},
};
use async_trait::async_trait;
use futures::TryStreamExt; // 커서(Stream)를 Vec으로 모으는 try_collect()
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

/// MongoDB 컬렉션 핸들 묶음
///
/// `Collection`은 내부적으로 클라이언트의 연결 풀을 공유하므로
/// clone해도 새 연결이 생기지 않습니다.
#[derive(Clone)]
pub struct MongoCatalog {
    products: Collection<Product>,
    categories: Collection<Category>,
}

impl MongoCatalog {
    /// 클러스터에 연결하고 `ping`으로 연결을 확인합니다.
    ///
    /// Stable API v1(strict)을 고정합니다. 연결 확인에 실패하면 에러를 반환하므로
    /// 서버는 요청을 받기 전에 종료됩니다.
    pub async fn connect(config: &Config) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(config.mongodb_uri()).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)?;
        client.database("admin").run_command(doc! { "ping": 1 }).await?;
        tracing::info!("DB connected successfully");

        let db = client.database(&config.db_name);
        Ok(Self {
            products: db.collection("products"),
            categories: db.collection("categories"),
        })
    }
}

#[async_trait]
impl Catalog for MongoCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let products: Vec<Product> = self.products.find(doc! {}).await?.try_collect().await?;
        Ok(products)
    }

    async fn sample_products(&self, size: u32) -> Result<Vec<Product>, AppError> {
        // aggregate()는 기본적으로 Document 커서를 반환하므로 with_type으로 Product를 지정합니다
        let products: Vec<Product> = self
            .products
            .aggregate(featured_pipeline(size))
            .with_type::<Product>()
            .await?
            .try_collect()
            .await?;
        Ok(products)
    }

    async fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        let products: Vec<Product> = self
            .products
            .find(filter_document(filter))
            .await?
            .try_collect()
            .await?;
        Ok(products)
    }

    async fn get_product(&self, id: &ObjectId) -> Result<Option<Product>, AppError> {
        let product = self.products.find_one(doc! { "_id": *id }).await?;
        Ok(product)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let categories: Vec<Category> = self.categories.find(doc! {}).await?.try_collect().await?;
        Ok(categories)
    }

    async fn unset_product_field(&self, field: &str) -> Result<u64, AppError> {
        // 빈 필터 {}: 모든 문서가 대상입니다
        let result = self
            .products
            .update_many(doc! {}, unset_update(field))
            .await?;
        Ok(result.modified_count)
    }
}

/// `ProductFilter`를 MongoDB 쿼리 문서로 바꿉니다.
///
/// `$nin`은 `category` 필드가 아예 없는 문서도 포함합니다.
fn filter_document(filter: &ProductFilter) -> Document {
    match filter {
        ProductFilter::Title(title) => doc! { "category": title.clone() },
        ProductFilter::Uncategorized { known_titles } => doc! {
            "$or": [
                { "category": { "$nin": known_titles.clone() } },
                { "category": OTHERS_TITLE },
            ]
        },
    }
}

/// 추천 상품 파이프라인: `$sample` → `$project`
fn featured_pipeline(size: u32) -> Vec<Document> {
    let projection: Document = FEATURED_FIELDS
        .iter()
        .map(|field| (field.to_string(), Bson::Int32(1)))
        .collect();

    vec![
        doc! { "$sample": { "size": size as i64 } },
        doc! { "$project": projection },
    ]
}

/// `{ "$unset": { <field>: 1 } }`
fn unset_update(field: &str) -> Document {
    let mut fields = Document::new();
    fields.insert(field, 1);
    doc! { "$unset": fields }
}
