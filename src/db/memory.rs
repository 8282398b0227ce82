//! 테스트용 메모리 저장소.
//!
//! 샘플링은 무작위 대신 앞에서부터 `size`개를 잘라 결정적으로 동작합니다.

use crate::{
    db::Catalog,
    error::AppError,
    models::{Category, Product, FEATURED_FIELDS},
    services::categories::ProductFilter,
};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use std::sync::Mutex;

pub struct MemoryCatalog {
    products: Mutex<Vec<Product>>,
    categories: Vec<Category>,
}

impl MemoryCatalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products: Mutex::new(products),
            categories,
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products())
    }

    async fn sample_products(&self, size: u32) -> Result<Vec<Product>, AppError> {
        let products = self
            .products()
            .into_iter()
            .take(size as usize)
            .map(|mut product| {
                // $project: FEATURED_FIELDS에 없는 필드는 버립니다
                let projected: Document = FEATURED_FIELDS
                    .iter()
                    .filter_map(|&field| {
                        product.extra.get(field).map(|value| (field.to_string(), value.clone()))
                    })
                    .collect();
                product.extra = projected.into();
                product.average_rating = None;
                product
            })
            .collect();
        Ok(products)
    }

    async fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        Ok(self
            .products()
            .into_iter()
            .filter(|product| filter.matches(product))
            .collect())
    }

    async fn get_product(&self, id: &ObjectId) -> Result<Option<Product>, AppError> {
        Ok(self.products().into_iter().find(|product| &product.id == id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.categories.clone())
    }

    async fn unset_product_field(&self, field: &str) -> Result<u64, AppError> {
        let mut products = self.products.lock().unwrap();
        let modified = products
            .iter_mut()
            .filter_map(|product| product.extra.remove(field))
            .count();
        Ok(modified as u64)
    }
}
