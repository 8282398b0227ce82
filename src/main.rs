//! # PC 빌더 카탈로그 API 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 읽기 (DB 자격 증명이 없으면 여기서 종료)
//! 4. MongoDB 연결 및 연결 확인(ping)
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작

mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;

use anyhow::Result;
use config::Config;
use db::MongoCatalog;
use routes::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG 환경변수가 없으면 이 크레이트, tower_http, axum을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pc_builder_api=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // DB_USER / DB_PASS가 없으면 어떤 변수가 빠졌는지 알려주고 종료합니다.
    let config = Config::from_env()?;
    tracing::info!("Starting PC builder API on {}:{}", config.host, config.port);

    // ── 4단계: MongoDB 연결 ──
    // 연결 확인(ping)에 실패하면 요청을 받기 전에 종료합니다.
    let catalog = MongoCatalog::connect(&config).await?;

    // ── 5단계: 애플리케이션 상태와 라우터 ──
    // 저장소는 프로세스 전체에서 하나만 만들고 Arc로 모든 핸들러에 주입합니다.
    let state = AppState {
        catalog: Arc::new(catalog),
    };
    let app = routes::app(state);

    // ── 6단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
