//! 사용자 관리 서비스 백엔드
//!
//! Rust 기반의 메모리 내 사용자 관리 HTTP 서비스입니다.
//! 사용자 등록, 부분/전체 수정, 삭제, 생년월일 범위 조회를 JSON REST API로 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 최소 가입 연령 검사를 거친 등록, 이메일 기준 수정/삭제
//! - **입력 검증**: validator 기반 필드 검증, 필드 순서대로 정렬된 에러 메시지
//! - **범위 조회**: 생년월일 개구간 필터링
//! - **메모리 저장소**: 프로세스 수명 동안 유지되는 `RwLock` 기반 목록
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RwLock<Vec<..>> │ ← 메모리 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_management_service::repositories::users::InMemoryUserRepository;
//! use user_management_service::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(InMemoryUserRepository::new()), 18);
//! let created = user_service.create(user).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
