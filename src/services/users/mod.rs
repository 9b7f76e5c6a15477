//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 최소 가입 연령 검사 후 등록
//! - 이메일 기준 부분/전체 수정 및 삭제
//! - 생년월일 개구간 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let created = user_service.create(user).await?;
//! let users = user_service.get_users_by_birth_date_range(from, to).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
