//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입 대신 [`UserRepository`](users::UserRepository) 트레이트에
//! 의존하며, 실행 시에는 프로세스 메모리에 사용자를 보관하는
//! [`InMemoryUserRepository`](users::InMemoryUserRepository)가 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = user_repo.find_by_email("bob@gmail.com").await?;
//! ```

pub mod users;
