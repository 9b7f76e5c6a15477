//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 트레이트와 메모리 기반 구현체
//! [`InMemoryUserRepository`](user_repo::InMemoryUserRepository)를 제공합니다.

pub mod user_repo;

pub use user_repo::{InMemoryUserRepository, UserMutation, UserRepository};
