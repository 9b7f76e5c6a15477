//! # 사용자 관련 응답 DTO 모듈
//!
//! 서비스 계층이 반환한 [`User`](crate::domain::entities::users::User) 엔티티를
//! 클라이언트 응답 JSON으로 변환합니다.

pub mod user_response;

pub use user_response::UserResponse;
