//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 `serde`로 직렬화되어 응답 본문으로 그대로 사용될 수 있으며,
//! 저장소([`crate::repositories`])는 엔티티 값을 소유한 채 보관합니다.

pub mod users;

pub use users::*;
