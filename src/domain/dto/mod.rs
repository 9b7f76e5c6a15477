//! # Data Transfer Objects Module
//!
//! 클라이언트와 주고받는 JSON 계약을 정의합니다.
//!
//! ## 계층 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/   ← 생성, 전체 수정, 부분 수정, 생년월일 범위 조회
//!     └── response/  ← 사용자 응답
//! ```
//!
//! ## 변환 흐름
//!
//! ```text
//! JSON ──serde──▶ Request DTO ──validate()──▶ User (entity) ──service──▶ UserResponse ──serde──▶ JSON
//! ```

pub mod users;

pub use users::*;
