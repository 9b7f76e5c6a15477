//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 보관되는 핵심 객체 (User)
//! └── DTOs          - HTTP 요청/응답 계약 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 저장소에 그대로 보관되는 [`User`](entities::users::User) 엔티티를 정의합니다.
//! 이메일이 식별 키 역할을 하며, 나머지 필드는 수정 요청으로 교체됩니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! 클라이언트와 주고받는 JSON 구조를 정의합니다. 요청 DTO는 `validator`로
//! 형식 규칙을 검증하고, 엔티티로 변환된 뒤 서비스 계층에 전달됩니다.
//! JSON 필드명은 모두 camelCase(`firstName`, `birthDate` 등)를 사용합니다.

pub mod entities;
pub mod dto;
