//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON/쿼리 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조, 타입, 날짜 형식(`YYYY-MM-DD`), 알 수 없는 필드
//!    → `JsonConfig`/`QueryConfig` 에러 핸들러가 `AppError::ValidationError`로 변환
//! 2. **형식 검증**: 빈 값, 이메일 형식, 과거 날짜 (`validator`)
//! 3. **비즈니스 검증**: 최소 가입 연령, 조회 범위 (서비스 계층)

pub mod create_user;
pub mod update_user;
pub mod update_user_fields;
pub mod birth_date_range;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
pub use update_user_fields::UpdateUserFieldsRequest;
pub use birth_date_range::BirthDateRangeQuery;
