//! # 사용자 DTO 모듈
//!
//! 사용자 리소스(`/users`)에 대한 요청/응답 DTO를 제공합니다.
//!
//! | 엔드포인트 | 요청 DTO | 응답 DTO |
//! |------------|----------|----------|
//! | `POST /users` | [`CreateUserRequest`](request::CreateUserRequest) | [`UserResponse`](response::UserResponse) |
//! | `PATCH /users/{email}` | [`UpdateUserFieldsRequest`](request::UpdateUserFieldsRequest) | [`UserResponse`](response::UserResponse) |
//! | `PUT /users/{email}` | [`UpdateUserRequest`](request::UpdateUserRequest) | [`UserResponse`](response::UserResponse) |
//! | `GET /users?from=&to=` | [`BirthDateRangeQuery`](request::BirthDateRangeQuery) | `Vec<UserResponse>` |

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
