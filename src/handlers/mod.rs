//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 주요 특징
//!
//! ### 의존성 주입
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 등록되고,
//! 핸들러는 추출자로 전달받습니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_user(
//!     user_service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let request = payload.into_inner().validated()?;
//!     let created = user_service.create(User::try_from(request)?).await?;
//!     Ok(HttpResponse::Created().json(UserResponse::from(created)))
//! }
//! ```
//!
//! ### 에러 처리
//! - **Result 패턴**: 핸들러는 `Result<HttpResponse, AppError>`를 반환
//! - **자동 변환**: `AppError`의 `ResponseError` 구현이 상태 코드와 JSON 본문을 결정
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 관리 엔드포인트
//!   - 사용자 등록 (`POST /users`)
//!   - 부분 수정 (`PATCH /users/{email}`)
//!   - 전체 수정 (`PUT /users/{email}`)
//!   - 사용자 삭제 (`DELETE /users/{email}`)
//!   - 생년월일 범위 조회 (`GET /users?from=&to=`)

pub mod users;
