//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 핵심 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//! - **검증 통합**: `validator` 결과를 필드 순서가 고정된 메시지 목록으로 변환
//! - **자동 변환**: `ErrorContext`를 통한 외부 에러 → `InternalError` 변환
//!
//! ## 의존성 전달
//!
//! 전역 컨테이너 대신 `main`에서 저장소와 서비스를 한 번 생성하고
//! `web::Data`로 핸들러에 명시적으로 전달합니다.
//!
//! ```rust,ignore
//! let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user_service = web::Data::new(UserService::new(repository, age_config.min_required_age));
//!
//! App::new()
//!     .app_data(user_service.clone())
//!     .configure(configure_all_routes)
//! ```

pub mod errors;

pub use errors::*;
