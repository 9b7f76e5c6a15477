//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.
//! 저장소는 `Arc<dyn UserRepository>`로 전달받아 구현체와 분리됩니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (등록, 부분/전체 수정, 삭제)
//! - 최소 가입 연령 검사
//! - 생년월일 범위 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo, age_config.min_required_age);
//! let app_data = web::Data::new(user_service);
//! ```

pub mod users;
