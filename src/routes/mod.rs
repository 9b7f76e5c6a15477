//! API 라우트 설정 모듈
//!
//! 사용자 관리 엔드포인트와 헬스체크 엔드포인트를 등록하고,
//! 본문/쿼리 추출 실패를 애플리케이션 에러 형식으로 변환하는 설정을 함께 적용합니다.
//!
//! # Features
//!
//! - 사용자 등록/수정/삭제/범위 조회 API 엔드포인트
//! - JSON 본문, 쿼리 파라미터 파싱 실패 시 `{"errors": [...]}` 400 응답
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use crate::services::users::UserService;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 추출자 에러 처리 설정
///
/// 잘못된 JSON, 타입 불일치, 허용되지 않은 키, 누락된 쿼리 파라미터를
/// `AppError::ValidationError`로 변환해 400 `{"errors": [...]}`로 응답합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        AppError::ValidationError(vec![err.to_string()]).into()
    }));

    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("쿼리 파라미터 파싱 실패: {}", err);
        AppError::ValidationError(vec![err.to_string()]).into()
    }));
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /users` - 사용자 등록
/// - `PATCH /users/{email}` - 부분 수정
/// - `PUT /users/{email}` - 전체 수정
/// - `DELETE /users/{email}` - 삭제
/// - `GET /users?from=&to=` - 생년월일 범위 조회
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"email":"bob@gmail.com","firstName":"Bob","lastName":"Reynolds","birthDate":"1988-09-28"}'
///
/// curl "http://localhost:8080/users?from=1990-01-01&to=2000-01-01"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_users_by_birth_date_range)
            .service(handlers::users::update_user_fields)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_management_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "users": 3
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(user_service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = user_service.count_users().await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "users": users
    })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use crate::repositories::users::InMemoryUserRepository;
    use super::*;

    fn app_data() -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new()), 18))
    }

    #[actix_web::test]
    async fn test_health_check_reports_user_count() {
        let app = test::init_service(
            App::new().app_data(app_data()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_management_service");
        assert_eq!(body["users"], 0);
    }

    #[actix_web::test]
    async fn test_malformed_json_returns_errors_array() {
        let app = test::init_service(
            App::new().app_data(app_data()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"].as_array().map(|a| a.len()), Some(1));
    }
}
