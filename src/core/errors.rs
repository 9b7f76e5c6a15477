//! # Application Error Handling System
//!
//! 사용자 관리 서비스의 통합 에러 처리 시스템입니다.
//! `thiserror`로 정의한 단일 열거형 [`AppError`]가 `actix_web::ResponseError`를
//! 구현하여, 서비스 계층에서 반환한 에러가 그대로 HTTP 응답으로 변환됩니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 | 응답 본문 |
//! |------|-----------|-----------|
//! | `ValidationError` | 400 Bad Request | `{"errors": [...]}` |
//! | `EligibilityError` | 400 Bad Request | `{"error": "..."}` |
//! | `RangeError` | 400 Bad Request | `{"error": "..."}` |
//! | `NotFound` | 404 Not Found | `{"error": "..."}` |
//! | `InternalError` | 500 Internal Server Error | `{"error": "..."}` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn delete_user(&self, email: &str) -> Result<(), AppError> {
//!     self.user_repo
//!         .remove_by_email(email)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("User with email: {} does not exist.", email)))?;
//!     Ok(())
//! }
//! ```

use std::borrow::Cow;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 요청 본문이나 쿼리 파라미터가 형식 요구사항을 만족하지 않을 때 발생합니다.
    /// 필드별 메시지 목록을 그대로 클라이언트에게 전달하며 400 Bad Request로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 빈 이메일, 이름
    /// - 이메일 형식 오류
    /// - 생년월일 누락 또는 미래 날짜
    /// - 알 수 없는 필드가 포함된 부분 수정 요청
    /// - 잘못된 JSON 또는 날짜 문자열
    #[error("Validation error: {}", .0.join("; "))]
    ValidationError(Vec<String>),

    /// 가입 연령 미달 에러 (400 Bad Request)
    #[error("{0}")]
    EligibilityError(String),

    /// 생년월일 조회 범위 에러 (400 Bad Request)
    ///
    /// `from`이 `to`보다 앞서지 않는 경우 발생하며, 메시지에 두 날짜가 모두 포함됩니다.
    #[error("{0}")]
    RangeError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 주어진 이메일을 가진 사용자가 저장소에 없을 때 발생합니다.
    /// 404 Not Found로 응답됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// let user = user_repo.find_by_email(email).await?
    ///     .ok_or_else(|| AppError::NotFound(
    ///         format!("User with email: {} does not exist.", email)
    ///     ))?;
    /// ```
    #[error("{0}")]
    NotFound(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류 시 발생합니다 (예: 저장소 락 오염).
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// `validator` 검증 결과를 필드 순서가 고정된 메시지 목록으로 변환합니다.
    ///
    /// `field_errors()`는 해시맵이므로 순서가 보장되지 않습니다.
    /// `field_order`에 나열된 순서대로 정렬하고, 목록에 없는 필드는 뒤로 보냅니다.
    /// 필드명은 Rust 이름(`first_name`)과 JSON 이름(`firstName`) 모두 인식합니다.
    pub fn from_validation(errors: &ValidationErrors, field_order: &[&str]) -> Self {
        let rank = |field: &str| {
            let normalized: String = field.chars().filter(|c| *c != '_').collect();
            field_order
                .iter()
                .position(|f| f.eq_ignore_ascii_case(&normalized))
                .unwrap_or(field_order.len())
        };

        let mut fields: Vec<(String, Vec<String>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let field = field.to_string();
                let messages = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("{} is invalid", field),
                    })
                    .collect();
                (field, messages)
            })
            .collect();

        fields.sort_by_key(|(field, _)| rank(field));

        AppError::ValidationError(fields.into_iter().flat_map(|(_, messages)| messages).collect())
    }

    fn body_message(&self) -> Cow<'_, str> {
        match self {
            AppError::EligibilityError(msg)
            | AppError::RangeError(msg)
            | AppError::NotFound(msg) => Cow::Borrowed(msg.as_str()),
            _ => Cow::Owned(self.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::EligibilityError(_)
            | AppError::RangeError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 `{"errors": [...]}`, 나머지는 `{"error": "..."}` 형식입니다.
    /// 5xx 에러는 `error!`, 클라이언트 에러는 `warn!` 레벨로 기록합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        } else {
            log::warn!("요청 거부됨 ({}): {}", status.as_u16(), self);
        }

        match self {
            AppError::ValidationError(messages) => HttpResponse::build(status)
                .json(serde_json::json!({ "errors": messages })),
            _ => HttpResponse::build(status)
                .json(serde_json::json!({ "error": self.body_message() })),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use validator::ValidationError;

    async fn body_json(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError(vec!["email must not be blank".to_string()]);
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_eligibility_and_range_errors_are_bad_requests() {
        let eligibility = AppError::EligibilityError("too young".to_string());
        let range = AppError::RangeError("bad range".to_string());

        assert_eq!(eligibility.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(range.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User with email: a@b.c does not exist.".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_validation_body_lists_every_message() {
        let body = body_json(AppError::ValidationError(vec![
            "email must not be blank".to_string(),
            "lastName must not be blank".to_string(),
        ]))
        .await;

        assert_eq!(
            body,
            serde_json::json!({ "errors": ["email must not be blank", "lastName must not be blank"] })
        );
    }

    #[actix_web::test]
    async fn test_not_found_body_carries_plain_message() {
        let body = body_json(AppError::NotFound(
            "User with email: st@gmail.com does not exist.".to_string(),
        ))
        .await;

        assert_eq!(body["error"], "User with email: st@gmail.com does not exist.");
    }

    #[test]
    fn test_from_validation_orders_fields() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "birth_date",
            ValidationError::new("past").with_message("birthDate must be a past date".into()),
        );
        errors.add(
            "email",
            ValidationError::new("blank").with_message("email must not be blank".into()),
        );
        errors.add(
            "first_name",
            ValidationError::new("blank").with_message("firstName must not be blank".into()),
        );

        let error = AppError::from_validation(&errors, &["email", "firstName", "lastName", "birthDate"]);

        match error {
            AppError::ValidationError(messages) => assert_eq!(
                messages,
                vec![
                    "email must not be blank",
                    "firstName must not be blank",
                    "birthDate must be a past date",
                ]
            ),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
