//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 등록을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 실패 메시지 |
//! |------|------|-------------|
//! | `email` | 공백 불가 | `email must not be blank` |
//! | `email` | 이메일 형식 (공백이 아닐 때만) | `email must be a well-formed email address` |
//! | `firstName` | 공백 불가 | `firstName must not be blank` |
//! | `lastName` | 공백 불가 | `lastName must not be blank` |
//! | `birthDate` | 필수 | `birthDate must not be null` |
//! | `birthDate` | 오늘 이전 | `birthDate must be a past date` |
//!
//! 생년월일 규칙은 구조체 수준(schema) 검증으로 수행되어 다른 필드 에러와 함께 보고됩니다.
//! `address`, `phoneNumber`는 검증하지 않습니다. 누락된 문자열 필드는 빈 문자열로
//! 역직렬화되어 "blank" 규칙에 걸립니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let request = payload.into_inner().validated()?;
//! let user = User::try_from(request)?;
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};
use crate::core::errors::AppError;
use crate::domain::entities::users::User;

/// 새로운 사용자 등록을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "bob@gmail.com",
///   "firstName": "Bob",
///   "lastName": "Reynolds",
///   "birthDate": "1988-09-28",
///   "address": "Kyiv, Shevchenka str., 45",
///   "phoneNumber": "+380985673535"
/// }
/// ```
///
/// # 에러 응답 예제
///
/// ```json
/// {
///   "errors": ["email must be a well-formed email address"]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_birth_date", skip_on_field_errors = false))]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_first_name"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_last_name"))]
    pub last_name: String,

    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub phone_number: String,
}

impl CreateUserRequest {
    /// 검증 메시지 정렬 순서
    pub const FIELD_ORDER: [&'static str; 4] = ["email", "firstName", "lastName", "birthDate"];

    /// 검증을 수행하고 실패 시 정렬된 메시지 목록을 담은 `ValidationError`를 반환합니다.
    pub fn validated(self) -> Result<Self, AppError> {
        self.validate()
            .map_err(|e| AppError::from_validation(&e, &Self::FIELD_ORDER))?;
        Ok(self)
    }
}

impl TryFrom<CreateUserRequest> for User {
    type Error = AppError;

    fn try_from(request: CreateUserRequest) -> Result<Self, Self::Error> {
        let birth_date = request.birth_date.ok_or_else(|| {
            AppError::ValidationError(vec!["birthDate must not be null".to_string()])
        })?;

        Ok(User {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date,
            address: request.address,
            phone_number: request.phone_number,
        })
    }
}

fn not_blank(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank")
            .with_message(format!("{} must not be blank", field).into()));
    }
    Ok(())
}

/// 이메일 검증: 공백이면 "blank" 메시지 하나만, 아니면 형식 검사
fn validate_email_field(email: &str) -> Result<(), ValidationError> {
    not_blank("email", email)?;

    if !email.validate_email() {
        return Err(ValidationError::new("email")
            .with_message("email must be a well-formed email address".into()));
    }
    Ok(())
}

fn validate_first_name(first_name: &str) -> Result<(), ValidationError> {
    not_blank("firstName", first_name)
}

fn validate_last_name(last_name: &str) -> Result<(), ValidationError> {
    not_blank("lastName", last_name)
}

/// 생년월일은 필수이며 오늘(로컬 날짜)보다 엄격히 이전이어야 합니다.
fn validate_birth_date(req: &CreateUserRequest) -> Result<(), ValidationError> {
    match req.birth_date {
        None => Err(ValidationError::new("not_null")
            .with_message("birthDate must not be null".into())),
        Some(birth_date) if birth_date >= Local::now().date_naive() => Err(ValidationError::new("past")
            .with_message("birthDate must be a past date".into())),
        Some(_) => Ok(()),
    }
}
