//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 사용자는 이메일로 식별되며, 모든 핸들러는 `web::Data<UserService>`를 주입받습니다.
//!
//! ## RESTful API 설계
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 등록 | 201 Created |
//! | `PATCH` | `/users/{email}` | 사용자 부분 수정 | 200 OK |
//! | `PUT` | `/users/{email}` | 사용자 전체 수정 | 200 OK |
//! | `DELETE` | `/users/{email}` | 사용자 삭제 | 204 No Content |
//! | `GET` | `/users?from=&to=` | 생년월일 범위 조회 | 200 OK |
//!
//! ## 에러 응답
//!
//! ```json
//! { "errors": ["email must not be blank", "birthDate must not be null"] }
//! ```
//!
//! ```json
//! { "error": "User with email: st@gmail.com does not exist." }
//! ```
//!
//! 본문 파싱과 쿼리 파싱 실패는 `routes`에 등록된 `JsonConfig`/`QueryConfig`
//! 에러 핸들러가 `{"errors": [...]}` 형태의 400 응답으로 변환합니다.

use actix_web::{web, HttpResponse, get, post, patch, put, delete};
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{
    BirthDateRangeQuery, CreateUserRequest, UpdateUserFieldsRequest, UpdateUserRequest,
};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;
use crate::services::users::UserService;

/// 사용자 등록 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
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
/// # 응답
///
/// - `201 Created`: 저장된 사용자
/// - `400 Bad Request`: `{"errors": [...]}` 형식 검증 실패
/// - `400 Bad Request`: `{"error": "For registration you need to be at least 18 years old"}`
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"email":"bob@gmail.com","firstName":"Bob","lastName":"Reynolds","birthDate":"1988-09-28"}'
/// ```
#[post("")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner().validated()?;
    let user = User::try_from(request)?;

    let created = user_service.create(user).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(created)))
}

/// 사용자 부분 수정 핸들러
///
/// `PATCH /users/{email}`
///
/// 본문에 포함된 필드(`firstName`, `lastName`, `birthDate`, `address`, `phoneNumber`)만
/// 교체합니다. 그 밖의 키는 400으로 거부됩니다.
///
/// ```bash
/// curl -X PATCH http://localhost:8080/users/bob@gmail.com \
///   -H "Content-Type: application/json" \
///   -d '{"firstName":"Robby","birthDate":"1999-05-15"}'
/// ```
#[patch("/{email}")]
pub async fn update_user_fields(
    user_service: web::Data<UserService>,
    email: web::Path<String>,
    payload: web::Json<UpdateUserFieldsRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = user_service
        .update_fields(&email, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

/// 사용자 전체 수정 핸들러
///
/// `PUT /users/{email}`
///
/// 이메일을 제외한 모든 필드를 덮어씁니다. 형식 검증은 수행하지 않습니다.
#[put("/{email}")]
pub async fn update_user(
    user_service: web::Data<UserService>,
    email: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = user_service
        .update_all_fields(&email, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /users/{email}` → `204 No Content`
#[delete("/{email}")]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    user_service.delete_user(&email).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 생년월일 범위 조회 핸들러
///
/// `GET /users?from=1990-01-01&to=2000-01-01`
///
/// `from < birthDate < to`인 사용자를 저장 순서대로 반환합니다.
/// 일치하는 사용자가 없으면 빈 배열을 반환합니다.
#[get("")]
pub async fn get_users_by_birth_date_range(
    user_service: web::Data<UserService>,
    query: web::Query<BirthDateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let BirthDateRangeQuery { from, to } = query.into_inner();

    let users = user_service.get_users_by_birth_date_range(from, to).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from_users(users)))
}
