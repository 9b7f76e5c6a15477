//! # 사용자 관리 서비스 구현
//!
//! 사용자 등록, 부분/전체 수정, 삭제, 생년월일 범위 조회의 비즈니스 규칙을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Registration  │  │     Update      │  │   User Query    │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Age Check     │  │ • Partial Patch │  │ • By Email      │  │
//! │  │ • Append        │  │ • Full Replace  │  │ • Birth Range   │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 UserRepository (Arc<dyn ...>)                   │
//! │ • InMemoryUserRepository: RwLock<Vec<User>>                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 비즈니스 규칙
//!
//! - **최소 가입 연령**: 생성 시점의 만 나이가 설정값(`MIN_REQUIRED_AGE`) 이상이어야 합니다.
//! - **이메일 식별**: 이메일은 조회 키이며 수정 요청으로 바뀌지 않습니다. 중복은 허용됩니다.
//! - **범위 조회**: `from < birthDate < to` 개구간, 저장 순서 유지, 정렬하지 않음.

use std::sync::Arc;
use chrono::{Local, NaiveDate};
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::{UpdateUserFieldsRequest, UpdateUserRequest},
        entities::users::User,
    },
    repositories::users::UserRepository,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소 핸들과 최소 가입 연령을 생성자로 전달받습니다.
/// `main`에서 한 번 생성되어 `web::Data<UserService>`로 모든 워커가 공유합니다.
///
/// ## 에러 처리 전략
///
/// - **EligibilityError**: 최소 가입 연령 미달
/// - **RangeError**: `from`이 `to`보다 앞서지 않는 조회 범위
/// - **NotFound**: 이메일에 해당하는 사용자 없음
/// - **InternalError**: 저장소 락 오염
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
/// let user_service = UserService::new(user_repo, 18);
///
/// let created = user_service.create(user).await?;
/// let patched = user_service.update_fields("bob@gmail.com", patch).await?;
/// ```
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<dyn UserRepository>,

    /// 가입 시 요구되는 최소 만 나이
    min_required_age: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, min_required_age: u32) -> Self {
        Self {
            user_repo,
            min_required_age,
        }
    }

    pub fn min_required_age(&self) -> u32 {
        self.min_required_age
    }

    /// 새 사용자 등록
    ///
    /// 오늘 날짜 기준 만 나이를 계산해 최소 가입 연령 미만이면 거부하고,
    /// 통과하면 저장소 끝에 추가한 뒤 같은 값을 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자
    /// * `Err(AppError::EligibilityError)` - 최소 가입 연령 미달 (저장소 변경 없음)
    ///
    /// # 로깅
    ///
    /// ```text
    /// [INFO] 사용자 생성 완료: bob@gmail.com (took 12µs)
    /// ```
    pub async fn create(&self, user: User) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        self.check_eligibility(&user, Local::now().date_naive())?;

        let created = self.user_repo.insert(user).await?;

        log::info!("사용자 생성 완료: {} (took {:?})", created.email, start_time.elapsed());
        Ok(created)
    }

    /// 최소 가입 연령 검사
    pub fn check_eligibility(&self, user: &User, today: NaiveDate) -> AppResult<()> {
        let age = user.age_on(today);

        if age < self.min_required_age {
            log::warn!(
                "가입 연령 미달: {} (만 {}세, 최소 {}세)",
                user.email,
                age,
                self.min_required_age
            );
            return Err(AppError::EligibilityError(format!(
                "For registration you need to be at least {} years old",
                self.min_required_age
            )));
        }

        Ok(())
    }

    /// 이메일로 사용자 조회 (먼저 저장된 사용자 우선)
    ///
    /// * `Err(AppError::NotFound)` - `User with email: {email} does not exist.`
    pub async fn get_user(&self, email: &str) -> AppResult<User> {
        log::debug!("사용자 조회: {}", email);

        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| Self::not_found(email))
    }

    /// 사용자 부분 수정
    ///
    /// 요청에 포함된 필드만 교체하고 나머지는 유지합니다. 사용자 조회와 변경은
    /// 하나의 저장소 락 구간에서 수행됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 변경된 사용자
    /// * `Err(AppError::NotFound)` - 해당 이메일의 사용자가 없음
    pub async fn update_fields(&self, email: &str, fields: UpdateUserFieldsRequest) -> AppResult<User> {
        if fields.is_empty() {
            log::debug!("변경할 필드가 없는 부분 수정 요청: {}", email);
        }

        let updated = self
            .user_repo
            .update_by_email(email, Box::new(move |user: &mut User| fields.apply_to(user)))
            .await?
            .ok_or_else(|| Self::not_found(email))?;

        log::info!("사용자 부분 수정 완료: {}", email);
        Ok(updated)
    }

    /// 사용자 전체 수정
    ///
    /// 이름, 성, 생년월일, 주소, 전화번호를 모두 교체합니다. 저장된 이메일은 유지됩니다.
    pub async fn update_all_fields(&self, email: &str, request: UpdateUserRequest) -> AppResult<User> {
        let updated = self
            .user_repo
            .update_by_email(email, Box::new(move |user: &mut User| request.apply_to(user)))
            .await?
            .ok_or_else(|| Self::not_found(email))?;

        log::info!("사용자 전체 수정 완료: {}", email);
        Ok(updated)
    }

    /// 사용자 삭제
    ///
    /// 이메일이 일치하는 첫 번째 사용자 한 명만 제거합니다.
    pub async fn delete_user(&self, email: &str) -> AppResult<()> {
        self.user_repo
            .remove_by_email(email)
            .await?
            .ok_or_else(|| Self::not_found(email))?;

        log::info!("사용자 삭제 완료: {}", email);
        Ok(())
    }

    /// 생년월일 범위 조회
    ///
    /// `from < birthDate < to`를 만족하는 사용자를 저장 순서대로 반환합니다.
    ///
    /// * `Err(AppError::RangeError)` - `from >= to`
    pub async fn get_users_by_birth_date_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<User>> {
        if from >= to {
            return Err(AppError::RangeError(format!(
                "Please, enter valid birthdate range. Date 'from' {} should be before date 'to' {}",
                from, to
            )));
        }

        let users: Vec<User> = self
            .user_repo
            .find_all()
            .await?
            .into_iter()
            .filter(|user| user.is_born_between(from, to))
            .collect();

        log::debug!("생년월일 범위 조회 ({} ~ {}): {}건", from, to, users.len());
        Ok(users)
    }

    /// 저장된 사용자 수
    pub async fn count_users(&self) -> AppResult<usize> {
        self.user_repo.count().await
    }

    fn not_found(email: &str) -> AppError {
        AppError::NotFound(format!("User with email: {} does not exist.", email))
    }
}
