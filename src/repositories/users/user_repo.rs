//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당합니다.
//!
//! ## 특징
//!
//! - **메모리 저장소**: 프로세스 수명 동안 유지되는 단일 목록, 인덱스 없음
//! - **연산 단위 원자성**: 모든 연산은 락을 정확히 한 번 획득합니다.
//!   조회 후 수정(`update_by_email`), 조회 후 삭제(`remove_by_email`)도 하나의 락 구간에서 수행됩니다.
//! - **삽입 순서 유지**: 조회 결과는 저장된 순서를 그대로 따릅니다.

use std::sync::RwLock;
use async_trait::async_trait;
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::users::User;

/// 저장된 사용자에 적용할 변경 함수
pub type UserMutation = Box<dyn FnOnce(&mut User) + Send>;

/// 사용자 저장소 추상화
///
/// 이메일 조회는 모두 "먼저 저장된 사용자 우선" 규칙을 따릅니다.
/// 저장소는 이메일 중복을 검사하지 않습니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자를 목록 끝에 추가하고 저장된 값을 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 이메일이 일치하는 첫 번째 사용자
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 이메일이 일치하는 첫 번째 사용자에 `mutation`을 적용하고 변경된 값을 반환합니다.
    ///
    /// 일치하는 사용자가 없으면 `mutation`은 호출되지 않고 `None`을 반환합니다.
    async fn update_by_email(&self, email: &str, mutation: UserMutation) -> AppResult<Option<User>>;

    /// 이메일이 일치하는 첫 번째 사용자를 제거하고 제거된 값을 반환합니다.
    async fn remove_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 저장 순서대로 모든 사용자의 스냅샷
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn count(&self) -> AppResult<usize>;

    async fn clear(&self) -> AppResult<()>;
}

/// 프로세스 메모리 기반 사용자 저장소
///
/// `main`에서 한 번 생성되어 `Arc`로 서비스에 전달됩니다.
/// 테스트는 케이스마다 새 인스턴스를 만들어 격리합니다.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 데이터를 가진 저장소 생성
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().context("사용자 저장소 쓰기 락 획득 실패")?;
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().context("사용자 저장소 읽기 락 획득 실패")?;

        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_by_email(&self, email: &str, mutation: UserMutation) -> AppResult<Option<User>> {
        let mut users = self.users.write().context("사용자 저장소 쓰기 락 획득 실패")?;

        Ok(users.iter_mut().find(|u| u.email == email).map(|user| {
            mutation(&mut *user);
            user.clone()
        }))
    }

    async fn remove_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let mut users = self.users.write().context("사용자 저장소 쓰기 락 획득 실패")?;

        Ok(users
            .iter()
            .position(|u| u.email == email)
            .map(|index| users.remove(index)))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().context("사용자 저장소 읽기 락 획득 실패")?;

        Ok(users.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        let users = self.users.read().context("사용자 저장소 읽기 락 획득 실패")?;

        Ok(users.len())
    }

    async fn clear(&self) -> AppResult<()> {
        let mut users = self.users.write().context("사용자 저장소 쓰기 락 획득 실패")?;
        users.clear();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(email: &str, first_name: &str) -> User {
        User {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: "Collins".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1995, 1, 11).unwrap(),
            address: "Lviv, Ploshcha Rynok, 1".to_string(),
            phone_number: "+380671113434".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_insert_and_find_by_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("collins@gmail.com", "Phillip")).await.unwrap();

        let found = repo.find_by_email("collins@gmail.com").await.unwrap();

        assert_eq!(found, Some(user("collins@gmail.com", "Phillip")));
        assert_eq!(repo.find_by_email("st@gmail.com").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_duplicate_emails_use_first_match() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("dup@gmail.com", "First")).await.unwrap();
        repo.insert(user("dup@gmail.com", "Second")).await.unwrap();

        let found = repo.find_by_email("dup@gmail.com").await.unwrap().unwrap();
        assert_eq!(found.first_name, "First");

        let removed = repo.remove_by_email("dup@gmail.com").await.unwrap().unwrap();
        assert_eq!(removed.first_name, "First");
        assert_eq!(repo.count().await.unwrap(), 1);

        let remaining = repo.find_by_email("dup@gmail.com").await.unwrap().unwrap();
        assert_eq!(remaining.first_name, "Second");
    }

    #[actix_web::test]
    async fn test_update_by_email_mutates_in_place() {
        let repo = InMemoryUserRepository::with_users(vec![user("collins@gmail.com", "Phillip")]);

        let updated = repo
            .update_by_email("collins@gmail.com", Box::new(|u: &mut User| u.first_name = "Phil".to_string()))
            .await
            .unwrap();

        assert_eq!(updated.map(|u| u.first_name), Some("Phil".to_string()));
        let stored = repo.find_by_email("collins@gmail.com").await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Phil");
    }

    #[actix_web::test]
    async fn test_update_unknown_email_skips_mutation() {
        let repo = InMemoryUserRepository::with_users(vec![user("collins@gmail.com", "Phillip")]);

        let updated = repo
            .update_by_email("st@gmail.com", Box::new(|_: &mut User| panic!("must not be called")))
            .await
            .unwrap();

        assert_eq!(updated, None);
    }

    #[actix_web::test]
    async fn test_find_all_keeps_insertion_order_and_clear() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("a@gmail.com", "A")).await.unwrap();
        repo.insert(user("b@gmail.com", "B")).await.unwrap();
        repo.insert(user("c@gmail.com", "C")).await.unwrap();

        let emails: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails, vec!["a@gmail.com", "b@gmail.com", "c@gmail.com"]);

        repo.clear().await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
