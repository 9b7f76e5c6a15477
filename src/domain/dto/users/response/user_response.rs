use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    /// `YYYY-MM-DD`
    pub birth_date: NaiveDate,

    pub address: String,
    pub phone_number: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            email,
            first_name,
            last_name,
            birth_date,
            address,
            phone_number,
        } = user;

        Self {
            email,
            first_name,
            last_name,
            birth_date,
            address,
            phone_number,
        }
    }
}

impl UserResponse {
    /// 조회 결과 목록 변환
    pub fn from_users(users: Vec<User>) -> Vec<Self> {
        users.into_iter().map(Self::from).collect()
    }
}
