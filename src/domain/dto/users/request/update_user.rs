//! 사용자 전체 수정 요청 DTO
//!
//! `PUT /users/{email}` 본문입니다. 사용자 JSON 전체를 받지만 `email`은 식별 키이므로
//! 무시되고, 나머지 다섯 필드가 저장된 사용자에 그대로 덮어써집니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 전체 수정 요청
///
/// 생성 요청과 달리 형식 검증을 수행하지 않습니다. 누락된 문자열 필드는 빈 문자열로
/// 덮어써지며, `birthDate`는 필수입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// 본문에 포함되어도 저장된 이메일은 바뀌지 않습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    pub birth_date: NaiveDate,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub phone_number: String,
}

impl UpdateUserRequest {
    /// 이메일을 제외한 모든 필드를 `user`에 덮어씁니다.
    pub fn apply_to(self, user: &mut User) {
        user.first_name = self.first_name;
        user.last_name = self.last_name;
        user.birth_date = self.birth_date;
        user.address = self.address;
        user.phone_number = self.phone_number;
    }
}
