//! 사용자 부분 수정 요청 DTO
//!
//! `PATCH /users/{email}` 본문입니다. 수정 가능한 필드는 닫힌 집합으로 고정되어 있고,
//! 그 밖의 키(`email` 포함)는 역직렬화 단계에서 거부됩니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 부분 수정 요청
///
/// 각 필드는 독립적으로 생략할 수 있으며, 생략되거나 `null`인 필드는 기존 값을 유지합니다.
///
/// ```json
/// { "firstName": "Robby", "birthDate": "1999-05-15" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserFieldsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// `YYYY-MM-DD` 문자열로 전달
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl UpdateUserFieldsRequest {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// 전달된 필드만 `user`에 덮어씁니다.
    pub fn apply_to(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(birth_date) = self.birth_date {
            user.birth_date = birth_date;
        }
        if let Some(address) = self.address {
            user.address = address;
        }
        if let Some(phone_number) = self.phone_number {
            user.phone_number = phone_number;
        }
    }
}
