//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 유일한 도메인 엔티티입니다.
/// `email`이 조회 키로 사용되지만 저장소 차원의 유일성은 보장하지 않으며,
/// 같은 이메일이 여러 건이면 먼저 저장된 사용자가 조회됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 사용자 이메일 (조회 키)
    pub email: String,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 생년월일 (`YYYY-MM-DD`)
    pub birth_date: NaiveDate,
    /// 주소 (자유 형식)
    pub address: String,
    /// 전화번호 (자유 형식)
    pub phone_number: String,
}

impl User {
    /// 주어진 날짜 기준 만 나이
    ///
    /// 생일이 지나야 한 살이 올라갑니다. 생년월일이 `today`보다 뒤라면 0입니다.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }

    /// 생년월일이 `(from, to)` 개구간 안에 있는지 확인 (양 끝 제외)
    pub fn is_born_between(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.birth_date > from && self.birth_date < to
    }
}
