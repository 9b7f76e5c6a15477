//! 생년월일 범위 조회 쿼리 DTO

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `GET /users?from=YYYY-MM-DD&to=YYYY-MM-DD`
///
/// 두 파라미터 모두 필수입니다. 범위의 유효성(`from < to`)은 서비스 계층에서 검사합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDateRangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}
