//! 사용자 등록 규칙 설정

use super::env_or;

/// 기본 최소 가입 연령
pub const DEFAULT_MIN_REQUIRED_AGE: u32 = 18;

pub struct AgeConfig;

impl AgeConfig {
    /// 가입 시 요구되는 최소 연령 (`MIN_REQUIRED_AGE`, 기본값 18)
    pub fn min_required_age() -> u32 {
        env_or("MIN_REQUIRED_AGE", DEFAULT_MIN_REQUIRED_AGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_required_age_default() {
        if std::env::var("MIN_REQUIRED_AGE").is_err() {
            assert_eq!(AgeConfig::min_required_age(), 18);
        }
    }
}
