//! # Configuration Module
//!
//! 사용자 관리 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `main`에서 프로필별 `.env` 파일을
//! 먼저 로드한 뒤 조회됩니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 실행 환경, 바인딩 주소, 워커 수, Rate Limiting, CORS 설정
//! - [`user_config`] - 사용자 등록 규칙 (최소 가입 연령)
//!
//! ## 설계 원칙
//!
//! - 설정값 파싱 실패는 서비스 중단 사유가 아닙니다. `error!` 로그를 남기고 기본값을 사용합니다.
//! - 기본값은 로컬 개발 환경에서 바로 실행 가능한 값으로 둡니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AgeConfig, ServerConfig};
//!
//! let bind_address = ServerConfig::bind_address();
//! let min_age = AgeConfig::min_required_age();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # .env.dev
//! HOST=127.0.0.1
//! PORT=8080
//! HTTP_WORKERS=4
//! MIN_REQUIRED_AGE=18
//! RATE_LIMIT_PER_SECOND=20
//! RATE_LIMIT_BURST_SIZE=40
//! CORS_ALLOWED_ORIGINS=http://localhost:3000,http://127.0.0.1:3000
//! ```

pub mod server_config;
pub mod user_config;

pub use server_config::*;
pub use user_config::*;

use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// 환경 변수를 읽어 파싱합니다. 값이 없거나 파싱에 실패하면 기본값을 사용합니다.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    parse_or(key, env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_uses_value_when_valid() {
        assert_eq!(parse_or("PORT", Some("9090".to_string()), 8080u16), 9090);
        assert_eq!(parse_or("PORT", Some(" 9091 ".to_string()), 8080u16), 9091);
    }

    #[test]
    fn test_parse_or_falls_back_to_default() {
        assert_eq!(parse_or("PORT", None, 8080u16), 8080);
        assert_eq!(parse_or("PORT", Some("eighty".to_string()), 8080u16), 8080);
        assert_eq!(parse_or("MIN_REQUIRED_AGE", Some("-1".to_string()), 18u32), 18);
    }
}
