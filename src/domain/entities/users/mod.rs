//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use crate::domain::entities::users::User;
//!
//! let user = User {
//!     email: "bob@gmail.com".to_string(),
//!     first_name: "Bob".to_string(),
//!     last_name: "Reynolds".to_string(),
//!     birth_date: NaiveDate::from_ymd_opt(1988, 9, 28).unwrap(),
//!     address: "Kyiv, Shevchenka str., 45".to_string(),
//!     phone_number: "+380985673535".to_string(),
//! };
//! ```

pub mod user;

pub use user::User;
