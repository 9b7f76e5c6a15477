//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 실행 설정을 박스 형태의 배너와 트리 목록으로 출력합니다.

/// 박스 내부 콘텐츠 너비
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// Unicode 박스 문자를 사용하며 텍스트는 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             User Management Service              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);

    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = CONTENT_WIDTH
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 설정 항목 한 줄
///
/// ```text
///    ├─ Bind address: 127.0.0.1:8080
/// ```
pub fn sub_item(name: &str, value: &str) -> String {
    format!("   ├─ {}: {}", name, value)
}

/// 기동 배너와 실행 설정 요약을 출력합니다
///
/// # Examples
///
/// ```rust,ignore
/// print_startup_summary("User Management Service", &[
///     ("Bind address", ServerConfig::bind_address()),
///     ("Min required age", AgeConfig::min_required_age().to_string()),
/// ]);
/// ```
pub fn print_startup_summary(title: &str, items: &[(&str, String)]) {
    println!();
    print_boxed_title(title);
    for (name, value) in items {
        println!("{}", sub_item(name, value));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let lines: Vec<String> = boxed_title("Users").lines().map(str::to_string).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), CONTENT_WIDTH + 2);
        assert_eq!(lines[1].chars().count(), CONTENT_WIDTH + 2);
        assert!(lines[1].starts_with("║                      Users"));
    }

    #[test]
    fn test_sub_item_format() {
        assert_eq!(sub_item("Workers", "4"), "   ├─ Workers: 4");
    }
}
