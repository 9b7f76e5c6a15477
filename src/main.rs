//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 메모리 저장소와 사용자 서비스를 한 번 생성해 모든 워커가 공유합니다.

use std::path::PathBuf;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_management_service::config::{AgeConfig, CorsConfig, Environment, RateLimitConfig, ServerConfig};
use user_management_service::repositories::users::{InMemoryUserRepository, UserRepository};
use user_management_service::routes::configure_all_routes;
use user_management_service::services::users::UserService;
use user_management_service::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let (profile, env_file) = load_env_file();
    init_logging();
    log_env_file(&profile, &env_file);

    info!("🚀 사용자 관리 서비스 시작중...");

    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let user_service = web::Data::new(UserService::new(user_repo, AgeConfig::min_required_age()));

    info!("✅ 사용자 서비스 초기화 완료 (최소 가입 연령: {}세)", user_service.min_required_age());

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("Rate Limiting 설정 생성 실패: {:?}", rate_limit_config);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid rate limit configuration")
        })?;

    let allowed_origins = CorsConfig::allowed_origins();

    print_startup_summary(
        "User Management Service",
        &[
            ("Environment", format!("{:?}", Environment::current())),
            ("Bind address", bind_address.clone()),
            ("Workers", workers.to_string()),
            ("Min required age", user_service.min_required_age().to_string()),
            (
                "Rate limit",
                format!("{}/s, burst {}", rate_limit_config.per_second, rate_limit_config.burst_size),
            ),
            ("CORS origins", allowed_origins.join(", ")),
        ],
    );

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// `RUST_LOG`도 파일에서 읽을 수 있도록 로거보다 먼저 호출되며,
/// 로드 결과는 로거 초기화 후 [`log_env_file`]로 기록합니다.
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> (String, Result<PathBuf, dotenv::Error>) {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod"),
        "dev" => dotenv::from_filename(".env.dev"),
        _ => dotenv(),
    };

    (profile, result)
}

fn log_env_file(profile: &str, result: &Result<PathBuf, dotenv::Error>) {
    info!("Current profile: {}", profile);

    match result {
        Ok(path) => info!("{} 파일 로드 됨", path.display()),
        Err(e) => error!("{} 프로필 설정 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=user_management_service=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 지정된 Origin만 허용합니다.
/// 지정되지 않으면 localhost/127.0.0.1의 3000, 8080 포트를 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
