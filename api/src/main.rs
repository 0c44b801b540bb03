use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::{info, warn};

use pa_api::app::{configure_routes, json_config, not_found};
use pa_api::config::Config;
use pa_api::middleware::create_cors;
use pa_api::routes::AppState;
use pa_core::services::otp::{OtpService, OtpSweeper};
use pa_core::services::qa::QaService;
use pa_infra::cache::InMemoryOtpStore;
use pa_infra::email::{create_email_service, EmailMailerAdapter};
use pa_infra::llm::{create_completion_service, CompletionProviderAdapter};
use pa_infra::profile::FileProfileSource;

type Mailer = EmailMailerAdapter;
type Store = InMemoryOtpStore;
type Provider = CompletionProviderAdapter;
type Profile = FileProfileSource;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting Portfolio Assistant API ({})", config.environment);

    // OTP workflow
    let mailer = Arc::new(EmailMailerAdapter::new(
        create_email_service(&config.mailer).context("failed to initialize email service")?,
    ));
    info!("Email provider: {}", mailer.provider_name());
    let store = Arc::new(InMemoryOtpStore::new());
    let otp_service = Arc::new(OtpService::new(mailer, store, config.otp.clone()));

    match OtpSweeper::from_config(otp_service.clone()) {
        Some(sweeper) => {
            sweeper.spawn();
        }
        None => info!("Background OTP sweeper disabled; expired codes are evicted lazily"),
    }

    // Q&A workflow
    let provider = Arc::new(CompletionProviderAdapter::new(
        create_completion_service(&config.completion)
            .context("failed to initialize completion service")?,
    ));
    info!("Completion provider: {}", provider.provider_name());
    let profile = Arc::new(FileProfileSource::from_config(&config.profile));
    if !profile.path().exists() {
        warn!(
            "Profile document {} does not exist; /ask will fail until it is created",
            profile.path().display()
        );
    }
    let qa_service = Arc::new(QaService::new(provider, profile, config.qa.clone()));

    let app_state = web::Data::new(AppState {
        otp_service,
        qa_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors_config = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(json_config(max_payload_size))
            .wrap(Logger::default())
            .wrap(create_cors(&cors_config))
            .configure(configure_routes::<Mailer, Store, Provider, Profile>)
            .default_service(web::route().to(not_found))
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
