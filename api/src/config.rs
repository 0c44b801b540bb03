use pa_core::services::otp::OtpServiceConfig;
use pa_core::services::qa::QaServiceConfig;
use pa_infra::config::{CompletionConfig, MailerConfig, ProfileConfig};
use pa_shared::config::{CorsConfig, Environment, LoggingConfig, ServerConfig};

/// Complete application configuration, assembled from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub otp: OtpServiceConfig,
    pub qa: QaServiceConfig,
    pub mailer: MailerConfig,
    pub completion: CompletionConfig,
    pub profile: ProfileConfig,
}

impl Config {
    /// Load configuration; missing secrets are reported when first used
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        Config {
            environment,
            logging: LoggingConfig::for_environment(environment),
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            otp: OtpServiceConfig::from_env(),
            qa: QaServiceConfig::from_env(),
            mailer: MailerConfig::from_env(),
            completion: CompletionConfig::from_env(),
            profile: ProfileConfig::from_env(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
