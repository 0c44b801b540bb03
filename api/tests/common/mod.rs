//! Shared test doubles and helpers for API integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use pa_api::routes::AppState;
use pa_core::errors::ProviderError;
use pa_core::services::otp::{Clock, MailerTrait, OtpService, OtpServiceConfig};
use pa_core::services::qa::{
    CompletionProviderTrait, CompletionRequest, CompletionResponse, ProfileSourceTrait,
    QaService, QaServiceConfig,
};
use pa_infra::cache::InMemoryOtpStore;

pub type TestState = AppState<RecordingMailer, InMemoryOtpStore, StubCompletion, StubProfile>;

/// Build an actix test service with every route registered
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state.clone())
                .app_data(pa_api::app::json_config(64 * 1024))
                .configure(
                    pa_api::app::configure_routes::<
                        common::RecordingMailer,
                        pa_infra::cache::InMemoryOtpStore,
                        common::StubCompletion,
                        common::StubProfile,
                    >,
                ),
        )
        .await
    };
}

// Mailer that records every code it is asked to send
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
    pub failure: Option<ProviderError>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(failure: ProviderError) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(failure),
        }
    }

    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailerTrait for RecordingMailer {
    async fn send_otp_email(
        &self,
        email: &str,
        code: &str,
        _expiry_minutes: i64,
    ) -> Result<String, ProviderError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        Ok("test-message-id".to_string())
    }
}

// Completion provider returning a canned response
pub struct StubCompletion {
    pub response: Result<CompletionResponse, ProviderError>,
    pub calls: Mutex<Vec<CompletionRequest>>,
}

impl StubCompletion {
    pub fn answering(text: &str) -> Self {
        Self {
            response: Ok(CompletionResponse::single(text)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProviderTrait for StubCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        self.calls.lock().unwrap().push(request.clone());
        self.response.clone()
    }
}

// Profile source with fixed contents
pub struct StubProfile {
    pub text: Option<String>,
}

impl StubProfile {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl ProfileSourceTrait for StubProfile {
    async fn load_profile(&self) -> Result<Option<String>, String> {
        Ok(self.text.clone())
    }

    fn source_name(&self) -> String {
        "information.txt".to_string()
    }
}

// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Collaborators behind a test application
pub struct TestHarness {
    pub mailer: Arc<RecordingMailer>,
    pub completion: Arc<StubCompletion>,
    pub clock: Arc<ManualClock>,
    pub state: actix_web::web::Data<TestState>,
}

pub fn harness(
    mailer: RecordingMailer,
    completion: StubCompletion,
    profile: StubProfile,
    otp_config: OtpServiceConfig,
) -> TestHarness {
    let mailer = Arc::new(mailer);
    let completion = Arc::new(completion);
    let clock = Arc::new(ManualClock::new());

    let otp_service = Arc::new(OtpService::with_clock(
        mailer.clone(),
        Arc::new(InMemoryOtpStore::new()),
        otp_config,
        clock.clone(),
    ));
    let qa_service = Arc::new(QaService::new(
        completion.clone(),
        Arc::new(profile),
        QaServiceConfig::default(),
    ));

    TestHarness {
        mailer,
        completion,
        clock,
        state: actix_web::web::Data::new(AppState {
            otp_service,
            qa_service,
        }),
    }
}

pub fn default_harness() -> TestHarness {
    harness(
        RecordingMailer::new(),
        StubCompletion::answering("Jane works with Rust and PostgreSQL."),
        StubProfile::with_text("Jane Doe. Skills: Rust, PostgreSQL."),
        OtpServiceConfig::default(),
    )
}
