use std::sync::Arc;

use anyhow::Error;
use axum::Router;
use stt_application::{RecognizeAudioUseCase, RecognizeAudioUseCaseImpl};
use stt_configuration::{AppConfig, ServerConfig};
use stt_domain::{AudioStagingPort, SpeechRecognitionPort};
use stt_http_server::{create_router, serve_http, AppState};
use stt_infra_speech_google::{GoogleSpeechAdapter, GoogleSpeechConfig};
use stt_infra_staging::{TempFileStagingAdapter, TempFileStagingConfig};

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config)?;
    app.run(server_config).await
}

pub struct Application {
    pub config: AppConfig,
    pub router: Router,
}

impl Application {
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        let speech = &config.service.speech;
        if speech.api_key.is_none() && speech.access_token.is_none() {
            tracing::warn!(
                "no speech credentials configured; recognize calls will be rejected upstream"
            );
        }

        tracing::info!(
            endpoint = %speech.endpoint,
            timeout_secs = speech.timeout_secs,
            staging_directory = ?config.service.staging.directory,
            "initializing speech-to-text application"
        );

        let recognition: Arc<dyn SpeechRecognitionPort> =
            Arc::new(GoogleSpeechAdapter::new(GoogleSpeechConfig {
                endpoint: speech.endpoint.clone(),
                api_key: speech.api_key.clone(),
                access_token: speech.access_token.clone(),
                request_timeout: speech.request_timeout(),
            })?);
        let staging: Arc<dyn AudioStagingPort> =
            Arc::new(TempFileStagingAdapter::new(TempFileStagingConfig {
                directory: config.service.staging.directory.clone(),
            }));

        Ok(Self::with_ports(config, staging, recognition))
    }

    /// Builds the application around caller-supplied adapters.
    pub fn with_ports(
        config: AppConfig,
        staging: Arc<dyn AudioStagingPort>,
        recognition: Arc<dyn SpeechRecognitionPort>,
    ) -> Self {
        let usecase: Arc<dyn RecognizeAudioUseCase> = Arc::new(RecognizeAudioUseCaseImpl::new(
            staging,
            recognition,
            config.service.speech.timeout(),
        ));
        let router = create_router(AppState::new(usecase), config.server.max_upload_bytes);

        Self { config, router }
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        serve_http(self.router, &server_config)
            .await
            .map_err(|err| anyhow::anyhow!("server startup failed: {err}"))
    }
}
