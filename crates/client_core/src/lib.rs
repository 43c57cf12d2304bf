//! Client-side submission controller for the college prediction endpoint.
//!
//! One submission flows one way: collect and validate the form, POST the
//! payload, classify the response, and drive the UI state machine from
//! `Loading` into exactly one of `Error`, `Empty`, or `Success`. The
//! hosting surface supplies a [`FormSource`] and a [`ResultRenderer`]; the
//! endpoint is reached through the [`PredictionEndpoint`] seam.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use shared::{
    domain::CollegeRecord,
    protocol::{PredictionResponse, SubmissionPayload, PREDICT_PATH},
};
use tracing::{error, info, warn};

pub mod error;
pub mod form;
pub mod view;

pub use error::{
    SubmitError, NETWORK_FAILURE_MESSAGE, RANK_FORMAT_MESSAGE, REQUIRED_FIELDS_MESSAGE,
};
pub use form::{build_payload, FormSource, REQUIRED_FIELDS};
pub use view::{RenderFrame, ResultRenderer, Surfaces, UiEvent, UiState};

/// Default per-request timeout. The original design had none; without one a
/// stalled server pins the UI in `Loading` forever, so the client applies
/// this bound and reports expiry as an ordinary network failure.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam between the controller and the prediction collaborator.
///
/// `Ok` carries the matched records (possibly zero of them); the
/// empty-versus-success split is the controller's concern, not the
/// endpoint's.
#[async_trait]
pub trait PredictionEndpoint: Send + Sync {
    async fn predict(&self, payload: &SubmissionPayload) -> Result<Vec<CollegeRecord>, SubmitError>;
}

/// HTTP implementation of [`PredictionEndpoint`] against a real server.
pub struct PredictionClient {
    http: Client,
    server_url: String,
    timeout: Duration,
}

impl PredictionClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_timeout(server_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(server_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
            timeout,
        }
    }

    async fn exchange(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Vec<CollegeRecord>, SubmitError> {
        let response = self
            .http
            .post(format!("{}{PREDICT_PATH}", self.server_url))
            .header(header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                error!(error = %err, "prediction request failed before a response arrived");
                SubmitError::network_failure()
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            error!(error = %err, "prediction response body could not be read");
            SubmitError::network_failure()
        })?;

        classify_response(status, &body)
    }
}

#[async_trait]
impl PredictionEndpoint for PredictionClient {
    async fn predict(&self, payload: &SubmissionPayload) -> Result<Vec<CollegeRecord>, SubmitError> {
        self.exchange(payload).await
    }
}

/// Maps a raw (status, body) pair onto the error taxonomy.
///
/// The body is parsed as JSON regardless of status, so a failure status
/// with a structured `error` field still surfaces the server's own text,
/// and a 200 with an unparseable body is still a transport failure.
fn classify_response(status: StatusCode, body: &[u8]) -> Result<Vec<CollegeRecord>, SubmitError> {
    let parsed: PredictionResponse = serde_json::from_slice(body)
        .map_err(|_| SubmitError::non_json_response(status.as_u16()))?;

    if !status.is_success() {
        return Err(SubmitError::http_failure(status.as_u16(), parsed.error));
    }
    if let Some(message) = parsed.error {
        // The endpoint may return 200 with a semantic error.
        return Err(SubmitError::Application(message));
    }
    Ok(parsed.colleges.unwrap_or_default())
}

/// Owns one submission at a time: validate, request, classify, render.
///
/// `submit` takes `&mut self`, so a second submission cannot start while
/// one is suspended at the network boundary; there is no in-flight
/// cancellation. Every path out of `submit` lands in a terminal state
/// whose frame hides the loading indicator and re-enables the submit
/// control, so the UI can never stay stuck busy.
pub struct SubmissionController<E, R> {
    endpoint: E,
    renderer: R,
    state: UiState,
}

impl<E, R> SubmissionController<E, R>
where
    E: PredictionEndpoint,
    R: ResultRenderer,
{
    pub fn new(endpoint: E, renderer: R) -> Self {
        Self {
            endpoint,
            renderer,
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Runs one full submission and returns the terminal state.
    pub async fn submit(&mut self, form: &dyn FormSource) -> &UiState {
        // Reset first: stale rows and surfaces are gone before any
        // validation or network activity.
        self.apply(UiEvent::Submitted);

        let payload = match build_payload(form) {
            Ok(payload) => payload,
            Err(err) => {
                self.apply(UiEvent::Failed(err.to_string()));
                return &self.state;
            }
        };

        info!(rank = payload.rank, "submitting prediction request");
        let event = match self.endpoint.predict(&payload).await {
            Ok(records) if records.is_empty() => UiEvent::ResolvedEmpty,
            Ok(records) => {
                info!(matches = records.len(), "prediction request succeeded");
                UiEvent::ResolvedMatches(records)
            }
            Err(err) => {
                warn!(error = %err, "prediction request failed");
                UiEvent::Failed(err.to_string())
            }
        };
        self.apply(event);
        &self.state
    }

    fn apply(&mut self, event: UiEvent) {
        let current = std::mem::take(&mut self.state);
        let (next, _surfaces) = view::transition(current, event);
        self.renderer.render(&RenderFrame::for_state(&next));
        self.state = next;
    }
}
