//! Survey service: the three backend calls the client makes.
//!
//! ERROR HANDLING
//! ==============
//! Every call issues exactly one request and never retries. Failures are
//! logged and handed back to the caller unchanged; user-facing handling
//! belongs to the view that made the call.
//!
//! Status policy: fetching a survey accepts only `200`, matching the
//! backend's contract for that endpoint. Results and submit accept any `2xx`.
//! Every other status becomes [`SurveyError::Fetch`] on all three paths.

use serde::de::DeserializeOwned;

use crate::config::SurveyConfig;
use crate::error::SurveyError;
use crate::types::{Answers, SubmitAnswersRequest, SubmitReceipt, Survey, SurveyId, SurveyResults};

/// Thin client over the backend survey API.
///
/// Cloning is cheap: clones share one connection pool.
#[derive(Debug, Clone)]
pub struct SurveyService {
    http: reqwest::Client,
    api_base: String,
}

enum StatusPolicy {
    ExactlyOk,
    AnySuccess,
}

impl SurveyService {
    /// # Errors
    ///
    /// Returns [`SurveyError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: SurveyConfig) -> Result<Self, SurveyError> {
        let http = build_http(&config)?;
        Ok(Self { http, api_base: config.api_base })
    }

    /// `GET {base}/{survey_id}`.
    ///
    /// # Errors
    ///
    /// [`SurveyError::Fetch`] for any status other than 200,
    /// [`SurveyError::Network`] if the request did not complete,
    /// [`SurveyError::Decode`] if the body is not a survey.
    pub async fn fetch_survey_by_id(&self, survey_id: &str) -> Result<Survey, SurveyError> {
        let result = async {
            let id = SurveyId::parse(survey_id)?;
            let body = self.get(&format!("{}/{id}", self.api_base), StatusPolicy::ExactlyOk).await?;
            decode::<Survey>(&body)
        }
        .await;
        result.inspect_err(|e| tracing::error!(%survey_id, error = %e, "error fetching survey"))
    }

    /// `GET {base}/{survey_id}/results`.
    ///
    /// # Errors
    ///
    /// [`SurveyError::Fetch`] for a non-2xx status, otherwise as
    /// [`Self::fetch_survey_by_id`].
    pub async fn get_survey_results(&self, survey_id: &str) -> Result<SurveyResults, SurveyError> {
        let result = async {
            let id = SurveyId::parse(survey_id)?;
            let body = self.get(&format!("{}/{id}/results", self.api_base), StatusPolicy::AnySuccess).await?;
            decode::<SurveyResults>(&body)
        }
        .await;
        result.inspect_err(|e| tracing::error!(%survey_id, error = %e, "error fetching survey results"))
    }

    /// `POST {base}/submit` with JSON body `{surveyId, answers}`.
    ///
    /// Not idempotent: each call records a new submission server-side.
    ///
    /// # Errors
    ///
    /// [`SurveyError::Fetch`] for a non-2xx status, [`SurveyError::Network`]
    /// if the request did not complete.
    pub async fn submit_answers_to_survey(&self, survey_id: &str, answers: Answers) -> Result<SubmitReceipt, SurveyError> {
        let result = async {
            let id = SurveyId::parse(survey_id)?;
            let payload = SubmitAnswersRequest { survey_id: id.to_string(), answers };
            let url = format!("{}/submit", self.api_base);
            let response = self
                .http
                .post(&url)
                .json(&payload)
                .send()
                .await
                .map_err(|e| SurveyError::Network(e.to_string()))?;
            let body = read_body(response, StatusPolicy::AnySuccess).await?;
            Ok::<_, SurveyError>(SubmitReceipt::from_body(&body))
        }
        .await;
        result.inspect_err(|e| tracing::error!(%survey_id, error = %e, "error submitting answers"))
    }

    async fn get(&self, url: &str, policy: StatusPolicy) -> Result<String, SurveyError> {
        tracing::debug!(%url, "survey GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SurveyError::Network(e.to_string()))?;
        read_body(response, policy).await
    }
}

async fn read_body(response: reqwest::Response, policy: StatusPolicy) -> Result<String, SurveyError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SurveyError::Network(e.to_string()))?;
    let accepted = match policy {
        StatusPolicy::ExactlyOk => status == reqwest::StatusCode::OK,
        StatusPolicy::AnySuccess => status.is_success(),
    };
    if !accepted {
        return Err(SurveyError::Fetch { status: status.as_u16(), body });
    }
    Ok(body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, SurveyError> {
    serde_json::from_str(body).map_err(|e| SurveyError::Decode(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(config: &SurveyConfig) -> Result<reqwest::Client, SurveyError> {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeouts.request_secs))
        .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
        .build()
        .map_err(|e| SurveyError::HttpClientBuild(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_http(_config: &SurveyConfig) -> Result<reqwest::Client, SurveyError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| SurveyError::HttpClientBuild(e.to_string()))
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
