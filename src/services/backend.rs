//! Backend service client for the diagnosis API.
//!
//! One client is constructed at startup and shared read-only across
//! requests. Every call builds its own request and reads only its own
//! response, so the shared handle needs no locking.

use crate::models::{
    DiagnosisInput, DiagnosisResult, Hospital, HospitalSearchParams, SymptomInput, SymptomResponse,
};
use actix_web::web::Bytes;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

/// Overall timeout for a single backend exchange.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SYMPTOM_INPUT_PATH: &str = "/api/v1/symptoms/input";
const SYMPTOM_CATEGORIES_PATH: &str = "/api/v1/symptoms/categories";
const DIAGNOSIS_ANALYZE_PATH: &str = "/api/v1/diagnosis/analyze";
const HOSPITAL_SEARCH_PATH: &str = "/api/v1/hospitals/search";

/// Typed HTTP client for the backend diagnosis API
#[derive(Debug)]
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, BackendClientError> {
        url::Url::parse(base_url)?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(BackendClientError::Network)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL the client was configured with, trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a single symptom report.
    pub async fn submit_symptom(
        &self,
        input: &SymptomInput,
    ) -> Result<SymptomResponse, BackendClientError> {
        self.post_json(SYMPTOM_INPUT_PATH, input).await
    }

    /// Run diagnosis analysis over a set of symptoms.
    pub async fn analyze_symptoms(
        &self,
        input: &DiagnosisInput,
    ) -> Result<DiagnosisResult, BackendClientError> {
        self.post_json(DIAGNOSIS_ANALYZE_PATH, input).await
    }

    /// Search hospitals with the given filters.
    pub async fn search_hospitals(
        &self,
        params: &HospitalSearchParams,
    ) -> Result<Vec<Hospital>, BackendClientError> {
        self.post_json(HOSPITAL_SEARCH_PATH, params).await
    }

    /// Fetch the symptom category tree.
    ///
    /// The shape is backend-defined and passed through as opaque JSON.
    pub async fn get_symptom_categories(
        &self,
    ) -> Result<HashMap<String, serde_json::Value>, BackendClientError> {
        let url = format!("{}{}", self.base_url, SYMPTOM_CATEGORIES_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(BackendClientError::Network)?;
        Self::decode(response).await
    }

    /// Forward a raw request under the backend's `/api/v1` prefix.
    ///
    /// Method and body pass through unchanged; the content type is
    /// pinned to JSON. The response is returned undecoded so the
    /// caller can mirror it.
    pub async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        body: Bytes,
    ) -> Result<reqwest::Response, BackendClientError> {
        let url = format!("{}/api/v1{}", self.base_url, path_and_query);
        self.client
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(BackendClientError::Network)
    }

    /// POST a JSON payload to a backend path and decode the response.
    async fn post_json<T, R>(&self, path: &str, payload: &T) -> Result<R, BackendClientError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(BackendClientError::Network)?;
        Self::decode(response).await
    }

    /// Require exactly 200 and decode the JSON body.
    async fn decode<R: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<R, BackendClientError> {
        if response.status() != StatusCode::OK {
            return Err(BackendClientError::Status(response.status()));
        }
        response.json().await.map_err(BackendClientError::Decode)
    }
}

/// Errors surfaced by the backend client.
///
/// Transport failures, non-200 statuses, and undecodable bodies are
/// distinct kinds, each carrying the underlying cause. Nothing is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum BackendClientError {
    #[error("invalid backend base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("backend request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("backend returned status {0}")]
    Status(StatusCode),

    #[error("failed to decode backend response: {0}")]
    Decode(#[source] reqwest::Error),
}
