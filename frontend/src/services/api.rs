use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{ApiError, AuthApi, CaptchaVerifyRequest, CaptchaVerifyResponse, Credentials};
use web_sys::RequestCredentials;

/// API client for the PgBee server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Non-2xx responses are errors, like a thrown axios call
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Status { status, body });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn verify_captcha(
        &self,
        request: &CaptchaVerifyRequest,
    ) -> Result<CaptchaVerifyResponse, ApiError> {
        let response = Request::post(&self.url("/api/v1/captcha"))
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_response(response).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, ApiError> {
        let response = Request::post(&self.url("/api/v1/auth/login"))
            .credentials(RequestCredentials::Include)
            .json(credentials)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_response(response).await
    }

    async fn google_login(&self) -> Result<serde_json::Value, ApiError> {
        let response = Request::get(&self.url("/api/v1/auth/google"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_response(response).await
    }
}
