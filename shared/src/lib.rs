use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod login;
pub mod profile;
pub mod routes;

pub use login::{
    begin_submit, continue_with_google, submit_login, AuthApi, LoginAttempt, LoginEffects, LoginForm,
    LoginFormValidation, LoginOutcome, LoginValidationError, Notice, SubmitBlocked,
};
pub use profile::{ProfileField, ProfileFields, Viewport, DEFAULT_NARROW_BREAKPOINT_PX};
pub use routes::Route;

/// Body of `POST /api/v1/captcha`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptchaVerifyRequest {
    /// Token emitted by the verification widget, single use
    pub token: String,
}

/// Verdict returned by the captcha verification endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptchaVerifyResponse {
    pub success: bool,
}

/// Body of `POST /api/v1/auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Failure of a call to the remote API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
