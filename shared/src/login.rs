//! Login form model and the captcha-gated submission workflow.
//!
//! The workflow is written against two collaborator traits so it can run in the
//! browser (gloo requests, reCAPTCHA widget, browser history) and in native tests.

use std::fmt;

use async_trait::async_trait;

use crate::{ApiError, CaptchaVerifyRequest, CaptchaVerifyResponse, Credentials, Route};

/// Minimum password length accepted by the login form
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Remote endpoints used by the login page
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /api/v1/captcha`
    async fn verify_captcha(
        &self,
        request: &CaptchaVerifyRequest,
    ) -> Result<CaptchaVerifyResponse, ApiError>;

    /// `POST /api/v1/auth/login`, sent with credentials (cookies) included
    async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, ApiError>;

    /// `GET /api/v1/auth/google`
    async fn google_login(&self) -> Result<serde_json::Value, ApiError>;
}

/// UI side effects the workflow triggers
pub trait LoginEffects {
    /// Reset the verification widget so a new challenge can be solved
    fn reset_captcha(&self);
    /// Drop the stored verification token
    fn clear_token(&self);
    fn notify(&self, notice: Notice);
    fn navigate(&self, route: Route);
}

/// Field-level validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginValidationError {
    InvalidEmail,
    PasswordTooShort,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginValidationError::InvalidEmail => write!(f, "Please enter a valid email address."),
            LoginValidationError::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            ),
        }
    }
}

/// Result of validating both login fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormValidation {
    pub email_error: Option<LoginValidationError>,
    pub password_error: Option<LoginValidationError>,
}

impl LoginFormValidation {
    pub fn is_valid(&self) -> bool {
        self.email_error.is_none() && self.password_error.is_none()
    }
}

/// Blocking notices shown to the user during login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    CaptchaRequired,
    CaptchaRejected,
    LoginSucceeded,
    LoginFailed,
    GoogleLoginFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Notice::CaptchaRequired => "Please complete the captcha.",
            Notice::CaptchaRejected => "Captcha verification failed. Try again.",
            Notice::LoginSucceeded => "Login successful!",
            Notice::LoginFailed => "Something went wrong.",
            Notice::GoogleLoginFailed => "Something went wrong with Google login.",
        };
        f.write_str(message)
    }
}

/// Why a submission did not start
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    Invalid(LoginFormValidation),
    CaptchaMissing,
    /// A previous submission has not finished yet
    InFlight,
}

/// Everything a single submission needs. Consumes the verification token.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginAttempt {
    pub credentials: Credentials,
    pub captcha_token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Carries the opaque payload returned by the auth endpoint
    LoggedIn(serde_json::Value),
    CaptchaRejected,
    Failed(ApiError),
}

/// Snapshot of the login form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub captcha_token: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Store the widget's token; `None` when the challenge expires
    pub fn set_captcha_token(&mut self, token: Option<String>) {
        self.captcha_token = token.filter(|t| !t.is_empty());
    }

    /// Check both fields. Never stops at the first failure.
    ///
    /// Password length is counted in UTF-16 code units, like a browser input's `value.length`.
    pub fn validate(&self) -> LoginFormValidation {
        LoginFormValidation {
            email_error: (!is_valid_email(&self.email)).then_some(LoginValidationError::InvalidEmail),
            password_error: (self.password.encode_utf16().count() < MIN_PASSWORD_LENGTH)
                .then_some(LoginValidationError::PasswordTooShort),
        }
    }

    pub fn prepare_submit(&self) -> Result<LoginAttempt, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        let validation = self.validate();
        if !validation.is_valid() {
            return Err(SubmitBlocked::Invalid(validation));
        }

        let captcha_token = self
            .captcha_token
            .clone()
            .ok_or(SubmitBlocked::CaptchaMissing)?;

        Ok(LoginAttempt {
            credentials: Credentials {
                email: self.email.clone(),
                password: self.password.clone(),
            },
            captcha_token,
        })
    }
}

/// Check the form, notifying the user when the captcha has not been solved.
///
/// Nothing is sent unless this returns `Ok`.
pub fn begin_submit<E>(form: &LoginForm, effects: &E) -> Result<LoginAttempt, SubmitBlocked>
where
    E: LoginEffects + ?Sized,
{
    let result = form.prepare_submit();
    if result == Err(SubmitBlocked::CaptchaMissing) {
        effects.notify(Notice::CaptchaRequired);
    }
    result
}

/// Characters matched by `\s` in an ECMAScript regular expression
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    // need a '.' with at least one character on each side
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Verify the captcha token, then exchange credentials.
///
/// The auth call is only made after a positive captcha verdict. Every path
/// ends with the token cleared and the widget reset.
pub async fn submit_login<A, E>(api: &A, effects: &E, attempt: LoginAttempt) -> LoginOutcome
where
    A: AuthApi + ?Sized,
    E: LoginEffects + ?Sized,
{
    let LoginAttempt {
        credentials,
        captcha_token,
    } = attempt;

    let result = verify_then_login(api, &credentials, captcha_token).await;

    effects.reset_captcha();
    effects.clear_token();

    match result {
        Ok(Some(payload)) => {
            effects.notify(Notice::LoginSucceeded);
            effects.navigate(Route::Home);
            LoginOutcome::LoggedIn(payload)
        }
        Ok(None) => {
            effects.notify(Notice::CaptchaRejected);
            LoginOutcome::CaptchaRejected
        }
        Err(e) => {
            effects.notify(Notice::LoginFailed);
            LoginOutcome::Failed(e)
        }
    }
}

/// `Ok(None)` when the captcha was rejected
async fn verify_then_login<A>(
    api: &A,
    credentials: &Credentials,
    token: String,
) -> Result<Option<serde_json::Value>, ApiError>
where
    A: AuthApi + ?Sized,
{
    let verdict = api.verify_captcha(&CaptchaVerifyRequest { token }).await?;
    if !verdict.success {
        return Ok(None);
    }

    api.login(credentials).await.map(Some)
}

/// Start the external identity flow. The response is only returned for logging.
pub async fn continue_with_google<A, E>(api: &A, effects: &E) -> Result<serde_json::Value, ApiError>
where
    A: AuthApi + ?Sized,
    E: LoginEffects + ?Sized,
{
    let result = api.google_login().await;
    if result.is_err() {
        effects.notify(Notice::GoogleLoginFailed);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Captcha(String),
        Login(Credentials),
        Google,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Effect {
        ResetCaptcha,
        ClearToken,
        Notify(Notice),
        Navigate(Route),
    }

    #[derive(Default)]
    struct ScriptedApi {
        captcha: RefCell<VecDeque<Result<CaptchaVerifyResponse, ApiError>>>,
        login: RefCell<VecDeque<Result<serde_json::Value, ApiError>>>,
        google: RefCell<VecDeque<Result<serde_json::Value, ApiError>>>,
        calls: RefCell<Vec<Call>>,
    }

    impl ScriptedApi {
        fn with_captcha(self, result: Result<CaptchaVerifyResponse, ApiError>) -> Self {
            self.captcha.borrow_mut().push_back(result);
            self
        }

        fn with_login(self, result: Result<serde_json::Value, ApiError>) -> Self {
            self.login.borrow_mut().push_back(result);
            self
        }

        fn with_google(self, result: Result<serde_json::Value, ApiError>) -> Self {
            self.google.borrow_mut().push_back(result);
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for ScriptedApi {
        async fn verify_captcha(
            &self,
            request: &CaptchaVerifyRequest,
        ) -> Result<CaptchaVerifyResponse, ApiError> {
            self.calls.borrow_mut().push(Call::Captcha(request.token.clone()));
            self.captcha
                .borrow_mut()
                .pop_front()
                .expect("unexpected captcha call")
        }

        async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, ApiError> {
            self.calls.borrow_mut().push(Call::Login(credentials.clone()));
            self.login.borrow_mut().pop_front().expect("unexpected login call")
        }

        async fn google_login(&self) -> Result<serde_json::Value, ApiError> {
            self.calls.borrow_mut().push(Call::Google);
            self.google.borrow_mut().pop_front().expect("unexpected google call")
        }
    }

    #[derive(Default)]
    struct RecordingEffects {
        effects: RefCell<Vec<Effect>>,
    }

    impl RecordingEffects {
        fn recorded(&self) -> Vec<Effect> {
            self.effects.borrow().clone()
        }
    }

    impl LoginEffects for RecordingEffects {
        fn reset_captcha(&self) {
            self.effects.borrow_mut().push(Effect::ResetCaptcha);
        }

        fn clear_token(&self) {
            self.effects.borrow_mut().push(Effect::ClearToken);
        }

        fn notify(&self, notice: Notice) {
            self.effects.borrow_mut().push(Effect::Notify(notice));
        }

        fn navigate(&self, route: Route) {
            self.effects.borrow_mut().push(Effect::Navigate(route));
        }
    }

    fn form(email: &str, password: &str, token: Option<&str>) -> LoginForm {
        let mut form = LoginForm::default();
        form.set_email(email);
        form.set_password(password);
        form.set_captcha_token(token.map(str::to_string));
        form
    }

    fn attempt() -> LoginAttempt {
        form("bob@x.com", "abcdef", Some("tok1"))
            .prepare_submit()
            .unwrap()
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("bob@x.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(is_valid_email("x@y.z"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("bob@x"));
        assert!(!is_valid_email("bob@.com"));
        assert!(!is_valid_email("bob@x."));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("bob@@x.com"));
        assert!(!is_valid_email("bob@x@y.com"));
        assert!(!is_valid_email("bob smith@x.com"));
        assert!(!is_valid_email("bob@x.com "));
        assert!(!is_valid_email("bob@x.com\u{FEFF}"));
        assert!(!is_valid_email("bob\u{3000}@x.com"));
        // NEL is not part of `\s`
        assert!(is_valid_email("bob\u{85}@x.com"));
    }

    #[test]
    fn test_validate_reports_both_errors() {
        let validation = form("bob@x", "abc", None).validate();

        assert!(!validation.is_valid());
        assert_eq!(
            validation.email_error.unwrap().to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            validation.password_error.unwrap().to_string(),
            "Password must be at least 6 characters."
        );
    }

    #[test]
    fn test_validate_fields_independently() {
        let validation = form("bob@x.com", "abc", None).validate();
        assert_eq!(validation.email_error, None);
        assert_eq!(validation.password_error, Some(LoginValidationError::PasswordTooShort));

        let validation = form("bob@x", "abcdef", None).validate();
        assert_eq!(validation.email_error, Some(LoginValidationError::InvalidEmail));
        assert_eq!(validation.password_error, None);

        assert!(form("bob@x.com", "abcdef", None).validate().is_valid());

        // each emoji is two UTF-16 code units
        assert_eq!(form("bob@x.com", "😀😀😀", None).validate().password_error, None);
        assert_eq!(
            form("bob@x.com", "😀😀", None).validate().password_error,
            Some(LoginValidationError::PasswordTooShort)
        );

        let validation = form("bob@x.com\u{FEFF}", "abcdef", None).validate();
        assert_eq!(validation.email_error, Some(LoginValidationError::InvalidEmail));
        assert_eq!(validation.password_error, None);
    }

    #[test]
    fn test_setters_do_not_validate() {
        let mut login = LoginForm::default();
        login.set_email("not an email");
        login.set_password("1");
        assert_eq!(login.email, "not an email");
        assert_eq!(login.password, "1");
    }

    #[test]
    fn test_empty_token_is_absent() {
        let login = form("bob@x.com", "abcdef", Some(""));
        assert_eq!(login.captcha_token, None);
    }

    #[test]
    fn test_prepare_submit_blocks() {
        assert_eq!(
            form("bob@x", "abc", Some("tok1")).prepare_submit(),
            Err(SubmitBlocked::Invalid(LoginFormValidation {
                email_error: Some(LoginValidationError::InvalidEmail),
                password_error: Some(LoginValidationError::PasswordTooShort),
            }))
        );
        assert_eq!(
            form("bob@x.com", "abcdef", None).prepare_submit(),
            Err(SubmitBlocked::CaptchaMissing)
        );

        let mut pending = form("bob@x.com", "abcdef", Some("tok1"));
        pending.submitting = true;
        assert_eq!(pending.prepare_submit(), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn test_prepare_submit_builds_attempt() {
        assert_eq!(
            attempt(),
            LoginAttempt {
                credentials: Credentials {
                    email: "bob@x.com".to_string(),
                    password: "abcdef".to_string(),
                },
                captcha_token: "tok1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_successful_login() {
        let api = ScriptedApi::default()
            .with_captcha(Ok(CaptchaVerifyResponse { success: true }))
            .with_login(Ok(serde_json::json!({ "user": "bob" })));
        let effects = RecordingEffects::default();

        let outcome = submit_login(&api, &effects, attempt()).await;

        assert_eq!(outcome, LoginOutcome::LoggedIn(serde_json::json!({ "user": "bob" })));
        assert_eq!(
            api.calls(),
            vec![
                Call::Captcha("tok1".to_string()),
                Call::Login(Credentials {
                    email: "bob@x.com".to_string(),
                    password: "abcdef".to_string(),
                }),
            ]
        );
        assert_eq!(
            effects.recorded(),
            vec![
                Effect::ResetCaptcha,
                Effect::ClearToken,
                Effect::Notify(Notice::LoginSucceeded),
                Effect::Navigate(Route::Home),
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_captcha_skips_login() {
        let api = ScriptedApi::default().with_captcha(Ok(CaptchaVerifyResponse { success: false }));
        let effects = RecordingEffects::default();

        let outcome = submit_login(&api, &effects, attempt()).await;

        assert_eq!(outcome, LoginOutcome::CaptchaRejected);
        assert_eq!(api.calls(), vec![Call::Captcha("tok1".to_string())]);
        assert_eq!(
            effects.recorded(),
            vec![
                Effect::ResetCaptcha,
                Effect::ClearToken,
                Effect::Notify(Notice::CaptchaRejected),
            ]
        );
    }

    #[tokio::test]
    async fn test_captcha_transport_error() {
        let api = ScriptedApi::default()
            .with_captcha(Err(ApiError::Network("connection refused".to_string())));
        let effects = RecordingEffects::default();

        let outcome = submit_login(&api, &effects, attempt()).await;

        assert_eq!(
            outcome,
            LoginOutcome::Failed(ApiError::Network("connection refused".to_string()))
        );
        assert_eq!(api.calls().len(), 1);
        assert_eq!(
            effects.recorded(),
            vec![
                Effect::ResetCaptcha,
                Effect::ClearToken,
                Effect::Notify(Notice::LoginFailed),
            ]
        );
    }

    #[tokio::test]
    async fn test_login_error_does_not_navigate() {
        let api = ScriptedApi::default()
            .with_captcha(Ok(CaptchaVerifyResponse { success: true }))
            .with_login(Err(ApiError::Status {
                status: 401,
                body: "Invalid credentials".to_string(),
            }));
        let effects = RecordingEffects::default();

        let outcome = submit_login(&api, &effects, attempt()).await;

        assert!(matches!(outcome, LoginOutcome::Failed(ApiError::Status { status: 401, .. })));
        assert_eq!(api.calls().len(), 2);
        assert!(!effects
            .recorded()
            .iter()
            .any(|effect| matches!(effect, Effect::Navigate(_))));
        assert!(effects.recorded().contains(&Effect::Notify(Notice::LoginFailed)));
    }

    /// Same sequence the login hook runs on a click
    async fn click_login(api: &ScriptedApi, effects: &RecordingEffects, login: &LoginForm) -> Option<LoginOutcome> {
        match begin_submit(login, effects) {
            Ok(attempt) => Some(submit_login(api, effects, attempt).await),
            Err(_) => None,
        }
    }

    #[tokio::test]
    async fn test_missing_token_sends_nothing() {
        let api = ScriptedApi::default();
        let effects = RecordingEffects::default();

        let outcome = click_login(&api, &effects, &form("bob@x.com", "abcdef", None)).await;

        assert_eq!(outcome, None);
        assert!(api.calls().is_empty());
        assert_eq!(effects.recorded(), vec![Effect::Notify(Notice::CaptchaRequired)]);
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing_silently() {
        let api = ScriptedApi::default();
        let effects = RecordingEffects::default();

        let outcome = click_login(&api, &effects, &form("bob@x", "abc", Some("tok1"))).await;

        assert_eq!(outcome, None);
        assert!(api.calls().is_empty());
        assert!(effects.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_in_flight_submission_is_ignored() {
        let api = ScriptedApi::default();
        let effects = RecordingEffects::default();
        let mut pending = form("bob@x.com", "abcdef", Some("tok1"));
        pending.submitting = true;

        assert_eq!(click_login(&api, &effects, &pending).await, None);
        assert!(api.calls().is_empty());
        assert!(effects.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_click_with_token_runs_both_calls() {
        let api = ScriptedApi::default()
            .with_captcha(Ok(CaptchaVerifyResponse { success: true }))
            .with_login(Ok(serde_json::json!({})));
        let effects = RecordingEffects::default();

        let outcome = click_login(&api, &effects, &form("bob@x.com", "abcdef", Some("tok1"))).await;

        assert_eq!(outcome, Some(LoginOutcome::LoggedIn(serde_json::json!({}))));
        assert_eq!(api.calls().len(), 2);
        assert_eq!(
            effects
                .recorded()
                .iter()
                .filter(|effect| matches!(effect, Effect::Navigate(Route::Home)))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_google_login_success_leaves_form_alone() {
        let api = ScriptedApi::default().with_google(Ok(serde_json::json!({ "url": "https://accounts.google.com" })));
        let effects = RecordingEffects::default();

        let payload = continue_with_google(&api, &effects).await.unwrap();

        assert_eq!(payload["url"], "https://accounts.google.com");
        assert_eq!(api.calls(), vec![Call::Google]);
        assert!(effects.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_google_login_failure_notifies() {
        let api = ScriptedApi::default().with_google(Err(ApiError::Decode("expected value".to_string())));
        let effects = RecordingEffects::default();

        assert!(continue_with_google(&api, &effects).await.is_err());
        assert_eq!(effects.recorded(), vec![Effect::Notify(Notice::GoogleLoginFailed)]);
    }
}
