use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{
    begin_submit, continue_with_google, submit_login, LoginEffects, LoginForm, LoginOutcome, LoginValidationError,
    Notice, Route, SubmitBlocked,
};
use crate::components::recaptcha::RecaptchaHandle;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::navigation::Navigator;

#[derive(Clone, PartialEq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub email_error: Option<LoginValidationError>,
    pub password_error: Option<LoginValidationError>,
    pub submitting: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseLoginActions {
    pub set_email: Callback<String>,
    pub set_password: Callback<String>,
    pub set_captcha_token: Callback<Option<String>>,
    pub submit: Callback<()>,
    pub google_login: Callback<()>,
}

pub struct UseLoginResult {
    pub state: LoginState,
    pub actions: UseLoginActions,
}

/// Effects of the login workflow in the browser
struct BrowserLoginEffects {
    captcha: RecaptchaHandle,
    captcha_token: UseStateHandle<Option<String>>,
    navigator: Navigator,
}

impl LoginEffects for BrowserLoginEffects {
    fn reset_captcha(&self) {
        self.captcha.reset();
    }

    fn clear_token(&self) {
        self.captcha_token.set(None);
    }

    fn notify(&self, notice: Notice) {
        Logger::info_with_component("login", &format!("notice: {}", notice));
        gloo::dialogs::alert(&notice.to_string());
    }

    fn navigate(&self, route: Route) {
        self.navigator.push(route);
    }
}

/// Hook owning the login form state and running the captcha-gated submission
#[hook]
pub fn use_login(api_client: &ApiClient, navigator: &Navigator, captcha: &RecaptchaHandle) -> UseLoginResult {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| Option::<LoginValidationError>::None);
    let password_error = use_state(|| Option::<LoginValidationError>::None);
    let captcha_token = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let set_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let set_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let set_captcha_token = {
        let captcha_token = captcha_token.clone();
        Callback::from(move |token: Option<String>| {
            captcha_token.set(token.filter(|t| !t.is_empty()));
        })
    };

    let submit = {
        let email = email.clone();
        let password = password.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let captcha_token = captcha_token.clone();
        let submitting = submitting.clone();
        let api_client = api_client.clone();
        let navigator = navigator.clone();
        let captcha = captcha.clone();

        Callback::from(move |_: ()| {
            let form = LoginForm {
                email: (*email).clone(),
                password: (*password).clone(),
                captcha_token: (*captcha_token).clone(),
                submitting: *submitting,
            };

            let validation = form.validate();
            email_error.set(validation.email_error);
            password_error.set(validation.password_error);

            let effects = BrowserLoginEffects {
                captcha: captcha.clone(),
                captcha_token: captcha_token.clone(),
                navigator: navigator.clone(),
            };

            let attempt = match begin_submit(&form, &effects) {
                Ok(attempt) => attempt,
                Err(SubmitBlocked::InFlight) => {
                    Logger::debug_with_component("login", "submission already in flight");
                    return;
                }
                Err(_) => return,
            };

            submitting.set(true);

            let api_client = api_client.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match submit_login(&api_client, &effects, attempt).await {
                    LoginOutcome::LoggedIn(payload) => {
                        Logger::info_with_component("login", &format!("Fetched details: {}", payload));
                    }
                    LoginOutcome::CaptchaRejected => {
                        Logger::warn_with_component("login", "captcha verification rejected");
                    }
                    LoginOutcome::Failed(e) => {
                        Logger::error_with_component("login", &format!("Login error: {}", e));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let google_login = {
        let api_client = api_client.clone();
        let navigator = navigator.clone();
        let captcha = captcha.clone();
        let captcha_token = captcha_token.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let effects = BrowserLoginEffects {
                captcha: captcha.clone(),
                captcha_token: captcha_token.clone(),
                navigator: navigator.clone(),
            };

            spawn_local(async move {
                match continue_with_google(&api_client, &effects).await {
                    Ok(payload) => {
                        Logger::info_with_component("login", &format!("Google login response: {}", payload));
                    }
                    Err(e) => {
                        Logger::error_with_component("login", &format!("Error during Google login: {}", e));
                    }
                }
            });
        })
    };

    let state = LoginState {
        email: (*email).clone(),
        password: (*password).clone(),
        email_error: *email_error,
        password_error: *password_error,
        submitting: *submitting,
    };

    let actions = UseLoginActions {
        set_email,
        set_password,
        set_captcha_token,
        submit,
        google_login,
    };

    UseLoginResult { state, actions }
}
