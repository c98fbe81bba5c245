use yew::prelude::*;
use shared::Route;
use crate::components::forms::credentials_form::CredentialsForm;
use crate::components::recaptcha::{Recaptcha, RecaptchaHandle};
use crate::hooks::use_login::use_login;
use crate::services::api::ApiClient;
use crate::services::navigation::Navigator;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub api_client: ApiClient,
    pub navigator: Navigator,
    pub recaptcha_site_key: AttrValue,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let captcha = use_memo((), |_| RecaptchaHandle::default());
    let login = use_login(&props.api_client, &props.navigator, &captcha);

    let on_signup_click = {
        let navigator = props.navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(Route::Signup))
    };

    let on_google_click = {
        let google_login = login.actions.google_login.clone();
        Callback::from(move |_: MouseEvent| google_login.emit(()))
    };

    let captcha_widget = html! {
        <Recaptcha
            site_key={props.recaptcha_site_key.clone()}
            handle={(*captcha).clone()}
            on_change={login.actions.set_captcha_token.clone()}
        />
    };

    html! {
        <div class="login-page">
            <h1 class="brand">
                <span class="brand-accent">{"Pg"}</span>
                <span>{"Bee"}</span>
            </h1>

            <div class="login-card">
                <div class="auth-tabs">
                    <button type="button" class="tab" onclick={on_signup_click}>{"Sign up"}</button>
                    <button type="button" class="tab active">{"Log in"}</button>
                </div>

                <button type="button" class="btn google-btn" onclick={on_google_click}>
                    {"Log In with Google"}
                </button>

                <div class="divider">
                    <hr />
                    <span>{"OR"}</span>
                    <hr />
                </div>

                <CredentialsForm
                    email={login.state.email.clone()}
                    password={login.state.password.clone()}
                    email_error={login.state.email_error}
                    password_error={login.state.password_error}
                    submitting={login.state.submitting}
                    captcha={captcha_widget}
                    on_email_change={login.actions.set_email.clone()}
                    on_password_change={login.actions.set_password.clone()}
                    on_submit={login.actions.submit.clone()}
                />
            </div>
        </div>
    }
}
