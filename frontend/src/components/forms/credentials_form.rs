use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::LoginValidationError;

#[derive(Properties, PartialEq)]
pub struct CredentialsFormProps {
    // Form state
    pub email: String,
    pub password: String,
    pub email_error: Option<LoginValidationError>,
    pub password_error: Option<LoginValidationError>,
    pub submitting: bool,
    /// Verification widget rendered above the submit button
    pub captcha: Html,

    // Event handlers
    pub on_email_change: Callback<String>,
    pub on_password_change: Callback<String>,
    pub on_submit: Callback<()>,
}

fn input_value(callback: &Callback<String>) -> Callback<InputEvent> {
    let callback = callback.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        callback.emit(input.value());
    })
}

fn field_error(error: Option<LoginValidationError>) -> Html {
    match error {
        Some(error) => html! { <p class="field-error">{error.to_string()}</p> },
        None => html! {},
    }
}

#[function_component(CredentialsForm)]
pub fn credentials_form(props: &CredentialsFormProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="credentials-form" onsubmit={on_submit} novalidate=true>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input
                    type="email"
                    id="email"
                    placeholder="Enter your email address"
                    value={props.email.clone()}
                    oninput={input_value(&props.on_email_change)}
                />
                {field_error(props.email_error)}
            </div>

            <div class="form-group">
                <label for="password">{"Password"}</label>
                <input
                    type="password"
                    id="password"
                    placeholder="Enter your password"
                    value={props.password.clone()}
                    oninput={input_value(&props.on_password_change)}
                />
                {field_error(props.password_error)}
            </div>

            <div class="forgot-password">
                <a href="#">{"Forgot Your Password?"}</a>
            </div>

            <div class="captcha-slot">
                {props.captcha.clone()}
            </div>

            <button
                type="submit"
                class="btn btn-primary login-btn"
                disabled={props.submitting}
            >
                {if props.submitting { "Logging In..." } else { "Log In" }}
            </button>
        </form>
    }
}
