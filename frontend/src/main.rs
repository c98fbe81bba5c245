use yew::prelude::*;
use shared::Route;

mod components;
mod hooks;
mod pages;
mod services;

use hooks::use_route::use_route;
use pages::home::HomePage;
use pages::login::LoginPage;
use pages::profile_edit::ProfileEditPage;
use pages::profile_view::ProfileViewPage;
use services::api::ApiClient;
use services::config::AppConfig;
use services::logging::Logger;
use services::navigation::Navigator;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::default());
    let api_client = use_memo((), {
        let base_url = config.api_base_url.clone();
        move |_| ApiClient::with_base_url(base_url)
    });
    let navigator = use_memo((), |_| Navigator::new());
    let route = use_route(&navigator);

    match route {
        Route::Login => html! {
            <LoginPage
                api_client={(*api_client).clone()}
                navigator={(*navigator).clone()}
                recaptcha_site_key={config.recaptcha_site_key.clone()}
            />
        },
        Route::ProfileEdit => html! {
            <ProfileEditPage
                navigator={(*navigator).clone()}
                narrow_breakpoint_px={config.narrow_breakpoint_px}
            />
        },
        Route::ProfileView => html! {
            <ProfileViewPage navigator={(*navigator).clone()} />
        },
        Route::Home => html! {
            <HomePage navigator={(*navigator).clone()} title="Find your next stay" />
        },
        Route::Signup => html! {
            <HomePage navigator={(*navigator).clone()} title="Sign up is coming soon" />
        },
        Route::NotFound => html! {
            <HomePage navigator={(*navigator).clone()} title="Page not found" />
        },
    }
}

fn main() {
    Logger::info_with_component("app", "starting PgBee frontend");
    yew::Renderer::<App>::new().render();
}
