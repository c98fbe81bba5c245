use yew::prelude::*;
use shared::Route;
use crate::services::navigation::Navigator;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub navigator: Navigator,
    /// Heading shown above the links
    pub title: AttrValue,
}

/// Landing page; also stands in for routes that have no page of their own
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let link = |route: Route, label: &'static str| {
        let navigator = props.navigator.clone();
        let onclick = Callback::from(move |_: MouseEvent| navigator.push(route));
        html! { <button type="button" class="btn btn-secondary" {onclick}>{label}</button> }
    };

    html! {
        <main class="home-page">
            <h1 class="brand">
                <span class="brand-accent">{"Pg"}</span>
                <span>{"Bee"}</span>
            </h1>
            <h2>{props.title.clone()}</h2>
            <nav class="home-links">
                {link(Route::Login, "Log in")}
                {link(Route::ProfileView, "My profile")}
                {link(Route::ProfileEdit, "Edit profile")}
            </nav>
        </main>
    }
}
