use yew::prelude::*;
use shared::{ProfileField, ProfileFields, Route, Viewport};
use crate::services::navigation::Navigator;

#[derive(Properties, PartialEq)]
pub struct ProfileViewPageProps {
    pub navigator: Navigator,
}

#[function_component(ProfileViewPage)]
pub fn profile_view_page(props: &ProfileViewPageProps) -> Html {
    let profile = ProfileFields::sample();

    let on_edit = {
        let navigator = props.navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(Route::ProfileEdit))
    };

    html! {
        <main class="profile-view-page">
            <h1>{"Profile"}</h1>
            <dl class="profile-details">
                {for ProfileField::WIDE_ORDER.iter()
                    .filter(|field| **field != ProfileField::Password)
                    .map(|field| html! {
                        <>
                            <dt>{field.label(Viewport::Wide)}</dt>
                            <dd>{profile.get(*field).to_string()}</dd>
                        </>
                    })}
            </dl>
            <button type="button" class="btn btn-primary" onclick={on_edit}>{"Edit Profile"}</button>
        </main>
    }
}
