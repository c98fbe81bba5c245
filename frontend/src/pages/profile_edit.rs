use yew::prelude::*;
use shared::{ProfileField, ProfileFields, Route, Viewport};
use crate::components::modal::Modal;
use crate::components::profile_edit::{DesktopProfileEdit, MobileProfileEdit, AVATAR_SRC};
use crate::hooks::use_viewport::use_viewport;
use crate::services::logging::Logger;
use crate::services::navigation::Navigator;

#[derive(Properties, PartialEq)]
pub struct ProfileEditPageProps {
    pub navigator: Navigator,
    pub narrow_breakpoint_px: f64,
}

#[derive(Properties, PartialEq)]
struct ProfileEditorProps {
    layout: Viewport,
    navigator: Navigator,
}

/// One layout variant with its own staged fields
#[function_component(ProfileEditor)]
fn profile_editor(props: &ProfileEditorProps) -> Html {
    let fields = use_state(|| ProfileFields::initial(props.layout));
    let show_photo = use_state(|| false);

    let on_field_change = {
        let fields = fields.clone();
        Callback::from(move |(field, value): (ProfileField, String)| {
            let mut staged = (*fields).clone();
            staged.set(field, value);
            fields.set(staged);
        })
    };

    // No persistence yet: saving only moves on to the profile view
    let on_save = {
        let navigator = props.navigator.clone();
        Callback::from(move |_: ()| {
            Logger::info_with_component("profile-edit", "save requested, showing profile view");
            navigator.push(Route::ProfileView);
        })
    };

    let on_edit_photo = {
        let show_photo = show_photo.clone();
        Callback::from(move |_: ()| show_photo.set(true))
    };

    let on_close_photo = {
        let show_photo = show_photo.clone();
        Callback::from(move |_: ()| show_photo.set(false))
    };

    let editor = match props.layout {
        Viewport::Narrow => html! {
            <MobileProfileEdit
                fields={(*fields).clone()}
                {on_field_change}
                {on_save}
                {on_edit_photo}
            />
        },
        Viewport::Wide => html! {
            <DesktopProfileEdit
                fields={(*fields).clone()}
                {on_field_change}
                {on_save}
                {on_edit_photo}
            />
        },
    };

    html! {
        <>
            {editor}
            <Modal show={*show_photo} on_close={on_close_photo}>
                <div class="photo-preview">
                    <h3>{"Profile photo"}</h3>
                    <img src={AVATAR_SRC} alt="Profile" />
                </div>
            </Modal>
        </>
    }
}

#[function_component(ProfileEditPage)]
pub fn profile_edit_page(props: &ProfileEditPageProps) -> Html {
    let layout = use_viewport(props.narrow_breakpoint_px);

    html! {
        <main class="profile-edit-page">
            <ProfileEditor key={format!("{:?}", layout)} {layout} navigator={props.navigator.clone()} />
        </main>
    }
}
