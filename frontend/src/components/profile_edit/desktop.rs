use yew::prelude::*;
use shared::{ProfileField, Viewport};

use super::{emit_on_click, on_input, ProfileEditProps, AVATAR_SRC};

#[function_component(DesktopProfileEdit)]
pub fn desktop_profile_edit(props: &ProfileEditProps) -> Html {
    html! {
        <div class="profile-edit-desktop">
            <h1 class="profile-edit-title">{"Edit Profile"}</h1>
            <div class="profile-card">
                <h2 class="profile-section-title">{"Personal Info"}</h2>
                <div class="profile-card-body">
                    <div class="profile-avatar">
                        <img src={AVATAR_SRC} alt="Profile" width="100" height="100" />
                        <button type="button" class="avatar-edit" onclick={emit_on_click(&props.on_edit_photo)}>
                            {"✎"}
                        </button>
                    </div>
                    <form class="profile-grid" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                        {for ProfileField::order(Viewport::Wide).iter().map(|field| {
                            let class = if field.spans_row() { "profile-field span-2" } else { "profile-field" };
                            html! {
                                <div {class} key={field.label(Viewport::Wide)}>
                                    <label class="profile-label">{field.label(Viewport::Wide)}</label>
                                    <input
                                        type={field.input_type()}
                                        placeholder={field.placeholder(Viewport::Wide)}
                                        value={props.fields.get(*field).to_string()}
                                        oninput={on_input(*field, &props.on_field_change)}
                                    />
                                </div>
                            }
                        })}
                    </form>
                </div>
                <div class="profile-actions">
                    <button type="button" class="btn btn-primary" onclick={emit_on_click(&props.on_save)}>
                        {"Save Changes"}
                    </button>
                </div>
            </div>
        </div>
    }
}
