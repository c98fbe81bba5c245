use yew::prelude::*;
use shared::{ProfileField, Viewport};

use super::{emit_on_click, on_input, ProfileEditProps, AVATAR_SRC, LOGO_SRC};

#[function_component(MobileProfileEdit)]
pub fn mobile_profile_edit(props: &ProfileEditProps) -> Html {
    html! {
        <div class="profile-edit-mobile">
            <div class="profile-logo">
                <img src={LOGO_SRC} alt="Pgbee" width="130" />
            </div>
            <div class="profile-back">
                <span class="back-arrow">{"‹"}</span>
                <span>{"Profile"}</span>
            </div>
            <div class="profile-avatar-block">
                <div class="profile-avatar">
                    <img src={AVATAR_SRC} alt="Profile" width="130" height="130" />
                    <button type="button" class="avatar-edit" onclick={emit_on_click(&props.on_edit_photo)}>
                        {"✎"}
                    </button>
                </div>
                <button type="button" class="btn btn-primary save-btn" onclick={emit_on_click(&props.on_save)}>
                    {"Save"}
                </button>
            </div>
            {for ProfileField::order(Viewport::Narrow).iter().map(|field| {
                html! {
                    <div class="profile-field" key={field.label(Viewport::Narrow)}>
                        <span class="profile-label">{field.label(Viewport::Narrow)}</span>
                        <input
                            type={field.input_type()}
                            placeholder={field.placeholder(Viewport::Narrow)}
                            value={props.fields.get(*field).to_string()}
                            oninput={on_input(*field, &props.on_field_change)}
                        />
                    </div>
                }
            })}
        </div>
    }
}
