pub mod desktop;
pub mod mobile;

use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::{ProfileField, ProfileFields};

pub use desktop::DesktopProfileEdit;
pub use mobile::MobileProfileEdit;

pub const AVATAR_SRC: &str = "/Person.png";
pub const LOGO_SRC: &str = "/PgBee.png";

/// Props shared by both layout variants
#[derive(Properties, PartialEq)]
pub struct ProfileEditProps {
    pub fields: ProfileFields,
    pub on_field_change: Callback<(ProfileField, String)>,
    pub on_save: Callback<()>,
    pub on_edit_photo: Callback<()>,
}

fn on_input(field: ProfileField, on_field_change: &Callback<(ProfileField, String)>) -> Callback<InputEvent> {
    let on_field_change = on_field_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_field_change.emit((field, input.value()));
    })
}

fn emit_on_click(callback: &Callback<()>) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        callback.emit(());
    })
}
