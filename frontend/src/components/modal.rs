use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay with a dimmed backdrop and a close button.
///
/// Visibility belongs to the parent: closing only emits `on_close`.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    if !props.show {
        return html! {};
    }

    html! {
        <div class="modal-backdrop">
            <div class="modal-panel">
                <button type="button" class="modal-close" onclick={on_close_click}>
                    {"✖"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
