use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::services::logging::Logger;

const RENDER_RETRY_MS: u32 = 100;
/// Attempts before a slow script load is reported
const SLOW_LOAD_ATTEMPTS: u32 = 50;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = render)]
    fn grecaptcha_render(container: &Element, parameters: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = reset)]
    fn grecaptcha_reset(widget_id: &JsValue) -> Result<(), JsValue>;
}

/// Imperative handle to a rendered reCAPTCHA widget
#[derive(Clone, Default)]
pub struct RecaptchaHandle {
    widget_id: Rc<RefCell<Option<JsValue>>>,
}

impl RecaptchaHandle {
    /// Clear the solved challenge so the user has to verify again
    pub fn reset(&self) {
        let widget_id = self.widget_id.borrow();
        let Some(widget_id) = widget_id.as_ref() else {
            return;
        };

        if let Err(e) = grecaptcha_reset(widget_id) {
            Logger::warn_with_component("recaptcha", &format!("reset failed: {:?}", e));
        }
    }

    fn attach(&self, widget_id: JsValue) {
        *self.widget_id.borrow_mut() = Some(widget_id);
    }

    fn detach(&self) {
        self.widget_id.borrow_mut().take();
    }
}

impl PartialEq for RecaptchaHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.widget_id, &other.widget_id)
    }
}

/// JS callbacks handed to grecaptcha; dropped on unmount
struct WidgetCallbacks {
    _on_token: Closure<dyn Fn(JsValue)>,
    _on_expired: Closure<dyn Fn()>,
}

#[derive(Properties, PartialEq)]
pub struct RecaptchaProps {
    pub site_key: AttrValue,
    pub handle: RecaptchaHandle,
    /// Token when a challenge is solved, `None` when it expires
    pub on_change: Callback<Option<String>>,
}

#[function_component(Recaptcha)]
pub fn recaptcha(props: &RecaptchaProps) -> Html {
    let container = use_node_ref();
    let callbacks = use_mut_ref(|| Option::<WidgetCallbacks>::None);

    use_effect_with(props.site_key.clone(), {
        let container = container.clone();
        let handle = props.handle.clone();
        let on_change = props.on_change.clone();
        let callbacks = callbacks.clone();

        move |site_key: &AttrValue| {
            // grecaptcha refuses to render twice into one element
            let host = mount_host(&container);

            let on_token = {
                let on_change = on_change.clone();
                Closure::<dyn Fn(JsValue)>::new(move |token: JsValue| {
                    on_change.emit(token.as_string());
                })
            };
            let on_expired = Closure::<dyn Fn()>::new(move || on_change.emit(None));

            let parameters = widget_parameters(site_key, &on_token, &on_expired);
            *callbacks.borrow_mut() = Some(WidgetCallbacks {
                _on_token: on_token,
                _on_expired: on_expired,
            });

            match (host.clone(), parameters) {
                (Some(host), Ok(parameters)) => {
                    spawn_local(render_when_loaded(host, parameters, handle.clone()));
                }
                (None, _) => {
                    Logger::error_with_component("recaptcha", "widget container is not mounted");
                }
                (_, Err(e)) => {
                    Logger::error_with_component("recaptcha", &format!("invalid widget parameters: {:?}", e));
                }
            }

            move || {
                handle.detach();
                if let Some(host) = host {
                    host.remove();
                }
                callbacks.borrow_mut().take();
            }
        }
    });

    html! {
        <div class="recaptcha" ref={container}></div>
    }
}

fn widget_parameters(
    site_key: &str,
    on_token: &Closure<dyn Fn(JsValue)>,
    on_expired: &Closure<dyn Fn()>,
) -> Result<Object, JsValue> {
    let parameters = Object::new();
    Reflect::set(&parameters, &"sitekey".into(), &site_key.into())?;
    Reflect::set(&parameters, &"callback".into(), on_token.as_ref())?;
    Reflect::set(&parameters, &"expired-callback".into(), on_expired.as_ref())?;
    Ok(parameters)
}

/// Fresh element inside the container for one widget instance
fn mount_host(container: &NodeRef) -> Option<Element> {
    let parent = container.cast::<Element>()?;
    let host = gloo::utils::document().create_element("div").ok()?;
    parent.append_child(&host).ok()?;
    Some(host)
}

/// The api script loads asynchronously, so retry until `grecaptcha` exists.
/// Stops once the host element leaves the document.
async fn render_when_loaded(host: Element, parameters: Object, handle: RecaptchaHandle) {
    let mut attempts = 0u32;

    while host.is_connected() {
        match grecaptcha_render(&host, &parameters) {
            Ok(widget_id) => {
                handle.attach(widget_id);
                return;
            }
            Err(_) => {
                attempts += 1;
                if attempts == SLOW_LOAD_ATTEMPTS {
                    Logger::warn_with_component("recaptcha", "grecaptcha is slow to load; still waiting");
                }
                TimeoutFuture::new(RENDER_RETRY_MS).await;
            }
        }
    }
}
