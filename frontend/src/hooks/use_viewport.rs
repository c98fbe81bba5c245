use yew::prelude::*;
use gloo::events::EventListener;
use shared::Viewport;

fn current_width() -> f64 {
    gloo::utils::window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

/// Layout variant for the current window width, updated on resize
#[hook]
pub fn use_viewport(breakpoint: f64) -> Viewport {
    let viewport = use_state(|| Viewport::from_width(current_width(), breakpoint));

    use_effect_with(breakpoint.to_bits(), {
        let viewport = viewport.clone();
        move |_| {
            viewport.set(Viewport::from_width(current_width(), breakpoint));
            let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| {
                viewport.set(Viewport::from_width(current_width(), breakpoint));
            });
            move || drop(listener)
        }
    });

    *viewport
}
