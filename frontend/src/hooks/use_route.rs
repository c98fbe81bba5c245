use yew::prelude::*;
use shared::Route;
use crate::services::navigation::Navigator;

/// Current route, re-rendered whenever the browser history changes
#[hook]
pub fn use_route(navigator: &Navigator) -> Route {
    let route = use_state(|| navigator.current());

    use_effect_with(navigator.clone(), {
        let route = route.clone();
        move |navigator: &Navigator| {
            let listener = {
                let history = navigator.clone();
                navigator.listen(move || route.set(history.current()))
            };
            move || drop(listener)
        }
    });

    *route
}
