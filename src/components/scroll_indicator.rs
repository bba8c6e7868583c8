use yew::prelude::*;

use crate::config;
use crate::dom::{self, EventSubscription};

/// Hook for a flag that follows `window.scrollY > threshold`.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let past = use_state_eq(|| dom::scroll_y() > threshold);
    {
        let past = past.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = EventSubscription::on_window("scroll", move |_| {
                    past.set(dom::scroll_y() > threshold);
                });
                move || drop(subscription)
            },
            (),
        );
    }
    *past
}

#[function_component(ScrollIndicator)]
pub fn scroll_indicator() -> Html {
    let hidden = use_scrolled_past(config::SCROLL_INDICATOR_HIDE_AFTER);
    html! {
        <div class={classes!("scroll-indicator", hidden.then_some("hidden"))} aria-hidden="true">
            <div class="scroll-indicator-mouse">
                <div class="scroll-indicator-wheel"></div>
            </div>
        </div>
    }
}
