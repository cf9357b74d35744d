// crates/xeghep-app/src/back_to_top.rs
// Floating "back to top" button

use leptos::ev;
use leptos::prelude::*;
use xeghep_core::scroll::back_to_top_visible;

use crate::dom;

const BUTTON_STYLE: &str = "position: fixed; bottom: 120px; right: 25px; \
    width: 50px; height: 50px; background: #0068ff; color: white; \
    border: none; border-radius: 50%; font-size: 20px; cursor: pointer; \
    transition: all 0.3s ease; z-index: 9998; \
    box-shadow: 0 2px 10px rgba(0,0,0,0.2);";

fn button_style(visible: bool) -> String {
    let (opacity, visibility) = if visible { ("1", "visible") } else { ("0", "hidden") };
    format!("{} opacity: {}; visibility: {};", BUTTON_STYLE, opacity, visibility)
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = signal(back_to_top_visible(dom::scroll_y()));

    // Lives as long as the page
    _ = window_event_listener(ev::scroll, move |_| {
        set_visible.set(back_to_top_visible(dom::scroll_y()));
    });

    view! {
        <button
            class="back-to-top"
            style=move || button_style(visible.get())
            on:click=move |_| dom::smooth_scroll_to(0.0)
        >
            "↑"
        </button>
    }
}

/// Append the button to `<body>`
pub fn mount_back_to_top() {
    leptos::mount::mount_to_body(BackToTop);
    log::debug!("Back-to-top button mounted");
}
