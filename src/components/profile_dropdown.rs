//! Profile Dropdown Component
//!
//! Navbar avatar menu. Closes on a click outside it or on Escape.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app;

#[component]
pub fn ProfileDropdown() -> impl IntoView {
    let ctx = use_app();
    let (open, set_open) = signal(false);
    let root = NodeRef::<html::Div>::new();

    let username = move || {
        ctx.user
            .with(|u| u.as_ref().map(|u| u.username.clone()))
            .unwrap_or_else(|| "Account".to_string())
    };

    let click_handle = window_event_listener(ev::click, move |event| {
        if !open.get_untracked() {
            return;
        }
        let inside = match (root.get_untracked(), event.target()) {
            (Some(el), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .map(|node| el.contains(Some(node)))
                .unwrap_or(false),
            _ => false,
        };
        if !inside {
            set_open.set(false);
        }
    });
    let key_handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            set_open.set(false);
        }
    });
    on_cleanup(move || {
        click_handle.remove();
        key_handle.remove();
    });

    view! {
        <div class="dropdown profile-dropdown" node_ref=root>
            <button
                class="btn btn-link nav-link dropdown-toggle d-flex align-items-center"
                type="button"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <i class="fas fa-user-circle fa-lg me-2"></i>
                <span class="profile-name">{username}</span>
            </button>
            <ul class=move || if open.get() { "dropdown-menu dropdown-menu-end show" } else { "dropdown-menu dropdown-menu-end" }>
                <li><a class="dropdown-item" href="/profile"><i class="fas fa-user me-2"></i>"Profile"</a></li>
                <li><hr class="dropdown-divider"/></li>
                <li><a class="dropdown-item text-danger" href="/logout"><i class="fas fa-sign-out-alt me-2"></i>"Logout"</a></li>
            </ul>
        </div>
    }
}
