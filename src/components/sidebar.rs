//! Sidebar Navigation Component
//!
//! Section links for the admin and provider dashboards. On small screens the
//! sidebar slides in over a dimmed overlay; picking a section or tapping the
//! overlay closes it. A locked sidebar ignores every link.

use leptos::prelude::*;

/// One sidebar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl SidebarItem {
    pub const fn new(id: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { id, label, icon }
    }
}

#[component]
pub fn Sidebar(
    #[prop(into)] title: String,
    items: &'static [SidebarItem],
    active: RwSignal<String>,
    /// Mobile open state
    open: RwSignal<bool>,
    #[prop(into, optional)] locked: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=move || if open.get() { "sidebar-overlay active" } else { "sidebar-overlay" }
            on:click=move |_| open.set(false)
        ></div>
        <nav class=move || {
            let mut class = String::from("sidebar");
            if open.get() { class.push_str(" show"); }
            if locked.get() { class.push_str(" locked"); }
            class
        }>
            <div class="sidebar-header">
                <h5 class="mb-0">{title}</h5>
            </div>
            <ul class="nav flex-column">
                {items.iter().map(|item| {
                    let id = item.id;
                    view! {
                        <li class="nav-item">
                            <a
                                href="#"
                                class=move || {
                                    let mut class = String::from("nav-link");
                                    if active.get() == id { class.push_str(" active"); }
                                    if locked.get() { class.push_str(" disabled"); }
                                    class
                                }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    if locked.get_untracked() {
                                        return;
                                    }
                                    active.set(id.to_string());
                                    open.set(false);
                                }
                            >
                                <i class=format!("fas {} me-2", item.icon)></i>
                                {item.label}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

/// Hamburger button shown on small screens
#[component]
pub fn SidebarToggle(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            class="btn btn-outline-secondary d-lg-none sidebar-toggle"
            type="button"
            aria-label="Toggle navigation"
            on:click=move |_| open.update(|o| *o = !*o)
        >
            <i class="fas fa-bars"></i>
        </button>
    }
}
