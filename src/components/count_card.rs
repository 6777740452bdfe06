//! Dashboard Count Card Component

use leptos::prelude::*;

#[component]
pub fn CountCard(
    #[prop(into)] title: String,
    #[prop(into)] icon: String,
    #[prop(into)] count: Signal<u32>,
    /// Bootstrap contextual colour, e.g. "primary"
    #[prop(into, optional)] tone: Option<String>,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let tone = tone.unwrap_or_else(|| "primary".to_string());
    let clickable = on_click.is_some();

    view! {
        <div class="col-md-3 col-sm-6 mb-3">
            <div
                class=format!("card stat-card border-{} h-100{}", tone, if clickable { " clickable" } else { "" })
                on:click=move |_| {
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            >
                <div class="card-body d-flex align-items-center">
                    <i class=format!("fas {} fa-2x text-{} me-3", icon, tone)></i>
                    <div>
                        <div class="text-muted small">{title}</div>
                        <div class="fs-4 fw-bold">{move || count.get()}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Single full-width row for an empty or failed table
#[component]
pub fn EmptyRow(colspan: u32, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan.to_string() class="text-center text-muted py-4">{message}</td>
        </tr>
    }
}
