//! Save Button Component
//!
//! Saved-flag toggle shared by listing cards and detail modals. Every view of
//! one listing reads the same `RwSignal<Optimistic<bool>>`, so a change made
//! from the modal shows on the card and the other way round.

use std::collections::HashMap;
use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{Ack, ApiResult, Optimistic, SaveRequest};

use crate::context::AppContext;

/// Saved state per listing id on one page
#[derive(Clone, Copy)]
pub struct SavedFlags {
    flags: StoredValue<HashMap<i64, RwSignal<Optimistic<bool>>>>,
}

impl SavedFlags {
    pub fn new() -> Self {
        Self { flags: StoredValue::new(HashMap::new()) }
    }

    /// Signal for `id`, created with `initial` on first use
    pub fn get_or_init(&self, id: i64, initial: bool) -> RwSignal<Optimistic<bool>> {
        if let Some(flag) = self.flags.with_value(|m| m.get(&id).copied()) {
            return flag;
        }
        let flag = RwSignal::new(Optimistic::new(initial));
        self.flags.update_value(|m| {
            m.insert(id, flag);
        });
        flag
    }
}

/// Flip `state` at once and send the matching save/unsave request. Clicks
/// while a request is running are dropped; a failure restores the last
/// confirmed value. `noun` names the listing in the default toast.
pub fn toggle_saved<F, Fut>(ctx: AppContext, state: RwSignal<Optimistic<bool>>, noun: &'static str, send: F)
where
    F: FnOnce(SaveRequest) -> Fut + 'static,
    Fut: Future<Output = ApiResult<Ack>> + 'static,
{
    let Some(request) = state.try_update(|s| s.begin_flip()).flatten() else {
        log::debug!("Saved toggle ignored, request in flight");
        return;
    };
    spawn_local(async move {
        match send(request).await {
            Ok(ack) => {
                state.update(|s| s.commit(request.target()));
                let fallback = match request {
                    SaveRequest::Save => format!("{} saved successfully", noun),
                    SaveRequest::Unsave => format!("{} removed from saved", noun),
                };
                ctx.notify(ack.message.filter(|m| !m.is_empty()).unwrap_or(fallback));
            }
            Err(err) => {
                state.update(|s| s.rollback());
                ctx.api_error(&err, "Something went wrong");
            }
        }
    });
}

/// Heart icon (`compact`) or full-width "Save" button
#[component]
pub fn SaveButton(
    state: RwSignal<Optimistic<bool>>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let saved = move || state.get().shown();
    let busy = move || state.get().in_flight();

    if compact {
        view! {
            <button
                type="button"
                class="btn btn-light btn-sm rounded-circle save-btn"
                title=move || if saved() { "Remove from saved" } else { "Save" }
                disabled=busy
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_toggle.run(());
                }
            >
                <i class=move || if saved() { "fas fa-heart text-danger" } else { "far fa-heart" }></i>
            </button>
        }
        .into_any()
    } else {
        view! {
            <button
                type="button"
                class=move || if saved() { "btn btn-danger w-100" } else { "btn btn-outline-danger w-100" }
                disabled=busy
                on:click=move |_| on_toggle.run(())
            >
                <i class=move || if saved() { "fas fa-heart me-2" } else { "far fa-heart me-2" }></i>
                {move || if saved() { "Saved" } else { "Save" }}
            </button>
        }
        .into_any()
    }
}
