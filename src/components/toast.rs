//! Toast Component
//!
//! Single top-right notification driven by `AppContext::toast`.

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="toast-container position-fixed top-0 end-0 p-3" style="z-index: 1100;">
            {move || ctx.toast.get().map(|toast| {
                let class = if toast.is_error {
                    "toast show align-items-center text-white bg-danger border-0"
                } else {
                    "toast show align-items-center text-white bg-success border-0"
                };
                let icon = if toast.is_error { "fas fa-exclamation-circle me-2" } else { "fas fa-check-circle me-2" };
                view! {
                    <div class=class role="alert" aria-live="assertive" aria-atomic="true">
                        <div class="d-flex">
                            <div class="toast-body">
                                <i class=icon></i>
                                {toast.message}
                            </div>
                            <button
                                type="button"
                                class="btn-close btn-close-white me-2 m-auto"
                                aria-label="Close"
                                on:click=move |_| ctx.dismiss_toast()
                            ></button>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
