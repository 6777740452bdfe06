//! Modal Component
//!
//! Bootstrap-styled dialog rendered only while `show` is true. Clicking the
//! backdrop or the close button hides it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    show: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    /// Extra dialog class, e.g. "modal-lg"
    #[prop(into, optional)] size: String,
    children: ChildrenFn,
    #[prop(optional, into)] footer: Option<ViewFn>,
) -> impl IntoView {
    let children = StoredValue::new(children);
    let footer = StoredValue::new(footer);
    let dialog_class = format!("modal-dialog modal-dialog-centered modal-dialog-scrollable {}", size);

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop fade show"></div>
            <div
                class="modal fade show d-block"
                tabindex="-1"
                role="dialog"
                on:click=move |_| show.set(false)
            >
                <div class=dialog_class.clone() on:click=|ev| ev.stop_propagation()>
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{move || title.get()}</h5>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| show.set(false)
                            ></button>
                        </div>
                        <div class="modal-body">
                            {children.with_value(|c| c())}
                        </div>
                        {footer.with_value(|f| f.as_ref().map(|f| view! {
                            <div class="modal-footer">{f.run()}</div>
                        }))}
                    </div>
                </div>
            </div>
        </Show>
    }
}
