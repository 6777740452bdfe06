//! Image Carousel Component

use leptos::prelude::*;

/// Slides through `images` (already resolved URLs). Shows a single
/// placeholder slide when the list is empty.
#[component]
pub fn Carousel(
    #[prop(into)] images: Signal<Vec<String>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let (index, set_index) = signal(0usize);

    // New image set, start over
    Effect::new(move |_| {
        images.track();
        set_index.set(0);
    });

    let len = move || images.with(|imgs| imgs.len());
    let step = move |delta: isize| {
        let n = len();
        if n > 1 {
            set_index.update(|i| *i = ((*i as isize + delta).rem_euclid(n as isize)) as usize);
        }
    };
    let current = move || {
        images.with(|imgs| imgs.get(index.get()).cloned()).unwrap_or_else(|| placeholder.clone())
    };

    view! {
        <div class="carousel slide mb-3">
            <div class="carousel-inner">
                <div class="carousel-item active">
                    <img src=current class="d-block w-100 rounded" style="height: 300px; object-fit: cover;" alt="Listing image"/>
                </div>
            </div>
            <Show when=move || { len() > 1 }>
                <button class="carousel-control-prev" type="button" on:click=move |_| step(-1)>
                    <span class="carousel-control-prev-icon" aria-hidden="true"></span>
                    <span class="visually-hidden">"Previous"</span>
                </button>
                <button class="carousel-control-next" type="button" on:click=move |_| step(1)>
                    <span class="carousel-control-next-icon" aria-hidden="true"></span>
                    <span class="visually-hidden">"Next"</span>
                </button>
                <div class="carousel-indicators">
                    {move || (0..len()).map(|i| view! {
                        <button
                            type="button"
                            class=move || if index.get() == i { "active" } else { "" }
                            on:click=move |_| set_index.set(i)
                        ></button>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
