//! Housing Browser (hostel, PG, apartment)
//!
//! Server-rendered cards with a details modal. The modal fetches the listing
//! and its saved flag; the heart on the card and the modal button share one
//! saved state per listing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{inr_grouped, or_dash, HousingCard, HousingDetail, HousingKind};

use crate::api;
use crate::components::{toggle_saved, Carousel, Modal, SaveButton, SavedFlags};
use crate::context::{use_app, AppContext};
use crate::pages::loadable::Latest;

#[derive(Clone, Debug, PartialEq)]
enum DetailState {
    Loading,
    Failed(String),
    Ready(HousingDetail),
}

fn card_chips(kind: HousingKind, card: &HousingCard) -> Vec<String> {
    let chips = match kind {
        HousingKind::Hostel => vec![card.gender.clone(), card.room_type.clone()],
        HousingKind::Pg => vec![card.gender.clone(), card.sharing.as_ref().map(|s| format!("{} Sharing", s))],
        HousingKind::Apartment => vec![card.bhk.as_ref().map(|b| format!("{} BHK", b)), card.furnishing.clone()],
    };
    chips.into_iter().flatten().filter(|c| !c.is_empty()).collect()
}

fn flip_saved(ctx: AppContext, flags: SavedFlags, kind: HousingKind, id: i64) {
    let state = flags.get_or_init(id, false);
    toggle_saved(ctx, state, kind.label(), move |request| api::set_housing_saved(kind, id, request));
}

#[component]
pub fn HousingPage(kind: HousingKind, cards: Vec<HousingCard>) -> impl IntoView {
    let ctx = use_app();
    let flags = SavedFlags::new();
    let show_detail = RwSignal::new(false);
    let (detail_id, set_detail_id) = signal::<Option<i64>>(None);
    let (detail, set_detail) = signal(DetailState::Loading);

    for card in &cards {
        flags.get_or_init(card.id, card.is_saved);
    }

    let latest = Latest::new();

    let open_details = move |id: i64| {
        set_detail_id.set(Some(id));
        set_detail.set(DetailState::Loading);
        show_detail.set(true);
        let ticket = latest.begin();
        spawn_local(async move {
            let result = api::housing_details(kind, id).await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => {
                    set_detail.set(DetailState::Ready(data));
                    match api::housing_is_saved(kind, id).await {
                        Ok(saved) => flags.get_or_init(id, saved).update(|s| s.sync(saved)),
                        Err(e) => log::warn!("is-saved check for {} #{} failed: {}", kind.slug(), id, e),
                    }
                }
                Err(err) => {
                    log::error!("Loading {} #{} failed: {}", kind.slug(), id, err);
                    set_detail.set(DetailState::Failed(err.user_message("Could not load details.")));
                }
            }
        });
    };

    let placeholder = ctx.config.with_value(|c| c.placeholder_image.clone());
    let title = move || format!("{} Details", kind.label());

    view! {
        <div class="container py-4">
            <h2 class="mb-4">{format!("Find a {}", kind.label())}</h2>
            <Show when={
                let empty = cards.is_empty();
                move || empty
            }>
                <p class="text-muted">{format!("No {} listings available right now.", kind.label())}</p>
            </Show>
            <div class="row g-4">
                {cards.into_iter().map(|card| {
                    let id = card.id;
                    let chips = card_chips(kind, &card);
                    let saved = flags.get_or_init(id, card.is_saved);
                    view! {
                        <div class="col-md-6 col-lg-4">
                            <div class="card listing-card h-100">
                                <div class="position-relative">
                                    <img
                                        src=ctx.image(card.image_path.as_deref())
                                        class="card-img-top"
                                        style="height: 200px; object-fit: cover;"
                                        alt=card.title.clone()
                                    />
                                    <div class="position-absolute top-0 end-0 m-2">
                                        <SaveButton
                                            state=saved
                                            on_toggle=move |_| flip_saved(ctx, flags, kind, id)
                                            compact=true
                                        />
                                    </div>
                                </div>
                                <div class="card-body">
                                    <h5 class="card-title">{card.title.clone()}</h5>
                                    <p class="text-muted small mb-2">
                                        <i class="fas fa-map-marker-alt me-1"></i>{card.location.clone()}
                                    </p>
                                    <div class="d-flex flex-wrap gap-1 mb-2">
                                        {chips.into_iter().map(|chip| view! {
                                            <span class="badge bg-light text-dark border">{chip}</span>
                                        }).collect_view()}
                                    </div>
                                    <div class="d-flex justify-content-between align-items-center">
                                        <span class="fw-bold text-primary">
                                            {inr_grouped(card.price)}<small class="text-muted">"/month"</small>
                                        </span>
                                        <button class="btn btn-outline-primary btn-sm" on:click=move |_| open_details(id)>
                                            "View Details"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>

        <Modal show=show_detail title=Signal::derive(title) size="modal-lg">
            {let placeholder = placeholder.clone(); move || match detail.get() {
                DetailState::Loading => view! {
                    <div class="d-flex justify-content-center py-5">
                        <div class="spinner-border text-primary" role="status"></div>
                    </div>
                }.into_any(),
                DetailState::Failed(msg) => view! {
                    <p class="text-danger text-center py-4">{msg}</p>
                }.into_any(),
                DetailState::Ready(data) => {
                    let listing = data.listing;
                    let provider = data.provider;
                    let images: Vec<String> = listing.images.iter().map(|img| ctx.image(Some(img))).collect();
                    let features = listing.features(kind);
                    let saved = detail_id.get_untracked().map(|id| flags.get_or_init(id, false));
                    let placeholder = placeholder.clone();
                    view! {
                        <Carousel images=images placeholder=placeholder.clone()/>
                        <span class="badge bg-primary mb-2">{listing.house_type.clone()}</span>
                        <h4>{listing.title.clone()}</h4>
                        <p class="text-muted"><i class="fas fa-map-marker-alt me-1"></i>{listing.location.clone()}</p>
                        <h5 class="text-primary">
                            {inr_grouped(listing.price)}<span class="detail-price-period">"/month"</span>
                        </h5>
                        <p>{listing.description.clone()}</p>
                        <h6 class="mb-2">"Features:"</h6>
                        <div class="d-flex flex-wrap gap-2 mb-2">
                            {features.into_iter().map(|f| view! {
                                <span class=format!("badge {}", f.class)>
                                    {f.icon.map(|icon| view! { <i class=format!("fas {} me-1", icon)></i> })}
                                    {f.label}
                                </span>
                            }).collect_view()}
                        </div>
                        <p class="small text-muted">
                            {listing.created_at.as_ref().map(|d| format!("Listed on {}", d)).unwrap_or_default()}
                        </p>
                        <ProviderBlock provider=provider/>
                        {saved.map(|state| {
                            let id = detail_id.get_untracked().unwrap_or_default();
                            view! {
                                <div class="mt-3">
                                    <SaveButton state=state on_toggle=move |_| flip_saved(ctx, flags, kind, id)/>
                                </div>
                            }
                        })}
                    }.into_any()
                }
            }}
        </Modal>
    }
}

/// Provider card used in the housing and tiffin details views
#[component]
pub fn ProviderBlock(provider: urbanease_domain::ProviderCard) -> impl IntoView {
    let ctx = use_app();
    let verified = provider.is_verified();
    view! {
        <div class="card provider-card mt-3">
            <div class="card-body d-flex align-items-center">
                <div class="provider-avatar me-3">
                    {match provider.profile_pic.as_deref() {
                        Some(pic) => view! {
                            <img src=ctx.image(Some(pic)) alt=provider.business_name.clone() class="rounded-circle" width="56" height="56"/>
                        }.into_any(),
                        None => view! { <i class="fas fa-user fa-2x"></i> }.into_any(),
                    }}
                </div>
                <div>
                    <h6 class="mb-1">
                        {provider.business_name.clone()}
                        <Show when=move || verified>
                            <span class="badge bg-success ms-2"><i class="fas fa-check-circle me-1"></i>"Verified"</span>
                        </Show>
                    </h6>
                    <div class="small text-muted">
                        <i class="fas fa-phone me-1"></i>{or_dash(provider.phone.as_deref())}
                    </div>
                    <div class="small text-muted">
                        <i class="fas fa-envelope me-1"></i>{or_dash(provider.email.as_deref())}
                    </div>
                </div>
            </div>
        </div>
    }
}
