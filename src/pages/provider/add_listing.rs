//! Add-Listing Forms
//!
//! One modal per listing kind. Submitting parks the form (with its image
//! files) as the listing draft and sends the browser to the payment page;
//! the dashboard submits it when payment returns.

use std::collections::BTreeMap;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{
    begin_payment, diet_from_flags, require_fields, summarize_days, ListingDraft, ListingKind, ServiceCategory,
    ValidationError, ValidationResult, Weekday,
};

use crate::components::Modal;
use crate::context::use_app;
use crate::dom;
use crate::draft_store::IndexedDbDraftStore;

/// Type-specific house input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Select {
        key: &'static str,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
    },
    Check {
        key: &'static str,
        label: &'static str,
    },
}

const GENDER: Field = Field::Select {
    key: "gender",
    label: "Gender",
    options: &[("boys", "Boys"), ("girls", "Girls"), ("coed", "Co-ed")],
};

const HOSTEL: &[Field] = &[
    GENDER,
    Field::Select {
        key: "room_type",
        label: "Room Type",
        options: &[("single", "Single"), ("double", "Double"), ("dorm", "Dormitory")],
    },
    Field::Check { key: "wifi", label: "WiFi" },
    Field::Check { key: "attached_bathroom", label: "Attached Bathroom" },
    Field::Check { key: "food_included", label: "Food Included" },
    Field::Check { key: "laundry", label: "Laundry" },
];

const PG: &[Field] = &[
    GENDER,
    Field::Select {
        key: "sharing",
        label: "Sharing",
        options: &[("1", "Single"), ("2", "Double"), ("3", "Triple"), ("4+", "4+ Sharing")],
    },
    Field::Check { key: "ac_available", label: "AC Available" },
    Field::Check { key: "food_included", label: "Food Included" },
    Field::Check { key: "laundry", label: "Laundry" },
];

const APARTMENT: &[Field] = &[
    Field::Select {
        key: "listing_purpose",
        label: "Listing Purpose",
        options: &[("rent", "Rent"), ("sale", "Sale")],
    },
    Field::Select {
        key: "bhk",
        label: "BHK",
        options: &[("1", "1 BHK"), ("2", "2 BHK"), ("3", "3 BHK"), ("4+", "4+ BHK")],
    },
    Field::Select {
        key: "tenant_preference",
        label: "Tenant Preference",
        options: &[("family", "Family"), ("bachelor", "Bachelor"), ("any", "Any")],
    },
    Field::Select {
        key: "furnishing",
        label: "Furnishing",
        options: &[("furnished", "Furnished"), ("semi", "Semi-Furnished"), ("unfurnished", "Unfurnished")],
    },
];

const HOUSE_TYPES: &[&str] = &["Hostel", "PG", "Apartment"];

fn house_extras(house_type: &str) -> &'static [Field] {
    match house_type {
        "Hostel" => HOSTEL,
        "PG" => PG,
        "Apartment" => APARTMENT,
        _ => &[],
    }
}

fn price_label(house_type: &str) -> &'static str {
    if house_type == "Apartment" {
        "Full Property Price"
    } else {
        "Monthly Rent"
    }
}

fn flag(on: bool) -> String {
    on.to_string()
}

/// Form values to draft fields, rejecting the first missing input
fn build_fields(kind: ListingKind, values: &BTreeMap<String, String>, days: &[Weekday]) -> ValidationResult<BTreeMap<String, String>> {
    let get = |key: &str| values.get(key).map(|v| v.trim()).unwrap_or("");
    let checked = |key: &str| get(key) == "true";
    let mut out = BTreeMap::new();

    match kind {
        ListingKind::House => {
            require_fields(&[
                ("Title", get("title")),
                ("Property type", get("type")),
                (price_label(get("type")), get("price")),
                ("Location", get("location")),
            ])?;
            for key in ["title", "description", "price", "location", "type"] {
                out.insert(key.to_string(), get(key).to_string());
            }
            for field in house_extras(get("type")) {
                match *field {
                    Field::Select { key, label, .. } => {
                        if get(key).is_empty() {
                            return Err(ValidationError::Required(label));
                        }
                        out.insert(key.to_string(), get(key).to_string());
                    }
                    Field::Check { key, .. } => {
                        out.insert(key.to_string(), flag(checked(key)));
                    }
                }
            }
        }
        ListingKind::Tiffin => {
            require_fields(&[("Delivery radius", get("delivery_radius"))])?;
            let diet = diet_from_flags(checked("diet_veg"), checked("diet_non_veg"))?;
            out.insert("delivery_radius".to_string(), get("delivery_radius").to_string());
            out.insert("fast_delivery".to_string(), flag(checked("fast_delivery")));
            out.insert("diet_type".to_string(), diet.as_str().to_string());
            out.insert("available_days".to_string(), summarize_days(days)?);
        }
        ListingKind::Service => {
            require_fields(&[
                ("Service category", get("service_category")),
                ("Service title", get("service_title")),
                ("Base price", get("base_price")),
            ])?;
            for key in ["service_category", "service_title", "description", "base_price", "service_radius"] {
                out.insert(key.to_string(), get(key).to_string());
            }
            out.insert("availability_days".to_string(), summarize_days(days)?);
        }
    }
    Ok(out)
}

fn modal_title(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::House => "Add House Listing",
        ListingKind::Tiffin => "Add Tiffin Service",
        ListingKind::Service => "Add Home Service",
    }
}

fn set_value(values: RwSignal<BTreeMap<String, String>>, key: &'static str, value: String) {
    values.update(|v| {
        v.insert(key.to_string(), value);
    });
}

fn value_of(values: RwSignal<BTreeMap<String, String>>, key: &'static str) -> String {
    values.with(|v| v.get(key).cloned().unwrap_or_default())
}

fn text_input(values: RwSignal<BTreeMap<String, String>>, key: &'static str, label: &'static str, kind: &'static str) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <input
                type=kind
                class="form-control"
                prop:value=move || value_of(values, key)
                on:input=move |ev| set_value(values, key, event_target_value(&ev))
            />
        </div>
    }
}

fn text_area(values: RwSignal<BTreeMap<String, String>>, key: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <textarea
                class="form-control"
                rows="3"
                prop:value=move || value_of(values, key)
                on:input=move |ev| set_value(values, key, event_target_value(&ev))
            ></textarea>
        </div>
    }
}

fn check_input(values: RwSignal<BTreeMap<String, String>>, key: &'static str, label: &'static str) -> impl IntoView {
    let id = format!("add-{}", key);
    view! {
        <div class="form-check form-check-inline">
            <input
                type="checkbox"
                class="form-check-input"
                id=id.clone()
                prop:checked=move || value_of(values, key) == "true"
                on:change=move |ev| set_value(values, key, flag(event_target_checked(&ev)))
            />
            <label class="form-check-label" for=id>{label}</label>
        </div>
    }
}

fn select_input(
    values: RwSignal<BTreeMap<String, String>>,
    key: &'static str,
    label: &'static str,
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <select
                class="form-select"
                prop:value=move || value_of(values, key)
                on:change=move |ev| set_value(values, key, event_target_value(&ev))
            >
                <option value="">{format!("Select {}", label)}</option>
                {options.into_iter().map(|(value, text)| view! { <option value=value>{text}</option> }).collect_view()}
            </select>
        </div>
    }
}

fn field_input(values: RwSignal<BTreeMap<String, String>>, field: Field) -> AnyView {
    match field {
        Field::Select { key, label, options } => {
            let options = options.iter().map(|(v, t)| (v.to_string(), t.to_string())).collect();
            select_input(values, key, label, options).into_any()
        }
        Field::Check { key, label } => check_input(values, key, label).into_any(),
    }
}

fn day_picker(days: RwSignal<Vec<Weekday>>) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label d-block">"Available Days"</label>
            {Weekday::ALL.into_iter().map(|day| {
                let id = format!("day-{}", day.name());
                view! {
                    <div class="form-check form-check-inline">
                        <input
                            type="checkbox"
                            class="form-check-input"
                            id=id.clone()
                            prop:checked=move || days.with(|d| d.contains(&day))
                            on:change=move |ev| {
                                let on = event_target_checked(&ev);
                                days.update(|d| {
                                    d.retain(|x| *x != day);
                                    if on {
                                        d.push(day);
                                    }
                                });
                            }
                        />
                        <label class="form-check-label" for=id>{day.name()}</label>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn AddListing(kind: ListingKind, show: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app();
    let values = RwSignal::new(BTreeMap::<String, String>::new());
    let days = RwSignal::new(Vec::<Weekday>::new());
    let (starting, set_starting) = signal(false);
    let images = NodeRef::<html::Input>::new();

    // Fresh form every time the modal opens
    Effect::new(move |_| {
        if show.get() {
            values.set(BTreeMap::new());
            days.set(Vec::new());
            dom::clear_input(&images);
        }
    });

    let submit = move |_| {
        if starting.get_untracked() {
            return;
        }
        let fields = match values.with_untracked(|v| days.with_untracked(|d| build_fields(kind, v, d))) {
            Ok(fields) => fields,
            Err(e) => {
                ctx.error(e.to_string());
                return;
            }
        };
        let files = if kind == ListingKind::Service { Vec::new() } else { dom::picked_files(&images) };
        let draft = ListingDraft::new(kind, fields, files);
        let payment_path = ctx.config.with_value(|c| c.payment_path.clone());

        set_starting.set(true);
        spawn_local(async move {
            match begin_payment(&IndexedDbDraftStore, &draft).await {
                Ok(()) => dom::go_to(&payment_path),
                Err(e) => {
                    log::error!("Saving {} draft failed: {}", kind.slug(), e);
                    ctx.error("Failed to initiate payment flow. Please try again.");
                    set_starting.set(false);
                }
            }
        });
    };

    let house_type = move || value_of(values, "type");

    let body = move || match kind {
        ListingKind::House => view! {
            {text_input(values, "title", "Title", "text")}
            {text_area(values, "description", "Description")}
            {select_input(
                values,
                "type",
                "Property Type",
                HOUSE_TYPES.iter().map(|t| (t.to_string(), t.to_string())).collect(),
            )}
            <div class="mb-3">
                <label class="form-label">{move || price_label(&house_type())}</label>
                <input
                    type="number"
                    min="0"
                    class="form-control"
                    prop:value=move || value_of(values, "price")
                    on:input=move |ev| set_value(values, "price", event_target_value(&ev))
                />
            </div>
            {text_input(values, "location", "Location", "text")}
            <div class="mb-3">
                {move || house_extras(&house_type()).iter().map(|f| field_input(values, *f)).collect_view()}
            </div>
            <div class="mb-3">
                <label class="form-label">"Images"</label>
                <input type="file" class="form-control" accept="image/*" multiple node_ref=images/>
            </div>
        }
        .into_any(),
        ListingKind::Tiffin => view! {
            {text_input(values, "delivery_radius", "Delivery Radius (km)", "number")}
            <div class="mb-3">
                <label class="form-label d-block">"Diet Type"</label>
                {check_input(values, "diet_veg", "Veg")}
                {check_input(values, "diet_non_veg", "Non-Veg")}
            </div>
            <div class="mb-3">{check_input(values, "fast_delivery", "Fast delivery available")}</div>
            {day_picker(days)}
            <div class="mb-3">
                <label class="form-label">"Images"</label>
                <input type="file" class="form-control" accept="image/*" multiple node_ref=images/>
            </div>
        }
        .into_any(),
        ListingKind::Service => view! {
            {select_input(
                values,
                "service_category",
                "Service Category",
                ServiceCategory::ALL.iter().map(|c| (c.as_str().to_string(), c.label())).collect(),
            )}
            {text_input(values, "service_title", "Service Title", "text")}
            {text_area(values, "description", "Description")}
            {text_input(values, "base_price", "Base Price", "number")}
            {text_input(values, "service_radius", "Service Radius (km)", "number")}
            {day_picker(days)}
        }
        .into_any(),
    };

    view! {
        <Modal
            show=show
            title=modal_title(kind).to_string()
            size="modal-lg"
            footer=move || view! {
                <button class="btn btn-secondary" on:click=move |_| show.set(false)>"Cancel"</button>
                <button class="btn btn-primary" disabled=move || starting.get() on:click=submit>
                    {move || if starting.get() { "Redirecting to Payment..." } else { "Proceed to Payment" }}
                </button>
            }
        >
            {body}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_hostel_fields_keep_only_hostel_keys() {
        let form = values(&[
            ("title", "Sunrise Hostel"),
            ("type", "Hostel"),
            ("price", "4500"),
            ("location", "Kothrud"),
            ("gender", "boys"),
            ("room_type", "dorm"),
            ("wifi", "true"),
            ("bhk", "2"),
        ]);
        let fields = build_fields(ListingKind::House, &form, &[]).unwrap();
        assert_eq!(fields.get("wifi").map(String::as_str), Some("true"));
        assert_eq!(fields.get("laundry").map(String::as_str), Some("false"));
        assert_eq!(fields.get("description").map(String::as_str), Some(""));
        assert!(!fields.contains_key("bhk"));
    }

    #[test]
    fn test_house_requires_type_specific_selects() {
        let form = values(&[("title", "Lake View"), ("type", "Apartment"), ("price", "4500000"), ("location", "Baner")]);
        let err = build_fields(ListingKind::House, &form, &[]).unwrap_err();
        assert_eq!(err.to_string(), "Listing Purpose is required");
    }

    #[test]
    fn test_apartment_price_label() {
        let form = values(&[("title", "Lake View"), ("type", "Apartment"), ("location", "Baner")]);
        let err = build_fields(ListingKind::House, &form, &[]).unwrap_err();
        assert_eq!(err.to_string(), "Full Property Price is required");
        assert_eq!(price_label("PG"), "Monthly Rent");
    }

    #[test]
    fn test_tiffin_diet_and_days() {
        let form = values(&[("delivery_radius", "5"), ("diet_veg", "true"), ("diet_non_veg", "true")]);
        let fields = build_fields(ListingKind::Tiffin, &form, &[Weekday::Sunday, Weekday::Saturday]).unwrap();
        assert_eq!(fields.get("diet_type").map(String::as_str), Some("both"));
        assert_eq!(fields.get("available_days").map(String::as_str), Some("Weekends"));
        assert_eq!(fields.get("fast_delivery").map(String::as_str), Some("false"));

        let no_diet = values(&[("delivery_radius", "5")]);
        assert_eq!(
            build_fields(ListingKind::Tiffin, &no_diet, &Weekday::ALL).unwrap_err(),
            ValidationError::MissingDiet
        );
    }

    #[test]
    fn test_service_needs_a_day() {
        let form = values(&[("service_category", "plumber"), ("service_title", "Leak fixes"), ("base_price", "300")]);
        assert_eq!(build_fields(ListingKind::Service, &form, &[]).unwrap_err(), ValidationError::NoDaysSelected);
        let fields = build_fields(ListingKind::Service, &form, &Weekday::ALL).unwrap();
        assert_eq!(fields.get("availability_days").map(String::as_str), Some("All Days"));
        assert_eq!(fields.get("service_category").map(String::as_str), Some("plumber"));
    }
}
