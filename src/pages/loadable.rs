//! Loadable Lists
//!
//! Fetch-on-mount lists shared by the admin and provider dashboards.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{or_dash, truncate, ApiResult};

use crate::components::EmptyRow;

/// Table body state
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Loadable<T> {
    Loading,
    Failed,
    Ready(T),
}

/// Numbers the requests for one slot of the view so a slow reply to an
/// earlier request cannot overwrite the newer one
#[derive(Clone, Copy)]
pub(crate) struct Latest(StoredValue<u64>);

impl Latest {
    pub(crate) fn new() -> Self {
        Self(StoredValue::new(0))
    }

    /// Ticket for a request about to start
    pub(crate) fn begin(&self) -> u64 {
        let ticket = self.0.get_value().wrapping_add(1);
        self.0.set_value(ticket);
        ticket
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        self.0.get_value() == ticket
    }
}

/// Run `fetch` once and expose its outcome as a signal
pub(crate) fn load<T, F, Fut>(what: &'static str, fetch: F) -> RwSignal<Loadable<Vec<T>>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
{
    let state = RwSignal::new(Loadable::Loading);
    spawn_local(async move {
        match fetch().await {
            Ok(rows) => state.set(Loadable::Ready(rows)),
            Err(e) => {
                log::error!("Error fetching {}: {}", what, e);
                state.set(Loadable::Failed);
            }
        }
    });
    state
}

/// Like [`load`], but fetches again every time `refresh` changes
pub(crate) fn reload_on<T, F, Fut>(what: &'static str, refresh: Signal<u32>, fetch: F) -> RwSignal<Loadable<Vec<T>>>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Copy + 'static,
    Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
{
    let state = RwSignal::new(Loadable::Loading);
    let latest = Latest::new();
    Effect::new(move |_| {
        let _ = refresh.get();
        let ticket = latest.begin();
        spawn_local(async move {
            let result = fetch().await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(rows) => state.set(Loadable::Ready(rows)),
                Err(e) => {
                    log::error!("Error fetching {}: {}", what, e);
                    state.set(Loadable::Failed);
                }
            }
        });
    });
    state
}

impl<T> Loadable<Vec<T>> {
    /// Loaded rows, empty while loading or after a failure
    pub(crate) fn rows(&self) -> &[T] {
        match self {
            Loadable::Ready(rows) => rows,
            _ => &[],
        }
    }
}

/// Table body for a [`Loadable`] list: loading, error and empty rows, or
/// one row per item with its 1-based position
pub(crate) fn table_body<T, V, R>(
    state: RwSignal<Loadable<Vec<T>>>,
    colspan: u32,
    empty: &'static str,
    row: R,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
    R: Fn(usize, T) -> V + Send + Sync + 'static,
{
    move || match state.get() {
        Loadable::Loading => view! { <EmptyRow colspan=colspan message="Loading..."/> }.into_any(),
        Loadable::Failed => view! {
            <tr>
                <td colspan=colspan.to_string() class="text-center text-danger py-4">"Error loading data."</td>
            </tr>
        }
        .into_any(),
        Loadable::Ready(rows) if rows.is_empty() => view! { <EmptyRow colspan=colspan message=empty/> }.into_any(),
        Loadable::Ready(rows) => rows
            .into_iter()
            .enumerate()
            .map(|(i, item)| row(i + 1, item))
            .collect_view()
            .into_any(),
    }
}

/// Long text cut to 40 characters, full text on hover
pub(crate) fn clipped(text: Option<&str>) -> impl IntoView {
    let full = or_dash(text);
    view! { <span title=full.clone()>{truncate(&full, 40)}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_empty_until_ready() {
        assert!(Loadable::<Vec<u32>>::Loading.rows().is_empty());
        assert!(Loadable::<Vec<u32>>::Failed.rows().is_empty());
        assert_eq!(Loadable::Ready(vec![1, 2]).rows(), &[1, 2]);
    }

    #[test]
    fn test_only_newest_request_is_current() {
        let owner = Owner::new();
        owner.with(|| {
            let latest = Latest::new();
            let first = latest.begin();
            assert!(latest.is_current(first));

            let second = latest.begin();
            assert!(!latest.is_current(first));
            assert!(latest.is_current(second));
        });
    }

    #[test]
    fn test_loadable_equality() {
        let ready: Loadable<Vec<u32>> = Loadable::Ready(vec![1]);
        assert_ne!(ready, Loadable::Loading);
        assert_ne!(Loadable::<Vec<u32>>::Failed, Loadable::Loading);
    }
}
