//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{ApiError, UserProfile};

use crate::config::AppConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub is_error: bool,
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    /// Signed-in user; the profile page edits it in place
    pub user: RwSignal<Option<UserProfile>>,
    /// Currently visible toast - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Currently visible toast - write
    set_toast: WriteSignal<Option<Toast>>,
    next_toast_id: StoredValue<u64>,
}

impl AppContext {
    pub fn new(config: AppConfig, user: Option<UserProfile>) -> Self {
        let (toast, set_toast) = signal(None);
        Self {
            config: StoredValue::new(config),
            user: RwSignal::new(user),
            toast,
            set_toast,
            next_toast_id: StoredValue::new(0),
        }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.with_value(|c| c.url(path))
    }

    pub fn image(&self, stored: Option<&str>) -> String {
        self.config.with_value(|c| c.image(stored))
    }

    /// Show a success toast
    pub fn notify(&self, message: impl Into<String>) {
        self.show_toast(message.into(), false);
    }

    /// Show an error toast
    pub fn error(&self, message: impl Into<String>) {
        self.show_toast(message.into(), true);
    }

    /// Log an API failure and toast it
    pub fn api_error(&self, err: &ApiError, fallback: &str) {
        log::error!("{}: {}", fallback, err);
        self.error(err.user_message(fallback));
    }

    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }

    fn show_toast(&self, message: String, is_error: bool) {
        let id = self.next_toast_id.get_value() + 1;
        self.next_toast_id.set_value(id);
        self.set_toast.set(Some(Toast { id, message, is_error }));

        let ms = self.config.with_value(|c| c.toast_ms);
        let set_toast = self.set_toast;
        let toast = self.toast;
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            // A newer toast replaced this one; leave it up
            if toast.get_untracked().map(|t| t.id) == Some(id) {
                set_toast.set(None);
            }
        });
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
