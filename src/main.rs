//! UrbanEase Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dom;
mod draft_store;
mod pages;
mod store;

use app::App;
use config::PageData;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Buffered log lines, one per row. Call `urbaneaseLogs()` from the browser
/// console when reporting a problem.
#[wasm_bindgen(js_name = urbaneaseLogs)]
pub fn recent_logs() -> String {
    rolling_logger::recent_lines().join("\n")
}

fn main() {
    console_error_panic_hook::set_once();

    let (data, load_error) = match PageData::from_document() {
        Ok(data) => (data, None),
        Err(e) => (
            PageData {
                page: config::Page::CustomerDashboard,
                user: None,
                config: config::AppConfig::default(),
            },
            Some(e),
        ),
    };

    let level = rolling_logger::parse_level(&data.config.log_level);
    if let Err(e) = rolling_logger::init_logger("UrbanEase", level, data.config.log_capacity) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    if let Some(e) = load_error {
        log::error!("{}; falling back to the customer dashboard", e);
    }
    log::info!("Mounting {} page", data.page.name());

    api::set_base(&data.config.api_base);
    mount_to_body(move || view! { <App data=data.clone()/> });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_logs_before_logger_starts() {
        assert_eq!(recent_logs(), "");
    }
}
