// Main entry point - Dependency injection and one dashboard load cycle
mod domain;
mod application;
mod infrastructure;
mod presentation;
mod util;

use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::api_client::{ApiClient, CSRF_META, resolve_csrf_token};
use crate::infrastructure::config::load_app_config;
use crate::presentation::controller::{DashboardController, STAT_ELEMENT_IDS, dashboard_page};
use crate::presentation::toast::ToastTray;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let app_config = load_app_config()?;

    let page = dashboard_page();

    // Wire the client; without a configured token, resolve CSRF from the page
    let mut client = ApiClient::new(&app_config.api);
    if app_config.api.csrf_token.is_none() {
        client = client.with_csrf_token(resolve_csrf_token(page.meta(CSRF_META), None));
    }

    let toasts = ToastTray::new(Duration::from_millis(app_config.ui.toast_dismiss_ms));
    let mut controller = DashboardController::new(Arc::new(client), page, toasts);

    println!("Loading dashboard from {}", app_config.api.base_url);
    controller.load_dashboard().await;

    let page = controller.page();
    for banner in page.banners() {
        println!("! {banner}");
    }
    for id in STAT_ELEMENT_IDS {
        if let Some(text) = page.text(id) {
            println!("{id}: {text}");
        }
    }
    if let Some(chart) = controller.courses_chart() {
        println!("coursesChart: {}", serde_json::to_string(&chart.config)?);
    }
    if let Some(chart) = controller.fees_trend_chart() {
        println!("feesTrendChart: {}", serde_json::to_string(&chart.config)?);
    }

    Ok(())
}
