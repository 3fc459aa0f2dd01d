use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    domain::{AppState, VariantClassifier},
    infra::catalog::load_catalog,
    ui::{pages::CatalogPage, shell::Shell},
    util::{
        assets,
        config::{load_config, AppConfig},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Catalog {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(initial_state);
    use_context_provider(|| state.clone());

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
    }
}

/// Reads config and catalog once at startup. Failures are logged and shown in
/// the page rather than aborting the app.
pub fn initial_state() -> AppState {
    let config = load_config().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Ignoring unusable config file");
        AppConfig::default()
    });

    let today = config.today_or(OffsetDateTime::now_utc().date());
    let classifier = VariantClassifier::new(today).with_window(config.new_release_window_days);
    tracing::info!(
        today = %today,
        window_days = classifier.window_days,
        "Classifying releases"
    );

    let mut state = AppState::new(classifier);
    match load_catalog(&config) {
        Ok(catalog) => state.set_listings(catalog.listings, catalog.rejected),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load catalog");
            state.load_error = Some(err.to_string());
        }
    }
    state
}

#[component]
pub fn Catalog() -> Element {
    rsx! { Shell { CatalogPage {} } }
}
