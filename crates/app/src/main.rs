use dioxus::prelude::*;

mod auth;
mod config;
mod gates;
mod routes;
use auth::AuthState;
use routes::ArtifactsPage;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Feature flags and the acting user come from the bundled config.toml
    use_context_provider(config::feature_flags);
    use_context_provider(|| AuthState::new(config::configured_user()));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        ArtifactsPage {}
    }
}
