use dioxus::prelude::*;
use kit_ui::kit_state::KitConfig;

mod routes;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");
const BUNDLED_CONFIG: &str = include_str!("../kit.toml");

fn main() {
    dioxus::launch(App);
}

/// `KIT_CONFIG` points at a kit.toml on platforms with a filesystem;
/// otherwise the copy bundled at build time is used.
pub(crate) fn kit_config() -> KitConfig {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(path) = std::env::var("KIT_CONFIG") {
        return KitConfig::load(path);
    }
    KitConfig::from_toml_str(BUNDLED_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(%err, "bundled kit.toml rejected, using defaults");
        KitConfig::default()
    })
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        Router::<Route> {}
    }
}
