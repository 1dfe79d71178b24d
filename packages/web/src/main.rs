use dioxus::prelude::*;

use store::ClientConfig;
use ui::{AuthProvider, ToastHistoryPanel, ToastHost};
use views::{
    Advisories, CropAdvisor, Dashboard, DiseaseDetection, FieldDetail, FieldEdit, FieldNew, Fields,
    Irrigation, Login, Market, NotFound, Profile, ProtectedLayout, PublicLayout, Register, Weather,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicLayout)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[layout(ProtectedLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/fields")]
        Fields {},
        #[route("/fields/new")]
        FieldNew {},
        #[route("/fields/:id")]
        FieldDetail { id: String },
        #[route("/fields/:id/edit")]
        FieldEdit { id: String },
        #[route("/crop-advisor")]
        CropAdvisor {},
        #[route("/disease-detection")]
        DiseaseDetection {},
        #[route("/weather")]
        Weather {},
        #[route("/market")]
        Market {},
        #[route("/irrigation")]
        Irrigation {},
        #[route("/advisories")]
        Advisories {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    let config = ClientConfig::from_build_env();
    if let Err(e) = dioxus::logger::init(log_level(&config.logging.level)) {
        eprintln!("logger already initialised: {e}");
    }
    tracing::info!(
        api = %config.api.base_url,
        demo = config.dashboard.demo_data,
        "starting farm dashboard"
    );
    dioxus::launch(App);
}

fn log_level(level: &str) -> tracing::Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" | "warning" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(ClientConfig::from_build_env);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: ui::MAIN_CSS }

        AuthProvider {
            config: config,
            Router::<Route> {}
            ToastHost {}
            ToastHistoryPanel {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(log_level("debug"), tracing::Level::DEBUG);
        assert_eq!(log_level(" WARN "), tracing::Level::WARN);
        assert_eq!(log_level("verbose"), tracing::Level::INFO);
    }

    #[test]
    fn test_routes_round_trip() {
        let route: Route = "/fields/7/edit".parse().unwrap();
        assert_eq!(route, Route::FieldEdit { id: "7".into() });
        let route: Route = "/fields/new".parse().unwrap();
        assert_eq!(route, Route::FieldNew {});
        assert_eq!(Route::CropAdvisor {}.to_string(), "/crop-advisor");
    }
}
