//! # Application shell
//!
//! [`AppShell`] lays out every signed-in page: the navigation sidebar on the
//! left, the [`Navbar`](crate::Navbar) on top and the routed page as
//! children. The shell does not know the router; it reports clicks as
//! [`NavSection`]s and the web crate maps them to routes.
//!
//! The shell also owns the alert feed shared by the top-bar badge and the
//! alerts panels, loaded once on mount.

use dioxus::prelude::*;

use crate::context::{use_auth, use_dashboard_source};
use crate::icons::{
    FaBell, FaBug, FaChartLine, FaCloudSun, FaDroplet, FaGauge, FaMap, FaSeedling, FaUser,
};
use crate::cell::use_cancel_token;
use crate::widgets::alerts::{load_alerts, AlertFeed};
use crate::{Icon, Navbar};

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Dashboard,
    Fields,
    CropAdvisor,
    DiseaseDetection,
    Weather,
    Market,
    Irrigation,
    Advisories,
    Profile,
}

impl NavSection {
    pub const ALL: [NavSection; 9] = [
        NavSection::Dashboard,
        NavSection::Fields,
        NavSection::CropAdvisor,
        NavSection::DiseaseDetection,
        NavSection::Weather,
        NavSection::Market,
        NavSection::Irrigation,
        NavSection::Advisories,
        NavSection::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Dashboard => "Dashboard",
            NavSection::Fields => "Fields",
            NavSection::CropAdvisor => "Crop Advisor",
            NavSection::DiseaseDetection => "Disease Detection",
            NavSection::Weather => "Weather",
            NavSection::Market => "Market Prices",
            NavSection::Irrigation => "Irrigation",
            NavSection::Advisories => "Advisories",
            NavSection::Profile => "Profile",
        }
    }
}

#[component]
fn NavIcon(section: NavSection) -> Element {
    match section {
        NavSection::Dashboard => rsx! { Icon { icon: FaGauge, width: 16, height: 16 } },
        NavSection::Fields => rsx! { Icon { icon: FaMap, width: 16, height: 16 } },
        NavSection::CropAdvisor => rsx! { Icon { icon: FaSeedling, width: 16, height: 16 } },
        NavSection::DiseaseDetection => rsx! { Icon { icon: FaBug, width: 16, height: 16 } },
        NavSection::Weather => rsx! { Icon { icon: FaCloudSun, width: 16, height: 16 } },
        NavSection::Market => rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } },
        NavSection::Irrigation => rsx! { Icon { icon: FaDroplet, width: 16, height: 16 } },
        NavSection::Advisories => rsx! { Icon { icon: FaBell, width: 16, height: 16 } },
        NavSection::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
    }
}

#[component]
pub fn AppShell(
    active: Option<NavSection>,
    on_navigate: EventHandler<NavSection>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let source = use_dashboard_source();
    let cancel = use_cancel_token();
    let feed = use_context_provider(|| Signal::new(AlertFeed::default()));
    let mut sidebar_open = use_signal(|| false);

    let _loader = use_resource(move || {
        let source = source.clone();
        let cancel = cancel.clone();
        async move { load_alerts(&source, feed, &cancel).await }
    });

    let user = auth().user;
    let unread = feed.read().unread();

    rsx! {
        document::Stylesheet { href: SHELL_CSS }

        div {
            class: if sidebar_open() { "shell shell--sidebar-open" } else { "shell" },

            nav {
                class: "shell-sidebar",
                div {
                    class: "shell-brand",
                    Icon { icon: FaSeedling, width: 20, height: 20 }
                    span { "AgroDash" }
                }
                ul {
                    class: "shell-nav",
                    for section in NavSection::ALL {
                        li {
                            key: "{section:?}",
                            button {
                                class: if active == Some(section) { "shell-nav-item active" } else { "shell-nav-item" },
                                onclick: move |_| {
                                    sidebar_open.set(false);
                                    on_navigate.call(section);
                                },
                                NavIcon { section: section }
                                span { {section.label()} }
                                if section == NavSection::Advisories && unread > 0 {
                                    span { class: "shell-nav-badge", "{unread}" }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "shell-main",
                Navbar {
                    user: user,
                    unread_alerts: unread,
                    on_toggle_sidebar: move |_| {
                        let open = sidebar_open();
                        sidebar_open.set(!open);
                    },
                    on_open_alerts: move |_| on_navigate.call(NavSection::Advisories),
                    on_open_profile: move |_| on_navigate.call(NavSection::Profile),
                }
                main {
                    class: "shell-content",
                    {children}
                }
            }
        }
    }
}
