//! Route guards. Both layouts render [`store::decide`]'s verdict for the
//! current auth state.

use dioxus::prelude::*;
use store::{decide, Access, GuardDecision, RedirectTarget};
use ui::components::FullScreenSpinner;
use ui::{use_auth, AppShell, NavSection};

use crate::Route;

fn target_route(target: RedirectTarget) -> Route {
    match target {
        RedirectTarget::Login => Route::Login {},
        RedirectTarget::Dashboard => Route::Dashboard {},
    }
}

fn section_route(section: NavSection) -> Route {
    match section {
        NavSection::Dashboard => Route::Dashboard {},
        NavSection::Fields => Route::Fields {},
        NavSection::CropAdvisor => Route::CropAdvisor {},
        NavSection::DiseaseDetection => Route::DiseaseDetection {},
        NavSection::Weather => Route::Weather {},
        NavSection::Market => Route::Market {},
        NavSection::Irrigation => Route::Irrigation {},
        NavSection::Advisories => Route::Advisories {},
        NavSection::Profile => Route::Profile {},
    }
}

fn route_section(route: &Route) -> Option<NavSection> {
    match route {
        Route::Dashboard {} => Some(NavSection::Dashboard),
        Route::Fields {}
        | Route::FieldNew {}
        | Route::FieldDetail { .. }
        | Route::FieldEdit { .. } => Some(NavSection::Fields),
        Route::CropAdvisor {} => Some(NavSection::CropAdvisor),
        Route::DiseaseDetection {} => Some(NavSection::DiseaseDetection),
        Route::Weather {} => Some(NavSection::Weather),
        Route::Market {} => Some(NavSection::Market),
        Route::Irrigation {} => Some(NavSection::Irrigation),
        Route::Advisories {} => Some(NavSection::Advisories),
        Route::Profile {} => Some(NavSection::Profile),
        Route::Login {} | Route::Register {} | Route::NotFound { .. } => None,
    }
}

/// Pages that need a session. Unauthenticated visitors go to the login page.
#[component]
pub fn ProtectedLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let decision = decide(&auth.read(), Access::Protected);
    match decision {
        GuardDecision::Spinner => rsx! { FullScreenSpinner {} },
        GuardDecision::Redirect(target) => {
            tracing::debug!(from = %route, "no session, redirecting");
            nav.replace(target_route(target));
            rsx! {}
        }
        GuardDecision::Render => rsx! {
            AppShell {
                active: route_section(&route),
                on_navigate: move |section: NavSection| {
                    nav.push(section_route(section));
                },
                Outlet::<Route> {}
            }
        },
    }
}

/// Login and registration. Signed-in users are sent to the dashboard.
#[component]
pub fn PublicLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let decision = decide(&auth.read(), Access::PublicOnly);
    match decision {
        GuardDecision::Spinner => rsx! { FullScreenSpinner {} },
        GuardDecision::Redirect(target) => {
            nav.replace(target_route(target));
            rsx! {}
        }
        GuardDecision::Render => rsx! {
            div {
                class: "auth-page",
                h1 { "AgroDash" }
                Outlet::<Route> {}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_routes_back_to_itself() {
        for section in NavSection::ALL {
            assert_eq!(route_section(&section_route(section)), Some(section));
        }
        assert_eq!(
            route_section(&Route::FieldEdit { id: "7".into() }),
            Some(NavSection::Fields)
        );
        assert_eq!(route_section(&Route::Login {}), None);
    }
}
