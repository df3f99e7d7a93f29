use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth},
    pages::{
        admin::AdminPage,
        dashboard::DashboardPage,
        favorites::FavoritesPage,
        forgot_password::ForgotPasswordPage,
        home::HomePage,
        login::LoginPage,
        properties::PropertiesPage,
        property_detail::PropertyDetailPage,
        property_form::{EditPropertyPage, NewPropertyPage},
        register::RegisterPage,
    },
    state::{auth::SessionProvider, favorites::FavoritesProvider},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/forgot-password",
    "/properties",
    "/properties/new",
    "/properties/:id",
    "/properties/:id/edit",
    "/favorites",
    "/dashboard",
    "/admin/properties",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/properties/new",
    "/properties/:id/edit",
    "/favorites",
    "/dashboard",
    "/admin/properties",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin/properties"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    view! {
        <SessionProvider>
            <FavoritesProvider>
                <Router>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/register" view=RegisterPage/>
                        <Route path="/forgot-password" view=ForgotPasswordPage/>
                        <Route path="/properties" view=PropertiesPage/>
                        <Route path="/properties/new" view=ProtectedNewProperty/>
                        <Route path="/properties/:id" view=PropertyDetailPage/>
                        <Route path="/properties/:id/edit" view=ProtectedEditProperty/>
                        <Route path="/favorites" view=ProtectedFavorites/>
                        <Route path="/dashboard" view=ProtectedDashboard/>
                        <Route path="/admin/properties" view=ProtectedAdmin/>
                    </Routes>
                </Router>
            </FavoritesProvider>
        </SessionProvider>
    }
}

#[component]
fn ProtectedNewProperty() -> impl IntoView {
    view! { <RequireAuth><NewPropertyPage/></RequireAuth> }
}

#[component]
fn ProtectedEditProperty() -> impl IntoView {
    view! { <RequireAuth><EditPropertyPage/></RequireAuth> }
}

#[component]
fn ProtectedFavorites() -> impl IntoView {
    view! { <RequireAuth><FavoritesPage/></RequireAuth> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireAdmin><AdminPage/></RequireAdmin> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS.iter().chain(ADMIN_ROUTE_PATHS) {
            assert!(all.contains(path), "route missing from ROUTE_PATHS: {path}");
        }
    }

    #[test]
    fn admin_routes_also_require_a_session() {
        for path in ADMIN_ROUTE_PATHS {
            assert!(PROTECTED_ROUTE_PATHS.contains(path));
        }
    }

    #[test]
    fn browsing_stays_public() {
        for path in ["/", "/properties", "/properties/:id", "/login", "/register"] {
            assert!(!PROTECTED_ROUTE_PATHS.contains(&path), "{path} should be public");
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
