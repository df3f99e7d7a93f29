use leptos::*;

mod panel;

pub use panel::FavoritesPanel;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    view! { <FavoritesPanel /> }
}
