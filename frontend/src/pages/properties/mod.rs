use crate::api::ListingType;
use leptos::*;
use leptos_router::use_query_map;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::PropertiesPanel;

/// Reads `?type=` and `?search=` once; later changes stay in the panel.
#[component]
pub fn PropertiesPage() -> impl IntoView {
    let query = use_query_map();
    let (tab, search) = query.with_untracked(|params| {
        (
            params
                .get("type")
                .and_then(|raw| ListingType::parse(raw))
                .unwrap_or_default(),
            params.get("search").cloned().unwrap_or_default(),
        )
    });
    view! { <PropertiesPanel initial_tab=tab initial_search=search /> }
}
