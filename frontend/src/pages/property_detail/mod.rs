use leptos::*;
use leptos_router::use_params_map;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::PropertyDetailPanel;

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    // Re-mount the panel when navigating between listings.
    move || view! { <PropertyDetailPanel id=id() /> }
}
