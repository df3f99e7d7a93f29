use leptos::*;
use leptos_router::use_params_map;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::PropertyFormPanel;
use utils::FormMode;

#[component]
pub fn NewPropertyPage() -> impl IntoView {
    view! { <PropertyFormPanel mode=FormMode::Create /> }
}

#[component]
pub fn EditPropertyPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").cloned().unwrap_or_default());
    view! { <PropertyFormPanel mode=FormMode::Edit(id) /> }
}
