use crate::{
    components::{cards::PropertyCard, empty_state::EmptyState, layout::Layout},
    state::favorites::use_favorites,
};
use leptos::*;

#[component]
pub fn FavoritesPanel() -> impl IntoView {
    let entries = use_favorites().entries();
    let count = move || entries.with(Vec::len);

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-3xl font-bold text-fg">"My Favorites"</h1>
                    <p class="text-fg-muted">
                        {move || match count() {
                            1 => "1 saved property".to_string(),
                            n => format!("{n} saved properties"),
                        }}
                    </p>
                </div>
                <Show
                    when=move || { count() > 0 }
                    fallback=|| view! {
                        <EmptyState
                            title="No favorites yet"
                            description="Tap the heart on any listing to keep it here."
                            action=("/properties", "Browse Properties")
                        />
                    }
                >
                    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        <For
                            each=move || entries.get()
                            key=|entry| entry.id.clone()
                            children=|entry| view! { <PropertyCard listing=entry /> }
                        />
                    </div>
                </Show>
            </div>
        </Layout>
    }
}
