use super::{utils::search_href, view_model::use_home_view_model};
use crate::{
    api::ListingType,
    components::{
        cards::PropertyGrid,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::navigation::go_to,
};
use leptos::*;

#[component]
pub fn HomePanel() -> impl IntoView {
    let vm = use_home_view_model();
    let on_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        go_to(&search_href(&vm.search.get_untracked(), vm.kind.get_untracked()));
    };

    view! {
        <Layout>
            <section class="rounded-xl bg-surface-elevated border border-border px-6 py-12 text-center space-y-6">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">"Find your next home"</h1>
                <p class="max-w-2xl mx-auto text-lg text-fg-muted">
                    "Verified listings to buy, rent or lease across the country."
                </p>
                <form class="max-w-2xl mx-auto flex flex-col gap-3 sm:flex-row" on:submit=on_search>
                    <select
                        class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        on:change=move |ev| vm.kind.set(ListingType::parse(&event_target_value(&ev)))
                    >
                        <option value="">"Any type"</option>
                        {ListingType::ALL
                            .iter()
                            .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                    <input
                        type="search"
                        placeholder="City, locality or project"
                        class="flex-1 rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=vm.search
                        on:input=move |ev| vm.search.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="rounded-md px-6 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    >
                        "Search"
                    </button>
                </form>
                <div class="flex justify-center gap-3">
                    {ListingType::ALL
                        .iter()
                        .map(|kind| view! {
                            <a
                                href=search_href("", Some(*kind))
                                class="rounded-full border border-border px-4 py-1 text-sm text-fg-muted hover:text-fg"
                            >
                                {kind.label()}
                            </a>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mt-12 space-y-6">
                <h2 class="text-3xl font-bold text-fg text-center">"Featured Properties"</h2>
                <Suspense fallback=|| view! { <LoadingSpinner /> }>
                    {move || vm.featured.get().map(|result| match result {
                        Ok(listings) if listings.is_empty() => view! {
                            <EmptyState
                                title="No featured properties yet"
                                action=("/properties", "Browse all properties")
                            />
                        }.into_view(),
                        Ok(listings) => view! {
                            <PropertyGrid properties=Signal::derive(move || listings.clone()) />
                        }.into_view(),
                        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    })}
                </Suspense>
            </section>
        </Layout>
    }
}
