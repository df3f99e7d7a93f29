use super::{utils::tab_label, view_model::use_properties_view_model};
use crate::{
    api::{ListingType, SortOrder},
    components::{
        cards::PropertyGrid,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};
use leptos::*;

const FIELD: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg";

#[component]
fn FilterInput(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="block text-sm text-fg-muted space-y-1">
            <span>{label}</span>
            <input
                type=input_type
                class=FIELD
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn PropertiesPanel(initial_tab: ListingType, #[prop(into)] initial_search: String) -> impl IntoView {
    let vm = use_properties_view_model(initial_tab, initial_search);
    let found = move || {
        vm.sorted
            .with(|loaded| loaded.as_ref().and_then(|r| r.as_ref().ok()).map(Vec::len))
            .unwrap_or(0)
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-3xl font-bold text-fg">"Browse Properties"</h1>

                <div class="flex border-b border-border">
                    {ListingType::ALL
                        .iter()
                        .map(|kind| {
                            let kind = *kind;
                            view! {
                                <button
                                    type="button"
                                    class=move || if vm.tab.get() == kind {
                                        "px-6 py-3 text-lg font-medium border-b-2 border-action-primary-bg text-action-primary-bg"
                                    } else {
                                        "px-6 py-3 text-lg font-medium text-fg-muted"
                                    }
                                    on:click=move |_| vm.select_tab(kind)
                                >
                                    {tab_label(kind)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <form
                    class="grid gap-4 rounded-lg border border-border bg-surface-elevated p-4 sm:grid-cols-3"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.apply_filters();
                    }
                >
                    <FilterInput label="Search" value=vm.form.search input_type="search" />
                    <FilterInput label="City" value=vm.form.city />
                    <FilterInput label="Min price" value=vm.form.min_price input_type="number" />
                    <FilterInput label="Max price" value=vm.form.max_price input_type="number" />
                    <FilterInput label="Bedrooms" value=vm.form.bedrooms input_type="number" />
                    <FilterInput label="Bathrooms" value=vm.form.bathrooms input_type="number" />
                    <div class="sm:col-span-3 flex gap-3">
                        <button
                            type="submit"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        >
                            "Apply filters"
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm border border-border text-fg"
                            on:click=move |_| vm.clear_filters()
                        >
                            "Clear"
                        </button>
                    </div>
                </form>
                <InlineErrorMessage error=vm.form_error />

                <div class="flex justify-between items-center">
                    <p class="text-fg-muted">{move || format!("{} properties found", found())}</p>
                    <label class="flex items-center gap-2 text-sm">
                        "Sort by:"
                        <select
                            class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-1 text-sm"
                            on:change=move |ev| vm.sort.set(SortOrder::parse(&event_target_value(&ev)))
                        >
                            {SortOrder::ALL
                                .into_iter()
                                .map(|order| view! {
                                    <option value=order.as_str() selected=move || vm.sort.get() == order>
                                        {order.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </label>
                </div>

                {move || match vm.sorted.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Ok(listings)) if listings.is_empty() => view! {
                        <EmptyState
                            title="No properties found"
                            description="Try adjusting your filters or switching tabs."
                        />
                    }.into_view(),
                    Some(Ok(listings)) => view! {
                        <PropertyGrid properties=Signal::derive(move || listings.clone()) />
                    }.into_view(),
                    Some(Err(err)) => view! {
                        <ErrorMessage message=format!("Error loading properties: {}", err.error) />
                    }.into_view(),
                }}
            </div>
        </Layout>
    }
}
