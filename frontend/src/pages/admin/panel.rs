use super::view_model::{use_admin_view_model, AdminViewModel};
use crate::{
    api::Property,
    components::{
        confirm_dialog::ConfirmDialog,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format::format_price,
};
use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = use_admin_view_model();
    view! { <AdminContent vm=vm /> }
}

#[component]
fn AdminContent(vm: AdminViewModel) -> impl IntoView {
    let dialog_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-3xl font-bold text-fg">"Listing Review"</h1>
                    <p class="text-fg-muted">"Verify new listings and remove the ones that break the rules."</p>
                </div>
                <InlineErrorMessage error=vm.action_error />
                {move || match vm.columns.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    Some(Ok((pending, verified))) => view! {
                        <div class="grid gap-6 lg:grid-cols-2">
                            <ReviewColumn title="Pending Verification" listings=pending vm=vm />
                            <ReviewColumn title="Verified" listings=verified vm=vm />
                        </div>
                    }
                    .into_view(),
                }}
                <ConfirmDialog
                    is_open=dialog_open
                    title="Delete listing"
                    message="This removes the listing for everyone. Continue?"
                    confirm_label="Delete"
                    destructive=true
                    on_confirm=Callback::new(move |_| vm.confirm_delete())
                    on_cancel=Callback::new(move |_| vm.cancel_delete())
                />
            </div>
        </Layout>
    }
}

#[component]
fn ReviewColumn(title: &'static str, listings: Vec<Property>, vm: AdminViewModel) -> impl IntoView {
    let count = listings.len();
    view! {
        <section class="space-y-3">
            <h2 class="text-xl font-semibold text-fg">{format!("{title} ({count})")}</h2>
            {if listings.is_empty() {
                view! { <p class="text-sm text-fg-muted">"Nothing here."</p> }.into_view()
            } else {
                listings
                    .into_iter()
                    .map(|listing| view! { <ReviewRow listing=listing vm=vm /> })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn ReviewRow(listing: Property, vm: AdminViewModel) -> impl IntoView {
    let id = store_value(listing.id.clone());
    let verified = listing.is_verified;
    let busy = move || vm.verify_action.pending().get() || vm.delete_action.pending().get();

    view! {
        <div class="flex items-center justify-between gap-4 rounded-lg border border-border bg-surface-elevated p-4">
            <div>
                <a href=format!("/properties/{}", listing.id) class="font-semibold text-fg hover:underline">
                    {listing.title.clone()}
                </a>
                <p class="text-sm text-fg-muted">
                    {format!("{} · {}", listing.city, format_price(listing.price, listing.property_type))}
                </p>
            </div>
            <div class="flex gap-2">
                <Show when=move || !verified>
                    <button
                        type="button"
                        class="rounded-md px-3 py-1 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=busy
                        on:click=move |_| vm.verify(id.get_value())
                    >
                        "Verify"
                    </button>
                </Show>
                <button
                    type="button"
                    class="rounded-md px-3 py-1 text-sm font-semibold bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                    disabled=busy
                    on:click=move |_| vm.ask_delete(id.get_value())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
