use super::{
    utils::{gallery, inquiry_template, key_facts},
    view_model::{use_property_detail_view_model, PropertyDetailViewModel},
};
use crate::{
    api::{ApiError, ApiErrorKind, FavoriteProperty, Property},
    components::{
        cards::PropertyGrid,
        confirm_dialog::ConfirmDialog,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
    },
    state::favorites::use_favorites,
    utils::format::{format_date, format_price},
};
use leptos::*;

#[component]
pub fn PropertyDetailPanel(#[prop(into)] id: String) -> impl IntoView {
    let vm = use_property_detail_view_model(id);

    view! {
        <Layout>
            {move || match vm.property.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=not_found_message(&err) /> }.into_view(),
                Some(Ok(property)) => view! { <PropertyView property=property vm=vm /> }.into_view(),
            }}
        </Layout>
    }
}

fn not_found_message(err: &ApiError) -> String {
    if err.kind == ApiErrorKind::Remote && err.status == Some(404) {
        "Property not found".to_string()
    } else {
        err.error.clone()
    }
}

#[component]
fn PropertyView(property: Property, vm: PropertyDetailViewModel) -> impl IntoView {
    let favorites = use_favorites();
    let favorite_error = create_rw_signal(None::<ApiError>);
    let snapshot = FavoriteProperty::from(&property);
    let saved = {
        let favorites = favorites.clone();
        let id = property.id.clone();
        Signal::derive(move || favorites.is_favorite(&id))
    };
    let on_favorite = move |_| match favorites.toggle(snapshot.clone()) {
        Ok(_) => favorite_error.set(None),
        Err(err) => favorite_error.set(Some(err)),
    };
    if vm.message.with_untracked(String::is_empty) {
        vm.message.set(inquiry_template(&property.title));
    }
    let edit_href = store_value(format!("/properties/{}/edit", property.id));

    view! {
        <div class="space-y-8">
            <PropertyOverview property=property.clone() />

            <div class="flex flex-wrap gap-3">
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold border border-border text-fg"
                    on:click=on_favorite
                >
                    {move || if saved.get() { "♥ Saved" } else { "♡ Save to favorites" }}
                </button>
                <Show when=move || vm.can_manage.get()>
                    <a
                        href=move || edit_href.get_value()
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                    >
                        "Edit"
                    </a>
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text"
                        on:click=move |_| vm.confirm_delete.set(true)
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
            <InlineErrorMessage error=favorite_error />
            <InlineErrorMessage error=vm.delete_error />

            <section class="rounded-lg border border-border bg-surface-elevated p-6 space-y-4">
                <h2 class="text-xl font-semibold text-fg">"Send an inquiry"</h2>
                <Show
                    when=move || vm.signed_in.get()
                    fallback=|| view! {
                        <p class="text-sm text-fg-muted">
                            <a href="/login" class="text-action-primary-bg hover:underline">"Login"</a>
                            " to contact the owner."
                        </p>
                    }
                >
                    <Show when=move || vm.inquiry_sent.get()>
                        <SuccessMessage message="Inquiry sent. The owner will get back to you." />
                    </Show>
                    <form
                        class="space-y-3"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            vm.submit_inquiry();
                        }
                    >
                        <textarea
                            rows="4"
                            class="w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                            prop:value=vm.message
                            on:input=move |ev| vm.message.set(event_target_value(&ev))
                        ></textarea>
                        <InlineErrorMessage error=vm.inquiry_error />
                        <button
                            type="submit"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                            disabled=move || vm.inquiry_action.pending().get()
                        >
                            {move || if vm.inquiry_action.pending().get() { "Sending..." } else { "Send inquiry" }}
                        </button>
                    </form>
                </Show>
            </section>

            <section class="space-y-4">
                <h2 class="text-2xl font-bold text-fg">"Similar Properties"</h2>
                {move || vm.similar.get().map(|listings| {
                    if listings.is_empty() {
                        view! { <p class="text-sm text-fg-muted">"No similar listings right now."</p> }.into_view()
                    } else {
                        view! { <PropertyGrid properties=Signal::derive(move || listings.clone()) /> }.into_view()
                    }
                })}
            </section>

            <ConfirmDialog
                is_open=Signal::derive(move || vm.confirm_delete.get())
                title="Delete property"
                message="Are you sure you want to delete this property?"
                on_confirm=Callback::new(move |_| vm.delete())
                on_cancel=Callback::new(move |_| vm.confirm_delete.set(false))
                confirm_label="Delete"
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                destructive=true
            />
        </div>
    }
}

/// Gallery, headline and facts for one listing.
#[component]
pub fn PropertyOverview(property: Property) -> impl IntoView {
    let images = gallery(&property);
    let (cover, thumbnails) = match images.split_first() {
        Some((cover, rest)) => (cover.clone(), rest.to_vec()),
        None => ("/placeholder.svg".to_string(), Vec::new()),
    };
    let facts = key_facts(&property);
    let listed = format_date(property.created_at.as_ref());

    view! {
        <div class="space-y-6">
            <div class="space-y-2">
                <img src=cover alt=property.title.clone() class="w-full h-96 object-cover rounded-lg" />
                <div class="flex gap-2 overflow-x-auto">
                    {thumbnails
                        .into_iter()
                        .map(|url| view! { <img src=url class="h-20 w-28 object-cover rounded" /> })
                        .collect_view()}
                </div>
            </div>
            <div class="flex flex-wrap items-start justify-between gap-4">
                <div>
                    <div class="flex items-center gap-2">
                        <h1 class="text-3xl font-bold text-fg">{property.title.clone()}</h1>
                        {property.is_verified.then(|| view! {
                            <span class="rounded bg-status-success-bg px-2 py-1 text-xs text-status-success-text">"Verified"</span>
                        })}
                    </div>
                    <p class="text-fg-muted">{property.location()}</p>
                    {(!listed.is_empty()).then(|| view! {
                        <p class="text-xs text-fg-muted">"Listed on " {listed.clone()}</p>
                    })}
                </div>
                <p class="text-3xl font-bold text-action-primary-bg">
                    {format_price(property.price, property.property_type)}
                </p>
            </div>
            <dl class="grid grid-cols-2 gap-4 sm:grid-cols-4">
                {facts
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="rounded-lg border border-border p-3">
                            <dt class="text-xs text-fg-muted">{label}</dt>
                            <dd class="text-lg font-semibold text-fg">{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
            <div class="space-y-2">
                <h2 class="text-xl font-semibold text-fg">"Description"</h2>
                <p class="text-fg whitespace-pre-line">{property.description.clone()}</p>
            </div>
            {(!property.features.is_empty()).then(|| view! {
                <div class="space-y-2">
                    <h2 class="text-xl font-semibold text-fg">"Amenities"</h2>
                    <ul class="grid grid-cols-2 gap-2 text-sm text-fg sm:grid-cols-3">
                        {property.features.iter().map(|feature| view! { <li>{feature.clone()}</li> }).collect_view()}
                    </ul>
                </div>
            })}
            {property.agent.clone().map(|agent| view! {
                <div class="rounded-lg border border-border p-4 space-y-1">
                    <h2 class="text-lg font-semibold text-fg">"Contact"</h2>
                    <p class="text-fg">{agent.name}</p>
                    <p class="text-sm text-fg-muted">{agent.phone}</p>
                    <p class="text-sm text-fg-muted">{agent.email}</p>
                </div>
            })}
        </div>
    }
}
