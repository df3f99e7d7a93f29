use leptos::{ev::MouseEvent, *};

use crate::{
    api::{ApiError, FavoriteProperty, Property},
    state::favorites::use_favorites,
    utils::format::{format_area, format_price},
};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[component]
pub fn PropertyCard(
    listing: FavoriteProperty,
    #[prop(optional)] verified: bool,
) -> impl IntoView {
    let favorites = use_favorites();
    let notice = create_rw_signal(None::<ApiError>);
    let id = listing.id.clone();
    let is_favorite = {
        let favorites = favorites.clone();
        let id = id.clone();
        Signal::derive(move || favorites.is_favorite(&id))
    };
    let on_favorite = {
        let listing = listing.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            match favorites.toggle(listing.clone()) {
                Ok(_) => notice.set(None),
                Err(err) => notice.set(Some(err)),
            }
        }
    };
    let facts = [
        (listing.bedrooms > 0).then(|| format!("{} Beds", listing.bedrooms)),
        (listing.bathrooms > 0).then(|| format!("{} Baths", listing.bathrooms)),
        format_area(listing.area_sqft),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");
    let image = listing
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    view! {
        <a href=format!("/properties/{id}") class="block">
            <div class="bg-surface-elevated rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-shadow duration-300">
                <div class="relative">
                    <img src=image alt=listing.title.clone() class="w-full h-48 object-cover"/>
                    <span class="absolute top-2 left-2 rounded bg-surface-elevated px-2 py-1 text-xs font-medium text-fg">
                        {listing.property_type.label()}
                    </span>
                    <button
                        type="button"
                        aria-label="Toggle favorite"
                        class=move || if is_favorite.get() {
                            "absolute top-2 right-2 rounded-full p-2 bg-surface-elevated text-status-error-text"
                        } else {
                            "absolute top-2 right-2 rounded-full p-2 bg-surface-elevated text-fg-muted"
                        }
                        on:click=on_favorite
                    >
                        {move || if is_favorite.get() { "♥" } else { "♡" }}
                    </button>
                </div>
                <div class="p-4 space-y-1">
                    <div class="flex items-center gap-2">
                        <h3 class="text-lg font-semibold text-fg">{listing.title.clone()}</h3>
                        <Show when=move || verified>
                            <span class="text-xs text-status-success-text">"Verified"</span>
                        </Show>
                    </div>
                    <p class="text-fg-muted text-sm">{listing.city.clone()}</p>
                    <p class="text-xl font-bold text-action-primary-bg">
                        {format_price(listing.price, listing.property_type)}
                    </p>
                    <p class="text-sm text-fg-muted">{facts}</p>
                    {move || notice.get().map(|err| view! {
                        <p class="text-xs text-status-error-text">{err.error}</p>
                    })}
                </div>
            </div>
        </a>
    }
}

/// Grid of full listings as cards.
#[component]
pub fn PropertyGrid(#[prop(into)] properties: Signal<Vec<Property>>) -> impl IntoView {
    view! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
            <For
                each=move || properties.get()
                key=|property| property.id.clone()
                children=|property| view! {
                    <PropertyCard
                        listing=FavoriteProperty::from(&property)
                        verified=property.is_verified
                    />
                }
            />
        </div>
    }
}
