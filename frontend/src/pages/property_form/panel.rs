use super::{
    utils::FormMode,
    view_model::{use_property_form_view_model, PropertyFormViewModel},
};
use crate::{
    api::ListingType,
    components::{
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};
use leptos::*;

const INPUT: &str = "mt-1 w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg";

#[component]
fn Field(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            <input
                type=input_type
                class=INPUT
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn PropertyFormPanel(mode: FormMode) -> impl IntoView {
    let heading = mode.heading();
    let vm = use_property_form_view_model(mode);

    view! {
        <Layout>
            <div class="max-w-3xl mx-auto space-y-6">
                <h1 class="text-3xl font-bold text-fg">{heading}</h1>
                <Show
                    when=move || vm.can_manage.get()
                    fallback=|| view! {
                        <ErrorMessage message="Only property owners can list properties." />
                    }
                >
                    {move || match vm.existing.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Some(Err(err))) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        Some(_) => view! { <DraftForm vm=vm /> }.into_view(),
                    }}
                </Show>
            </div>
        </Layout>
    }
}

#[component]
fn DraftForm(vm: PropertyFormViewModel) -> impl IntoView {
    let form = vm.form;
    let submit_label = vm.mode.with_value(FormMode::submit_label);
    let pending = vm.save_action.pending();

    let on_files = move |ev: web_sys::Event| {
        #[cfg(target_arch = "wasm32")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(files) = input.files() {
                spawn_local(async move {
                    match super::utils::read_files(files).await {
                        Ok(uploads) => form.add_images(uploads),
                        Err(err) => vm.error.set(Some(err)),
                    }
                });
            }
            input.set_value("");
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = ev;
    };

    view! {
        <form
            class="space-y-4 rounded-lg border border-border bg-surface-elevated p-6"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <Field label="Title" value=form.title />
            <label class="block text-sm font-medium text-fg">
                "Listing for"
                <select
                    class=INPUT
                    on:change=move |ev| {
                        if let Some(kind) = ListingType::parse(&event_target_value(&ev)) {
                            form.property_type.set(kind);
                        }
                    }
                >
                    {ListingType::ALL
                        .iter()
                        .map(|kind| {
                            let kind = *kind;
                            view! {
                                <option
                                    value=kind.as_str()
                                    selected=move || form.property_type.get() == kind
                                >
                                    {kind.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <Field label="Price (₹)" value=form.price input_type="number" />
            <div class="grid gap-4 sm:grid-cols-3">
                <Field label="Bedrooms" value=form.bedrooms input_type="number" />
                <Field label="Bathrooms" value=form.bathrooms input_type="number" />
                <Field label="Area (sq ft)" value=form.area_sqft input_type="number" />
            </div>
            <Field label="Address" value=form.address />
            <div class="grid gap-4 sm:grid-cols-3">
                <Field label="City" value=form.city />
                <Field label="State" value=form.state />
                <Field label="Zip Code" value=form.zip_code />
            </div>
            <label class="block text-sm font-medium text-fg">
                "Description"
                <textarea
                    rows="5"
                    class=INPUT
                    prop:value=form.description
                    on:input=move |ev| form.description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="space-y-2">
                <label class="block text-sm font-medium text-fg">
                    "Images"
                    <input type="file" accept="image/*" multiple class="mt-1 block text-sm" on:change=on_files />
                </label>
                <ul class="space-y-1 text-sm text-fg-muted">
                    {move || form.images.get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, image)| view! {
                            <li class="flex items-center justify-between">
                                <span>{image.file_name}</span>
                                <button
                                    type="button"
                                    class="text-status-error-text hover:underline"
                                    on:click=move |_| form.remove_image(index)
                                >
                                    "Remove"
                                </button>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
            <InlineErrorMessage error=vm.error />
            <button
                type="submit"
                class="w-full rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Saving..." } else { submit_label }}
            </button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::{
        helpers::{buyer, provide_session},
        ssr::render_to_string,
    };

    #[test]
    fn buyers_cannot_open_the_form() {
        let html = render_to_string(|| {
            provide_session(AuthState::signed_in(buyer()));
            view! { <PropertyFormPanel mode=FormMode::Create /> }
        });
        assert!(html.contains("Only property owners can list properties."));
        assert!(!html.contains("Post Property"));
    }
}
