use super::{
    utils::{status_badge, subtitle},
    view_model::{use_dashboard_view_model, DashboardViewModel},
};
use crate::{
    api::{Inquiry, InquiryDecision, InquiryStatus},
    components::{
        cards::PropertyGrid,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format::format_date,
};
use leptos::*;

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-4">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="text-2xl font-bold text-fg">{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    view! { <DashboardContent vm=vm /> }
}

#[component]
fn DashboardContent(vm: DashboardViewModel) -> impl IntoView {
    let name = move || {
        vm.user
            .with(|user| user.as_ref().map(|u| u.display_name().to_string()))
            .unwrap_or_default()
    };
    let is_admin = move || vm.user.with(|user| user.as_ref().is_some_and(|u| u.is_admin()));

    view! {
        <Layout>
            <div class="space-y-8">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div>
                        <h1 class="text-3xl font-bold text-fg">{move || format!("Welcome, {}", name())}</h1>
                        <p class="text-fg-muted">{move || vm.user.with(|user| subtitle(user.as_ref()))}</p>
                    </div>
                    <div class="flex gap-3">
                        <Show when=move || vm.can_manage.get()>
                            <a href="/properties/new" class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text">
                                "List Property"
                            </a>
                        </Show>
                        <Show when=is_admin>
                            <a href="/admin/properties" class="rounded-md border border-border px-4 py-2 text-sm font-semibold text-fg">
                                "Review Listings"
                            </a>
                        </Show>
                    </div>
                </div>

                <div class="grid gap-4 sm:grid-cols-4">
                    <StatCard label="Inquiries" value=Signal::derive(move || vm.counts.get().total) />
                    <StatCard label="Pending" value=Signal::derive(move || vm.counts.get().pending) />
                    <StatCard label="Approved" value=Signal::derive(move || vm.counts.get().approved) />
                    <StatCard label="Rejected" value=Signal::derive(move || vm.counts.get().rejected) />
                </div>

                <Show when=move || vm.can_manage.get()>
                    <section class="space-y-4">
                        <h2 class="text-xl font-semibold text-fg">"My Listings"</h2>
                        {move || match vm.listings.get() {
                            None => view! { <LoadingSpinner /> }.into_view(),
                            Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            Some(Ok(list)) if list.is_empty() => view! {
                                <EmptyState
                                    title="No listings yet"
                                    action=("/properties/new", "List Property")
                                />
                            }
                            .into_view(),
                            Some(Ok(list)) => view! {
                                <PropertyGrid properties=Signal::derive(move || list.clone()) />
                            }
                            .into_view(),
                        }}
                    </section>
                </Show>

                <section class="space-y-4">
                    <h2 class="text-xl font-semibold text-fg">"Inquiries"</h2>
                    <InlineErrorMessage error=vm.decide_error />
                    {move || match vm.inquiries.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        Some(Ok(list)) if list.is_empty() => view! {
                            <EmptyState title="No inquiries yet" />
                        }
                        .into_view(),
                        Some(Ok(list)) => list
                            .into_iter()
                            .map(|inquiry| view! { <InquiryRow inquiry=inquiry vm=vm /> })
                            .collect_view(),
                    }}
                </section>
            </div>
        </Layout>
    }
}

#[component]
fn InquiryRow(inquiry: Inquiry, vm: DashboardViewModel) -> impl IntoView {
    let title = inquiry
        .property
        .as_ref()
        .map(|p| p.title.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Listing".to_string());
    let property_href = inquiry
        .property
        .as_ref()
        .and_then(|p| p.id.clone())
        .map(|id| format!("/properties/{id}"));
    let from = inquiry.user.as_ref().map(|u| u.name.clone());
    let decidable = inquiry.status == InquiryStatus::Pending && vm.can_manage.get_untracked();
    let id = store_value(inquiry.id.clone());
    let pending = vm.decide_action.pending();

    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-4 space-y-2">
            <div class="flex items-center justify-between gap-2">
                {match property_href {
                    Some(href) => view! { <a href=href class="font-semibold text-fg hover:underline">{title}</a> }.into_view(),
                    None => view! { <span class="font-semibold text-fg">{title}</span> }.into_view(),
                }}
                <span class=format!("rounded px-2 py-1 text-xs font-medium {}", status_badge(inquiry.status))>
                    {inquiry.status.label()}
                </span>
            </div>
            <p class="text-sm text-fg">{inquiry.message}</p>
            <p class="text-xs text-fg-muted">
                {from.map(|name| format!("From {name} · "))}
                {format_date(inquiry.created_at.as_ref())}
            </p>
            <Show when=move || decidable>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="rounded-md px-3 py-1 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| vm.decide(id.get_value(), InquiryDecision::Approve)
                    >
                        "Approve"
                    </button>
                    <button
                        type="button"
                        class="rounded-md px-3 py-1 text-sm font-semibold bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| vm.decide(id.get_value(), InquiryDecision::Reject)
                    >
                        "Reject"
                    </button>
                </div>
            </Show>
        </div>
    }
}
