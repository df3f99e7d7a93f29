use crate::state::auth::{use_session, AuthState};
use leptos::*;

const NAV_LINK: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";
const MOBILE_NAV_LINK: &str =
    "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NavLink {
    href: &'static str,
    label: &'static str,
}

/// Links shown for the current session, in display order.
fn nav_links(state: &AuthState) -> Vec<NavLink> {
    let mut links = vec![NavLink {
        href: "/properties",
        label: "Properties",
    }];
    if !state.is_authenticated {
        return links;
    }
    links.push(NavLink {
        href: "/favorites",
        label: "Favorites",
    });
    links.push(NavLink {
        href: "/dashboard",
        label: "Dashboard",
    });
    if state.user.as_ref().is_some_and(|u| u.can_manage_listings()) {
        links.push(NavLink {
            href: "/properties/new",
            label: "List Property",
        });
    }
    if state.is_admin() {
        links.push(NavLink {
            href: "/admin/properties",
            label: "Admin",
        });
    }
    links
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let auth = session.state();
    let (menu_open, set_menu_open) = create_signal(false);
    let links = create_memo(move |_| auth.with(nav_links));
    let is_authenticated = move || auth.with(|state| state.is_authenticated);
    let display_name = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| user.display_name().to_string())
                .unwrap_or_default()
        })
    };
    let session = store_value(session);
    let on_logout = Callback::new(move |_: ()| {
        set_menu_open.set(false);
        session.with_value(|session| session.logout());
    });
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"Realty Hub"</a>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex items-center space-x-4">
                            <For
                                each=move || links.get()
                                key=|link| link.href
                                children=move |link| view! {
                                    <a href=link.href class=NAV_LINK>{link.label}</a>
                                }
                            />
                            <Show
                                when=is_authenticated
                                fallback=|| view! {
                                    <a href="/login" class=NAV_LINK>"Login"</a>
                                    <a href="/register" class=NAV_LINK>"Register"</a>
                                }
                            >
                                <span class="text-sm text-fg-muted">{display_name}</span>
                                <button on:click=move |_| on_logout.call(()) class=NAV_LINK>"Logout"</button>
                            </Show>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d=move || if menu_open.get() { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16M4 18h16" }
                                />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            <For
                                each=move || links.get()
                                key=|link| link.href
                                children=move |link| view! {
                                    <a
                                        href=link.href
                                        class=MOBILE_NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {link.label}
                                    </a>
                                }
                            />
                            <Show
                                when=is_authenticated
                                fallback=|| view! {
                                    <a href="/login" class=MOBILE_NAV_LINK>"Login"</a>
                                    <a href="/register" class=MOBILE_NAV_LINK>"Register"</a>
                                }
                            >
                                <button
                                    on:click=move |_| on_logout.call(())
                                    class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                >
                                    "Logout"
                                </button>
                            </Show>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
