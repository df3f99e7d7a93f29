use crate::{
    components::layout::LoadingSpinner,
    state::auth::{use_auth_state, AuthState, SessionPhase},
    utils::navigation::{go_to, LOGIN_ROUTE},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Pending,
    Granted,
    Redirect(&'static str),
}

fn auth_access(state: &AuthState) -> Access {
    let settling = matches!(
        state.phase,
        SessionPhase::Uninitialized | SessionPhase::Initializing | SessionPhase::Refreshing
    );
    if state.loading || settling {
        Access::Pending
    } else if state.is_authenticated {
        Access::Granted
    } else {
        Access::Redirect(LOGIN_ROUTE)
    }
}

fn admin_access(state: &AuthState) -> Access {
    match auth_access(state) {
        Access::Granted if !state.is_admin() => Access::Redirect("/"),
        other => other,
    }
}

fn guarded(check: fn(&AuthState) -> Access, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_state();
    let access = create_memo(move |_| auth.with(check));
    create_effect(move |_| {
        if let Access::Redirect(target) = access.get() {
            go_to(target);
        }
    });
    view! {
        <Show
            when=move || access.get() == Access::Granted
            fallback=move || {
                if access.get() == Access::Pending {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Renders children for signed-in users; everyone else goes to `/login`
/// once the session has finished loading.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(auth_access, children)
}

/// Like [`RequireAuth`], and sends signed-in non-admins home.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(admin_access, children)
}
