use leptos::ev::KeyboardEvent;
use leptos::*;

const CONFIRM_PRIMARY: &str = "rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50";
const CONFIRM_DANGER: &str = "rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50";

/// Modal yes/no prompt. Escape, the backdrop and "Cancel" all call `on_cancel`.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Confirm".to_string(), into)] confirm_label: String,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let text = store_value((title, message, confirm_label));
    let confirm_class = if destructive { CONFIRM_DANGER } else { CONFIRM_PRIMARY };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md space-y-4 rounded-lg border border-border bg-surface-elevated p-6 shadow-xl"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{text.with_value(|t| t.0.clone())}</h2>
                    <p class="text-sm text-fg-muted">{text.with_value(|t| t.1.clone())}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md border border-border px-4 py-2 text-sm font-semibold text-fg"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class=confirm_class
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {text.with_value(|t| t.2.clone())}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn open_dialog_shows_the_prompt() {
        let html = render_to_string(|| {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Delete listing"
                    message="This listing will be removed permanently."
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    destructive=true
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("This listing will be removed permanently."));
        assert!(html.contains("Confirm"));
        assert!(html.contains("Cancel"));
        assert!(html.contains(CONFIRM_DANGER));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(|| {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| false)
                    title="Delete listing"
                    message="gone"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
