use crate::components::error::InlineErrorMessage;
use crate::pages::login::utils::LoginFormState;
use crate::api::ApiError;
use leptos::{ev::SubmitEvent, *};

const INPUT: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-fg placeholder-fg-muted rounded-md focus:outline-none focus:ring-action-primary-focus focus:border-action-primary-focus sm:text-sm";

#[component]
pub fn LoginForm(
    form: LoginFormState,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Login"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Enter your phone number and password"
                    </p>
                </div>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="phone" class="block text-sm font-medium text-fg">"Phone Number"</label>
                        <input
                            id="phone"
                            name="phone"
                            type="tel"
                            autocomplete="tel"
                            class=INPUT
                            placeholder="Enter your phone number"
                            prop:value=form.phone
                            on:input=move |ev| form.phone.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class=INPUT
                            placeholder="Enter your password"
                            prop:value=form.password
                            on:input=move |ev| form.password.set(event_target_value(&ev))
                        />
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Logging in..." } else { "Login" }}
                    </button>
                    <div class="flex justify-between text-sm">
                        <a href="/forgot-password" class="text-action-primary-bg hover:underline">"Forgot password?"</a>
                        <a href="/register" class="text-action-primary-bg hover:underline">"Create an account"</a>
                    </div>
                </form>
            </div>
        </div>
    }
}
