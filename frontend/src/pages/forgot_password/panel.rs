use super::{utils::ResetStep, view_model::use_forgot_password_view_model};
use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use leptos::*;

const INPUT: &str = "mt-1 appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm";
const SUBMIT: &str = "w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50";

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    let sending = vm.send_action.pending();
    let resetting = vm.reset_action.pending();

    let request_form = move || {
        view! {
            <form
                class="mt-8 space-y-6"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.request_code();
                }
            >
                <div>
                    <label for="phone" class="block text-sm font-medium text-fg">"Phone Number"</label>
                    <input
                        id="phone"
                        name="phone"
                        type="tel"
                        autocomplete="tel"
                        class=INPUT
                        placeholder="Enter your phone number"
                        prop:value=vm.phone
                        on:input=move |ev| vm.phone.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class=SUBMIT disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send reset code" }}
                </button>
            </form>
        }
        .into_view()
    };

    let reset_form = move || {
        view! {
            <form
                class="mt-8 space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit_reset();
                }
            >
                <div>
                    <label for="code" class="block text-sm font-medium text-fg">"Verification Code"</label>
                    <input
                        id="code"
                        name="code"
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        maxlength="6"
                        class=INPUT
                        prop:value=vm.code
                        on:input=move |ev| vm.code.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="new-password" class="block text-sm font-medium text-fg">"New Password"</label>
                    <input
                        id="new-password"
                        type="password"
                        autocomplete="new-password"
                        class=INPUT
                        prop:value=vm.password
                        on:input=move |ev| vm.password.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="confirm-password" class="block text-sm font-medium text-fg">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        autocomplete="new-password"
                        class=INPUT
                        prop:value=vm.confirm
                        on:input=move |ev| vm.confirm.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class=SUBMIT disabled=move || resetting.get()>
                    {move || if resetting.get() { "Resetting..." } else { "Reset password" }}
                </button>
                <button
                    type="button"
                    class="w-full text-sm text-action-primary-bg hover:underline"
                    disabled=move || sending.get()
                    on:click=move |_| vm.request_code()
                >
                    "Resend code"
                </button>
            </form>
        }
        .into_view()
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Reset your password"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "We'll send a verification code to your phone."
                    </p>
                </div>
                {move || vm.notice.get().map(|message| view! { <SuccessMessage message=message /> })}
                <InlineErrorMessage error=vm.error />
                {move || match vm.step.get() {
                    ResetStep::RequestCode => request_form(),
                    ResetStep::EnterCode { .. } => reset_form(),
                    ResetStep::Done => ().into_view(),
                }}
                <p class="text-center text-sm">
                    <a href="/login" class="text-action-primary-bg hover:underline">"Back to login"</a>
                </p>
            </div>
        </div>
    }
}
