use super::{utils::RegisterStep, view_model::use_register_view_model};
use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use leptos::*;

const INPUT: &str = "mt-1 block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-fg placeholder-fg-muted rounded-md focus:outline-none focus:ring-action-primary-focus focus:border-action-primary-focus sm:text-sm";
const SUBMIT: &str = "w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50";

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class=INPUT
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let pending = vm.pending();
    let verifying = move || vm.step.with(|step| step.phone().is_some());

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        {move || if verifying() { "Verify OTP" } else { "Create an Account" }}
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        {move || if verifying() {
                            "Enter the code sent to your phone"
                        } else {
                            "Fill in your details to get started"
                        }}
                    </p>
                </div>
                {move || vm.notice.get().map(|message| view! { <SuccessMessage message=message /> })}
                <InlineErrorMessage error=vm.error />
                <Show
                    when=verifying
                    fallback=move || view! {
                        <form
                            class="space-y-4"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                vm.submit_details();
                            }
                        >
                            <TextField id="full_name" label="Full Name" value=vm.form.full_name />
                            <TextField id="email" label="Email" input_type="email" value=vm.form.email />
                            <TextField id="phone" label="Phone Number" input_type="tel" value=vm.form.phone />
                            <TextField id="password" label="Password" input_type="password" value=vm.form.password />
                            <TextField id="re_password" label="Confirm Password" input_type="password" value=vm.form.re_password />
                            <button type="submit" class=SUBMIT disabled=move || pending.get()>
                                {move || if pending.get() { "Creating account..." } else { "Register" }}
                            </button>
                            <p class="text-center text-sm text-fg-muted">
                                "Already have an account? "
                                <a href="/login" class="text-action-primary-bg hover:underline">"Login"</a>
                            </p>
                        </form>
                    }
                >
                    <form
                        class="space-y-4"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            vm.submit_code();
                        }
                    >
                        <p class="text-sm text-fg-muted">
                            "Code sent to "
                            <span class="font-medium text-fg">
                                {move || vm.step.with(|step| match step {
                                    RegisterStep::VerifyPhone { phone } => phone.clone(),
                                    RegisterStep::Details => String::new(),
                                })}
                            </span>
                        </p>
                        <input
                            id="otp"
                            name="otp"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            maxlength="6"
                            placeholder="Enter 6-digit OTP"
                            class=INPUT
                            prop:value=vm.otp
                            on:input=move |ev| vm.otp.set(event_target_value(&ev))
                        />
                        <button type="submit" class=SUBMIT disabled=move || pending.get()>
                            {move || if pending.get() { "Verifying..." } else { "Verify & Complete Registration" }}
                        </button>
                        <p class="text-center text-sm text-fg-muted">
                            "Didn't receive a code? "
                            <button
                                type="button"
                                class="text-action-primary-bg hover:underline"
                                disabled=move || pending.get()
                                on:click=move |_| vm.resend_code()
                            >
                                "Resend OTP"
                            </button>
                        </p>
                    </form>
                </Show>
            </div>
        </div>
    }
}
