use crate::api::{ApiError, ApiErrorKind};
use leptos::*;

/// Field errors from a structured 4xx body, as `field: message` lines.
fn field_errors(error: &ApiError) -> Vec<String> {
    let Some(map) = error.details.as_ref().and_then(|d| d.as_object()) else {
        return Vec::new();
    };
    map.iter()
        .filter(|(field, _)| !matches!(field.as_str(), "detail" | "non_field_errors" | "message"))
        .filter_map(|(field, value)| {
            let text = match value {
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                serde_json::Value::String(s) => s.clone(),
                _ => return None,
            };
            (!text.is_empty()).then(|| format!("{field}: {text}"))
        })
        .collect()
}

fn headline(error: &ApiError) -> String {
    if error.kind == ApiErrorKind::Remote && field_errors(error).len() > 1 {
        "Please check the highlighted fields".to_string()
    } else {
        error.error.clone()
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| headline(&e)).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let lines = field_errors(&e);
                    if e.kind == ApiErrorKind::Remote && lines.len() > 1 {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                            </ul>
                        }.into_view()
                    } else if e.kind == ApiErrorKind::Validation {
                        ().into_view()
                    } else {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code()}</div> }.into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_lists_field_errors() {
        let html = render_to_string(move || {
            let error = ApiError::from_response(
                400,
                &json!({
                    "email": ["Enter a valid email address."],
                    "phone": ["user with this phone already exists."]
                })
                .to_string(),
            );
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("email: Enter a valid email address."));
        assert!(html.contains("phone: user with this phone already exists."));
    }

    #[test]
    fn inline_error_renders_code_for_network_failures() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::network("Request failed")));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Request failed"));
        assert!(html.contains("Code: REQUEST_FAILED"));
    }

    #[test]
    fn inline_error_renders_nothing_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("status-error"));
    }
}
