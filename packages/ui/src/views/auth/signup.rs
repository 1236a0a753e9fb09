use api::{SignupOutcome, SignupRequest};
use dioxus::prelude::*;

use super::FormError;
use crate::access::{after_sign_in, Access};
use crate::auth::use_auth;
use crate::components::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label,
    ToastOptions,
};
use crate::google::GoogleAuthButton;
use crate::icons::FaSeedling;
use crate::Icon;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

fn optional(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

/// Client-side check before the request is sent.
fn password_mismatch(password: &str, confirm: &str) -> Option<String> {
    (password != confirm).then(|| "Passwords do not match".to_string())
}

#[component]
pub fn SignupView(on_navigate: EventHandler<String>) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut farm_size = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(message) = password_mismatch(&password(), &confirm()) {
            error.set(Some(message));
            return;
        }
        error.set(None);
        loading.set(true);

        let request = SignupRequest {
            name: name(),
            email: email(),
            password: password(),
            phone: optional(phone()),
            location: optional(location()),
            farm_size: optional(farm_size()),
        };
        spawn(async move {
            match auth.signup(request).await {
                Ok(SignupOutcome::SignedIn(_)) => {
                    toast.success("Account created".to_string(), ToastOptions::new());
                    on_navigate.call(after_sign_in(Access::Guest).to_string());
                }
                Ok(SignupOutcome::Created { message }) => {
                    toast.success(message, ToastOptions::new());
                    on_navigate.call("/login".to_string());
                }
                Err(e) => {
                    tracing::warn!("signup failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Stylesheet { href: AUTH_CSS }
        div { class: "auth-page",
            div { class: "auth-column",
                div { class: "auth-heading",
                    div { class: "auth-logo",
                        Icon { icon: FaSeedling, width: 32, height: 32 }
                    }
                    h1 { "Create Account" }
                    p { class: "muted", "Join the AgriTech platform" }
                }
                Card {
                    CardHeader {
                        CardTitle { "Sign Up" }
                        CardDescription { "Fill in your details to get started" }
                    }
                    CardContent {
                        form { class: "form-stack", onsubmit,
                            if let Some(message) = error() {
                                FormError { message }
                            }
                            div { class: "field",
                                Label { html_for: "name", "Full Name" }
                                Input { id: "name", value: name(), required: true, placeholder: "Muhammad Ali",
                                    oninput: move |e: FormEvent| name.set(e.value()) }
                            }
                            div { class: "field",
                                Label { html_for: "email", "Email Address" }
                                Input { id: "email", r#type: "email", value: email(), required: true,
                                    placeholder: "farmer@example.com",
                                    oninput: move |e: FormEvent| email.set(e.value()) }
                            }
                            div { class: "field-row",
                                div { class: "field",
                                    Label { html_for: "phone", "Phone" }
                                    Input { id: "phone", value: phone(), placeholder: "+92 300 1234567",
                                        oninput: move |e: FormEvent| phone.set(e.value()) }
                                }
                                div { class: "field",
                                    Label { html_for: "location", "Location" }
                                    Input { id: "location", value: location(), placeholder: "Lahore",
                                        oninput: move |e: FormEvent| location.set(e.value()) }
                                }
                            }
                            div { class: "field",
                                Label { html_for: "farm-size", "Farm Size" }
                                Input { id: "farm-size", value: farm_size(), placeholder: "25 acres",
                                    oninput: move |e: FormEvent| farm_size.set(e.value()) }
                            }
                            div { class: "field",
                                Label { html_for: "password", "Password" }
                                Input { id: "password", r#type: "password", value: password(), required: true,
                                    oninput: move |e: FormEvent| password.set(e.value()) }
                            }
                            div { class: "field",
                                Label { html_for: "confirm", "Confirm Password" }
                                Input { id: "confirm", r#type: "password", value: confirm(), required: true,
                                    oninput: move |e: FormEvent| confirm.set(e.value()) }
                            }
                            Button { r#type: "submit", class: "w-full", disabled: loading(),
                                if loading() { "Creating account..." } else { "Sign Up" }
                            }
                            div { class: "auth-divider", span { "Or continue with" } }
                            GoogleAuthButton { label: "Sign up with Google", on_navigate }
                            div { class: "auth-links",
                                p {
                                    "Already have an account? "
                                    a { onclick: move |_| on_navigate.call("/login".to_string()), "Sign in" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optionals_are_dropped() {
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional("Multan".to_string()).as_deref(), Some("Multan"));
    }

    #[test]
    fn passwords_must_match() {
        assert_eq!(password_mismatch("abc", "abc"), None);
        assert_eq!(password_mismatch("abc", "abd").as_deref(), Some("Passwords do not match"));
    }
}
