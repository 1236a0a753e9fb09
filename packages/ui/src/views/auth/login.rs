use api::ApiError;
use dioxus::prelude::*;

use super::FormError;
use crate::access::{after_sign_in, Access};
use crate::auth::use_auth;
use crate::components::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label};
use crate::google::GoogleAuthButton;
use crate::icons::FaSeedling;
use crate::Icon;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Inline message for a failed login attempt.
pub(crate) fn login_error(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => "Login failed. Please try again.".to_string(),
        ApiError::Invalid(message) => message.clone(),
        _ => "Invalid credentials. Please try again.".to_string(),
    }
}

#[component]
pub fn LoginView(on_navigate: EventHandler<String>) -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        loading.set(true);
        spawn(async move {
            match auth.login(email(), password()).await {
                Ok(_) => on_navigate.call(after_sign_in(Access::Guest).to_string()),
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    error.set(Some(login_error(&e)));
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
                    h1 { "Welcome Back" }
                    p { class: "muted", "Sign in to your AgriTech account" }
                }
                Card {
                    CardHeader {
                        CardTitle { "User Login" }
                        CardDescription { "Enter your credentials to access your dashboard" }
                    }
                    CardContent {
                        form { class: "form-stack", onsubmit,
                            if let Some(message) = error() {
                                FormError { message }
                            }
                            div { class: "field",
                                Label { html_for: "email", "Email Address" }
                                Input {
                                    id: "email",
                                    r#type: "email",
                                    placeholder: "farmer@example.com",
                                    value: email(),
                                    required: true,
                                    oninput: move |e: FormEvent| email.set(e.value()),
                                }
                            }
                            div { class: "field",
                                Label { html_for: "password", "Password" }
                                Input {
                                    id: "password",
                                    r#type: "password",
                                    placeholder: "Enter your password",
                                    value: password(),
                                    required: true,
                                    oninput: move |e: FormEvent| password.set(e.value()),
                                }
                            }
                            Button { r#type: "submit", class: "w-full", disabled: loading(),
                                if loading() { "Signing in..." } else { "Sign In" }
                            }
                            div { class: "auth-divider", span { "Or continue with" } }
                            GoogleAuthButton { on_navigate }
                            div { class: "auth-links",
                                p {
                                    "Don't have an account? "
                                    a { onclick: move |_| on_navigate.call("/signup".to_string()), "Sign up" }
                                }
                                p {
                                    a { onclick: move |_| on_navigate.call("/admin/login".to_string()), "Admin Login" }
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
    fn rejected_credentials_read_as_invalid() {
        let err = ApiError::Unauthorized("Invalid credentials".to_string());
        assert_eq!(login_error(&err), "Invalid credentials. Please try again.");

        let err = ApiError::Status {
            status: 400,
            message: "Missing email".to_string(),
        };
        assert_eq!(login_error(&err), "Invalid credentials. Please try again.");
    }

    #[test]
    fn admin_rejection_message_is_kept() {
        let err = ApiError::Invalid("Invalid admin credentials. Please try again.".to_string());
        assert_eq!(login_error(&err), "Invalid admin credentials. Please try again.");
    }
}
