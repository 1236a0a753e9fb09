use dioxus::prelude::*;

use super::login::login_error;
use super::FormError;
use crate::access::{after_sign_in, Access};
use crate::auth::use_auth;
use crate::components::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label};
use crate::icons::FaShieldHalved;
use crate::Icon;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Login for the admin console. Farmer accounts are refused.
#[component]
pub fn AdminLoginView(on_navigate: EventHandler<String>) -> Element {
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
            match auth.login_admin(email(), password()).await {
                Ok(_) => on_navigate.call(after_sign_in(Access::GuestAdmin).to_string()),
                Err(e) => error.set(Some(login_error(&e))),
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Stylesheet { href: AUTH_CSS }
        div { class: "auth-page auth-page-admin",
            div { class: "auth-column",
                div { class: "auth-heading",
                    div { class: "auth-logo auth-logo-admin",
                        Icon { icon: FaShieldHalved, width: 32, height: 32 }
                    }
                    h1 { "Admin Portal" }
                    p { class: "muted", "Access administrative dashboard" }
                }
                Card {
                    CardHeader {
                        CardTitle { "Admin Login" }
                        CardDescription { "Enter your admin credentials to continue" }
                    }
                    CardContent {
                        form { class: "form-stack", onsubmit,
                            if let Some(message) = error() {
                                FormError { message }
                            }
                            div { class: "field",
                                Label { html_for: "admin-email", "Admin Email" }
                                Input {
                                    id: "admin-email",
                                    r#type: "email",
                                    placeholder: "admin@example.com",
                                    value: email(),
                                    required: true,
                                    oninput: move |e: FormEvent| email.set(e.value()),
                                }
                            }
                            div { class: "field",
                                Label { html_for: "admin-password", "Password" }
                                Input {
                                    id: "admin-password",
                                    r#type: "password",
                                    placeholder: "Enter admin password",
                                    value: password(),
                                    required: true,
                                    oninput: move |e: FormEvent| password.set(e.value()),
                                }
                            }
                            Button { r#type: "submit", class: "w-full", disabled: loading(),
                                if loading() { "Signing in..." } else { "Sign In as Admin" }
                            }
                            div { class: "auth-links",
                                p {
                                    a { onclick: move |_| on_navigate.call("/login".to_string()), "Back to User Login" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
