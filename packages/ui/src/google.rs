//! "Continue with Google" button.
//!
//! The Google Identity script on the host page stores the ID token it
//! receives; this button exchanges it at `/api/auth/google-login`.

use dioxus::prelude::*;

use crate::access::{after_sign_in, Access};
use crate::auth::use_auth;
use crate::components::{use_toast, Button, ButtonVariant, ToastOptions};
use crate::platform;

#[component]
pub fn GoogleAuthButton(
    #[props(default = "Continue with Google".to_string())] label: String,
    on_navigate: EventHandler<String>,
) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let Some(credential) = platform::google_credential() else {
            tracing::error!("no Google credential on the page");
            toast.error("Google Login connection failed".to_string(), ToastOptions::new());
            return;
        };
        busy.set(true);
        spawn(async move {
            match auth.google_login(credential).await {
                Ok(_) => {
                    toast.success("Successfully logged in with Google!".to_string(), ToastOptions::new());
                    on_navigate.call(after_sign_in(Access::Guest).to_string());
                }
                Err(e) => {
                    tracing::error!("Google login failed: {e}");
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "google-auth",
            Button {
                variant: ButtonVariant::Outline,
                class: "w-full",
                disabled: busy(),
                onclick,
                "{label}"
            }
        }
    }
}
