mod admin_login;
mod login;
mod signup;

pub use admin_login::AdminLoginView;
pub use login::LoginView;
pub use signup::SignupView;

use dioxus::prelude::*;

use crate::icons::FaCircleExclamation;
use crate::Icon;

/// Inline error banner shown above auth forms.
#[component]
fn FormError(message: String) -> Element {
    rsx! {
        div { class: "form-error",
            Icon { icon: FaCircleExclamation, width: 14, height: 14 }
            span { "{message}" }
        }
    }
}
