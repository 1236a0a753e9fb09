use api::models::{display_date, UserUpdate};
use api::User;
use dioxus::prelude::*;

use super::common::PageHeader;
use super::options;
use crate::auth::use_auth;
use crate::components::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Label,
    Select, ToastOptions,
};
use crate::icons::{FaEnvelope, FaLocationDot, FaPen, FaPhone, FaSeedling, FaUser};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

pub const PROVINCES: &[&str] = &[
    "Punjab", "Sindh", "KPK", "Balochistan", "Gilgit-Baltistan", "Azad Kashmir",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub city: String,
    pub farm_size: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: text(&user.phone),
            location: text(&user.location),
            city: text(&user.city),
            farm_size: text(&user.farm_size),
        }
    }

    /// Body for `PUT /api/users/{id}`. Name and email cannot be blanked.
    pub fn to_update(&self) -> Result<UserUpdate, String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }
        let text = |v: &str| Some(v.trim().to_string());
        Ok(UserUpdate {
            name: text(&self.name),
            email: text(&self.email),
            phone: text(&self.phone),
            location: text(&self.location),
            city: text(&self.city),
            farm_size: text(&self.farm_size),
            ..Default::default()
        })
    }
}

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    value: String,
    editing: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            Label { html_for: id, "{label}" }
            if editing {
                Input { id, value, oninput: move |e: FormEvent| oninput.call(e.value()) }
            } else {
                p { class: "field-value", if value.is_empty() { "Not set" } else { "{value}" } }
            }
        }
    }
}

#[component]
pub fn ProfileView() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let user = auth.user().unwrap_or_default();
    let original = ProfileForm::from_user(&user);
    let mut form = use_signal(|| original.clone());
    let mut editing = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let farm_count = use_resource(move || async move {
        auth.client().list_farms().await.map(|farms| farms.len()).ok()
    });

    let user_id = user.id.clone();
    let on_save = move |_| {
        let update = match form().to_update() {
            Ok(update) => update,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let id = user_id.clone();
        saving.set(true);
        spawn(async move {
            match auth.client().update_user(&id, &update).await {
                Ok(updated) => {
                    form.set(ProfileForm::from_user(&updated));
                    auth.update_user(updated);
                    editing.set(false);
                    error.set(None);
                    toast.success("Profile updated", ToastOptions::new());
                }
                Err(e) => {
                    if !auth.check(&e) {
                        tracing::error!("profile update failed: {e}");
                        error.set(Some(e.user_message()));
                    }
                }
            }
            saving.set(false);
        });
    };

    let on_cancel = move |_| {
        form.set(original.clone());
        error.set(None);
        editing.set(false);
    };

    let farms_label = match farm_count() {
        Some(Some(count)) => count.to_string(),
        Some(None) => "N/A".to_string(),
        None => "...".to_string(),
    };
    let current = form();
    let member_since = user
        .created_at
        .as_deref()
        .and_then(display_date)
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page page-narrow",
            div { class: "page-hero",
                span { class: "avatar avatar-lg", "{user.initial()}" }
                PageHeader { title: user.name.clone(), subtitle: user.email.clone() }
            }

            Card {
                CardHeader {
                    div { class: "row-between",
                        CardTitle { "Profile Information" }
                        if editing() {
                            div { class: "row",
                                Button { variant: ButtonVariant::Outline, onclick: on_cancel, "Cancel" }
                                Button { disabled: saving(), onclick: on_save,
                                    if saving() { "Saving..." } else { "Save Changes" }
                                }
                            }
                        } else {
                            Button { onclick: move |_| editing.set(true),
                                Icon { icon: FaPen, width: 12, height: 12 }
                                " Edit Profile"
                            }
                        }
                    }
                }
                CardContent {
                    if let Some(message) = error() {
                        p { class: "form-error", "{message}" }
                    }
                    div { class: "grid-2",
                        Field { id: "name", label: "Full Name", value: current.name.clone(), editing: editing(),
                            oninput: move |v| form.write().name = v }
                        Field { id: "email", label: "Email Address", value: current.email.clone(), editing: editing(),
                            oninput: move |v| form.write().email = v }
                        Field { id: "phone", label: "Phone Number", value: current.phone.clone(), editing: editing(),
                            oninput: move |v| form.write().phone = v }
                        div { class: "field",
                            Label { html_for: "location", "Location" }
                            if editing() {
                                Select { id: "location", value: current.location.clone(), options: options(PROVINCES),
                                    placeholder: "Select Province",
                                    onchange: move |v: String| form.write().location = v }
                            } else {
                                p { class: "field-value",
                                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                                    if current.location.is_empty() { " Not set" } else { " {current.location}" }
                                }
                            }
                        }
                        Field { id: "city", label: "City / District", value: current.city.clone(), editing: editing(),
                            oninput: move |v| form.write().city = v }
                        Field { id: "farm_size", label: "Farm Size", value: current.farm_size.clone(), editing: editing(),
                            oninput: move |v| form.write().farm_size = v }
                    }
                }
            }

            div { class: "grid-3",
                Card {
                    CardContent {
                        p { class: "muted small", Icon { icon: FaUser, width: 12, height: 12 } " Member Since" }
                        h3 { "{member_since}" }
                    }
                }
                Card {
                    CardContent {
                        p { class: "muted small", Icon { icon: FaSeedling, width: 12, height: 12 } " Farms Managed" }
                        h3 { "{farms_label}" }
                    }
                }
                Card {
                    CardContent {
                        p { class: "muted small", Icon { icon: FaEnvelope, width: 12, height: 12 } " Account" }
                        h3 { class: "capitalize", "{user.role.as_str()}" }
                        if let Some(phone) = user.phone.as_deref() {
                            p { class: "muted small", Icon { icon: FaPhone, width: 10, height: 10 } " {phone}" }
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

    fn farmer() -> User {
        User {
            id: "7".into(),
            name: "Amina".into(),
            email: "amina@example.com".into(),
            city: Some("Multan".into()),
            ..Default::default()
        }
    }

    #[test]
    fn form_starts_from_session_user() {
        let form = ProfileForm::from_user(&farmer());
        assert_eq!(form.name, "Amina");
        assert_eq!(form.city, "Multan");
        assert_eq!(form.phone, "");
    }

    #[test]
    fn update_sends_every_field_trimmed() {
        let mut form = ProfileForm::from_user(&farmer());
        form.phone = " +92 300 1234567 ".into();
        let update = form.to_update().unwrap();
        assert_eq!(update.phone.as_deref(), Some("+92 300 1234567"));
        assert_eq!(update.city.as_deref(), Some("Multan"));
        assert!(update.role.is_none());
        assert!(update.status.is_none());
    }

    #[test]
    fn blank_name_or_email_is_rejected() {
        let mut form = ProfileForm::from_user(&farmer());
        form.name = "  ".into();
        assert_eq!(form.to_update().unwrap_err(), "Name is required");

        let mut form = ProfileForm::from_user(&farmer());
        form.email.clear();
        assert_eq!(form.to_update().unwrap_err(), "Email is required");
    }
}
