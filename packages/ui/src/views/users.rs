//! Admin user management: list, per-keystroke backend search, create, edit,
//! delete, status toggle and undo of the last admin action.

use api::models::{display_date, NewUser, UserUpdate};
use api::{Role, User};
use dioxus::prelude::*;

use super::common::{EmptyState, PageHeader};
use super::options;
use super::profile::PROVINCES;
use crate::auth::use_auth;
use crate::components::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Label,
    ModalOverlay, Select, ToastOptions,
};
use crate::icons::{FaArrowRotateLeft, FaMagnifyingGlass, FaPen, FaToggleOff, FaToggleOn, FaTrash, FaUserPlus};
use crate::{platform, Icon};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// A user as the admin tables show it, with placeholders for missing fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub farm_size: String,
    pub join_date: String,
    pub last_login: String,
    pub status: String,
}

impl UserRow {
    pub fn from_user(user: &User) -> Self {
        let or = |v: &Option<String>, fallback: &str| {
            v.as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        let date = |v: &Option<String>, fallback: &str| {
            v.as_deref()
                .and_then(display_date)
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: or(&user.phone, "N/A"),
            location: or(&user.location, "Unknown"),
            farm_size: or(&user.farm_size, "N/A"),
            join_date: date(&user.created_at, "N/A"),
            last_login: date(&user.last_login, "Never"),
            status: or(&user.status, "active"),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == "active"
    }

    /// Status the toggle button switches to.
    pub fn toggled_status(&self) -> &'static str {
        if self.is_active() {
            "inactive"
        } else {
            "active"
        }
    }
}

/// Totals for the admin dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserTotals {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl UserTotals {
    pub fn count(rows: &[UserRow]) -> Self {
        Self {
            total: rows.len(),
            active: rows.iter().filter(|r| r.status == "active").count(),
            inactive: rows.iter().filter(|r| r.status == "inactive").count(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct UserForm {
    name: String,
    email: String,
    phone: String,
    location: String,
    farm_size: String,
}

impl UserForm {
    fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            location: user.location.clone().unwrap_or_default(),
            farm_size: user.farm_size.clone().unwrap_or_default(),
        }
    }

    fn optional(value: &str) -> Option<String> {
        Some(value.trim().to_string()).filter(|v| !v.is_empty())
    }

    fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: Self::optional(&self.phone),
            location: Self::optional(&self.location),
            farm_size: Self::optional(&self.farm_size),
            role: Role::User,
        }
    }

    fn to_update(&self) -> UserUpdate {
        UserUpdate {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            phone: Self::optional(&self.phone),
            location: Self::optional(&self.location),
            farm_size: Self::optional(&self.farm_size),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Modal {
    Closed,
    Add,
    Edit(String),
}

#[component]
fn UserFormFields(prefix: &'static str, form: Signal<UserForm>) -> Element {
    let mut form = form;
    let current = form();
    rsx! {
        div { class: "field",
            Label { html_for: "{prefix}-name", "Full Name" }
            Input { id: "{prefix}-name", value: current.name, required: true,
                oninput: move |e: FormEvent| form.write().name = e.value() }
        }
        div { class: "field",
            Label { html_for: "{prefix}-email", "Email" }
            Input { id: "{prefix}-email", r#type: "email", value: current.email, required: true,
                oninput: move |e: FormEvent| form.write().email = e.value() }
        }
        div { class: "field",
            Label { html_for: "{prefix}-phone", "Phone" }
            Input { id: "{prefix}-phone", r#type: "tel", value: current.phone,
                oninput: move |e: FormEvent| form.write().phone = e.value() }
        }
        div { class: "field",
            Label { html_for: "{prefix}-location", "Location" }
            Select { id: "{prefix}-location", value: current.location, options: options(PROVINCES),
                placeholder: "Select Province", onchange: move |v: String| form.write().location = v }
        }
        div { class: "field",
            Label { html_for: "{prefix}-farm-size", "Farm Size" }
            Input { id: "{prefix}-farm-size", placeholder: "e.g., 10 acres", value: current.farm_size,
                oninput: move |e: FormEvent| form.write().farm_size = e.value() }
        }
    }
}

#[component]
pub fn UsersView() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut users = use_signal(Vec::<User>::new);
    let mut search = use_signal(String::new);
    let mut searching = use_signal(|| false);
    let mut undo_loading = use_signal(|| false);
    let mut modal = use_signal(|| Modal::Closed);
    let mut form = use_signal(UserForm::default);

    // Reloads whatever the search box currently asks for
    let reload = move || {
        spawn(async move {
            let query = search.peek().clone();
            match auth.client().search_users(&query).await {
                Ok(list) => {
                    if *search.peek() == query {
                        users.set(list);
                    }
                }
                Err(e) => {
                    if !auth.check(&e) {
                        tracing::error!("failed to load users: {e}");
                        users.set(Vec::new());
                    }
                }
            }
            searching.set(false);
        });
    };

    use_hook(reload);

    let on_search = move |evt: FormEvent| {
        search.set(evt.value());
        searching.set(true);
        reload();
    };

    let on_undo = move |_| {
        undo_loading.set(true);
        spawn(async move {
            match auth.client().undo().await {
                Ok(outcome) => {
                    toast.success(outcome.message_or_default(), ToastOptions::new());
                    reload();
                }
                Err(e) => {
                    if !auth.check(&e) {
                        tracing::info!("undo rejected: {e}");
                        toast.error("Nothing to undo", ToastOptions::new());
                    }
                }
            }
            undo_loading.set(false);
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        let target = modal();
        spawn(async move {
            let client = auth.client();
            let result = match &target {
                Modal::Edit(id) => client.update_user(id, &current.to_update()).await.map(|_| "User updated successfully"),
                _ => client.create_user(&current.to_new_user()).await.map(|_| "User created successfully"),
            };
            match result {
                Ok(message) => {
                    toast.success(message, ToastOptions::new());
                    modal.set(Modal::Closed);
                    form.set(UserForm::default());
                    reload();
                }
                Err(e) => {
                    if !auth.check(&e) {
                        tracing::error!("saving user failed: {e}");
                        toast.error(e.user_message(), ToastOptions::new());
                    }
                }
            }
        });
    };

    let on_toggle = move |row: UserRow| {
        let status = row.toggled_status();
        spawn(async move {
            match auth.client().update_user(&row.id, &UserUpdate::status(status)).await {
                Ok(_) => {
                    toast.success(format!("User marked as {status}"), ToastOptions::new());
                    reload();
                }
                Err(e) => {
                    if !auth.check(&e) {
                        tracing::error!("status update for {} failed: {e}", row.id);
                        toast.error("Failed to update status", ToastOptions::new());
                    }
                }
            }
        });
    };

    let on_delete = move |id: String| {
        if !platform::confirm("Are you sure you want to delete this user?") {
            return;
        }
        spawn(async move {
            match auth.client().delete_user(&id).await {
                Ok(_) => {
                    toast.success("User deleted successfully", ToastOptions::new());
                    reload();
                }
                Err(e) => {
                    if !auth.check(&e) {
                        tracing::error!("deleting user {id} failed: {e}");
                        toast.error(e.user_message(), ToastOptions::new());
                    }
                }
            }
        });
    };

    let rows: Vec<(User, UserRow)> = users
        .read()
        .iter()
        .map(|u| (u.clone(), UserRow::from_user(u)))
        .collect();

    let adding = modal() == Modal::Add;
    let (modal_title, prefix, submit_label) = if adding {
        ("Add New User", "add", "Add User")
    } else {
        ("Edit User", "edit", "Save Changes")
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page",
            PageHeader { title: "User Management", subtitle: "Manage farmer accounts and access",
                div { class: "row",
                    Button { variant: ButtonVariant::Outline, disabled: undo_loading(), onclick: on_undo,
                        Icon { icon: FaArrowRotateLeft, width: 14, height: 14 }
                        " Undo Last Action"
                    }
                    Button {
                        onclick: move |_| {
                            form.set(UserForm::default());
                            modal.set(Modal::Add);
                        },
                        Icon { icon: FaUserPlus, width: 14, height: 14 }
                        " Add User"
                    }
                }
            }

            Card {
                CardContent {
                    div { class: "search-box",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        Input { placeholder: "Search users by name or email...", value: search(), oninput: on_search }
                        if searching() {
                            span { class: "muted small", "Searching..." }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "All Users ({rows.len()})" } }
                CardContent {
                    if rows.is_empty() {
                        EmptyState { message: "No users found." }
                    } else {
                        div { class: "table-wrap",
                            table { class: "table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Phone" }
                                        th { "Location" }
                                        th { "Farm Size" }
                                        th { "Join Date" }
                                        th { "Last Login" }
                                        th { "Status" }
                                        th { "Actions" }
                                    }
                                }
                                tbody {
                                    for (user, row) in rows {
                                        tr { key: "{row.id}",
                                            td { "{row.name}" }
                                            td { class: "muted", "{row.email}" }
                                            td { "{row.phone}" }
                                            td { "{row.location}" }
                                            td { "{row.farm_size}" }
                                            td { class: "muted", "{row.join_date}" }
                                            td { class: "muted", "{row.last_login}" }
                                            td {
                                                span { class: if row.is_active() { "pill tone-green" } else { "pill tone-red" },
                                                    "{row.status}"
                                                }
                                            }
                                            td { class: "actions",
                                                Button { variant: ButtonVariant::Ghost, title: "Edit",
                                                    onclick: move |_| {
                                                        form.set(UserForm::from_user(&user));
                                                        modal.set(Modal::Edit(user.id.clone()));
                                                    },
                                                    Icon { icon: FaPen, width: 12, height: 12 }
                                                }
                                                Button { variant: ButtonVariant::Ghost, title: "Toggle status",
                                                    onclick: {
                                                        let row = row.clone();
                                                        move |_| on_toggle(row.clone())
                                                    },
                                                    if row.is_active() {
                                                        Icon { icon: FaToggleOn, width: 14, height: 14 }
                                                    } else {
                                                        Icon { icon: FaToggleOff, width: 14, height: 14 }
                                                    }
                                                }
                                                Button { variant: ButtonVariant::Ghost, title: "Delete",
                                                    onclick: {
                                                        let id = row.id.clone();
                                                        move |_| on_delete(id.clone())
                                                    },
                                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if modal() != Modal::Closed {
            ModalOverlay {
                title: modal_title,
                on_close: move |_| modal.set(Modal::Closed),
                form { class: "modal-body form-stack", onsubmit: on_submit,
                    UserFormFields { prefix, form }
                    div { class: "row-end",
                        Button { variant: ButtonVariant::Outline, onclick: move |_| modal.set(Modal::Closed), "Cancel" }
                        Button { r#type: "submit",
                            "{submit_label}"
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
    fn missing_fields_get_placeholders() {
        let user: User = serde_json::from_str(
            r#"{"id": 3, "name": "Bilal", "email": "bilal@example.com", "role": "user",
                "phone": null, "location": "", "created_at": "2025-02-03T04:05:06.000001"}"#,
        )
        .unwrap();
        let row = UserRow::from_user(&user);
        assert_eq!(row.id, "3");
        assert_eq!(row.phone, "N/A");
        assert_eq!(row.location, "Unknown");
        assert_eq!(row.farm_size, "N/A");
        assert_eq!(row.join_date, "2025-02-03");
        assert_eq!(row.last_login, "Never");
        assert_eq!(row.status, "active");
        assert!(row.is_active());
        assert_eq!(row.toggled_status(), "inactive");
    }

    #[test]
    fn totals_count_by_status() {
        let mut users = vec![User::default(), User::default(), User::default()];
        users[1].status = Some("inactive".into());
        users[2].status = Some("suspended".into());
        let rows: Vec<UserRow> = users.iter().map(UserRow::from_user).collect();
        assert_eq!(
            UserTotals::count(&rows),
            UserTotals { total: 3, active: 1, inactive: 1 }
        );
    }

    #[test]
    fn new_users_are_farmers_without_blank_fields() {
        let form = UserForm {
            name: " Sana ".into(),
            email: "sana@example.com".into(),
            phone: "  ".into(),
            location: "Sindh".into(),
            farm_size: String::new(),
        };
        let new_user = form.to_new_user();
        assert_eq!(new_user.name, "Sana");
        assert_eq!(new_user.role, Role::User);
        assert!(new_user.phone.is_none());
        assert_eq!(new_user.location.as_deref(), Some("Sindh"));
        assert!(form.to_update().farm_size.is_none());
    }
}
