use api::models::FarmDraft;
use dioxus::prelude::*;

use super::common::{EmptyState, LoadingPanel, PageHeader};
use super::options;
use crate::auth::use_auth;
use crate::components::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Label,
    ModalOverlay, Select, ToastOptions,
};
use crate::icons::{FaLocationDot, FaPen, FaPlus, FaSeedling, FaTrash};
use crate::{platform, Icon};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

pub const FARM_CROPS: &[&str] = &["Wheat", "Rice", "Cotton", "Maize", "Sugarcane", "Vegetables"];
pub const SOIL_TYPES: &[&str] = &["Loamy", "Clay", "Sandy", "Sandy Loam", "Silt"];
pub const IRRIGATION_TYPES: &[&str] = &["Drip", "Sprinkler", "Flood", "Center Pivot"];
pub const FARM_STATUSES: &[&str] = &["Active", "Fallow"];

fn new_draft() -> FarmDraft {
    FarmDraft {
        status: "Active".to_string(),
        ..Default::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(String),
}

#[component]
pub fn FarmView() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut editing = use_signal(|| Editing::Closed);
    let mut draft = use_signal(new_draft);
    let mut form_error = use_signal(|| Option::<String>::None);

    let mut farms = use_resource(move || async move {
        match auth.client().list_farms().await {
            Ok(list) => list,
            Err(e) => {
                if !auth.check(&e) {
                    tracing::error!("failed to load farms: {e}");
                    toast.error(e.user_message(), ToastOptions::new());
                }
                Vec::new()
            }
        }
    });

    let mut open_new = move || {
        draft.set(new_draft());
        form_error.set(None);
        editing.set(Editing::New);
    };

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        let current = draft();
        if let Err(message) = current.validate() {
            form_error.set(Some(message));
            return;
        }
        let target = editing();
        spawn(async move {
            let client = auth.client();
            let result = match &target {
                Editing::Existing(id) => client.update_farm(id, &current).await,
                _ => client.create_farm(&current).await,
            };
            match result {
                Ok(farm) => {
                    let verb = if matches!(target, Editing::Existing(_)) { "updated" } else { "added" };
                    toast.success(format!("Farm {} {verb}", farm.name), ToastOptions::new());
                    editing.set(Editing::Closed);
                    farms.restart();
                }
                Err(e) => {
                    if !auth.check(&e) {
                        form_error.set(Some(e.user_message()));
                    }
                }
            }
        });
    };

    let on_delete = move |id: String| {
        if !platform::confirm("Are you sure you want to delete this farm?") {
            return;
        }
        spawn(async move {
            match auth.client().delete_farm(&id).await {
                Ok(_) => {
                    toast.success("Farm deleted".to_string(), ToastOptions::new());
                    farms.restart();
                }
                Err(e) => {
                    if !auth.check(&e) {
                        toast.error(e.user_message(), ToastOptions::new());
                    }
                }
            }
        });
    };

    let title = match editing() {
        Editing::Existing(_) => "Edit Farm",
        _ => "Add New Farm",
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page",
            PageHeader { title: "Farm Management", subtitle: "Manage your farm fields and cultivation details",
                Button { onclick: move |_| open_new(),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add Farm"
                }
            }

            {match farms() {
                None => rsx! { LoadingPanel {} },
                Some(list) if list.is_empty() => rsx! { EmptyState { message: "No farms yet. Add your first farm to get started." } },
                Some(list) => rsx! {
                    div { class: "card-grid",
                        for farm in list {
                            Card { key: "{farm.id}", class: "farm-card",
                                CardHeader {
                                    div { class: "row-between",
                                        div { class: "row",
                                            span { class: "stat-icon tone-green", Icon { icon: FaSeedling, width: 16, height: 16 } }
                                            div {
                                                CardTitle { "{farm.name}" }
                                                p { class: "muted small", "{farm.size_label()}" }
                                            }
                                        }
                                        span {
                                            class: if farm.status_label() == "Active" { "badge badge-green" } else { "badge badge-gray" },
                                            "{farm.status_label()}"
                                        }
                                    }
                                }
                                CardContent {
                                    if let Some(location) = &farm.location {
                                        p { class: "detail-row",
                                            Icon { icon: FaLocationDot, width: 12, height: 12 }
                                            span { class: "muted", " Location: " }
                                            span { "{location}" }
                                        }
                                    }
                                    p { class: "detail-row",
                                        span { class: "muted", "Crop: " }
                                        span { "{farm.current_crop.clone().unwrap_or_default()}" }
                                    }
                                    p { class: "detail-row",
                                        span { class: "muted", "Soil: " }
                                        span { "{farm.soil_type.clone().unwrap_or_default()}" }
                                    }
                                    p { class: "detail-row",
                                        span { class: "muted", "Irrigation: " }
                                        span { "{farm.irrigation_type.clone().unwrap_or_default()}" }
                                    }
                                    div { class: "row card-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let farm = farm.clone();
                                                move |_| {
                                                    draft.set(FarmDraft::from_farm(&farm));
                                                    form_error.set(None);
                                                    editing.set(Editing::Existing(farm.id.clone()));
                                                }
                                            },
                                            Icon { icon: FaPen, width: 12, height: 12 }
                                            " Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let id = farm.id.clone();
                                                move |_| on_delete(id.clone())
                                            },
                                            Icon { icon: FaTrash, width: 12, height: 12 }
                                            " Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }

        if editing() != Editing::Closed {
            ModalOverlay { title: title.to_string(), on_close: move |_| editing.set(Editing::Closed),
                form { class: "form-stack modal-body", onsubmit: on_save,
                    if let Some(message) = form_error() {
                        p { class: "form-error", "{message}" }
                    }
                    div { class: "field",
                        Label { html_for: "farm-name", "Farm Name" }
                        Input { id: "farm-name", value: draft().name, required: true,
                            oninput: move |e: FormEvent| draft.write().name = e.value() }
                    }
                    div { class: "field",
                        Label { html_for: "farm-location", "Location" }
                        Input { id: "farm-location", value: draft().location, required: true,
                            oninput: move |e: FormEvent| draft.write().location = e.value() }
                    }
                    div { class: "field",
                        Label { html_for: "farm-size", "Size (acres)" }
                        Input { id: "farm-size", r#type: "number", step: "0.1", value: draft().size, required: true,
                            oninput: move |e: FormEvent| draft.write().size = e.value() }
                    }
                    div { class: "field",
                        Label { html_for: "farm-crop", "Crop" }
                        Select { id: "farm-crop", value: draft().crop, options: options(FARM_CROPS),
                            placeholder: "Select Crop",
                            onchange: move |v: String| draft.write().crop = v }
                    }
                    div { class: "field",
                        Label { html_for: "farm-soil", "Soil Type" }
                        Select { id: "farm-soil", value: draft().soil_type, options: options(SOIL_TYPES),
                            placeholder: "Select Soil Type",
                            onchange: move |v: String| draft.write().soil_type = v }
                    }
                    div { class: "field",
                        Label { html_for: "farm-irrigation", "Irrigation Type" }
                        Select { id: "farm-irrigation", value: draft().irrigation_type, options: options(IRRIGATION_TYPES),
                            placeholder: "Select Irrigation",
                            onchange: move |v: String| draft.write().irrigation_type = v }
                    }
                    div { class: "field",
                        Label { html_for: "farm-status", "Status" }
                        Select { id: "farm-status", value: draft().status, options: options(FARM_STATUSES),
                            onchange: move |v: String| draft.write().status = v }
                    }
                    div { class: "row modal-actions",
                        Button { variant: ButtonVariant::Outline, onclick: move |_| editing.set(Editing::Closed), "Cancel" }
                        Button { r#type: "submit", "Save" }
                    }
                }
            }
        }
    }
}
