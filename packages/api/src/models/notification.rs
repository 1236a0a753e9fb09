use serde::{Deserialize, Serialize};

use super::display_date;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(deserialize_with = "store::models::string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    /// `info`, `warning`, `success` or `error`.
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_kind() -> String {
    "info".to_string()
}

impl Notification {
    pub fn date_label(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(display_date)
            .unwrap_or_default()
    }
}

/// Number of notifications not yet marked read.
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_notification() {
        let items: Vec<Notification> = serde_json::from_str(
            r#"[
                {"id": 1, "user_id": 3, "title": "Frost warning", "message": "Cover seedlings",
                 "type": "warning", "is_read": false, "created_at": "2025-02-01T06:00:00"},
                {"id": 2, "user_id": 3, "title": "Welcome", "message": "",
                 "is_read": true, "created_at": "2025-01-01T00:00:00"}
            ]"#,
        )
        .unwrap();
        assert_eq!(items[0].kind, "warning");
        assert_eq!(items[1].kind, "info");
        assert_eq!(items[0].date_label(), "2025-02-01");
        assert_eq!(unread_count(&items), 1);
    }
}
