use serde::Serialize;

/// Body of `POST /api/users/` (admin creates an account).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<String>,
    pub role: store::Role,
}

/// Body of `PUT /api/users/{id}`. Only the fields that are `Some` are sent,
/// so a status toggle does not overwrite the profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<store::Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UserUpdate {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_update_sends_only_status() {
        let json = serde_json::to_value(UserUpdate::status("inactive")).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "inactive" }));
    }

    #[test]
    fn new_user_serializes_role_lowercase() {
        let user = NewUser {
            name: "Ali".into(),
            email: "ali@example.com".into(),
            farm_size: Some("5 acres".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(user).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["farm_size"], "5 acres");
        assert!(json.get("phone").is_none());
    }
}
