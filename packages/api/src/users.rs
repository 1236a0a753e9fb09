//! `/api/users/*`: account administration and profile edits.

use store::User;

use crate::client::{Ack, ApiClient};
use crate::error::{ApiError, ApiResult};
use crate::models::{NewUser, OneOrMany, UserUpdate};

impl ApiClient {
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get("/users/").await
    }

    /// Search by name or email on the backend.
    ///
    /// A blank query is the unfiltered list. A query that matches nothing
    /// (the backend answers 404) is an empty result, not an error.
    pub async fn search_users(&self, query: &str) -> ApiResult<Vec<User>> {
        let query = query.trim();
        if query.is_empty() {
            return self.list_users().await;
        }
        match self
            .get_query::<OneOrMany<User>, _>("/users/search", &[("q", query)])
            .await
        {
            Ok(found) => Ok(found.into_vec()),
            Err(ApiError::Status { status: 404, .. }) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    pub async fn create_user(&self, user: &NewUser) -> ApiResult<Ack> {
        self.post("/users/", user).await
    }

    /// `PUT /api/users/{id}`; returns the stored record after the change.
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> ApiResult<User> {
        self.put(&format!("/users/{id}"), update).await
    }

    pub async fn delete_user(&self, id: &str) -> ApiResult<Ack> {
        self.delete(&format!("/users/{id}")).await
    }
}
