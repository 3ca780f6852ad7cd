//! Users API.

use crate::client::DirectoryClient;
use crate::error::Result;
use crate::types::{ListUsersResponse, UpdateUserRequest, UpdateUserResponse};

/// Users API client.
pub struct UsersApi {
    client: DirectoryClient,
}

impl UsersApi {
    pub(crate) fn new(client: DirectoryClient) -> Self {
        Self { client }
    }

    /// List one page of users.
    pub async fn list(&self, page: u32) -> Result<ListUsersResponse> {
        self.client.get_with_query("users", &[("page", page)]).await
    }

    /// Partially update a user.
    ///
    /// The mock service echoes the fields without persisting them; callers
    /// reconcile their own local state on success.
    pub async fn update(&self, id: i64, fields: &UpdateUserRequest) -> Result<UpdateUserResponse> {
        self.client.put(&format!("users/{}", id), fields).await
    }

    /// Delete a user.
    pub async fn remove(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("users/{}", id)).await
    }
}
