//! Auth API.

use crate::client::DirectoryClient;
use crate::error::Result;
use crate::types::{CredentialsRequest, LoginResponse, RegisterResponse};

/// Auth API client.
pub struct AuthApi {
    client: DirectoryClient,
}

impl AuthApi {
    pub(crate) fn new(client: DirectoryClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let request = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("login", &request).await
    }

    /// Register the demo account and receive a session token.
    pub async fn register(&self, email: &str, password: &str) -> Result<RegisterResponse> {
        let request = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("register", &request).await
    }
}
