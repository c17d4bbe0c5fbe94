//! User management API client methods

use super::{ApiClient, ClientError};
use crate::types::{
    CreateUserRequest, ListUserResponse, UpdateUserPasswordRequest, UpdateUserStatusRequest,
};
use reqwest::Method;

impl ApiClient {
    /// List all users
    pub async fn list_users(&self) -> Result<ListUserResponse, ClientError> {
        let request = self.get("userService");
        self.execute(request).await
    }

    /// Create a new, active user
    pub async fn create_user(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), ClientError> {
        let request = self.post("userService").json(&CreateUserRequest {
            username: username.into(),
            password: password.into(),
        });
        self.execute_empty(request).await
    }

    /// Replace a user's password
    pub async fn update_user_password(
        &self,
        username: &str,
        new_password: impl Into<String>,
    ) -> Result<(), ClientError> {
        let request = self
            .request_segments(Method::PUT, &["userService", "updatePassword", username])?
            .json(&UpdateUserPasswordRequest {
                new_password: new_password.into(),
            });
        self.execute_empty(request).await
    }

    /// Activate or deactivate a user
    pub async fn set_user_status(&self, username: &str, active: bool) -> Result<(), ClientError> {
        let request = self
            .request_segments(Method::PUT, &["userService", "setStatus", username])?
            .json(&UpdateUserStatusRequest { active });
        self.execute_empty(request).await
    }
}
