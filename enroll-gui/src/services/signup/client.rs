use reqwest::{IntoUrl, Method, RequestBuilder, StatusCode};

use super::api::{CreateUserRequest, SignupError};
use crate::services::http::ResponseExt;

#[derive(Debug, Clone)]
pub struct SignupClient {
    http: reqwest::Client,
    pub(crate) url: String,
    token: String,
}

impl SignupClient {
    pub fn new(url: String, token: String) -> Self {
        if token.is_empty() {
            tracing::warn!("signup bearer token is empty, the endpoint will reject submissions");
        }
        SignupClient {
            http: reqwest::Client::new(),
            url,
            token,
        }
    }

    fn request<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        let req = self
            .http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .header("User-Agent", format!("enroll-gui/{}", crate::VERSION));
        tracing::debug!("Sending http request: {:?}", req);
        req
    }

    /// Submit the credentials to the signup endpoint. Only a 200 response
    /// counts as a created user, any other outcome maps to a [`SignupError`].
    pub async fn create_user(&self, username: &str, password: &str) -> Result<(), SignupError> {
        let response = self
            .request(Method::POST, &self.url)
            .json(&CreateUserRequest { username, password })
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(response.error_info().await.into());
        }
        Ok(())
    }
}
