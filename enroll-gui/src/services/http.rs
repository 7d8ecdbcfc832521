use async_trait::async_trait;
use reqwest::Response;

/// Information about a response that will be surfaced as an error.
#[derive(Debug, Clone)]
pub struct ErrorResponseInfo {
    pub status_code: u16,
    pub text: String,
}

#[async_trait]
pub trait ResponseExt {
    async fn error_info(self) -> ErrorResponseInfo;
}

#[async_trait]
impl ResponseExt for Response {
    async fn error_info(self) -> ErrorResponseInfo {
        ErrorResponseInfo {
            status_code: self.status().as_u16(),
            text: self
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response text".to_string()),
        }
    }
}
