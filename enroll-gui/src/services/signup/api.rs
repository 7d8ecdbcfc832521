use serde::{Deserialize, Serialize};

use crate::services::http::ErrorResponseInfo;

/// Error token the endpoint returns for a password rejected by its own policy.
pub const NOT_ALLOWED: &str = "not_allowed";

#[derive(Debug, Serialize)]
pub struct CreateUserRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum SignupError {
    NotAuthenticated,
    Server,
    PasswordNotAllowed,
    Http(Option<u16>, String),
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "Not authenticated against the signup endpoint"),
            Self::Server => write!(f, "Signup endpoint internal error"),
            Self::PasswordNotAllowed => write!(f, "Password rejected by the signup endpoint"),
            Self::Http(code, msg) => write!(f, "HTTP error [{:?}]: {}", code, msg),
        }
    }
}

impl From<reqwest::Error> for SignupError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.status().map(|s| s.as_u16()), error.to_string())
    }
}

impl From<ErrorResponseInfo> for SignupError {
    fn from(info: ErrorResponseInfo) -> Self {
        match info.status_code {
            401 | 403 => Self::NotAuthenticated,
            500 => Self::Server,
            status => {
                let not_allowed = serde_json::from_str::<ErrorBody>(&info.text)
                    .map(|body| body.errors.iter().any(|e| e == NOT_ALLOWED))
                    .unwrap_or(false);
                if not_allowed {
                    Self::PasswordNotAllowed
                } else {
                    Self::Http(Some(status), info.text)
                }
            }
        }
    }
}
