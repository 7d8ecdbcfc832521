/// Default signup endpoint the form submits to.
pub const DEFAULT_SIGNUP_URL: &str =
    "https://api.challenge.hennge.com/password-validation-challenge-api/001/challenge-signup";

#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the signup endpoint.
    pub api_url: String,
    /// Bearer token attached to signup requests. Supplied by the caller, an
    /// empty token is a placeholder, not a valid credential.
    pub token: String,
}

impl Config {
    pub fn new(api_url: Option<String>, token: Option<String>) -> Self {
        let api_url = api_url
            .or_else(|| std::env::var("ENROLL_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_SIGNUP_URL.to_string());
        let token = token
            .or_else(|| std::env::var("ENROLL_TOKEN").ok())
            .unwrap_or_default();
        Self { api_url, token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_take_precedence() {
        let config = Config::new(
            Some("http://localhost:8080/signup".to_string()),
            Some("secret".to_string()),
        );
        assert_eq!(config.api_url, "http://localhost:8080/signup");
        assert_eq!(config.token, "secret");
    }
}
