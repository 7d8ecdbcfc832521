pub mod validation;
pub mod view;

use iced::Task;

use enroll_ui::component::form;

use crate::services::signup::{SignupClient, SignupError};

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Created(Result<(), SignupError>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    UsernameEdited(String),
    PasswordEdited(String),
    Submit,
}

/// The signup form: two fields, the in-flight flag and the last error
/// reported by the endpoint.
pub struct CreateUserForm {
    client: SignupClient,

    username: form::Value<String>,
    password: form::Value<String>,

    processing: bool,
    api_error: Option<&'static str>,
}

impl CreateUserForm {
    pub fn new(client: SignupClient) -> Self {
        Self {
            client,
            username: form::Value::default(),
            password: form::Value::default(),
            processing: false,
            api_error: None,
        }
    }

    /// Whether the submit action is reachable: a non-blank username and a
    /// password satisfying every rule.
    pub fn is_form_valid(&self) -> bool {
        !self.username.value.trim().is_empty() && validation::is_valid(&self.password.value)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::UsernameEdited(value)) => {
                self.username.value = value;
                // A stale endpoint error no longer applies once the input changed.
                self.api_error = None;
            }
            Message::View(ViewMessage::PasswordEdited(value)) => {
                self.password.valid = value.is_empty() || validation::is_valid(&value);
                self.password.value = value;
                self.api_error = None;
            }
            Message::View(ViewMessage::Submit) => {
                if !self.is_form_valid() {
                    return Task::none();
                }
                self.processing = true;
                self.api_error = None;
                let client = self.client.clone();
                let username = self.username.value.clone();
                let password = self.password.value.clone();
                return Task::perform(
                    async move { client.create_user(&username, &password).await },
                    Message::Created,
                );
            }
            Message::Created(res) => {
                self.processing = false;
                if let Err(e) = res {
                    tracing::warn!("{}", e);
                    self.api_error = Some(api_error_message(&e));
                }
                // Message::Created::Ok is handled by the upper level wrapping
                // this state.
            }
        }
        Task::none()
    }

    pub fn view(&self) -> enroll_ui::widget::Element<Message> {
        view::create_user(
            &self.username,
            &self.password,
            self.processing,
            self.api_error,
        )
        .map(Message::View)
    }
}

fn api_error_message(error: &SignupError) -> &'static str {
    match error {
        SignupError::NotAuthenticated => "Not authenticated to access this resource.",
        SignupError::PasswordNotAllowed => {
            "Sorry, the entered password is not allowed, please try a different one."
        }
        SignupError::Server | SignupError::Http(..) => "Something went wrong, please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CreateUserForm {
        CreateUserForm::new(SignupClient::new(
            "http://localhost:8080/signup".to_string(),
            "secret".to_string(),
        ))
    }

    fn filled_form() -> CreateUserForm {
        let mut form = form();
        let _ = form.update(Message::View(ViewMessage::UsernameEdited("alice".into())));
        let _ = form.update(Message::View(ViewMessage::PasswordEdited(
            "Abcdefg123".into(),
        )));
        form
    }

    #[test]
    fn submit_is_unreachable_until_the_form_is_valid() {
        let mut form = form();
        assert!(!form.is_form_valid());

        let _ = form.update(Message::View(ViewMessage::Submit));
        assert!(!form.processing);

        // A whitespace-only username does not unlock the submit action.
        let _ = form.update(Message::View(ViewMessage::UsernameEdited("   ".into())));
        let _ = form.update(Message::View(ViewMessage::PasswordEdited(
            "Abcdefg123".into(),
        )));
        assert!(!form.is_form_valid());

        let _ = form.update(Message::View(ViewMessage::UsernameEdited("alice".into())));
        assert!(form.is_form_valid());
    }

    #[test]
    fn submit_starts_processing_with_no_error() {
        let mut form = filled_form();
        let _ = form.update(Message::View(ViewMessage::Submit));
        assert!(form.processing);
        assert_eq!(form.api_error, None);
    }

    #[test]
    fn error_resolution_sets_message_and_resets_processing() {
        let mut form = filled_form();
        let _ = form.update(Message::View(ViewMessage::Submit));
        let _ = form.update(Message::Created(Err(SignupError::NotAuthenticated)));
        assert!(!form.processing);
        assert_eq!(
            form.api_error,
            Some("Not authenticated to access this resource.")
        );
    }

    #[test]
    fn success_resolution_leaves_credentials_untouched() {
        let mut form = filled_form();
        let _ = form.update(Message::View(ViewMessage::Submit));
        let _ = form.update(Message::Created(Ok(())));
        assert!(!form.processing);
        assert_eq!(form.api_error, None);
        assert_eq!(form.username.value, "alice");
        assert_eq!(form.password.value, "Abcdefg123");
    }

    #[test]
    fn editing_either_field_clears_the_error() {
        let mut form = filled_form();
        let _ = form.update(Message::Created(Err(SignupError::Server)));
        assert!(form.api_error.is_some());

        let _ = form.update(Message::View(ViewMessage::UsernameEdited("alicia".into())));
        assert_eq!(form.api_error, None);

        let _ = form.update(Message::Created(Err(SignupError::Server)));
        assert!(form.api_error.is_some());

        let _ = form.update(Message::View(ViewMessage::PasswordEdited(
            "Abcdefg1234".into(),
        )));
        assert_eq!(form.api_error, None);
    }

    #[test]
    fn endpoint_errors_map_to_their_user_messages() {
        assert_eq!(
            api_error_message(&SignupError::NotAuthenticated),
            "Not authenticated to access this resource."
        );
        assert_eq!(
            api_error_message(&SignupError::PasswordNotAllowed),
            "Sorry, the entered password is not allowed, please try a different one."
        );
        assert_eq!(
            api_error_message(&SignupError::Server),
            "Something went wrong, please try again."
        );
        assert_eq!(
            api_error_message(&SignupError::Http(Some(418), "teapot".to_string())),
            "Something went wrong, please try again."
        );
    }
}
