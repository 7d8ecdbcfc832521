use iced::{
    event::{self, Event},
    keyboard,
    widget::{focus_next, focus_previous},
    Length, Subscription, Task,
};
use tracing::{error, info};

use enroll_ui::{component::text::*, theme, widget::*};

use crate::{
    config::Config,
    services::signup::SignupClient,
    signup::{self, CreateUserForm},
    VERSION,
};

#[derive(Debug, Clone)]
pub enum Key {
    Tab(bool),
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    KeyPressed(Key),
    Signup(signup::Message),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

/// Top-level application state. It owns the signup form and the flag the
/// form raises on a successful submission.
pub struct App {
    signup: CreateUserForm,
    user_was_created: bool,
}

impl App {
    pub fn title(&self) -> String {
        format!("Enroll v{}", VERSION)
    }

    pub fn new(config: Config) -> (App, Task<Message>) {
        let client = SignupClient::new(config.api_url, config.token);
        (
            App {
                signup: CreateUserForm::new(client),
                user_was_created: false,
            },
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::window::get_latest().and_then(iced::window::close),
            Message::KeyPressed(Key::Tab(shift)) => {
                if shift {
                    focus_previous()
                } else {
                    focus_next()
                }
            }
            Message::Signup(msg) => {
                if let signup::Message::Created(Ok(())) = &msg {
                    info!("user was created");
                    self.user_was_created = true;
                }
                self.signup.update(msg).map(Message::Signup)
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, status, _| match (&event, status) {
            (
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Tab),
                    modifiers,
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::KeyPressed(Key::Tab(modifiers.shift()))),
            _ => None,
        })
    }

    pub fn view(&self) -> Element<Message> {
        let content: Element<Message> = if self.user_was_created {
            success_panel()
        } else {
            self.signup.view().map(Message::Signup)
        };
        Container::new(content)
            .style(theme::container::background)
            .padding(50)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

fn success_panel<'a>() -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(15)
            .max_width(500)
            .align_x(iced::Alignment::Center)
            .push(h2("User was created"))
            .push(
                text("You can now sign in with your new credentials.")
                    .style(theme::text::secondary),
            ),
    )
    .padding(24)
    .style(theme::card::simple)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let (app, _) = App::new(Config::new(
            Some("http://localhost:8080/signup".to_string()),
            Some("secret".to_string()),
        ));
        app
    }

    #[test]
    fn success_message_raises_the_created_flag_once() {
        let mut app = app();
        assert!(!app.user_was_created);

        let _ = app.update(Message::Signup(signup::Message::Created(Ok(()))));
        assert!(app.user_was_created);
    }

    #[test]
    fn error_message_does_not_raise_the_created_flag() {
        let mut app = app();
        let _ = app.update(Message::Signup(signup::Message::Created(Err(
            crate::services::signup::SignupError::Server,
        ))));
        assert!(!app.user_was_created);
    }
}
