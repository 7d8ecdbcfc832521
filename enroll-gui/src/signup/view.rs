use iced::Length;

use enroll_ui::{
    component::{button, form, notification, text::*},
    theme,
    widget::*,
};

use super::{validation, ViewMessage};

pub fn create_user<'a>(
    username: &'a form::Value<String>,
    password: &'a form::Value<String>,
    processing: bool,
    api_error: Option<&'static str>,
) -> Element<'a, ViewMessage> {
    let failed = validation::failed_rules(&password.value);
    let violations = if password.value.is_empty() || failed.is_empty() {
        None
    } else {
        Some(failed.iter().fold(
            Column::new().spacing(5),
            |col, rule| col.push(caption(rule.message).style(theme::text::error)),
        ))
    };

    let form_valid =
        !username.value.trim().is_empty() && validation::is_valid(&password.value);

    Container::new(
        Column::new()
            .spacing(15)
            .max_width(500)
            .push(h2("Create User"))
            .push(
                Column::new()
                    .spacing(5)
                    .push(p1_bold("Username"))
                    .push(
                        form::Form::new("Username", username, ViewMessage::UsernameEdited)
                            .size(P1_SIZE)
                            .padding(10),
                    ),
            )
            .push(
                Column::new()
                    .spacing(5)
                    .push(p1_bold("Password"))
                    .push(
                        form::Form::new_password("Password", password, ViewMessage::PasswordEdited)
                            .size(P1_SIZE)
                            .padding(10),
                    )
                    .push_maybe(violations),
            )
            .push_maybe(api_error.map(|e| notification::error(e.to_string())))
            .push(
                button::primary(None, if processing { "Creating..." } else { "Create User" })
                    .width(Length::Fixed(200.0))
                    .on_press_maybe(if processing || !form_valid {
                        None
                    } else {
                        Some(ViewMessage::Submit)
                    }),
            ),
    )
    .padding(24)
    .style(theme::card::simple)
    .into()
}
