use iced::Length;

use crate::{component::text, theme, widget::*};

pub fn error<'a, T: 'a>(message: String) -> Container<'a, T> {
    Container::new(text::p2_regular(message))
        .padding(15)
        .style(theme::notification::error)
        .width(Length::Fill)
}
