use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border};

use super::palette::Button;
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

fn button(p: &Button, status: Status) -> Style {
    let palette = match status {
        Status::Active => p.active,
        Status::Hovered => p.hovered,
        Status::Pressed => p.pressed.unwrap_or(p.active),
        Status::Disabled => p.disabled.unwrap_or(p.active),
    };
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: 4.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: 4.0.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}
