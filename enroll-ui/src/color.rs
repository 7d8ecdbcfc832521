use iced::Color;

pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
);
pub const LAVENDER: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0xEE as f32 / 255.0,
    0xF5 as f32 / 255.0,
);
pub const PALE_GREY: Color = Color::from_rgb(
    0xF8 as f32 / 255.0,
    0xF7 as f32 / 255.0,
    0xFA as f32 / 255.0,
);
pub const PURPLE: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x35 as f32 / 255.0,
    0xD2 as f32 / 255.0,
);
pub const DARK_PURPLE: Color = Color::from_rgb(
    0x5A as f32 / 255.0,
    0x2A as f32 / 255.0,
    0xA9 as f32 / 255.0,
);
pub const LIGHT_PURPLE: Color = Color::from_rgba(
    0x71 as f32 / 255.0,
    0x35 as f32 / 255.0,
    0xD2 as f32 / 255.0,
    0.3,
);
pub const RED: Color = Color::from_rgb(
    0xD3 as f32 / 255.0,
    0x2F as f32 / 255.0,
    0x2F as f32 / 255.0,
);
pub const PALE_RED: Color = Color::from_rgb(
    0xFD as f32 / 255.0,
    0xEC as f32 / 255.0,
    0xEA as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x2E as f32 / 255.0,
    0x7D as f32 / 255.0,
    0x32 as f32 / 255.0,
);
pub const AMBER: Color = Color::from_rgb(
    0xFC as f32 / 255.0,
    0xC1 as f32 / 255.0,
    0x07 as f32 / 255.0,
);
