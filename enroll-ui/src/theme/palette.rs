use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub invalid: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::WHITE,
                foreground: color::PALE_GREY,
            },
            text: Text {
                primary: color::LIGHT_BLACK,
                secondary: color::GREY_3,
                warning: color::AMBER,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::PURPLE,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_PURPLE,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::DARK_PURPLE,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_1,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::PALE_GREY,
                        text: color::LIGHT_BLACK,
                        border: Some(color::GREY_2),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::LIGHT_BLACK,
                        border: Some(color::GREY_2),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_1,
                        text: color::LIGHT_BLACK,
                        border: Some(color::GREY_3),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::PALE_GREY,
                        text: color::GREY_2,
                        border: Some(color::GREY_1),
                    }),
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::LAVENDER,
                    text: None,
                    border: None,
                },
                invalid: ContainerPalette {
                    background: color::LAVENDER,
                    text: Some(color::RED),
                    border: Some(color::RED),
                },
            },
            notifications: Notifications {
                error: ContainerPalette {
                    background: color::PALE_RED,
                    text: Some(color::RED),
                    border: Some(color::RED),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::PALE_GREY,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::LIGHT_PURPLE,
                        border: Some(color::GREY_2),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::LIGHT_PURPLE,
                        border: Some(color::GREY_2),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::PALE_GREY,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::LIGHT_PURPLE,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::LIGHT_PURPLE,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
