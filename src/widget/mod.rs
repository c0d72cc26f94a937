//! Widgets for the floorwatch window

pub mod assign_dialog;
pub mod details_panel;
pub mod floor_map;
pub mod machine_table;
pub mod status_bar;
pub mod toolbar;

use cosmic::Element;
use cosmic::iced::{Background, Color, Length};
use cosmic::iced_core::Border;
use cosmic::widget::container;

/// Small filled square used for status and group colors
pub(crate) fn swatch<'a, Message: 'a>(color: Color, size: f32) -> Element<'a, Message> {
    container(cosmic::widget::horizontal_space().width(Length::Fixed(0.0)))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .class(cosmic::theme::Container::Custom(Box::new(move |_theme| {
            cosmic::iced::widget::container::Style {
                background: Some(Background::Color(color)),
                border: Border {
                    radius: (size / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })))
        .into()
}

/// Panel background shared by the sidebar and the assignment prompt
pub(crate) fn panel_style(theme: &cosmic::Theme) -> cosmic::iced::widget::container::Style {
    let cosmic_theme = theme.cosmic();
    cosmic::iced::widget::container::Style {
        background: Some(Background::Color(cosmic_theme.background.component.base.into())),
        text_color: Some(cosmic_theme.background.component.on.into()),
        border: Border {
            radius: cosmic_theme.corner_radii.radius_s.into(),
            width: 1.0,
            color: cosmic_theme.background.component.divider.into(),
        },
        ..Default::default()
    }
}
