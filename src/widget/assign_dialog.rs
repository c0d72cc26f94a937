//! Modal prompt asking which machine receives a freshly drawn box

use cosmic::Element;
use cosmic::iced::{Background, Color, Length};
use cosmic::iced_core::Alignment;
use cosmic::iced_widget::{column, opaque, row};
use cosmic::widget::{button, container, scrollable, text};

use super::{panel_style, swatch};
use crate::domain::BoundingBox;
use crate::fl;
use crate::session::{Msg, Session};

const DIALOG_WIDTH: f32 = 360.0;

/// Dialog content for a pending box
fn dialog<'a>(session: &'a Session, pending: BoundingBox, space_s: u16) -> Element<'a, Msg> {
    let size = fl!(
        "assign-box-size",
        width = format!("{:.0}", pending.width),
        height = format!("{:.0}", pending.height)
    );

    let choices = session.registry.machines().iter().map(|machine| -> Element<'a, Msg> {
        let status_color: Color = machine.status.color().into();
        button::custom(
            row![
                swatch(status_color, 10.0),
                column![
                    text::body(machine.name.as_str()),
                    text::caption(machine.model.as_str()),
                ]
                .spacing(2),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .class(cosmic::theme::Button::Text)
        .width(Length::Fill)
        .padding([6, 8])
        .on_press(Msg::assign(machine.id.as_str()))
        .into()
    });

    let content = column![
        text::title4(fl!("assign-title")),
        text::caption(size),
        scrollable(column(choices).spacing(2)).height(Length::Shrink),
        row![
            cosmic::widget::horizontal_space(),
            button::text(fl!("cancel")).on_press(Msg::cancel_assignment()),
        ],
    ]
    .spacing(space_s)
    .padding(space_s);

    container(content)
        .width(Length::Fixed(DIALOG_WIDTH))
        .class(cosmic::theme::Container::Custom(Box::new(panel_style)))
        .into()
}

/// Scrim and centered dialog, or nothing when no box is pending
pub fn overlay<'a>(session: &'a Session, space_s: u16) -> Option<Element<'a, Msg>> {
    let pending = session.pending?;

    let scrim = container(dialog(session, pending, space_s))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .class(cosmic::theme::Container::Custom(Box::new(|_theme| {
            cosmic::iced::widget::container::Style {
                background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
                ..Default::default()
            }
        })));

    // The scrim swallows pointer input so nothing underneath reacts
    Some(opaque(scrim))
}
