//! Sidebar with details about the selected machine

use cosmic::Element;
use cosmic::iced::{Color, Length, Padding};
use cosmic::iced_core::Alignment;
use cosmic::iced_widget::{column, row};
use cosmic::widget::{button, container, divider, icon, scrollable, text};

use super::{panel_style, swatch};
use crate::catalog;
use crate::domain::{Machine, Operation};
use crate::fl;
use crate::session::{Msg, Session};

const PANEL_WIDTH: f32 = 340.0;

fn section<'a>(title: String, items: &'a [String]) -> Element<'a, Msg> {
    let mut list = column![text::heading(title)].spacing(4);
    if items.is_empty() {
        list = list.push(text::caption(fl!("none")));
    }
    for item in items {
        list = list.push(text::body(format!("• {item}")));
    }
    list.into()
}

fn operation_entry<'a>(op: &'static Operation, expanded: bool) -> Element<'a, Msg> {
    let group_color: Color = op.group.color().into();
    let title = match op.code {
        Some(code) => format!("{} ({code})", op.name),
        None => op.name.to_string(),
    };

    let header = button::custom(
        row![
            swatch(group_color, 10.0),
            text::body(title).width(Length::Fill),
            text::caption(if expanded { "▾" } else { "▸" }),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .class(cosmic::theme::Button::Text)
    .width(Length::Fill)
    .on_press(Msg::toggle_operation(op.id));

    let mut entry = column![header].spacing(4);
    if expanded {
        let mut body = column![
            text::caption(format!("{} {}", op.group.icon(), op.group.label())),
            text::body(op.description),
        ]
        .spacing(4);
        if !op.transitions.is_empty() {
            body = body.push(text::caption(fl!("transitions")));
            for (i, step) in op.transitions.iter().enumerate() {
                body = body.push(text::body(format!("{}. {step}", i + 1)));
            }
        }
        entry = entry.push(container(body).padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 4.0,
            left: 18.0,
        }));
    }
    entry.into()
}

fn flows_section<'a>(machine: &Machine) -> Element<'a, Msg> {
    let mut list = column![text::heading(fl!("flows"))].spacing(4);
    let mut any = false;
    for flow in catalog::flows_through(&machine.id) {
        any = true;
        list = list.push(
            row![swatch(flow.color.into(), 10.0), text::body(flow.name)]
                .spacing(8)
                .align_y(Alignment::Center),
        );
    }
    if !any {
        list = list.push(text::caption(fl!("none")));
    }
    list.into()
}

/// Build the details sidebar, or nothing when no machine is selected
pub fn view<'a>(session: &'a Session, space_s: u16) -> Option<Element<'a, Msg>> {
    let machine = session.selected_machine()?;
    let status_color: Color = machine.status.color().into();

    let title = row![
        column![
            text::title4(machine.name.as_str()),
            text::caption(machine.model.as_str()),
        ]
        .spacing(2)
        .width(Length::Fill),
        button::custom(icon::Icon::from(
            icon::from_name("window-close-symbolic").size(16)
        ))
        .class(cosmic::theme::Button::Icon)
        .on_press(Msg::close_details())
        .padding(4),
    ]
    .align_y(Alignment::Start);

    let status = row![swatch(status_color, 12.0), text::body(machine.status.label())]
        .spacing(8)
        .align_y(Alignment::Center);

    let mut operations = column![text::heading(fl!("operations"))].spacing(4);
    let expanded = session.ui.expanded_operation.as_deref();
    for op in catalog::machine_operations(machine) {
        operations = operations.push(operation_entry(op, expanded == Some(op.id)));
    }

    let content = column![
        title,
        status,
        text::body(machine.description.as_str()),
        divider::horizontal::default(),
        operations,
        divider::horizontal::default(),
        section(fl!("tools"), &machine.tools),
        section(fl!("consumables"), &machine.consumables),
        flows_section(machine),
    ]
    .spacing(space_s)
    .padding(space_s);

    Some(
        container(scrollable(content))
            .width(Length::Fixed(PANEL_WIDTH))
            .height(Length::Fill)
            .class(cosmic::theme::Container::Custom(Box::new(panel_style)))
            .into(),
    )
}
