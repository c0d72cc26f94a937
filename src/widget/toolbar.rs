//! Header bar: view switch, drawing tool, export and filters

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::Alignment;
use cosmic::iced_widget::{column, row, toggler};
use cosmic::widget::{button, container, text, tooltip};

use crate::domain::{MachineStatus, OperationGroup, ViewMode};
use crate::fl;
use crate::session::{Msg, Session};

fn chip<'a>(label: String, active: bool, on_press: Msg) -> Element<'a, Msg> {
    button::text(label)
        .class(if active {
            cosmic::theme::Button::Suggested
        } else {
            cosmic::theme::Button::Standard
        })
        .on_press(on_press)
        .into()
}

fn mode_button<'a>(label: String, mode: ViewMode, current: ViewMode) -> Element<'a, Msg> {
    chip(label, mode == current, Msg::view_mode(mode))
}

fn status_filters<'a>(session: &Session, space_xs: u16) -> Element<'a, Msg> {
    let current = session.view.status_filter;
    let mut chips = row![
        text::caption(fl!("filter-status")),
        chip(fl!("filter-all"), current.is_none(), Msg::status_filter(None)),
    ]
    .spacing(space_xs)
    .align_y(Alignment::Center);
    for status in MachineStatus::ALL {
        chips = chips.push(chip(
            status.label(),
            current == Some(status),
            Msg::status_filter(Some(status)),
        ));
    }
    chips.into()
}

fn group_filters<'a>(session: &Session, space_xs: u16) -> Element<'a, Msg> {
    let current = session.view.operation_group_filter;
    let mut chips = row![
        text::caption(fl!("filter-group")),
        chip(fl!("filter-all"), current.is_none(), Msg::group_filter(None)),
    ]
    .spacing(space_xs)
    .align_y(Alignment::Center);
    for group in OperationGroup::ALL {
        chips = chips.push(chip(
            format!("{} {}", group.icon(), group.label()),
            current == Some(group),
            Msg::group_filter(Some(group)),
        ));
    }
    chips.into()
}

/// Build the header element
pub fn view<'a>(session: &'a Session, space_s: u16, space_xs: u16) -> Element<'a, Msg> {
    let mode = session.view.view_mode;
    let drawing = session.view.is_drawing_mode;

    let draw_label = if drawing {
        fl!("draw-mode-on")
    } else {
        fl!("draw-boxes")
    };
    let draw_button = tooltip(
        chip(draw_label, drawing, Msg::drawing_mode_toggle()),
        text::body(fl!("draw-hint")),
        tooltip::Position::Bottom,
    );

    let export_button = tooltip(
        button::text(fl!("export"))
            .class(cosmic::theme::Button::Standard)
            .on_press(Msg::export()),
        text::body(fl!("export-hint")),
        tooltip::Position::Bottom,
    );

    let top = row![
        text::title3(fl!("app-title")),
        cosmic::widget::horizontal_space(),
        mode_button(fl!("view-map"), ViewMode::Map, mode),
        mode_button(fl!("view-table"), ViewMode::Table, mode),
        draw_button,
        export_button,
    ]
    .spacing(space_s)
    .align_y(Alignment::Center)
    .width(Length::Fill);

    let mut toggles = row![
        text::caption(fl!("show-flows")),
        toggler(session.ui.show_flows)
            .on_toggle(|_| Msg::toggle_flows())
            .size(20.0),
        text::caption(fl!("hide-dimmed")),
        toggler(session.ui.hide_dimmed)
            .on_toggle(|_| Msg::toggle_hide_dimmed())
            .size(20.0),
    ]
    .spacing(space_xs)
    .align_y(Alignment::Center);
    if session.view.has_filters() {
        toggles = toggles.push(
            button::text(fl!("clear-filters"))
                .class(cosmic::theme::Button::Link)
                .on_press(Msg::clear_filters()),
        );
    }

    let filters = row![
        column![
            status_filters(session, space_xs),
            group_filters(session, space_xs)
        ]
        .spacing(space_xs),
        cosmic::widget::horizontal_space(),
        toggles,
    ]
    .spacing(space_s)
    .align_y(Alignment::Center)
    .width(Length::Fill);

    container(column![top, filters].spacing(space_s))
        .padding(space_s)
        .width(Length::Fill)
        .into()
}
