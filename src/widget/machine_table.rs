//! Tabular view of the machine registry
//!
//! Every machine gets a row. Rows failing the active filters are faded.
//! Clicking a row opens the machine on the map.

use cosmic::Element;
use cosmic::iced::{Color, Length};
use cosmic::iced_core::Alignment;
use cosmic::iced_widget::{Row, column, row};
use cosmic::widget::{button, container, scrollable, text};

use super::swatch;
use crate::catalog;
use crate::domain::Machine;
use crate::fl;
use crate::session::Msg;
use crate::session::Session;

/// Column widths: id, machine, status, operations, group, tools, position
const PORTIONS: [u16; 7] = [1, 3, 2, 4, 2, 4, 3];

/// Plain-text cells of a row
#[derive(Debug, PartialEq)]
struct RowText {
    id: String,
    operations: String,
    group: String,
    tools: String,
    position: String,
}

fn row_text(machine: &Machine) -> RowText {
    let operations = catalog::machine_operations(machine)
        .map(|op| op.name)
        .collect::<Vec<_>>()
        .join(", ");

    let b = machine.bbox;
    RowText {
        id: machine.id.to_uppercase(),
        operations,
        group: catalog::primary_group(machine)
            .map(|g| g.label())
            .unwrap_or_default(),
        tools: machine.tools.join(", "),
        position: format!("{:.0}, {:.0}  {:.0}×{:.0}", b.x, b.y, b.width, b.height),
    }
}

fn cells<'a>(items: [Element<'a, Msg>; 7], space_s: u16) -> Element<'a, Msg> {
    Row::with_children(
        items
            .into_iter()
            .zip(PORTIONS)
            .map(|(item, portion)| container(item).width(Length::FillPortion(portion)).into()),
    )
    .spacing(space_s)
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn machine_row<'a>(
    machine: &'a Machine,
    dimmed: bool,
    selected: bool,
    space_s: u16,
) -> Element<'a, Msg> {
    let RowText {
        id,
        operations,
        group,
        tools,
        position,
    } = row_text(machine);

    let status_color: Color = machine.status.color().into();
    let status = row![swatch(status_color, 10.0), text::body(machine.status.label())]
        .spacing(6)
        .align_y(Alignment::Center);

    let name = column![
        text::body(machine.name.as_str()),
        text::caption(machine.model.as_str()),
    ]
    .spacing(2);

    let content = container(cells(
        [
            text::caption(id).into(),
            name.into(),
            status.into(),
            text::body(operations).into(),
            text::caption(group).into(),
            text::caption(tools).into(),
            text::caption(position).into(),
        ],
        space_s,
    ))
    .padding([6, 8])
    .class(cosmic::theme::Container::Custom(Box::new(move |_theme| {
        cosmic::iced::widget::container::Style {
            text_color: dimmed.then_some(Color::from_rgba(0.6, 0.6, 0.6, 0.6)),
            ..Default::default()
        }
    })));

    button::custom(content)
        .class(if selected {
            cosmic::theme::Button::Suggested
        } else {
            cosmic::theme::Button::Text
        })
        .width(Length::Fill)
        .on_press(Msg::open_from_table(machine.id.as_str()))
        .into()
}

/// Build the table view
pub fn view<'a>(session: &'a Session, space_s: u16) -> Element<'a, Msg> {
    let header = container(cells(
        [
            text::heading(fl!("column-id")).into(),
            text::heading(fl!("column-machine")).into(),
            text::heading(fl!("column-status")).into(),
            text::heading(fl!("column-operations")).into(),
            text::heading(fl!("column-group")).into(),
            text::heading(fl!("column-tools")).into(),
            text::heading(fl!("column-position")).into(),
        ],
        space_s,
    ))
    .padding([6, 8]);

    let selected = session.view.selected_machine_id.as_deref();
    let rows = session
        .registry
        .machines()
        .iter()
        .map(|machine| {
            machine_row(
                machine,
                session.view.is_dimmed(machine),
                selected == Some(machine.id.as_str()),
                space_s,
            )
        });

    let body = column(rows).spacing(2).width(Length::Fill);

    column![header, scrollable(body).height(Length::Fill)]
        .spacing(space_s)
        .padding(space_s)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
