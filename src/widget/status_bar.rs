//! Footer line with drawing hints and the last export result

use cosmic::Element;
use cosmic::iced::{Color, Length};
use cosmic::iced_core::Alignment;
use cosmic::iced_widget::row;
use cosmic::widget::{container, text};

use crate::fl;
use crate::session::state::StatusLine;
use crate::session::{Msg, Session};

pub fn view<'a>(session: &'a Session, space_s: u16) -> Element<'a, Msg> {
    let hint = if session.pending.is_some() {
        fl!("hint-assign")
    } else if session.view.is_drawing_mode {
        fl!("hint-drawing")
    } else {
        fl!("hint-select")
    };

    let visible = session
        .registry
        .machines()
        .iter()
        .filter(|m| !session.view.is_dimmed(m))
        .count();
    let count = fl!(
        "machine-count",
        visible = visible,
        total = session.registry.len()
    );

    let mut line = row![text::caption(hint), cosmic::widget::horizontal_space()]
        .spacing(space_s)
        .align_y(Alignment::Center);

    match &session.ui.status_line {
        Some(StatusLine::Exported(path)) => {
            line = line.push(text::caption(fl!("export-saved", path = path.as_str())));
        }
        Some(StatusLine::ExportFailed(err)) => {
            line = line.push(
                text::caption(fl!("export-failed", error = err.as_str()))
                    .class(cosmic::theme::Text::Color(Color::from_rgb(0.94, 0.27, 0.27))),
            );
        }
        None => {}
    }
    line = line.push(text::caption(count));

    container(line)
        .padding([4, space_s])
        .width(Length::Fill)
        .into()
}
