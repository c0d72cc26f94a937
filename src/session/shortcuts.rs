use crate::domain::ViewMode;
use crate::session::messages::Msg;
use crate::session::state::Session;
use cosmic::iced::keyboard::{Key, Modifiers, key::Named};

pub fn handle_key_event(session: &Session, key: Key, modifiers: Modifiers) -> Option<Msg> {
    // Escape unwinds one layer at a time
    if let Key::Named(Named::Escape) = key {
        return if session.pending.is_some() {
            Some(Msg::cancel_assignment())
        } else if session.drawing.drag.is_some() {
            Some(Msg::draw_cancel())
        } else if session.view.is_drawing_mode {
            Some(Msg::drawing_mode_toggle())
        } else if session.view.selected_machine_id.is_some() {
            Some(Msg::close_details())
        } else {
            None
        };
    }

    // The assignment prompt is modal
    if session.pending.is_some() {
        return None;
    }

    // Letters match regardless of Shift or Caps Lock
    let Key::Character(c) = key else {
        return None;
    };
    match c.to_lowercase().as_str() {
        "e" if modifiers.control() => Some(Msg::export()),
        _ if modifiers.control() || modifiers.alt() || modifiers.logo() => None,
        "d" => Some(Msg::drawing_mode_toggle()),
        "m" => Some(Msg::view_mode(ViewMode::Map)),
        "t" => Some(Msg::view_mode(ViewMode::Table)),
        "f" => Some(Msg::toggle_flows()),
        "0" => Some(Msg::clear_filters()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloorwatchConfig;
    use crate::domain::BoundingBox;
    use crate::session::messages::{AssignMsg, DrawAction, ExportMsg, FilterMsg, ViewMsg};

    fn session() -> Session {
        Session::new(&FloorwatchConfig::default())
    }

    fn escape(session: &Session) -> Option<Msg> {
        handle_key_event(session, Key::Named(Named::Escape), Modifiers::empty())
    }

    fn char_key(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn test_escape_cascade() {
        let mut session = session();
        assert!(escape(&session).is_none());

        session.view.selected_machine_id = Some("m1".into());
        assert!(matches!(escape(&session), Some(Msg::View(ViewMsg::CloseDetails))));

        session.view.is_drawing_mode = true;
        assert!(matches!(
            escape(&session),
            Some(Msg::Draw(DrawAction::ModeToggle))
        ));

        session.drawing.drag = Some(crate::domain::Drag::new(Default::default()));
        assert!(matches!(escape(&session), Some(Msg::Draw(DrawAction::Cancel))));

        session.pending = Some(BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        assert!(matches!(escape(&session), Some(Msg::Assign(AssignMsg::Cancel))));
    }

    #[test]
    fn test_keys_blocked_while_pending() {
        let mut session = session();
        session.pending = Some(BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        assert!(handle_key_event(&session, char_key("d"), Modifiers::empty()).is_none());
        assert!(handle_key_event(&session, char_key("e"), Modifiers::CTRL).is_none());
    }

    #[test]
    fn test_plain_and_ctrl_keys() {
        let session = session();
        assert!(matches!(
            handle_key_event(&session, char_key("e"), Modifiers::CTRL),
            Some(Msg::Export(ExportMsg::Requested))
        ));
        assert!(matches!(
            handle_key_event(&session, char_key("t"), Modifiers::empty()),
            Some(Msg::View(ViewMsg::SetMode(ViewMode::Table)))
        ));
        assert!(matches!(
            handle_key_event(&session, char_key("0"), Modifiers::empty()),
            Some(Msg::Filter(FilterMsg::Clear))
        ));
        assert!(handle_key_event(&session, char_key("d"), Modifiers::CTRL).is_none());
    }

    #[test]
    fn test_letters_ignore_case() {
        let session = session();
        assert!(matches!(
            handle_key_event(&session, char_key("D"), Modifiers::SHIFT),
            Some(Msg::Draw(DrawAction::ModeToggle))
        ));
        assert!(matches!(
            handle_key_event(&session, char_key("M"), Modifiers::empty()),
            Some(Msg::View(ViewMsg::SetMode(ViewMode::Map)))
        ));
        assert!(matches!(
            handle_key_event(&session, char_key("F"), Modifiers::SHIFT),
            Some(Msg::View(ViewMsg::ToggleFlows))
        ));
        assert!(matches!(
            handle_key_event(&session, char_key("E"), Modifiers::CTRL | Modifiers::SHIFT),
            Some(Msg::Export(ExportMsg::Requested))
        ));
    }
}
