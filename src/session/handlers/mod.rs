//! Message handlers for the dashboard session
//!
//! Each submodule handles a category of messages. [`update`] dispatches to
//! them and is the only place session state changes.
//!
//! Handler locations:
//! - DrawAction handlers: crate::annotations::handlers
//! - AssignMsg handlers: assignment.rs
//! - FilterMsg/ViewMsg handlers: view.rs

pub mod assignment;
pub mod view;

use super::messages::{Effect, ExportMsg, ExportOutcome, Msg};
use super::state::{Session, StatusLine};
use crate::annotations;

/// Apply a message to the session, returning work for the runtime if any
pub fn update(session: &mut Session, msg: Msg) -> Option<Effect> {
    match msg {
        Msg::Draw(action) => {
            annotations::handle_draw_action(session, action);
            None
        }
        Msg::Assign(msg) => {
            assignment::handle_assign_msg(session, msg);
            None
        }
        Msg::Filter(msg) => {
            view::handle_filter_msg(session, msg);
            None
        }
        Msg::View(msg) => view::handle_view_msg(session, msg),
        Msg::Export(msg) => handle_export_msg(session, msg),
    }
}

fn handle_export_msg(session: &mut Session, msg: ExportMsg) -> Option<Effect> {
    match msg {
        ExportMsg::Requested => {
            session.ui.status_line = None;
            Some(Effect::Export)
        }
        ExportMsg::Finished(ExportOutcome::Saved(path)) => {
            log::info!("Exported {} machines to {}", session.registry.len(), path.display());
            session.ui.status_line = Some(StatusLine::Exported(path.display().to_string()));
            None
        }
        ExportMsg::Finished(ExportOutcome::Cancelled) => None,
        ExportMsg::Finished(ExportOutcome::Failed(err)) => {
            log::error!("Export failed: {err}");
            session.ui.status_line = Some(StatusLine::ExportFailed(err));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloorwatchConfig;
    use crate::domain::{BoundingBox, ViewMode};
    use std::path::PathBuf;

    #[test]
    fn test_view_mode_and_drawing_mode() {
        let mut session = Session::new(&FloorwatchConfig::default());
        update(&mut session, Msg::view_mode(ViewMode::Table));
        assert_eq!(session.view.view_mode, ViewMode::Table);

        // Drawing happens on the map
        update(&mut session, Msg::drawing_mode_toggle());
        assert!(session.view.is_drawing_mode);
        assert_eq!(session.view.view_mode, ViewMode::Map);
    }

    #[test]
    fn test_full_annotation_workflow() {
        let mut session = Session::new(&FloorwatchConfig::default());
        let before = session.registry.clone();

        assert_eq!(update(&mut session, Msg::drawing_mode_toggle()), None);
        update(&mut session, Msg::draw_start(100.0, 100.0));
        update(&mut session, Msg::draw_move(180.0, 140.0));
        update(&mut session, Msg::draw_end(200.0, 150.0));

        let expected = BoundingBox::new(100.0, 100.0, 100.0, 50.0);
        assert_eq!(session.pending, Some(expected));
        // Nothing assigned yet
        assert_eq!(session.registry, before);

        update(&mut session, Msg::assign("m1"));
        assert_eq!(session.pending, None);
        assert_eq!(session.registry.get("m1").map(|m| m.bbox), Some(expected));

        // A second assignment without a new drag does nothing
        let after = session.registry.clone();
        update(&mut session, Msg::assign("m2"));
        assert_eq!(session.registry, after);
    }

    #[test]
    fn test_export_round_trip_through_messages() {
        let mut session = Session::new(&FloorwatchConfig::default());
        assert_eq!(update(&mut session, Msg::export()), Some(Effect::Export));

        update(
            &mut session,
            Msg::export_finished(ExportOutcome::Saved(PathBuf::from("/tmp/out.json"))),
        );
        assert_eq!(
            session.ui.status_line,
            Some(StatusLine::Exported("/tmp/out.json".into()))
        );

        update(
            &mut session,
            Msg::export_finished(ExportOutcome::Failed("disk full".into())),
        );
        assert_eq!(
            session.ui.status_line,
            Some(StatusLine::ExportFailed("disk full".into()))
        );
    }
}
