//! Handlers for filter and view messages
//!
//! Handles: FilterMsg, SetMode, MapClick, SelectMachine, OpenFromTable,
//! CloseDetails, ToggleOperation, ToggleFlows, ToggleHideDimmed

use crate::domain::ViewMode;
use crate::session::messages::{Effect, FilterMsg, ViewMsg};
use crate::session::state::Session;

pub fn handle_filter_msg(session: &mut Session, msg: FilterMsg) {
    match msg {
        FilterMsg::Status(status) => session.view.status_filter = status,
        FilterMsg::OperationGroup(group) => session.view.operation_group_filter = group,
        FilterMsg::Clear => {
            session.view.status_filter = None;
            session.view.operation_group_filter = None;
        }
    }
    log::debug!(
        "Filters: status={:?} group={:?}",
        session.view.status_filter,
        session.view.operation_group_filter
    );
}

pub fn handle_view_msg(session: &mut Session, msg: ViewMsg) -> Option<Effect> {
    match msg {
        ViewMsg::SetMode(mode) => session.view.view_mode = mode,
        ViewMsg::MapClick(point) => {
            if session.view.is_drawing_mode {
                return None;
            }
            let hit = session
                .registry
                .machine_at(&session.view, point)
                .map(|m| m.id.clone());
            if let Some(id) = hit {
                select(session, id);
            }
        }
        ViewMsg::SelectMachine(id) => {
            if !session.view.is_drawing_mode && session.registry.contains(&id) {
                select(session, id);
            }
        }
        ViewMsg::OpenFromTable(id) => {
            if session.registry.contains(&id) {
                select(session, id);
                session.view.view_mode = ViewMode::Map;
            }
        }
        ViewMsg::CloseDetails => {
            session.view.selected_machine_id = None;
            session.ui.expanded_operation = None;
        }
        ViewMsg::ToggleOperation(op_id) => {
            session.ui.expanded_operation = match session.ui.expanded_operation.take() {
                Some(current) if current == op_id => None,
                _ => Some(op_id),
            };
        }
        ViewMsg::ToggleFlows => {
            session.ui.show_flows = !session.ui.show_flows;
            return Some(Effect::SaveSettings);
        }
        ViewMsg::ToggleHideDimmed => {
            session.ui.hide_dimmed = !session.ui.hide_dimmed;
            return Some(Effect::SaveSettings);
        }
    }
    None
}

fn select(session: &mut Session, id: String) {
    if session.view.selected_machine_id.as_deref() != Some(id.as_str()) {
        session.ui.expanded_operation = None;
    }
    log::debug!("Selected machine {id}");
    session.view.selected_machine_id = Some(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloorwatchConfig;
    use crate::domain::{MachineStatus, OperationGroup, Point};

    fn session() -> Session {
        Session::new(&FloorwatchConfig::default())
    }

    #[test]
    fn test_repair_and_machining_filter() {
        let mut session = session();
        handle_filter_msg(&mut session, FilterMsg::Status(Some(MachineStatus::Repair)));
        handle_filter_msg(
            &mut session,
            FilterMsg::OperationGroup(Some(OperationGroup::Machining)),
        );
        let shown: Vec<_> = session
            .registry
            .machines()
            .iter()
            .filter(|m| !session.view.is_dimmed(m))
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(shown, vec!["m3"]);
    }

    #[test]
    fn test_clear_filters() {
        let mut session = session();
        handle_filter_msg(&mut session, FilterMsg::Status(Some(MachineStatus::Idle)));
        handle_filter_msg(&mut session, FilterMsg::Clear);
        assert!(!session.view.has_filters());
    }

    #[test]
    fn test_map_click_selects_hit_machine() {
        let mut session = session();
        handle_view_msg(&mut session, ViewMsg::MapClick(Point::new(800.0, 300.0)));
        assert_eq!(session.view.selected_machine_id.as_deref(), Some("m3"));

        // Empty canvas does not clear the selection
        handle_view_msg(&mut session, ViewMsg::MapClick(Point::new(1150.0, 50.0)));
        assert_eq!(session.view.selected_machine_id.as_deref(), Some("m3"));
    }

    #[test]
    fn test_map_click_ignored_while_drawing() {
        let mut session = session();
        session.view.is_drawing_mode = true;
        handle_view_msg(&mut session, ViewMsg::MapClick(Point::new(800.0, 300.0)));
        assert_eq!(session.view.selected_machine_id, None);
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let mut session = session();
        handle_view_msg(&mut session, ViewMsg::SelectMachine("ghost".into()));
        assert_eq!(session.view.selected_machine_id, None);
    }

    #[test]
    fn test_open_from_table_switches_to_map() {
        let mut session = session();
        session.view.view_mode = ViewMode::Table;
        handle_view_msg(&mut session, ViewMsg::OpenFromTable("m4".into()));
        assert_eq!(session.view.view_mode, ViewMode::Map);
        assert_eq!(session.selected_machine().map(|m| m.id.as_str()), Some("m4"));
    }

    #[test]
    fn test_operation_accordion() {
        let mut session = session();
        handle_view_msg(&mut session, ViewMsg::SelectMachine("m3".into()));
        handle_view_msg(&mut session, ViewMsg::ToggleOperation("6".into()));
        assert_eq!(session.ui.expanded_operation.as_deref(), Some("6"));
        handle_view_msg(&mut session, ViewMsg::ToggleOperation("13".into()));
        assert_eq!(session.ui.expanded_operation.as_deref(), Some("13"));
        handle_view_msg(&mut session, ViewMsg::ToggleOperation("13".into()));
        assert_eq!(session.ui.expanded_operation, None);

        handle_view_msg(&mut session, ViewMsg::ToggleOperation("6".into()));
        handle_view_msg(&mut session, ViewMsg::SelectMachine("m1".into()));
        assert_eq!(session.ui.expanded_operation, None);
    }

    #[test]
    fn test_toggle_flows_requests_save() {
        let mut session = session();
        let effect = handle_view_msg(&mut session, ViewMsg::ToggleFlows);
        assert_eq!(effect, Some(Effect::SaveSettings));
        assert!(!session.ui.show_flows);
    }
}
